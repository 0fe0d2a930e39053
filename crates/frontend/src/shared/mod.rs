pub mod api_utils;
pub mod backend;
pub mod components;
pub mod config;
pub mod error;
pub mod icons;
pub mod lifecycle;
pub mod notice;
pub mod projection;
pub mod risk_palette;
pub mod storage;

#[cfg(test)]
pub mod testing;
