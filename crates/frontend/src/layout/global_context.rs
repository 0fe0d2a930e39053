use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Feature pages reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Upload,
    Symptoms,
    Chat,
    Doctors,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Upload, Page::Symptoms, Page::Chat, Page::Doctors];

    /// Value of the `?active=` query parameter
    pub fn key(self) -> &'static str {
        match self {
            Page::Upload => "upload",
            Page::Symptoms => "symptoms",
            Page::Chat => "chat",
            Page::Doctors => "doctors",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Upload => "EEG Upload",
            Page::Symptoms => "Symptom Checker",
            Page::Chat => "AI Assistant",
            Page::Doctors => "Find Doctors",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Upload => "upload",
            Page::Symptoms => "activity",
            Page::Chat => "chat",
            Page::Doctors => "doctor",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Active page parsed from a location search string such as `?active=chat`
pub fn page_from_search(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Page::from_key(key))
}

pub fn search_for_page(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", page.key())])).unwrap_or_default();
    format!("?{query}")
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Upload),
            left_open: RwSignal::new(true),
        }
    }

    /// Take the initial page from the URL and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?active=chat"), Some(Page::Chat));
        assert_eq!(page_from_search("active=doctors&x=1"), Some(Page::Doctors));
        assert_eq!(page_from_search("?active=nope"), None);
        assert_eq!(page_from_search(""), None);
    }

    #[test]
    fn test_search_round_trips_every_page() {
        for page in Page::ALL {
            assert_eq!(page_from_search(&search_for_page(page)), Some(page));
        }
    }
}
