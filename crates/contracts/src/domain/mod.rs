pub mod a001_eeg_upload;
pub mod a002_symptom_check;
pub mod a003_assistant_chat;
pub mod a004_doctor_directory;
