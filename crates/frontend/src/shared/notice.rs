//! Transient, dismissible notifications ("toasts")

use crate::shared::error::ValidationError;
use crate::shared::lifecycle::Settlement;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered list of visible notices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        self.next_id
    }

    /// Returns false when the notice was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Context handle used by views to raise notices
#[derive(Clone, Copy)]
pub struct Notifier {
    pub board: RwSignal<NoticeBoard>,
    dismiss_after_ms: u32,
}

impl Notifier {
    pub fn new(dismiss_after_ms: u32) -> Self {
        Self {
            board: RwSignal::new(NoticeBoard::default()),
            dismiss_after_ms,
        }
    }

    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let Some(id) = self.board.try_update(|b| b.push(kind, text)) else {
            return;
        };
        let board = self.board;
        let delay = self.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            board.try_update(|b| b.dismiss(id));
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text);
    }

    /// Raise the notice matching the outcome of a workflow action.
    ///
    /// Stale settlements and silent validation failures raise nothing.
    pub fn report(&self, outcome: Result<Settlement, ValidationError>, on_success: &str) {
        if let Some((kind, text)) = notice_for(outcome, on_success) {
            self.notify(kind, text);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.board.update(|b| {
            b.dismiss(id);
        });
    }
}

fn notice_for(
    outcome: Result<Settlement, ValidationError>,
    on_success: &str,
) -> Option<(NoticeKind, String)> {
    match outcome {
        Ok(Settlement::Fulfilled) => Some((NoticeKind::Success, on_success.to_string())),
        Ok(Settlement::Rejected(error)) => Some((NoticeKind::Error, error.message)),
        Ok(Settlement::Stale) => None,
        Err(invalid) if invalid.is_silent() => {
            log::debug!("{invalid}");
            None
        }
        Err(invalid) => Some((NoticeKind::Error, invalid.to_string())),
    }
}

/// Hook to access the notifier
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids_in_order() {
        let mut board = NoticeBoard::default();
        let a = board.push(NoticeKind::Success, "Analysis complete!");
        let b = board.push(NoticeKind::Error, "Upload failed");
        assert!(b > a);
        let texts: Vec<_> = board.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Analysis complete!", "Upload failed"]);
    }

    #[test]
    fn test_notice_for_outcomes() {
        use crate::shared::lifecycle::ErrorInfo;

        assert_eq!(
            notice_for(Ok(Settlement::Fulfilled), "Analysis complete!"),
            Some((NoticeKind::Success, "Analysis complete!".to_string()))
        );
        assert_eq!(
            notice_for(Ok(Settlement::Rejected(ErrorInfo::new("Upload failed"))), "x"),
            Some((NoticeKind::Error, "Upload failed".to_string()))
        );
        assert_eq!(notice_for(Ok(Settlement::Stale), "x"), None);
        assert_eq!(
            notice_for(Err(ValidationError::NoFileSelected), "x"),
            Some((NoticeKind::Error, "Please select a file first".to_string()))
        );
        let silent = ValidationError::UnsupportedFileType {
            name: "notes.docx".to_string(),
        };
        assert_eq!(notice_for(Err(silent), "x"), None);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut board = NoticeBoard::default();
        let a = board.push(NoticeKind::Success, "one");
        let b = board.push(NoticeKind::Error, "two");
        assert!(board.dismiss(a));
        assert!(!board.dismiss(a));
        assert_eq!(board.items().len(), 1);
        assert_eq!(board.items()[0].id, b);
    }
}
