//! Description Editor
//!
//! Edit modal for the deal description alone.

use leptos::task::spawn_local;
use leptos_modal::{bind_modal, on_click, ModalSignals};

use crate::commands::{self, RequestError};
use crate::config::*;
use crate::dom;

pub fn init_description_editor() {
    let Some(open_btn) = dom::by_id(EDIT_DESC_BTN_ID) else { return };
    let (Some(modal), Some(save_btn)) = (dom::html_by_id(MODAL_ID), dom::by_id(SAVE_DESC_BTN_ID)) else {
        log::warn!("[DescriptionEditor] Edit button present but modal markup is incomplete");
        return;
    };
    let Some(endpoints) = Endpoints::current() else {
        log::error!("[DescriptionEditor] Could not read page path");
        return;
    };

    let close_btn = dom::query(CLOSE_SELECTOR);
    let modal_signals = bind_modal(modal, &open_btn, close_btn.as_ref());

    on_click(&save_btn, move |_ev| {
        let raw = dom::field_value(DESC_INPUT_ID);
        let Some(text) = validate_description(&raw) else {
            dom::alert(EMPTY_DESCRIPTION);
            return;
        };
        let text = text.to_string();
        let endpoints = endpoints.clone();
        spawn_local(async move {
            let result = commands::update_description(&endpoints, &text).await;
            match finish_save(modal_signals, &result) {
                None => dom::set_text(DESCRIPTION_TEXT_ID, &text),
                Some(alert) => dom::alert(alert),
            }
        });
    });
}

/// Close the modal on success; on failure keep it open and return the alert text
fn finish_save(modal_signals: ModalSignals, result: &Result<(), RequestError>) -> Option<&'static str> {
    modal_signals.save_finished(result.is_ok());
    let err = result.as_ref().err()?;
    log::error!("[DescriptionEditor] Save failed: {}", err);
    Some(DESCRIPTION_SAVE_FAILED)
}

/// Trimmed description, or `None` when there is nothing to save
fn validate_description(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;
    use leptos_modal::create_modal_signals;

    #[test]
    fn test_failed_save_keeps_modal_open() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = create_modal_signals();
            modal.show();
            let result = Err(RequestError::Rejected { status: 403, message: Some("forbidden".to_string()) });
            assert_eq!(finish_save(modal, &result), Some(DESCRIPTION_SAVE_FAILED));
            assert!(modal.is_visible());

            let result = Err(RequestError::Transport("Failed to fetch".to_string()));
            assert_eq!(finish_save(modal, &result), Some(DESCRIPTION_SAVE_FAILED));
            assert!(modal.is_visible());
        });
    }

    #[test]
    fn test_successful_save_closes_modal() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = create_modal_signals();
            modal.show();
            assert_eq!(finish_save(modal, &Ok(())), None);
            assert!(!modal.is_visible());
        });
    }

    #[test]
    fn test_backdrop_click_closes_without_saving() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = create_modal_signals();
            modal.show();
            modal.window_click(false);
            assert!(modal.is_visible());
            modal.window_click(true);
            assert!(!modal.is_visible());
        });
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(validate_description(""), None);
        assert_eq!(validate_description("   "), None);
        assert_eq!(validate_description("\n\t "), None);
    }

    #[test]
    fn test_description_trimmed() {
        assert_eq!(validate_description("  Great deal \n"), Some("Great deal"));
        assert_eq!(validate_description("x"), Some("x"));
    }
}
