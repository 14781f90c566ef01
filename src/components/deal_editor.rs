//! Deal Editor
//!
//! Edit modal on the deal page: submits all six fields to `update_all/`
//! and writes the submitted values back into the page.

use leptos::task::spawn_local;
use leptos_modal::{bind_modal, on_click, ModalSignals};

use crate::commands::{self, RequestError};
use crate::config::*;
use crate::dom;
use crate::format::{expiry_label, format_price};
use crate::models::DealUpdate;

/// Wire the deal edit modal. No-op on pages without the edit button.
pub fn init_deal_editor() {
    let Some(open_btn) = dom::by_id(EDIT_DEAL_BTN_ID) else { return };
    let (Some(modal), Some(save_btn)) = (dom::html_by_id(MODAL_ID), dom::by_id(SAVE_DEAL_BTN_ID)) else {
        log::warn!("[DealEditor] Edit button present but modal markup is incomplete");
        return;
    };
    let Some(endpoints) = Endpoints::current() else {
        log::error!("[DealEditor] Could not read page path");
        return;
    };

    let close_btn = dom::query(CLOSE_SELECTOR);
    let modal_signals = bind_modal(modal, &open_btn, close_btn.as_ref());

    on_click(&save_btn, move |_ev| {
        let update = read_deal_form();
        let endpoints = endpoints.clone();
        spawn_local(async move {
            let result = commands::update_deal(&endpoints, &update).await;
            match finish_save(modal_signals, &result) {
                None => {
                    log::info!("[DealEditor] Saved deal \"{}\"", update.title);
                    apply_deal_update(&update);
                }
                Some(alert) => dom::alert(&alert),
            }
        });
    });

    log::debug!("[DealEditor] Ready");
}

fn read_deal_form() -> DealUpdate {
    DealUpdate {
        title: dom::field_value(TITLE_INPUT_ID),
        price_original: dom::field_value(PRICE_ORIGINAL_INPUT_ID),
        price_discount: dom::field_value(PRICE_DISCOUNT_INPUT_ID),
        expires_at: dom::field_value(EXPIRES_AT_INPUT_ID),
        image_url: dom::field_value(IMAGE_URL_INPUT_ID),
        description: dom::field_value(DESC_INPUT_ID),
    }
}

fn apply_deal_update(update: &DealUpdate) {
    dom::set_text(DEAL_TITLE_ID, &update.title);
    dom::set_text(DEAL_OLD_PRICE_ID, &format_price(&update.price_original));
    dom::set_text(DEAL_NEW_PRICE_ID, &format_price(&update.price_discount));
    dom::set_icon_text(DEAL_EXPIRE_ID, EXPIRE_ICON_CLASS, &expiry_label(&update.expires_at));
    dom::set_attr(DEAL_IMAGE_ID, "src", &update.image_url);
    dom::set_text(DESCRIPTION_TEXT_ID, &update.description);
}

/// Close the modal on success; on failure keep it open and return the alert text
fn finish_save(modal_signals: ModalSignals, result: &Result<(), RequestError>) -> Option<String> {
    modal_signals.save_finished(result.is_ok());
    let err = result.as_ref().err()?;
    log::error!("[DealEditor] Save failed: {}", err);
    Some(save_failed_message(err))
}

/// Alert text for a failed save
fn save_failed_message(err: &RequestError) -> String {
    match err {
        RequestError::Transport(_) => CONNECTION_FAILED.to_string(),
        RequestError::Rejected { .. } => {
            let message = err.server_message().filter(|m| !m.is_empty()).unwrap_or(UNKNOWN_ERROR);
            format!("{}{}", SAVE_FAILED_PREFIX, message)
        }
    }
}
