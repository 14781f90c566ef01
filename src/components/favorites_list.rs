//! Favorites List
//!
//! Delegated delete handling for the favorites page. One listener on the
//! container covers cards added or removed after load.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use leptos_modal::on_click;
use wasm_bindgen::JsCast;

use crate::card::{parse_deal_id, CardEvent, CardPhase};
use crate::commands::{self, RequestError};
use crate::components::empty_state::mount_empty_state;
use crate::config::*;
use crate::dom;

pub fn init_favorites_list() {
    let Some(container) = dom::by_id(FAVORITES_CONTAINER_ID) else { return };

    let list = container.clone();
    on_click(&container, move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else { return };
        if target.class_list().contains(DELETE_BTN_CLASS) {
            request_removal(list.clone(), target);
        }
    });

    log::debug!("[Favorites] Ready");
}

fn request_removal(container: web_sys::Element, button: web_sys::Element) {
    let card = button
        .closest(CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(card) = card else {
        log::warn!("[Favorites] Delete button outside of a card");
        return;
    };
    let deal_id = parse_deal_id(button.get_attribute(DEAL_ID_ATTR).as_deref());
    if deal_id.is_none() {
        log::warn!("[Favorites] Delete button without a valid {}", DEAL_ID_ATTR);
    }
    let Some(deal_id) = confirmed_removal(deal_id, || dom::confirm(CONFIRM_REMOVE)) else {
        return;
    };

    spawn_local(async move {
        let result = commands::remove_favorite(deal_id).await;
        let phase = CardPhase::Present.next(CardEvent::from_request(&result));
        if let Err(e) = &result {
            match e {
                RequestError::Transport(_) => log::error!("[Favorites] Deal {}: {}", deal_id, e),
                RequestError::Rejected { .. } => log::warn!("[Favorites] Deal {}: {}", deal_id, e),
            }
            dom::alert(removal_failed_message(e));
            return;
        }

        fade_out(&card);
        TimeoutFuture::new(CARD_REMOVE_DELAY_MS).await;
        let phase = phase.next(CardEvent::TransitionElapsed);
        if !phase.is_in_document() {
            card.remove();
        }
        log::info!("[Favorites] Deal {} card {:?}", deal_id, phase);

        TimeoutFuture::new(EMPTY_CHECK_DELAY_MS).await;
        show_empty_state_if_needed(&container);
    });
}

/// Deal to send a removal request for. The user is asked only when the
/// button names a deal; declining sends nothing.
fn confirmed_removal(deal_id: Option<u32>, confirm: impl FnOnce() -> bool) -> Option<u32> {
    let deal_id = deal_id?;
    confirm().then_some(deal_id)
}

fn removal_failed_message(err: &RequestError) -> &'static str {
    match err {
        RequestError::Transport(_) => CONNECTION_FAILED,
        RequestError::Rejected { .. } => REMOVE_FAILED,
    }
}

fn fade_out(card: &web_sys::HtmlElement) {
    dom::set_style(card, "transition", CARD_TRANSITION);
    dom::set_style(card, "opacity", CARD_FADED_OPACITY);
    dom::set_style(card, "transform", CARD_FADED_TRANSFORM);
}

/// What the post-removal check does to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmptyCheck {
    /// Cards remain, leave the list alone
    CardsLeft,
    /// List is empty and the message is already on the page
    AlreadyShown,
    /// List is empty, clear it and add the message
    ShowMessage,
}

fn empty_check(has_cards: bool, message_shown: bool) -> EmptyCheck {
    match (has_cards, message_shown) {
        (true, _) => EmptyCheck::CardsLeft,
        (false, true) => EmptyCheck::AlreadyShown,
        (false, false) => EmptyCheck::ShowMessage,
    }
}

/// Swap an emptied list for the "no favorites" message, at most once
fn show_empty_state_if_needed(container: &web_sys::Element) {
    let has_cards = container.query_selector(CARD_SELECTOR).ok().flatten().is_some();
    let message_shown = dom::by_id(EMPTY_MESSAGE_ID).is_some();

    match empty_check(has_cards, message_shown) {
        EmptyCheck::CardsLeft => {}
        EmptyCheck::AlreadyShown => container.set_inner_html(""),
        EmptyCheck::ShowMessage => {
            container.set_inner_html("");
            match container.parent_element().and_then(|p| p.dyn_into::<web_sys::HtmlElement>().ok()) {
                Some(parent) => mount_empty_state(parent),
                None => log::warn!("[Favorites] Container has no parent for the empty message"),
            }
        }
    }
}
