//! Empty Favorites Message

use leptos::prelude::*;

use crate::config::{EMPTY_MESSAGE, EMPTY_MESSAGE_CLASS, EMPTY_MESSAGE_ID};

#[component]
pub fn EmptyFavorites() -> impl IntoView {
    view! {
        <p id=EMPTY_MESSAGE_ID class=EMPTY_MESSAGE_CLASS>{EMPTY_MESSAGE}</p>
    }
}

/// Append the message to `parent`; it stays for the life of the page
pub fn mount_empty_state(parent: web_sys::HtmlElement) {
    let handle = leptos::mount::mount_to(parent, EmptyFavorites);
    std::mem::forget(handle);
}
