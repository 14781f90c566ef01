//! Leptos Modal Bindings
//!
//! Attaches a Leptos visibility signal to a server-rendered modal element.
//! The signal is the single source of truth; an effect mirrors it into
//! `style.display`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `display` value for a shown modal
pub const DISPLAY_SHOWN: &str = "block";
/// `display` value for a hidden modal
pub const DISPLAY_HIDDEN: &str = "none";

/// Modal visibility signals
#[derive(Clone, Copy)]
pub struct ModalSignals {
    pub visible_read: ReadSignal<bool>,
    pub visible_write: WriteSignal<bool>,
}

impl ModalSignals {
    pub fn show(&self) {
        self.visible_write.set(true);
    }

    pub fn hide(&self) {
        self.visible_write.set(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible_read.get_untracked()
    }

    /// Window-level click: only the backdrop itself dismisses the modal
    pub fn window_click(&self, on_backdrop: bool) {
        if on_backdrop {
            self.hide();
        }
    }

    /// Close after a successful save, stay open so a failed save can be retried
    pub fn save_finished(&self, saved: bool) {
        if saved {
            self.hide();
        }
    }
}

/// Modals start hidden
pub fn create_modal_signals() -> ModalSignals {
    let (visible_read, visible_write) = signal(false);
    ModalSignals {
        visible_read,
        visible_write,
    }
}

pub fn display_value(visible: bool) -> &'static str {
    if visible {
        DISPLAY_SHOWN
    } else {
        DISPLAY_HIDDEN
    }
}

/// Whether a click landed on the modal backdrop itself, not on its content
pub fn is_backdrop_target(target: Option<&web_sys::EventTarget>, modal: &web_sys::HtmlElement) -> bool {
    match target {
        Some(target) => js_sys::Object::is(target, modal),
        None => false,
    }
}

/// Register a click listener that lives as long as the page
pub fn on_click<F>(target: &web_sys::EventTarget, handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        log::error!("[Modal] Failed to add click listener: {:?}", e);
    }
    cb.forget();
}

/// Mirror the visibility signal into the modal's inline `display` style.
///
/// Must run inside a reactive owner with the task executor initialised.
pub fn bind_modal_display(modal: web_sys::HtmlElement, modal_signals: ModalSignals) {
    Effect::new(move |_| {
        let value = display_value(modal_signals.visible_read.get());
        if let Err(e) = modal.style().set_property("display", value) {
            log::error!("[Modal] Failed to set display={}: {:?}", value, e);
        }
    });
}

/// Full modal wiring: trigger shows, close control hides, backdrop click hides
pub fn bind_modal(
    modal: web_sys::HtmlElement,
    open_btn: &web_sys::Element,
    close_btn: Option<&web_sys::Element>,
) -> ModalSignals {
    let modal_signals = create_modal_signals();
    bind_modal_display(modal.clone(), modal_signals);

    on_click(open_btn, move |_ev| modal_signals.show());

    if let Some(close_btn) = close_btn {
        on_click(close_btn, move |_ev| modal_signals.hide());
    }

    // Backdrop clicks bubble to the window with the modal as target
    if let Some(win) = web_sys::window() {
        on_click(&win, move |ev: web_sys::MouseEvent| {
            modal_signals.window_click(is_backdrop_target(ev.target().as_ref(), &modal));
        });
    }

    modal_signals
}
