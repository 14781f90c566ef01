//! DOM Helpers
//!
//! Thin lookups and mutations over the server-rendered page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok()
}

pub fn query(selector: &str) -> Option<web_sys::Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Current value of an `<input>` or `<textarea>`; empty when missing
pub fn field_value(id: &str) -> String {
    let Some(el) = by_id(id) else {
        log::warn!("[DOM] Missing form field #{}", id);
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        textarea.value()
    } else {
        el.get_attribute("value").unwrap_or_default()
    }
}

pub fn set_text(id: &str, text: &str) {
    match by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => log::warn!("[DOM] Missing display node #{}", id),
    }
}

pub fn set_attr(id: &str, name: &str, value: &str) {
    let Some(el) = by_id(id) else {
        log::warn!("[DOM] Missing display node #{}", id);
        return;
    };
    if let Err(e) = el.set_attribute(name, value) {
        log::error!("[DOM] Failed to set {} on #{}: {:?}", name, id, e);
    }
}

/// Replace the children of `#id` with an icon `<i>` followed by plain text
pub fn set_icon_text(id: &str, icon_class: &str, text: &str) {
    let (Some(doc), Some(el)) = (document(), by_id(id)) else {
        log::warn!("[DOM] Missing display node #{}", id);
        return;
    };
    el.set_text_content(None);
    if let Ok(icon) = doc.create_element("i") {
        icon.set_class_name(icon_class);
        let _ = el.append_child(&icon);
    }
    let _ = el.append_child(&doc.create_text_node(text));
}

pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::error!("[DOM] Failed to set style {}={}: {:?}", property, value, e);
    }
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Blocking browser confirm; dismissal or failure counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else { return };
    if is_parsed(&doc.ready_state()) {
        f();
        return;
    }
    let cb = Closure::once(f);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        log::error!("[DOM] Failed to wait for DOMContentLoaded: {:?}", e);
    }
    cb.forget();
}

/// `document.readyState` is `"loading"` until parsing finishes
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_parsed() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }
}
