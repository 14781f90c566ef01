//! Deals Site Frontend Entry Point
//!
//! Attaches the page controllers to server-rendered deal pages.

mod card;
mod commands;
mod components;
mod config;
mod csrf;
mod dom;
mod format;
mod models;

use any_spawner::Executor;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialised".into());
    }

    // Nothing is mounted before the controllers, so the executor that runs
    // modal effects and request tasks has to be set up here
    init_executor();

    dom::on_ready(|| {
        let owner = Owner::new();
        owner.with(components::init_all);
        // Controllers live as long as the page
        std::mem::forget(owner);
        log::debug!("[APP] Controllers attached");
    });
}

/// Install the wasm-bindgen executor. Returns `false` if one was already set.
fn init_executor() -> bool {
    match Executor::init_wasm_bindgen() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("[APP] Executor already initialised: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_executor_is_idempotent() {
        assert!(init_executor());
        // Second call leaves the installed executor alone
        assert!(!init_executor());
    }
}
