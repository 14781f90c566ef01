//! Page Controllers
//!
//! Each controller attaches to server-rendered markup and does nothing on
//! pages that lack its trigger element.

mod deal_editor;
mod description_editor;
mod favorites_list;
mod empty_state;

pub use deal_editor::init_deal_editor;
pub use description_editor::init_description_editor;
pub use favorites_list::init_favorites_list;

/// Attach every controller to the current page
pub fn init_all() {
    init_deal_editor();
    init_description_editor();
    init_favorites_list();
}
