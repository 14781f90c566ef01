//! Page Configuration
//!
//! Element ids, endpoints, messages and timings shared by the page controllers.

// ========================
// Anti-forgery
// ========================

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

// ========================
// Shared modal markup
// ========================

pub const MODAL_ID: &str = "edit-modal";
pub const CLOSE_SELECTOR: &str = ".close";

// ========================
// Deal editor
// ========================

pub const EDIT_DEAL_BTN_ID: &str = "edit-deal-btn";
pub const SAVE_DEAL_BTN_ID: &str = "save-deal-btn";

pub const TITLE_INPUT_ID: &str = "title-input";
pub const PRICE_ORIGINAL_INPUT_ID: &str = "price-original-input";
pub const PRICE_DISCOUNT_INPUT_ID: &str = "price-discount-input";
pub const EXPIRES_AT_INPUT_ID: &str = "expires-at-input";
pub const IMAGE_URL_INPUT_ID: &str = "image-url-input";
pub const DESC_INPUT_ID: &str = "desc-input";

pub const DEAL_TITLE_ID: &str = "deal-title";
pub const DEAL_OLD_PRICE_ID: &str = "deal-old";
pub const DEAL_NEW_PRICE_ID: &str = "deal-new";
pub const DEAL_EXPIRE_ID: &str = "deal-expire";
pub const DEAL_IMAGE_ID: &str = "deal-image";
pub const DESCRIPTION_TEXT_ID: &str = "description-text";

pub const CURRENCY_SUFFIX: &str = " ₽";
pub const EXPIRE_ICON_CLASS: &str = "fa fa-calendar";
pub const EXPIRE_PREFIX: &str = " Действует до ";

pub const SAVE_FAILED_PREFIX: &str = "Ошибка при сохранении: ";
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

// ========================
// Description editor
// ========================

pub const EDIT_DESC_BTN_ID: &str = "edit-desc-btn";
pub const SAVE_DESC_BTN_ID: &str = "save-desc-btn";

pub const EMPTY_DESCRIPTION: &str = "Описание не может быть пустым!";
pub const DESCRIPTION_SAVE_FAILED: &str = "Ошибка при сохранении. Проверьте права доступа.";

// ========================
// Favorites
// ========================

pub const FAVORITES_CONTAINER_ID: &str = "favorites-container";
pub const DELETE_BTN_CLASS: &str = "btn-delete";
pub const CARD_SELECTOR: &str = ".card";
pub const DEAL_ID_ATTR: &str = "data-id";

pub const EMPTY_MESSAGE_ID: &str = "empty-message";
pub const EMPTY_MESSAGE_CLASS: &str = "text-muted";
pub const EMPTY_MESSAGE: &str = "У вас пока нет избранных акций";

pub const CONFIRM_REMOVE: &str = "Удалить акцию из избранного?";
pub const REMOVE_FAILED: &str = "Ошибка при удалении. Попробуйте снова.";
pub const CONNECTION_FAILED: &str = "Ошибка при соединении с сервером.";

pub const CARD_TRANSITION: &str = "opacity 0.4s ease, transform 0.3s ease";
pub const CARD_FADED_OPACITY: &str = "0";
pub const CARD_FADED_TRANSFORM: &str = "scale(0.95)";

/// Card is detached once its fade-out has played
pub const CARD_REMOVE_DELAY_MS: u32 = 400;
/// Extra wait after removal before checking for an empty list
pub const EMPTY_CHECK_DELAY_MS: u32 = 100;

// ========================
// Endpoints
// ========================

const UPDATE_ALL_SUFFIX: &str = "update_all/";
const UPDATE_DESCRIPTION_SUFFIX: &str = "update_description/";

/// Request paths for the page the controllers are attached to
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    page_path: String,
}

impl Endpoints {
    pub fn new(page_path: impl Into<String>) -> Self {
        Self { page_path: page_path.into() }
    }

    /// Endpoints relative to `window.location.pathname`
    pub fn current() -> Option<Self> {
        let path = web_sys::window()?.location().pathname().ok()?;
        Some(Self::new(path))
    }

    pub fn update_all(&self) -> String {
        format!("{}{}", self.page_path, UPDATE_ALL_SUFFIX)
    }

    pub fn update_description(&self) -> String {
        format!("{}{}", self.page_path, UPDATE_DESCRIPTION_SUFFIX)
    }
}

pub fn favorite_endpoint(deal_id: u32) -> String {
    format!("/deal/{}/favorite/", deal_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_relative_endpoints() {
        let endpoints = Endpoints::new("/deal/7/");
        assert_eq!(endpoints.update_all(), "/deal/7/update_all/");
        assert_eq!(endpoints.update_description(), "/deal/7/update_description/");
    }

    #[test]
    fn test_favorite_endpoint_is_absolute() {
        assert_eq!(favorite_endpoint(42), "/deal/42/favorite/");
    }
}
