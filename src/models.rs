//! Frontend Models
//!
//! Request and response bodies exchanged with the deal endpoints.

use serde::{Deserialize, Serialize};

/// Full deal update, read from the edit modal inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealUpdate {
    pub title: String,
    pub price_original: String,
    pub price_discount: String,
    pub expires_at: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionUpdate<'a> {
    pub description: &'a str,
}

/// Error body returned by rejected requests
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Lenient parse: anything that isn't a JSON object yields no message
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_update_keys() {
        let update = DealUpdate {
            title: "A".to_string(),
            price_original: "100".to_string(),
            price_discount: "80".to_string(),
            expires_at: "2024-01-15".to_string(),
            image_url: "u".to_string(),
            description: "d".to_string(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "A",
                "price_original": "100",
                "price_discount": "80",
                "expires_at": "2024-01-15",
                "image_url": "u",
                "description": "d",
            })
        );
    }

    #[test]
    fn test_description_update_body() {
        let body = serde_json::to_string(&DescriptionUpdate { description: "new text" }).unwrap();
        assert_eq!(body, r#"{"description":"new text"}"#);
    }

    #[test]
    fn test_error_body_message() {
        let err = ErrorBody::parse(r#"{"message":"forbidden","code":403}"#);
        assert_eq!(err.message.as_deref(), Some("forbidden"));
    }

    #[test]
    fn test_error_body_without_message() {
        assert_eq!(ErrorBody::parse("{}").message, None);
        assert_eq!(ErrorBody::parse(r#"{"message":null}"#).message, None);
    }

    #[test]
    fn test_error_body_not_json() {
        assert_eq!(ErrorBody::parse("<html>500</html>"), ErrorBody::default());
        assert_eq!(ErrorBody::parse(""), ErrorBody::default());
    }
}
