//! Deal Commands
//!
//! Full update and description-only update of the deal shown on the page.

use crate::config::Endpoints;
use crate::models::{DealUpdate, DescriptionUpdate, ErrorBody};
use super::{post_json, RequestError};

/// Submit every editable field. Rejections carry the server's `message`.
pub async fn update_deal(endpoints: &Endpoints, update: &DealUpdate) -> Result<(), RequestError> {
    let resp = post_json(&endpoints.update_all(), update).await?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(RequestError::Rejected {
            status: resp.status(),
            message: ErrorBody::parse(&body).message,
        });
    }
    // Success body echoes the deal; the page keeps the submitted values
    if let Err(e) = resp.json::<serde_json::Value>().await {
        log::debug!("[DealEditor] Ignoring unparsable success body: {}", e);
    }
    Ok(())
}

pub async fn update_description(endpoints: &Endpoints, description: &str) -> Result<(), RequestError> {
    let resp = post_json(&endpoints.update_description(), &DescriptionUpdate { description }).await?;
    if !resp.ok() {
        return Err(RequestError::Rejected { status: resp.status(), message: None });
    }
    Ok(())
}
