//! Favorite Commands

use crate::config::favorite_endpoint;
use super::{post_empty, RequestError};

/// Remove a deal from the current user's favorites
pub async fn remove_favorite(deal_id: u32) -> Result<(), RequestError> {
    let resp = post_empty(&favorite_endpoint(deal_id)).await?;
    if !resp.ok() {
        return Err(RequestError::Rejected { status: resp.status(), message: None });
    }
    Ok(())
}
