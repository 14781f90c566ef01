//! Server Command Wrappers
//!
//! Frontend bindings to the deal endpoints, organized by domain.

mod deal;
mod favorite;

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

use crate::config::CSRF_HEADER;
use crate::csrf::csrf_token;

// Re-export all public items
pub use deal::*;
pub use favorite::*;

/// Failure of a state-changing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Server answered with a non-2xx status
    Rejected { status: u16, message: Option<String> },
    /// Request never got a response
    Transport(String),
}

impl RequestError {
    fn transport(e: gloo_net::Error) -> Self {
        RequestError::Transport(e.to_string())
    }

    /// Server-provided message, if the rejection carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Rejected { message, .. } => message.as_deref(),
            RequestError::Transport(_) => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Rejected { status, message: Some(message) } => {
                write!(f, "request rejected ({}): {}", status, message)
            }
            RequestError::Rejected { status, message: None } => {
                write!(f, "request rejected ({})", status)
            }
            RequestError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for RequestError {}

/// POST with the anti-forgery header attached when the cookie is set
fn post(url: &str) -> RequestBuilder {
    let builder = Request::post(url);
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

/// POST a JSON body. Any HTTP status is returned as `Ok`.
async fn post_json<T: Serialize + ?Sized>(url: &str, body: &T) -> Result<Response, RequestError> {
    let request = post(url).json(body).map_err(RequestError::transport)?;
    request.send().await.map_err(RequestError::transport)
}

/// POST without a body. Any HTTP status is returned as `Ok`.
async fn post_empty(url: &str) -> Result<Response, RequestError> {
    post(url).send().await.map_err(RequestError::transport)
}
