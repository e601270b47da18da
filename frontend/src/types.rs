//! Common types used across the uploader.
//!
//! # Categories
//!
//! - **Status Types** - Upload lifecycle and inline messages
//! - **Request Types** - What goes over the wire and what comes back
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Status Types
// =============================================================================

/// Upload lifecycle.
///
/// Reset to `Idle` on a new selection, `Uploading` while the request is in
/// flight, then `Succeeded` or `Failed` once it settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

impl UploadStatus {
    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }

    /// Get CSS class for styling the widget container.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "uploader-idle",
            UploadStatus::Uploading => "uploader-uploading",
            UploadStatus::Succeeded => "uploader-succeeded",
            UploadStatus::Failed => "uploader-failed",
        }
    }
}

/// Inline message shown next to the upload button.
///
/// Success and error are mutually exclusive; the next action overwrites it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    /// Green for success, red for errors.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusMessage::Success(_) => "text-green-600 text-sm",
            StatusMessage::Error(_) => "text-red-600 text-sm",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Where an upload goes and with which credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadTarget {
    /// Backend API base URL
    pub api_base_url: String,
    /// Product receiving the image
    pub product_id: String,
    /// Bearer token, possibly empty
    pub token: String,
}

impl UploadTarget {
    pub fn new(
        api_base_url: impl Into<String>,
        product_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            product_id: product_id.into(),
            token: token.into(),
        }
    }

    /// Full endpoint URL for this product.
    pub fn url(&self) -> String {
        crate::config::upload_endpoint(&self.api_base_url, &self.product_id)
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Raw HTTP reply handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Response text, `None` when the body could not be read
    pub body: Option<String>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one upload attempt.
///
/// The UI matches on this instead of catching errors.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// 2xx reply. `body` is only parsed when someone asked for it.
    Succeeded { body: Option<Value> },
    /// Anything else, with a message ready for display.
    Failed { message: String },
}

impl UploadOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        UploadOutcome::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Succeeded { .. })
    }
}

/// Typed view of the backend's success body.
///
/// Only the fields the host app displays; the component itself passes the
/// raw JSON through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: Option<Value>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UploadedImage {
    /// Best-effort extraction from an arbitrary success body.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Local validation failed before any network call.
    Validation(String),
    /// Request could not be sent or no response arrived.
    Network(String),
    /// A browser API call failed.
    Browser(String),
    /// Response body was not the expected JSON.
    Parse(String),
}

impl AppError {
    /// Message suitable for inline display, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Network(msg)
            | AppError::Browser(msg)
            | AppError::Parse(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
