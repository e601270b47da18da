//! Application configuration.
//!
//! Centralized constants for the product image uploader. Everything a
//! caller may want to change per instance (product, token, backend host)
//! is a component prop instead; see [`crate::ProductImageUploader`].

/// Default backend API base URL.
///
/// Used when the caller does not pass `api_base_url`.
pub const DEFAULT_API_BASE_URL: &str = "https://internaloox-1.onrender.com/api";

/// Maximum image size accepted for upload (in bytes).
///
/// 5 MB limit, inclusive.
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME filter applied to the file input.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

/// Multipart field name the backend reads the image from.
pub const FILE_FIELD_NAME: &str = "file";

/// localStorage key holding the session's access token.
///
/// Only read by the host application, never by the widget itself.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Product shown by the standalone host app until the user picks another.
pub const DEMO_PRODUCT_ID: &str = "1";

// User-facing messages
pub const MSG_UPLOADED: &str = "Image uploaded";
pub const MSG_TOO_LARGE: &str = "File exceeds 5 MB limit";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";

/// Build the upload URL for a product.
///
/// `{base}/orders/products/{product_id}/upload_main_image/`
pub fn upload_endpoint(api_base_url: &str, product_id: &str) -> String {
    format!(
        "{}/orders/products/{}/upload_main_image/",
        api_base_url.trim_end_matches('/'),
        product_id
    )
}
