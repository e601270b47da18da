//! Access token lookup for the host application.
//!
//! The uploader never reads storage itself; whoever mounts it decides where
//! the bearer token comes from and passes it in.

use crate::config::TOKEN_STORAGE_KEY;

/// Read the session's access token from `localStorage`.
///
/// Returns `None` outside a browser, when storage is disabled, or when no
/// non-empty token is stored.
pub fn stored_access_token() -> Option<String> {
    let storage = match web_sys::window()?.local_storage() {
        Ok(Some(storage)) => storage,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("localStorage unavailable: {:?}", e);
            return None;
        }
    };

    storage
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}
