//! Local file access: size validation and preview handles.
//!
//! The widget only ever sees files through [`LocalFile`], so the selection
//! logic runs the same against `web_sys::File` in the browser and against
//! in-memory files in tests.

use web_sys::{Blob, File, Url};

use crate::config::{MAX_IMAGE_SIZE, MSG_TOO_LARGE};
use crate::{AppError, AppResult};

/// A user-picked file that can be previewed and uploaded.
pub trait LocalFile: Clone + 'static {
    /// Renderable handle, usable as an `<img src>`.
    type Preview: AsRef<str> + 'static;

    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;

    /// Allocate a preview for this file.
    fn create_preview(&self) -> AppResult<Self::Preview>;
}

/// Reject anything strictly larger than [`MAX_IMAGE_SIZE`].
pub fn check_size(size: u64) -> AppResult<()> {
    if size > MAX_IMAGE_SIZE {
        return Err(AppError::Validation(MSG_TOO_LARGE.to_string()));
    }
    Ok(())
}

/// Blob URL created with `URL.createObjectURL`.
///
/// Revoked on drop, so replacing the stored preview (or disposing the
/// signal holding it) releases the previous one.
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn for_file(file: &File) -> AppResult<Self> {
        Url::create_object_url_with_blob(file)
            .map(ObjectUrl)
            .map_err(|e| AppError::Browser(format!("Failed to create preview: {:?}", e)))
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke preview URL {}: {:?}", self.0, e);
        }
    }
}

impl LocalFile for File {
    type Preview = ObjectUrl;

    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> u64 {
        // Blob.size is a JS number; sizes are integral and well below 2^53.
        Blob::size(self).max(0.0) as u64
    }

    fn mime_type(&self) -> String {
        Blob::type_(self)
    }

    fn create_preview(&self) -> AppResult<ObjectUrl> {
        ObjectUrl::for_file(self)
    }
}
