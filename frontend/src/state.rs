//! Transient state of one uploader instance.
//!
//! [`UploaderState`] is plain data: the component keeps it in a signal and
//! the tests drive it directly. Transitions:
//!
//! ```text
//!  select(valid) ──► Idle ──begin_upload──► Uploading ──finish──► Succeeded
//!                     ▲                                     └───► Failed
//!  select(None) ──────┘
//! ```

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};
use serde_json::Value;

use crate::config::{MSG_UPLOADED, MSG_UPLOAD_FAILED};
use crate::services::{check_size, upload_main_image, LocalFile, UploadTransport};
use crate::{StatusMessage, UploadOutcome, UploadStatus, UploadTarget};

pub struct UploaderState<F: LocalFile> {
    file: Option<F>,
    preview: Option<F::Preview>,
    status: UploadStatus,
    message: Option<StatusMessage>,
}

impl<F: LocalFile> Default for UploaderState<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            status: UploadStatus::Idle,
            message: None,
        }
    }
}

impl<F: LocalFile> UploaderState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview_src(&self) -> Option<&str> {
        self.preview.as_ref().map(|preview| preview.as_ref())
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Handle a change of the file input.
    ///
    /// `None` clears the selection. An oversized file only sets the error;
    /// whatever was selected before stays selected.
    pub fn select(&mut self, picked: Option<F>) {
        self.message = None;

        let Some(file) = picked else {
            self.file = None;
            self.preview = None;
            self.reset_status();
            return;
        };

        if let Err(e) = check_size(file.size()) {
            log::warn!("Rejected {} ({} bytes): {}", file.name(), file.size(), e);
            self.message = Some(StatusMessage::Error(e.message().to_string()));
            return;
        }

        match file.create_preview() {
            Ok(preview) => {
                log::debug!("Selected {} ({}, {} bytes)", file.name(), file.mime_type(), file.size());
                // Dropping the old preview releases it.
                self.preview = Some(preview);
                self.file = Some(file);
                self.reset_status();
            }
            Err(e) => {
                log::error!("{}", e);
                self.message = Some(StatusMessage::Error(e.message().to_string()));
            }
        }
    }

    /// Whether the upload button is actionable.
    pub fn can_upload(&self, product_id: &str) -> bool {
        self.file.is_some() && !product_id.is_empty() && !self.status.is_busy()
    }

    /// Enter `Uploading` and hand out the file to send.
    ///
    /// Returns `None` without touching anything when there is nothing to
    /// upload, no product, or a request is already in flight.
    pub fn begin_upload(&mut self, product_id: &str) -> Option<F> {
        if !self.can_upload(product_id) {
            return None;
        }
        self.status = UploadStatus::Uploading;
        self.message = None;
        self.file.clone()
    }

    /// Settle the in-flight upload.
    ///
    /// Always leaves `Uploading`. Returns the parsed body, if any, for the
    /// completion callback.
    pub fn finish(&mut self, outcome: UploadOutcome) -> Option<Value> {
        match outcome {
            UploadOutcome::Succeeded { body } => {
                self.status = UploadStatus::Succeeded;
                self.message = Some(StatusMessage::Success(MSG_UPLOADED.to_string()));
                body
            }
            UploadOutcome::Failed { message } => {
                self.status = UploadStatus::Failed;
                let message = if message.is_empty() {
                    MSG_UPLOAD_FAILED.to_string()
                } else {
                    message
                };
                self.message = Some(StatusMessage::Error(message));
                None
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.status.is_busy() {
            "Uploading…"
        } else {
            "Upload Image"
        }
    }

    // A selection made mid-upload must not clear the in-flight guard.
    fn reset_status(&mut self) {
        if !self.status.is_busy() {
            self.status = UploadStatus::Idle;
        }
    }
}

/// Helper line under the button; hidden without a product.
pub fn helper_text(product_id: &str) -> Option<String> {
    if product_id.is_empty() {
        None
    } else {
        Some(format!("Max 5 MB. Product: {}", product_id))
    }
}

/// Somewhere an [`UploaderState`] lives that can be mutated briefly.
///
/// `None` means the state is gone (component disposed).
pub trait StateCell<F: LocalFile> {
    fn try_with_mut<O>(&self, f: impl FnOnce(&mut UploaderState<F>) -> O) -> Option<O>;
}

impl<F: LocalFile> StateCell<F> for RwSignal<UploaderState<F>> {
    fn try_with_mut<O>(&self, f: impl FnOnce(&mut UploaderState<F>) -> O) -> Option<O> {
        self.try_update(f)
    }
}

impl<F: LocalFile> StateCell<F> for RefCell<UploaderState<F>> {
    fn try_with_mut<O>(&self, f: impl FnOnce(&mut UploaderState<F>) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// One click on the upload button: begin, send, settle, notify.
///
/// Returns `false` without sending anything when `begin_upload` refuses.
/// The state is never borrowed across the request, and `on_uploaded` runs
/// at most once, after the state shows success.
pub async fn perform_upload<F, T, S, C>(
    state: &S,
    transport: &T,
    target: &UploadTarget,
    on_uploaded: Option<C>,
) -> bool
where
    F: LocalFile,
    T: UploadTransport<F>,
    S: StateCell<F>,
    C: FnOnce(Value),
{
    let Some(file) = state
        .try_with_mut(|s| s.begin_upload(&target.product_id))
        .flatten()
    else {
        return false;
    };

    let outcome = upload_main_image(transport, target, &file, on_uploaded.is_some()).await;
    let succeeded = outcome.is_success();

    match state.try_with_mut(|s| s.finish(outcome)) {
        Some(Some(body)) => {
            if let Some(callback) = on_uploaded {
                callback(body);
            }
        }
        Some(None) => log::debug!("Upload settled (success: {})", succeeded),
        None => log::debug!("Uploader disposed before the upload settled"),
    }
    true
}
