//! In-memory stand-ins for browser files and the HTTP transport.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::services::{LocalFile, UploadTransport};
use crate::{AppError, AppResult, HttpReply};

/// File that lives in memory and counts its live previews.
#[derive(Clone, Debug)]
pub struct MemoryFile {
    name: String,
    size: u64,
    mime_type: String,
    fail_preview: bool,
    live_previews: Rc<Cell<usize>>,
}

impl MemoryFile {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime_type: "image/jpeg".to_string(),
            fail_preview: false,
            live_previews: Rc::new(Cell::new(0)),
        }
    }

    /// Share one preview counter between several files.
    pub fn sharing(mut self, other: &MemoryFile) -> Self {
        self.live_previews = other.live_previews.clone();
        self
    }

    pub fn without_preview(mut self) -> Self {
        self.fail_preview = true;
        self
    }

    pub fn live_previews(&self) -> usize {
        self.live_previews.get()
    }
}

#[derive(Debug)]
pub struct MemoryPreview {
    url: String,
    live: Rc<Cell<usize>>,
}

impl AsRef<str> for MemoryPreview {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Drop for MemoryPreview {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl LocalFile for MemoryFile {
    type Preview = MemoryPreview;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn create_preview(&self) -> AppResult<MemoryPreview> {
        if self.fail_preview {
            return Err(AppError::Browser("Failed to create preview".to_string()));
        }
        self.live_previews.set(self.live_previews.get() + 1);
        Ok(MemoryPreview {
            url: format!("blob:memory/{}", self.name),
            live: self.live_previews.clone(),
        })
    }
}

/// What the mock transport was asked to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub authorization: String,
    pub field: String,
    pub file_name: String,
}

/// Transport returning a canned reply and recording every call.
pub struct MockTransport {
    reply: AppResult<HttpReply>,
    calls: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with(Ok(HttpReply {
            status,
            body: Some(body.to_string()),
        }))
    }

    pub fn unreadable(status: u16) -> Self {
        Self::with(Ok(HttpReply { status, body: None }))
    }

    pub fn offline(message: &str) -> Self {
        Self::with(Err(AppError::Network(message.to_string())))
    }

    fn with(reply: AppResult<HttpReply>) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.calls.borrow().clone()
    }
}

impl UploadTransport<MemoryFile> for MockTransport {
    async fn post_multipart(
        &self,
        url: &str,
        authorization: &str,
        field: &str,
        file: &MemoryFile,
    ) -> AppResult<HttpReply> {
        self.calls.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            authorization: authorization.to_string(),
            field: field.to_string(),
            file_name: file.name(),
        });
        self.reply.clone()
    }
}
