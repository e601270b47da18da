//! UI Components for the product image uploader.
//!
//! # Layout Components
//! - [`Header`] - Top bar with session status
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ProductImageUploader`] - Image selection, preview and upload
//! - [`UploadedImageCard`] - Backend reply for the last upload

mod footer;
mod header;
mod hero;
mod image_uploader;
mod uploaded;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use image_uploader::*;
pub use uploaded::*;
