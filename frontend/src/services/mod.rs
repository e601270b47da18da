//! Browser and backend services.
//!
//! # Services
//!
//! - [`file`] - Local file access, size check and preview handles
//! - [`upload`] - Multipart upload to the orders backend
//! - [`session`] - Access token lookup for the host application

pub mod file;
pub mod session;
pub mod upload;

pub use file::*;
pub use session::*;
pub use upload::*;
