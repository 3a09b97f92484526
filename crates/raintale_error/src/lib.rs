//! Error types for the Raintale library.
//!
//! This crate provides the foundation error types used throughout the Raintale
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use raintale_error::{RaintaleResult, HttpError};
//!
//! fn fetch_data() -> RaintaleResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod story;
mod template;
mod video;

pub use config::ConfigError;
pub use error::{RaintaleError, RaintaleErrorKind, RaintaleResult};
pub use http::HttpError;
pub use story::{StoryError, StoryErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
pub use video::{VideoError, VideoErrorKind};
