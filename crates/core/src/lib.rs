//! mup-core: Core library for the mup S3 CLI client
//!
//! This crate provides the core functionality for the mup CLI, including:
//! - Settings resolution from environment variables
//! - Error taxonomy with exit-code mapping
//! - ObjectStore trait for S3 operations
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod error;
pub mod settings;
pub mod traits;

pub use error::{Error, Result};
pub use settings::{Overrides, Settings};
pub use traits::{BucketInfo, ObjectInfo, ObjectPage, ObjectStore};
