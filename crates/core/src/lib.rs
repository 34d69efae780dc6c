//! unshort-core: Core library for the unshort URL expander
//!
//! This crate provides the core functionality for unshort, including:
//! - URL validation
//! - Redirect resolution through the RedirectFollower trait
//! - Component parsing of the resolved URL
//! - Configuration management
//!
//! This crate is designed to be independent of any specific HTTP client,
//! allowing resolution to be tested against a fake follower.

pub mod config;
pub mod error;
pub mod expand;
pub mod expanded;
pub mod traits;

pub use config::{Config, ConfigManager, HttpSettings};
pub use error::{Error, ErrorKind, InvalidUrlReason, Result, TransportError, TransportErrorKind};
pub use expand::{expand_url, expand_url_with_details, validate_url};
pub use expanded::ExpandedUrl;
pub use traits::{RedirectFollower, Resolution};
