//! RedirectFollower trait definition
//!
//! This trait defines the HTTP capability the resolvers need.
//! It allows resolution to be decoupled from the specific HTTP client implementation.

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;

/// Outcome of a header-only request after all redirects were followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// URL of the last response in the redirect chain
    pub final_url: Url,

    /// HTTP status of the last response
    pub status: u16,
}

impl Resolution {
    /// Create a new Resolution
    pub fn new(final_url: Url, status: u16) -> Self {
        Self { final_url, status }
    }

    /// Whether the final response was a 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for following HTTP redirects without fetching response bodies
///
/// This trait is implemented by the HTTP adapter and can be mocked for testing.
/// Redirect limits, loop detection and header propagation belong to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectFollower: Send + Sync {
    /// Issue one logical header-only request and follow every redirect
    async fn follow(&self, url: &Url) -> Result<Resolution, TransportError>;
}
