//! unshort-http: reqwest adapter for unshort
//!
//! This crate provides the implementation of the RedirectFollower trait
//! using the reqwest crate. It is the only crate that directly
//! depends on an HTTP client.

pub mod client;

pub use client::ReqwestFollower;

use unshort_core::{ExpandedUrl, HttpSettings, Result};

/// Expand a URL with a default-configured client
///
/// ```no_run
/// # async fn run() -> unshort_core::Result<()> {
/// let full = unshort_http::expand_url("https://bit.ly/example").await?;
/// println!("{full}");
/// # Ok(())
/// # }
/// ```
pub async fn expand_url(url: &str) -> Result<String> {
    unshort_core::validate_url(url)?;
    let client = ReqwestFollower::new(&HttpSettings::default())?;
    unshort_core::expand_url(&client, url).await
}

/// Expand a URL with a default-configured client and parse the result
pub async fn expand_url_with_details(url: &str) -> Result<ExpandedUrl> {
    unshort_core::validate_url(url)?;
    let client = ReqwestFollower::new(&HttpSettings::default())?;
    unshort_core::expand_url_with_details(&client, url).await
}
