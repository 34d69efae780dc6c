//! Component parsing and result composition
//!
//! An [`ExpandedUrl`] takes scheme, host, port and path from the final hop
//! of the redirect chain, and query and fragment from the URL the caller
//! passed in.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

/// A resolved URL broken into its parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedUrl {
    /// Resolved base with the original query and fragment reattached
    pub full_url: String,

    /// Scheme including the trailing colon (e.g. `https:`)
    pub protocol: String,

    pub hostname: String,

    pub pathname: String,

    /// Original query parameters; the last value wins on duplicate names
    pub query_params: BTreeMap<String, String>,

    /// Original fragment without the leading `#`, empty if absent
    pub hash: String,

    /// Explicit port, empty when the URL uses the scheme default
    pub port: String,
}

impl ExpandedUrl {
    /// Compose the record from the resolved final URL and the caller's input URL
    pub fn compose(resolved: &Url, original: &Url) -> Self {
        let full = reconstruct(&resolved_base(resolved), original);

        Self {
            full_url: full.to_string(),
            protocol: format!("{}:", resolved.scheme()),
            hostname: resolved.host_str().unwrap_or_default().to_string(),
            pathname: resolved.path().to_string(),
            query_params: query_params(original),
            hash: hash(original),
            port: resolved.port().map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}

impl fmt::Display for ExpandedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_url)
    }
}

/// Query parameters of a URL as a flat mapping
pub fn query_params(url: &Url) -> BTreeMap<String, String> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Fragment of a URL without the leading marker
pub fn hash(url: &Url) -> String {
    url.fragment().unwrap_or_default().to_string()
}

/// The final URL with any query or fragment picked up along the redirect chain removed
pub fn resolved_base(resolved: &Url) -> Url {
    let mut base = resolved.clone();
    base.set_query(None);
    base.set_fragment(None);
    base
}

/// Reattach the original query and fragment to a resolved base
///
/// Query pairs keep their order but are re-encoded as
/// `application/x-www-form-urlencoded`, so the output is not byte-exact.
pub fn reconstruct(base: &Url, original: &Url) -> Url {
    let mut full = base.clone();

    if original.query_pairs().next().is_some() {
        full.query_pairs_mut().extend_pairs(original.query_pairs());
    }

    match original.fragment() {
        Some(fragment) if !fragment.is_empty() => full.set_fragment(Some(fragment)),
        _ => full.set_fragment(None),
    }

    full
}
