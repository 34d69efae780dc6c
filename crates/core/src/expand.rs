//! URL expansion
//!
//! Validates the input, hands it to a [`RedirectFollower`] once, and
//! optionally composes an [`ExpandedUrl`] from the result. No retries.

use url::Url;

use crate::error::{Error, InvalidUrlReason, Result, TransportError, TransportErrorKind};
use crate::expanded::ExpandedUrl;
use crate::traits::RedirectFollower;

/// Parse the input as an absolute URL with an authority
///
/// Never touches the network.
pub fn validate_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| Error::invalid_url(input, e))?;

    if url.cannot_be_a_base() || !url.has_host() {
        return Err(Error::invalid_url(input, InvalidUrlReason::MissingHost));
    }

    Ok(url)
}

/// Expand a URL by following its redirects, returning the final destination
pub async fn expand_url<C>(client: &C, input: &str) -> Result<String>
where
    C: RedirectFollower + ?Sized,
{
    let url = validate_url(input)?;
    let resolved = follow(client, input, &url).await?;
    Ok(resolved.into())
}

/// Expand a URL and break the result into its components
///
/// The query and fragment come from `input`; scheme, host, port and path
/// come from the final hop.
pub async fn expand_url_with_details<C>(client: &C, input: &str) -> Result<ExpandedUrl>
where
    C: RedirectFollower + ?Sized,
{
    let original = validate_url(input)?;
    let resolved = expand_url(client, input).await?;

    let resolved = Url::parse(&resolved).map_err(|e| {
        Error::resolution_failed(
            input,
            TransportError::new(
                TransportErrorKind::Other,
                format!("resolved URL '{resolved}' is not valid: {e}"),
            ),
        )
    })?;

    Ok(ExpandedUrl::compose(&resolved, &original))
}

async fn follow<C>(client: &C, input: &str, url: &Url) -> Result<Url>
where
    C: RedirectFollower + ?Sized,
{
    tracing::debug!(url = %url, "Resolving URL");

    let resolution = client.follow(url).await.map_err(|e| {
        tracing::debug!(url = %url, kind = ?e.kind(), error = %e, "Resolution failed");
        Error::resolution_failed(input, e)
    })?;

    if resolution.final_url != *url {
        tracing::info!(
            from = %url,
            to = %resolution.final_url,
            status = resolution.status,
            "Redirect resolved"
        );
    } else {
        tracing::debug!(url = %url, status = resolution.status, "No redirect");
    }

    Ok(resolution.final_url)
}
