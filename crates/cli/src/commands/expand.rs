//! expand command - Resolve a URL to its final destination
//!
//! Prints the resolved URL, or with `--details` the parsed components of it.

use std::future::Future;
use std::time::Duration;

use clap::Args;
use comfy_table::Table;
use serde::Serialize;
use unshort_core::{
    Error, ExpandedUrl, HttpSettings, Result, TransportError, TransportErrorKind, expand_url,
    expand_url_with_details, validate_url,
};
use unshort_http::ReqwestFollower;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, ProgressBar};

/// Resolve a URL to its final destination
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// URL to expand, including the scheme (e.g. https://bit.ly/example)
    pub url: String,

    /// Show protocol, host, path, query parameters and hash of the result
    #[arg(short, long)]
    pub details: bool,
}

#[derive(Debug, Serialize)]
struct ExpandOutput<'a> {
    url: &'a str,
    expanded: &'a str,
}

#[derive(Debug, Serialize)]
struct DetailsOutput<'a> {
    url: &'a str,
    #[serde(flatten)]
    details: &'a ExpandedUrl,
}

/// Execute the expand command
pub async fn execute(
    args: ExpandArgs,
    settings: HttpSettings,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    // Reject bad input before building a client
    if let Err(e) = validate_url(&args.url) {
        formatter.error(&e.to_string());
        return ExitCode::from_error(&e);
    }

    let client = match ReqwestFollower::new(&settings) {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create HTTP client: {e}"));
            return ExitCode::GeneralError;
        }
    };

    let timeout = timeout_of(&settings);
    let spinner = ProgressBar::spinner(&output_config, &format!("Resolving {}", args.url));

    if args.details {
        let expansion = expand_url_with_details(&client, &args.url);
        let outcome = bounded(&args.url, timeout, expansion).await;
        spinner.finish_and_clear();
        report(&formatter, outcome, |details| {
            print_details(&formatter, &args.url, details)
        })
    } else {
        let outcome = bounded(&args.url, timeout, expand_url(&client, &args.url)).await;
        spinner.finish_and_clear();
        report(&formatter, outcome, |expanded| {
            if formatter.is_json() {
                formatter.json(&ExpandOutput {
                    url: &args.url,
                    expanded: &expanded,
                });
            } else {
                formatter.println(&expanded);
            }
        })
    }
}

fn timeout_of(settings: &HttpSettings) -> Option<Duration> {
    match settings.timeout_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    }
}

/// Run one expansion under the caller-side deadline, or until Ctrl+C
///
/// Returns `None` when interrupted.
async fn bounded<T>(
    input: &str,
    timeout: Option<Duration>,
    expansion: impl Future<Output = Result<T>>,
) -> Option<Result<T>> {
    let deadline = async move {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, expansion)
                .await
                .unwrap_or_else(|_| Err(timed_out(input, limit))),
            None => expansion.await,
        }
    };

    tokio::select! {
        result = deadline => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    }
}

fn timed_out(input: &str, limit: Duration) -> Error {
    Error::resolution_failed(
        input,
        TransportError::new(
            TransportErrorKind::Timeout,
            format!("operation timed out after {}ms", limit.as_millis()),
        ),
    )
}

fn report<T>(
    formatter: &Formatter,
    outcome: Option<Result<T>>,
    print: impl FnOnce(T),
) -> ExitCode {
    match outcome {
        Some(Ok(value)) => {
            print(value);
            ExitCode::Success
        }
        Some(Err(e)) => {
            tracing::debug!(error = ?e, "Expansion failed");
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
        None => {
            formatter.error("Interrupted");
            ExitCode::Interrupted
        }
    }
}

fn print_details(formatter: &Formatter, input: &str, details: ExpandedUrl) {
    if formatter.is_json() {
        formatter.json(&DetailsOutput {
            url: input,
            details: &details,
        });
    } else {
        let mut table = formatter.table();
        fill_details_table(&mut table, &details);
        formatter.print_table(&table);
    }
}

fn fill_details_table(table: &mut Table, details: &ExpandedUrl) {
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Full URL", details.full_url.as_str()]);
    table.add_row(vec!["Protocol", details.protocol.as_str()]);
    table.add_row(vec!["Hostname", details.hostname.as_str()]);
    if !details.port.is_empty() {
        table.add_row(vec!["Port", details.port.as_str()]);
    }
    table.add_row(vec!["Pathname", details.pathname.as_str()]);
    for (name, value) in &details.query_params {
        table.add_row(vec![format!("Query: {name}"), value.clone()]);
    }
    if !details.hash.is_empty() {
        table.add_row(vec!["Hash", details.hash.as_str()]);
    }
}
