//! unshort - resolve shortened URLs
//!
//! A command-line interface that follows HTTP redirects to the final
//! destination of a URL.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use unshort_cli::commands::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // --debug wins over RUST_LOG
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
