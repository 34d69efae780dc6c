//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.

use clap::{Parser, Subcommand};
use unshort_core::{Config, ConfigManager, HttpSettings};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod expand;

/// unshort - resolve shortened URLs
///
/// Follows HTTP redirects with header-only requests and prints where a URL
/// finally lands.
#[derive(Parser, Debug)]
#[command(name = "unshort")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable the spinner
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    /// Give up after this many seconds (0 disables the limit)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum number of redirects to follow
    #[arg(long, global = true, value_name = "N")]
    pub max_redirects: Option<usize>,

    /// Proxy for all requests
    #[arg(long, global = true, env = "UNSHORT_PROXY", value_name = "URL")]
    pub proxy: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a URL to its final destination
    Expand(expand::ExpandArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Output settings from flags, falling back to the config file defaults
    fn output_config(&self, config: &Config) -> OutputConfig {
        OutputConfig {
            json: self.json || config.defaults.output == "json",
            no_color: self.no_color || config.defaults.color == "never",
            no_progress: self.no_progress,
            quiet: self.quiet,
        }
    }

    /// HTTP settings from the config file with flag overrides applied
    fn http_settings(&self, config: &Config) -> HttpSettings {
        let mut settings = config.http.clone();
        if let Some(secs) = self.timeout {
            settings.timeout_ms = secs.saturating_mul(1000);
        }
        if let Some(max) = self.max_redirects {
            settings.max_redirects = max;
        }
        if let Some(proxy) = &self.proxy {
            settings.proxy = Some(proxy.clone());
        }
        settings
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    if let Commands::Completions(args) = &cli.command {
        return completions::execute(args);
    }

    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(e) => {
            let formatter = Formatter::new(OutputConfig {
                json: cli.json,
                no_color: cli.no_color,
                ..Default::default()
            });
            formatter.error(&format!("Failed to load configuration: {e}"));
            return ExitCode::UsageError;
        }
    };

    let output_config = cli.output_config(&config);
    let settings = cli.http_settings(&config);

    match cli.command {
        Commands::Expand(args) => expand::execute(args, settings, output_config).await,
        Commands::Completions(args) => completions::execute(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expand() {
        let cli = Cli::try_parse_from(["unshort", "expand", "https://bit.ly/x"]).unwrap();
        match cli.command {
            Commands::Expand(args) => {
                assert_eq!(args.url, "https://bit.ly/x");
                assert!(!args.details);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "unshort",
            "expand",
            "--details",
            "https://bit.ly/x",
            "--json",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn test_expand_requires_url() {
        assert!(Cli::try_parse_from(["unshort", "expand"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "unshort",
            "--timeout",
            "2",
            "--max-redirects",
            "4",
            "expand",
            "https://bit.ly/x",
        ])
        .unwrap();
        let settings = cli.http_settings(&Config::default());
        assert_eq!(settings.timeout_ms, 2000);
        assert_eq!(settings.max_redirects, 4);
    }

    #[test]
    fn test_config_defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["unshort", "expand", "https://bit.ly/x"]).unwrap();
        let mut config = Config::default();
        config.defaults.output = "json".to_string();
        config.defaults.color = "never".to_string();
        config.http.max_redirects = 7;

        let output = cli.output_config(&config);
        assert!(output.json);
        assert!(output.no_color);
        assert_eq!(cli.http_settings(&config).max_redirects, 7);
    }
}
