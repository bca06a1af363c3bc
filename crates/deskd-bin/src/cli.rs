// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI argument parsing and command definitions.

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// deskd - support-ticketing backend
#[derive(Parser, Debug)]
#[command(
    name = "deskd",
    author = "Sylvex <contact@sylvex.io>",
    version = deskd_api::VERSION,
    about = "Support-ticketing backend with token-based authorization",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        env = "DESKD_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json, compact)
    #[arg(long, default_value = "text", env = "DESKD_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Enable quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands for the deskd CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the API server
    ///
    /// This is the default command when no subcommand is specified.
    Serve(ServeArgs),

    /// Show detailed version information
    Version,
}

/// Arguments for the `serve` command.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "DESKD_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "DESKD_PORT")]
    pub port: u16,

    /// Token signing secret
    #[arg(long, env = "DESKD_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Allowed CORS origin (repeatable; empty allows any origin)
    #[arg(long = "cors-origin", env = "DESKD_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", env = "DESKD_REQUEST_TIMEOUT")]
    pub request_timeout: u64,
}

// =============================================================================
// Enums
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
    /// Compact format for minimal output
    Compact,
}

// =============================================================================
// Helper Methods
// =============================================================================

impl Cli {
    /// Parse CLI arguments from the command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective command, defaulting to `Serve` if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Serve(ServeArgs::default_from_env()))
    }

    /// Get the effective log level based on flags.
    pub fn effective_log_level(&self) -> &str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

impl ServeArgs {
    /// Defaults for the implicit `serve` command, still honoring the
    /// environment.
    fn default_from_env() -> Self {
        Self {
            host: std::env::var("DESKD_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("DESKD_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(8080),
            jwt_secret: std::env::var("DESKD_JWT_SECRET").ok(),
            cors_origins: std::env::var("DESKD_CORS_ORIGINS")
                .map(|raw| raw.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
            request_timeout: std::env::var("DESKD_REQUEST_TIMEOUT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(30),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let cli = Cli::parse_from(["deskd"]);
        assert!(cli.command.is_none());
        matches!(cli.effective_command(), Commands::Serve(_));
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::parse_from(["deskd", "serve", "-p", "9090"]);
        if let Some(Commands::Serve(args)) = cli.command {
            assert_eq!(args.port, 9090);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_jwt_secret_flag() {
        let cli = Cli::parse_from(["deskd", "serve", "--jwt-secret", "s3cret"]);
        if let Some(Commands::Serve(args)) = cli.command {
            assert_eq!(args.jwt_secret.as_deref(), Some("s3cret"));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cors_origins() {
        let cli = Cli::parse_from([
            "deskd",
            "serve",
            "--cors-origin",
            "https://a.example",
            "--cors-origin",
            "https://b.example",
        ]);
        if let Some(Commands::Serve(args)) = cli.command {
            assert_eq!(args.cors_origins.len(), 2);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_quiet_mode() {
        let cli = Cli::parse_from(["deskd", "-q"]);
        assert!(cli.quiet);
        assert_eq!(cli.effective_log_level(), "warn");
    }

    #[test]
    fn test_verbose_mode() {
        let cli = Cli::parse_from(["deskd", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.effective_log_level(), "debug");
    }
}
