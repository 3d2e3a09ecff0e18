//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every input has an environment fallback so CI jobs can configure the
//!   tool without flags (`WORKSPACE`, `MAIN_YML_PATH`, ...)
//! - Flags win over environment variables

use std::path::PathBuf;

use clap::Parser;

use crate::application::{PrepareOptions, DEFAULT_CONFIG_NAME};
use crate::logging::{LogConfig, LogFormat};

/// Scanprep - prepare a workspace project for remote static analysis
#[derive(Parser, Debug)]
#[command(name = "scanprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root (absolute path)
    #[arg(long, env = "WORKSPACE", value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Main YAML config, overridden by the project config
    #[arg(long = "main-config", env = "MAIN_YML_PATH", value_name = "FILE")]
    pub main_config: Option<PathBuf>,

    /// File name of the project config searched for under the workspace
    #[arg(
        long,
        env = "SCANPREP_CONFIG_NAME",
        value_name = "NAME",
        default_value = DEFAULT_CONFIG_NAME
    )]
    pub config_name: String,

    /// Extra attempts for each remote command
    #[arg(long, env = "SCANPREP_RETRIES", value_name = "N", default_value_t = 0)]
    pub retries: u32,

    /// Report what would be pruned and the remote commands, without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI (NDJSON events on stdout)
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Diagnostic log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            workspace: self.workspace.clone(),
            main_config: self.main_config.clone(),
            config_name: self.config_name.clone(),
            retries: self.retries,
            dry_run: self.dry_run,
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.log_format, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from([
            "scanprep",
            "--workspace",
            "/ws",
            "--main-config",
            "/etc/scan/main.yml",
            "--config-name",
            "scan.yml",
            "--retries",
            "2",
            "--dry-run",
        ])
        .unwrap();

        let options = cli.prepare_options();
        assert_eq!(options.workspace, Some(PathBuf::from("/ws")));
        assert_eq!(options.main_config, Some(PathBuf::from("/etc/scan/main.yml")));
        assert_eq!(options.config_name, "scan.yml");
        assert_eq!(options.retries, 2);
        assert!(options.dry_run);
    }

    #[test]
    fn test_cli_parse_json_and_verbosity() {
        let cli = Cli::try_parse_from(["scanprep", "--json", "-vv", "--log-format", "jsonl"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Jsonl);
        assert_eq!(cli.log_config().level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_cli_rejects_negative_retries() {
        assert!(Cli::try_parse_from(["scanprep", "--retries", "-1"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["scanprep", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
