//! CLI argument definitions.
//!
//! The verifier takes no positional arguments; every flag is optional and
//! most fall back to an environment variable.

use clap::Parser;
use std::path::PathBuf;

use crate::config::MAX_PROBE_TIMEOUT_SECS;

/// prc-verify - Check that PRC's interpreter, packages and scanners are ready.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "prc-verify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (overrides default .prc/verify.yml)
    #[arg(short, long, env = "PRC_VERIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter to check instead of python3/python
    #[arg(long, env = "PRC_PYTHON")]
    pub python: Option<String>,

    /// Seconds to wait for each probed command (1-3600)
    #[arg(
        long,
        env = "PRC_PROBE_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..=MAX_PROBE_TIMEOUT_SECS)
    )]
    pub timeout: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_is_valid() {
        let cli = Cli::try_parse_from(["prc-verify"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "prc-verify",
            "--python",
            "python3.12",
            "--timeout",
            "3",
            "--json",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.python.as_deref(), Some("python3.12"));
        assert_eq!(cli.timeout, Some(3));
        assert!(cli.json);
        assert!(cli.no_color);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["prc-verify", "--timeout", "0"]).is_err());
    }

    #[test]
    fn oversized_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["prc-verify", "--timeout", "3601"]).is_err());
        assert!(Cli::try_parse_from(["prc-verify", "--timeout", "18446744073709551615"]).is_err());
        let cli = Cli::try_parse_from(["prc-verify", "--timeout", "3600"]).unwrap();
        assert_eq!(cli.timeout, Some(3600));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["prc-verify", "scan"]).is_err());
    }
}
