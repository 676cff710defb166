//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use sokkaverse_core::{AdvancePolicy, ConfigOverrides};

/// Sokkaverse - a boot terminal and a galaxy of portfolio planets
#[derive(Parser, Debug, Default)]
#[command(name = "sokkaverse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, env = "SOKKAVERSE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Route prefix the app is mounted under
    #[arg(long, env = "SOKKAVERSE_BASE_PATH", value_name = "PATH")]
    pub base_path: Option<String>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long, env = "SOKKAVERSE_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Open a page directly, e.g. `/design`
    #[arg(long, value_name = "PATH")]
    pub open: Option<String>,

    /// Run through the boot sequence without waiting
    #[arg(long)]
    pub skip_boot: bool,

    /// How typing stages advance (timed, on_typing_complete)
    #[arg(long, value_name = "POLICY")]
    pub advance_policy: Option<AdvancePolicy>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,
}

impl Cli {
    /// Values that override file and environment configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_path: self.base_path.clone(),
            advance_policy: self.advance_policy,
            fps: self.fps,
            skip_boot: self.skip_boot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::try_parse_from([
            "sokkaverse",
            "--base-path",
            "/portfolio",
            "--advance-policy",
            "on_typing_complete",
            "--skip-boot",
            "--open",
            "/design",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.base_path.as_deref(), Some("/portfolio"));
        assert_eq!(overrides.advance_policy, Some(AdvancePolicy::OnTypingComplete));
        assert!(overrides.skip_boot);
        assert_eq!(cli.open.as_deref(), Some("/design"));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["sokkaverse", "--advance-policy", "never"]).is_err());
    }
}
