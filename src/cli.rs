//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AssessCraft - curriculum assessment design wizard
#[derive(Parser)]
#[command(
    name = "ac",
    about = "Design curriculum assessments with generated suggestions and plans",
    version,
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; no subcommand launches the wizard TUI
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Suggest assessment types for the given selections (batch mode)
    Suggest {
        /// Field of study
        #[arg(short, long)]
        field: String,

        /// Student level
        #[arg(long)]
        level: String,

        /// Course learning outcome (repeat up to three times)
        #[arg(short, long = "outcome", value_name = "OUTCOME")]
        outcomes: Vec<String>,
    },

    /// Generate a detailed plan for a chosen assessment type (batch mode)
    Plan {
        /// Field of study
        #[arg(short, long)]
        field: String,

        /// Student level
        #[arg(long)]
        level: String,

        /// Course learning outcome (repeat up to three times)
        #[arg(short, long = "outcome", value_name = "OUTCOME")]
        outcomes: Vec<String>,

        /// The assessment type to plan
        #[arg(value_name = "ASSESSMENT")]
        assessment_type: String,
    },

    /// List the configured student levels
    Levels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        // Catches duplicate flags across globals and subcommands
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["ac"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_suggest() {
        let cli = Cli::parse_from([
            "ac",
            "suggest",
            "--field",
            "Mechanical Engineering",
            "--level",
            "Undergraduate",
            "--outcome",
            "Analyze stress",
            "--outcome",
            "Design a system",
        ]);
        if let Some(Command::Suggest { field, level, outcomes }) = cli.command {
            assert_eq!(field, "Mechanical Engineering");
            assert_eq!(level, "Undergraduate");
            assert_eq!(outcomes, vec!["Analyze stress", "Design a system"]);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::parse_from([
            "ac",
            "plan",
            "--field",
            "Physics",
            "--level",
            "Doctorate",
            "--outcome",
            "Derive equations",
            "Portfolio",
        ]);
        if let Some(Command::Plan { assessment_type, .. }) = cli.command {
            assert_eq!(assessment_type, "Portfolio");
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_parse_levels() {
        let cli = Cli::parse_from(["ac", "levels"]);
        assert!(matches!(cli.command, Some(Command::Levels)));
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["ac", "-c", "/path/to/config.yml", "levels"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }
}
