//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Startcheck - First-startup diagnostic checklist.
#[derive(Debug, Parser)]
#[command(name = "startcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the checklist data file (default: checklist_data.json)
    #[arg(short, long, global = true, env = "STARTCHECK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Path to config file (overrides default .startcheck/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Walk through the checklist (default if no command specified)
    Fill(FillArgs),

    /// Set a single field
    Set(SetArgs),

    /// Show the checklist with current values
    Show(ShowArgs),

    /// Export the CSV report
    Report(ReportArgs),

    /// Export the saved checklist data as JSON
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `fill` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FillArgs {
    /// Only fill in this section (by number)
    #[arg(short, long, value_name = "N")]
    pub section: Option<usize>,

    /// Do not save when done
    #[arg(long)]
    pub no_save: bool,

    /// Use current values (and STARTCHECK_PROMPT_* variables), no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Field key (e.g. oil_level, technician, idle_param_0)
    pub key: String,

    /// New value; checkboxes accept true/false, yes/no, 1/0
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Only show this section (by number)
    #[arg(short, long, value_name = "N")]
    pub section: Option<usize>,

    /// Print the stored data as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Write to a file instead of stdout (bare flag: configured report file)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_without_command() {
        let cli = Cli::try_parse_from(["startcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "startcheck",
            "--data-file",
            "/tmp/boat.json",
            "--quiet",
            "show",
        ])
        .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/boat.json")));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Show(_))));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["startcheck", "show", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn fill_parses_section() {
        let cli = Cli::try_parse_from(["startcheck", "fill", "--section", "3", "--no-save"]).unwrap();
        match cli.command {
            Some(Commands::Fill(args)) => {
                assert_eq!(args.section, Some(3));
                assert!(args.no_save);
            }
            other => panic!("expected fill, got {:?}", other),
        }
    }

    #[test]
    fn set_parses_key_and_value() {
        let cli = Cli::try_parse_from(["startcheck", "set", "technician", "Sam Lee"]).unwrap();
        match cli.command {
            Some(Commands::Set(args)) => {
                assert_eq!(args.key, "technician");
                assert_eq!(args.value, "Sam Lee");
            }
            other => panic!("expected set, got {:?}", other),
        }
    }

    #[test]
    fn set_accepts_leading_hyphen_value() {
        let cli = Cli::try_parse_from(["startcheck", "set", "param_3", "-5"]).unwrap();
        match cli.command {
            Some(Commands::Set(args)) => assert_eq!(args.value, "-5"),
            other => panic!("expected set, got {:?}", other),
        }
    }

    #[test]
    fn report_output_forms() {
        let cli = Cli::try_parse_from(["startcheck", "report"]).unwrap();
        match cli.command {
            Some(Commands::Report(args)) => assert_eq!(args.output, None),
            other => panic!("expected report, got {:?}", other),
        }

        let cli = Cli::try_parse_from(["startcheck", "report", "--output"]).unwrap();
        match cli.command {
            Some(Commands::Report(args)) => assert_eq!(args.output, Some(None)),
            other => panic!("expected report, got {:?}", other),
        }

        let cli = Cli::try_parse_from(["startcheck", "report", "--output", "out.csv"]).unwrap();
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.output, Some(Some(PathBuf::from("out.csv"))))
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["startcheck", "completions"]).is_err());
        let cli = Cli::try_parse_from(["startcheck", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
