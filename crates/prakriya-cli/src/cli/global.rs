//! Flags shared by every `prakriya` subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Rungs of [`crate::logging::Verbosity`] to climb.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log progress (-v), files (-vv), engine calls (-vvv)",
        long_help = crate::logging::verbosity_help()
    )]
    pub verbose: u8,

    /// Errors only; no progress bars or summaries.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Plain stderr and stdout. `NO_COLOR` sets it too.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file with `[data]` and `[output]` tables.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Config file (data paths, engine, output dirs)"
    )]
    pub config: Option<PathBuf>,

    /// Terminal rendering.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How written paths and dump progress are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured paths and a progress bar per dictionary.
    Human,
    /// One line per written file, nothing else.
    Plain,
}
