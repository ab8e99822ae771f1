//! Tracing subscriber for the `prakriya` binary.
//!
//! `prakriya-core` and `prakriya-adapters` only emit events; this module
//! decides which of them reach stderr. Each `-v` unlocks one rung of
//! [`Verbosity`], and `RUST_LOG` replaces the ladder entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal.
const TARGETS: [&str; 3] = ["prakriya", "prakriya_core", "prakriya_adapters"];

/// The verbosity ladder, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Progress,
    Files,
    Calls,
}

impl Verbosity {
    /// Rungs reachable with `-v` flags, in flag order.
    const LADDER: [Verbosity; 4] = [
        Verbosity::Warnings,
        Verbosity::Progress,
        Verbosity::Files,
        Verbosity::Calls,
    ];

    pub fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        let rung = usize::from(args.verbose).min(Self::LADDER.len() - 1);
        Self::LADDER[rung]
    }

    /// `EnvFilter` level for this rung.
    pub const fn level(&self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Warnings => "warn",
            Self::Progress => "info",
            Self::Files => "debug",
            Self::Calls => "trace",
        }
    }

    const fn flag(&self) -> &'static str {
        match self {
            Self::Quiet => "-q",
            Self::Warnings => "(none)",
            Self::Progress => "-v",
            Self::Files => "-vv",
            Self::Calls => "-vvv",
        }
    }

    /// What this rung adds on top of the one below.
    const fn adds(&self) -> &'static str {
        match self {
            Self::Quiet => "Errors only",
            Self::Warnings => "Missing sutra table or dhatupatha, malformed sutra lines, rejected input",
            Self::Progress => "Data loaded, each document built, each dictionary produced or skipped",
            Self::Files => "Each file written, lexicon and snapshot sizes",
            Self::Calls => "Every engine call and lexicon lookup with its result count",
        }
    }
}

/// `--verbose` long help, one line per rung.
pub fn verbosity_help() -> String {
    let mut help = String::from("What prakriya logs to stderr:");
    for rung in Verbosity::LADDER {
        help.push_str(&format!("\n    {:<7} {}", rung.flag(), rung.adds()));
    }
    help.push_str("\nRUST_LOG, when set, replaces these levels.");
    help
}

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(Verbosity::from_args(args))));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// One `target=level` directive per crate.
fn filter_directives(verbosity: Verbosity) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={}", verbosity.level()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn each_flag_climbs_one_rung() {
        let levels: Vec<_> = (0..5)
            .map(|v| Verbosity::from_args(&args_with(v, false)).level())
            .collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
        assert_eq!(Verbosity::from_args(&args_with(u8::MAX, false)), Verbosity::Calls);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(Verbosity::from_args(&args_with(3, true)), Verbosity::Quiet);
        assert_eq!(Verbosity::Quiet.level(), "error");
    }

    #[test]
    fn every_crate_gets_the_same_level() {
        assert_eq!(
            filter_directives(Verbosity::Files),
            "prakriya=debug,prakriya_core=debug,prakriya_adapters=debug"
        );
    }

    #[test]
    fn help_names_every_rung() {
        let help = verbosity_help();
        assert_eq!(help.lines().count(), Verbosity::LADDER.len() + 2);
        assert!(help.contains("-vvv    Every engine call"));
        assert!(help.contains("(none)  Missing sutra table"));
    }
}
