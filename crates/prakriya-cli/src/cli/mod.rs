//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use prakriya_core::domain::{Gana, Linga, Prayoga, Sanadi, Vacana, Vibhakti};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "prakriya",
    bin_name = "prakriya",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Sanskrit derivation traces and form tables",
    long_about = "prakriya drives a Paninian derivation engine over whole \
                  grammatical paradigms and writes the step-by-step traces \
                  as Markdown documents, or the finished forms as Babylon \
                  dictionaries.",
    after_help = "EXAMPLES:\n\
        \x20 prakriya derive चोरयति --kind tinanta\n\
        \x20 prakriya tinanta BU --gana bhvadi --prayoga kartari --prayoga karmani\n\
        \x20 prakriya subanta नदी --mode nyap\n\
        \x20 prakriya dict tinanta --overwrite",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look a word up and write one trace document per derived form.
    #[command(
        visible_alias = "d",
        about = "Derive every dictionary entry for a word",
        after_help = "EXAMPLES:\n\
            \x20 prakriya derive चोरयति\n\
            \x20 prakriya derive corayati --kind tinanta --out ./traces"
    )]
    Derive(DeriveArgs),

    /// Every finite form of a root.
    #[command(
        visible_alias = "tin",
        about = "Trace every finite verb form of a root",
        after_help = "EXAMPLES:\n\
            \x20 prakriya tinanta भवति               # root looked up from a verb form\n\
            \x20 prakriya tinanta BU --gana bhvadi   # root given directly\n\
            \x20 prakriya tinanta BU --gana bhvadi --by-pada --sanadi Ric"
    )]
    Tinanta(TinantaArgs),

    /// Every declined form of a stem.
    #[command(
        visible_alias = "sup",
        about = "Trace every declined form of a nominal stem",
        after_help = "EXAMPLES:\n\
            \x20 prakriya subanta राम --linga pum\n\
            \x20 prakriya subanta नदी --mode nyap --vacana eka --vacana dvi\n\
            \x20 prakriya subanta भवति --mode kvip"
    )]
    Subanta(SubantaArgs),

    /// Every kṛt derivative of a root.
    #[command(
        visible_alias = "krt",
        about = "Trace every kṛt derivative of a root",
        after_help = "EXAMPLES:\n\
            \x20 prakriya krdanta भवति\n\
            \x20 prakriya krdanta BU --gana bhvadi --sanadi Ric"
    )]
    Krdanta(KrdantaArgs),

    /// Babylon form-table dictionaries.
    #[command(
        about = "Build Babylon dictionaries",
        after_help = "EXAMPLES:\n\
            \x20 prakriya dict tinanta\n\
            \x20 prakriya dict subanta --dest ./dicts --overwrite\n\
            \x20 prakriya dict taddhitanta"
    )]
    Dict(DictArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 prakriya completions bash > ~/.local/share/bash-completion/completions/prakriya\n\
            \x20 prakriya completions zsh  > ~/.zfunc/_prakriya\n\
            \x20 prakriya completions fish > ~/.config/fish/completions/prakriya.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the prakriya configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 prakriya config get data.lexicon\n\
            \x20 prakriya config list\n\
            \x20 prakriya config path"
    )]
    Config(ConfigCommands),
}

// ── derive ────────────────────────────────────────────────────────────────────

/// Arguments for `prakriya derive`.
#[derive(Debug, Args)]
pub struct DeriveArgs {
    /// Surface form in Devanagari or SLP1.
    #[arg(value_name = "WORD", help = "Word to look up (Devanagari or SLP1)")]
    pub word: String,

    /// Only consider entries of this kind.
    #[arg(short = 'k', long = "kind", value_enum, help = "Restrict to one entry kind")]
    pub kind: Option<EntryKindArg>,

    /// Override the output directory.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory (default: from configuration)"
    )]
    pub out: Option<PathBuf>,
}

/// Entry kinds accepted by `--kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryKindArg {
    #[value(alias = "tin")]
    Tinanta,
    #[value(alias = "sup")]
    Subanta,
}

// ── tinanta ───────────────────────────────────────────────────────────────────

/// Arguments for `prakriya tinanta`.
#[derive(Debug, Args)]
pub struct TinantaArgs {
    /// A finite verb form, or an aupadeśika root when `--gana` is given.
    #[arg(value_name = "ROOT", help = "Verb form to look up, or root with --gana")]
    pub root: String,

    /// Treat ROOT as an aupadeśika root of this gaṇa instead of looking it up.
    #[arg(
        short = 'g',
        long = "gana",
        value_name = "GANA",
        value_parser = Gana::from_str,
        help = "Gaṇa of ROOT (skips the lexicon)"
    )]
    pub gana: Option<Gana>,

    /// Voices to enumerate; kartari when omitted.
    #[arg(
        short = 'p',
        long = "prayoga",
        value_name = "PRAYOGA",
        value_parser = Prayoga::from_str,
        value_delimiter = ',',
        help = "Prayoga(s) to enumerate (default: kartari)"
    )]
    pub prayoga: Vec<Prayoga>,

    /// Split every lakāra by parasmaipada / ātmanepada.
    #[arg(long = "by-pada", help = "Add a pada level under each lakāra")]
    pub by_pada: bool,

    /// Sanādi suffixes appended to the root.
    #[arg(
        short = 's',
        long = "sanadi",
        value_name = "SANADI",
        value_parser = Sanadi::from_str,
        value_delimiter = ',',
        help = "Sanādi suffix(es) to apply"
    )]
    pub sanadi: Vec<Sanadi>,

    #[arg(short = 'o', long = "out", value_name = "DIR", help = "Output directory")]
    pub out: Option<PathBuf>,
}

// ── subanta ───────────────────────────────────────────────────────────────────

/// Arguments for `prakriya subanta`.
#[derive(Debug, Args)]
pub struct SubantaArgs {
    /// A stem, or a finite verb form in `kvip` mode.
    #[arg(value_name = "STEM", help = "Nominal stem (or verb form with --mode kvip)")]
    pub stem: String,

    /// How the stem is built.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value = "basic",
        help = "Stem construction"
    )]
    pub mode: ModeArg,

    /// Restrict to these genders.
    #[arg(
        short = 'l',
        long = "linga",
        value_parser = Linga::from_str,
        value_delimiter = ',',
        help = "Liṅga(s) to enumerate (default: all)"
    )]
    pub linga: Vec<Linga>,

    /// Restrict to these cases.
    #[arg(
        long = "vibhakti",
        value_parser = Vibhakti::from_str,
        value_delimiter = ',',
        help = "Vibhakti(s) to enumerate (default: all)"
    )]
    pub vibhakti: Vec<Vibhakti>,

    /// Restrict to these numbers.
    #[arg(
        long = "vacana",
        value_parser = Vacana::from_str,
        value_delimiter = ',',
        help = "Vacana(s) to enumerate (default: all)"
    )]
    pub vacana: Vec<Vacana>,

    #[arg(short = 'o', long = "out", value_name = "DIR", help = "Output directory")]
    pub out: Option<PathBuf>,
}

/// Stem construction accepted by `--mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// The stem as given.
    #[default]
    Basic,
    /// A stem ending in a feminine ṅī / āp suffix.
    Nyap,
    /// `kvip` derivative of each root behind a verb form.
    Kvip,
}

// ── krdanta ───────────────────────────────────────────────────────────────────

/// Arguments for `prakriya krdanta`.
#[derive(Debug, Args)]
pub struct KrdantaArgs {
    #[arg(value_name = "ROOT", help = "Verb form to look up, or root with --gana")]
    pub root: String,

    #[arg(
        short = 'g',
        long = "gana",
        value_name = "GANA",
        value_parser = Gana::from_str,
        help = "Gaṇa of ROOT (skips the lexicon)"
    )]
    pub gana: Option<Gana>,

    #[arg(
        short = 's',
        long = "sanadi",
        value_name = "SANADI",
        value_parser = Sanadi::from_str,
        value_delimiter = ',',
        help = "Sanādi suffix(es) to apply"
    )]
    pub sanadi: Vec<Sanadi>,

    #[arg(short = 'o', long = "out", value_name = "DIR", help = "Output directory")]
    pub out: Option<PathBuf>,
}

// ── dict ──────────────────────────────────────────────────────────────────────

/// Arguments for `prakriya dict`.
#[derive(Debug, Args)]
pub struct DictArgs {
    /// Which family of dictionaries to build.
    #[arg(value_enum, help = "Dictionary family")]
    pub family: DictFamily,

    /// Rebuild dictionaries whose file already exists.
    #[arg(long = "overwrite", help = "Replace existing dictionary files")]
    pub overwrite: bool,

    /// Override the destination directory.
    #[arg(long = "dest", value_name = "DIR", help = "Destination directory")]
    pub dest: Option<PathBuf>,
}

/// Dictionary families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DictFamily {
    Tinanta,
    Krdanta,
    Subanta,
    /// Taddhita derivatives of every basic stem.
    Taddhitanta,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `prakriya completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `prakriya config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.base_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_derive_command() {
        let cli = Cli::parse_from(["prakriya", "derive", "चोरयति", "--kind", "tin"]);
        match cli.command {
            Commands::Derive(args) => {
                assert_eq!(args.word, "चोरयति");
                assert_eq!(args.kind, Some(EntryKindArg::Tinanta));
            }
            other => panic!("expected Derive, got {other:?}"),
        }
    }

    #[test]
    fn categories_parse_by_slp1_or_name() {
        let cli = Cli::parse_from([
            "prakriya", "tinanta", "BU", "--gana", "BvAdiH", "-p", "kartari,Karmani", "-s", "Ric",
        ]);
        let Commands::Tinanta(args) = cli.command else {
            panic!("expected Tinanta");
        };
        assert_eq!(args.gana, Some(Gana::Bhvadi));
        assert_eq!(args.prayoga, [Prayoga::Kartari, Prayoga::Karmani]);
        assert_eq!(args.sanadi, [Sanadi::Nic]);
        assert!(!args.by_pada);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["prakriya", "tinanta", "BU", "--prayoga", "active"]);
        assert!(result.is_err());
    }

    #[test]
    fn subanta_defaults_to_basic_mode() {
        let cli = Cli::parse_from(["prakriya", "subanta", "rAma", "--vacana", "eka,dvi"]);
        let Commands::Subanta(args) = cli.command else {
            panic!("expected Subanta");
        };
        assert_eq!(args.mode, ModeArg::Basic);
        assert_eq!(args.vacana, [Vacana::Eka, Vacana::Dvi]);
        assert!(args.linga.is_empty());
    }

    #[test]
    fn dict_family_and_flags() {
        let cli = Cli::parse_from(["prakriya", "dict", "subanta", "--overwrite"]);
        let Commands::Dict(args) = cli.command else {
            panic!("expected Dict");
        };
        assert_eq!(args.family, DictFamily::Subanta);
        assert!(args.overwrite);
        assert!(args.dest.is_none());

        let cli = Cli::parse_from(["prakriya", "dict", "taddhitanta", "--dest", "d"]);
        let Commands::Dict(args) = cli.command else {
            panic!("expected Dict");
        };
        assert_eq!(args.family, DictFamily::Taddhitanta);
        assert_eq!(args.dest.as_deref(), Some(std::path::Path::new("d")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["prakriya", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
