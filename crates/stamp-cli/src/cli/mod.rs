//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `stamp` renders every template.
#[derive(Debug, Parser)]
#[command(
    name    = "stamp",
    bin_name = "stamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Stamp one value into every bundled template",
    long_about = "Stamp renders each bundled '.tmpl' template with the value \
                  given by -s and writes one file per template into the \
                  target directory.",
    after_help = "EXAMPLES:\n\
        \x20 stamp -s \"Acme\"\n\
        \x20 stamp -s \"Acme\" -dir assets/icons -prefix acme_\n\
        \x20 stamp -s \"Acme\" --dry-run\n\
        \x20 stamp list\n\
        \x20 stamp completions bash > /usr/share/bash-completion/completions/stamp"
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Flags of the default (generate) action.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Optional subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse `args` after rewriting Go-style flags.
    ///
    /// Global flags work with every subcommand; generate flags only
    /// without one.
    pub fn parse_normalized<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let cli = Self::try_parse_from(normalize_args(args))?;

        if let (Some(command), Some(flag)) = (&cli.command, cli.generate.first_given()) {
            let message = format!(
                "the argument '{flag}' cannot be used with the '{}' subcommand",
                command.name()
            );
            return Err(Self::command().error(ErrorKind::ArgumentConflict, message));
        }

        Ok(cli)
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the templates and the file each one produces.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 stamp list\n\
            \x20 stamp list --prefix acme_\n\
            \x20 stamp list --templates ./my-templates"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stamp completions bash > ~/.local/share/bash-completion/completions/stamp\n\
            \x20 stamp completions zsh  > ~/.zfunc/_stamp\n\
            \x20 stamp completions fish > ~/.config/fish/completions/stamp.fish"
    )]
    Completions(CompletionsArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Completions(_) => "completions",
        }
    }
}

// ── generate ─────────────────────────────────────────────────────────────────

/// Arguments for the default action.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Value injected into every template. Required.
    #[arg(
        short = 's',
        long = "string",
        alias = "s",
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "String to inject into the templates (required)"
    )]
    pub string: Option<String>,

    /// Output directory, created if missing.
    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Target directory for generated files [default: .]"
    )]
    pub dir: Option<PathBuf>,

    /// Prefix for every output file name.
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        allow_hyphen_values = true,
        help = "Prefix for the output filenames"
    )]
    pub prefix: Option<String>,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// The first generate flag present on the command line, if any.
    fn first_given(&self) -> Option<&'static str> {
        if self.string.is_some() {
            Some("--string")
        } else if self.dir.is_some() {
            Some("--dir")
        } else if self.prefix.is_some() {
            Some("--prefix")
        } else if self.dry_run {
            Some("--dry-run")
        } else {
            None
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stamp list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show output names with this prefix applied.
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        allow_hyphen_values = true,
        help = "Prefix to apply to the listed output names"
    )]
    pub prefix: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stamp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── Go-style flags ────────────────────────────────────────────────────────────

/// Long flags that are also accepted with a single dash (`-dir out`).
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["dir", "prefix", "templates"];

/// Rewrite `-dir`, `-prefix` and `-templates` (and their `=value` forms) to
/// the double-dash spelling clap expects. Arguments after `--` are untouched,
/// as is the value following `-s`, `--s` or `--string`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_expected = false;

    for arg in args {
        if passthrough || value_expected {
            value_expected = false;
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                passthrough = true;
                return None;
            }
            if matches!(s, "-s" | "--s" | "--string") {
                value_expected = true;
                return None;
            }
            let rest = s.strip_prefix('-').filter(|r| !r.starts_with('-'))?;
            let flag = rest.split_once('=').map_or(rest, |(flag, _)| flag);
            SINGLE_DASH_LONG_FLAGS
                .contains(&flag)
                .then(|| OsString::from(format!("-{s}")))
        });

        out.push(rewritten.unwrap_or(arg));
    }

    out
}
