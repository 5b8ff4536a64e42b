//! CLI argument parsing using clap.
//!
//! The tool has always accepted single-dash words (`-ns`, `-win`, `-docs`)
//! in any order. Those tokens are rewritten to their long forms before clap
//! sees them, so both spellings parse the same way. Any other dash token that
//! is not a known flag is taken as a path, and repeating a flag is allowed.

use clap::Parser;
use clap_complete::Shell;
use savextract_core::Format;
use std::ffi::OsString;
use std::path::PathBuf;

/// One-line usage shown when no format selector is given.
pub const USAGE: &str =
    "Usage: savextract [-ns|-win] [source file path] [optional: destination path] [-docs]";

#[derive(Parser)]
#[command(name = "savextract")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Unpack a console save through offzip (also `-ns`)
    #[arg(long, overrides_with = "win")]
    pub ns: bool,

    /// PC save format, not implemented yet (also `-win`)
    #[arg(long, overrides_with = "ns")]
    pub win: bool,

    /// Save archive to unpack
    #[arg(value_name = "SOURCE", allow_hyphen_values = true)]
    pub source: Option<PathBuf>,

    /// Destination directory (default: current directory)
    #[arg(value_name = "DESTINATION", allow_hyphen_values = true)]
    pub destination: Option<PathBuf>,

    /// Extra positional arguments, ignored
    #[arg(value_name = "EXTRA", hide = true)]
    pub extra: Vec<PathBuf>,

    /// Write into <Documents>/The Witcher 3/gamesaves, overriding DESTINATION
    /// (also `-docs`)
    #[arg(long)]
    pub docs: bool,

    /// Path to the offzip executable
    #[arg(long, env = "SAVEXTRACT_TOOL", value_name = "PATH")]
    pub tool: Option<PathBuf>,

    /// Keep the archive's file name instead of flattening it
    #[arg(long)]
    pub keep_name: bool,

    /// Do not copy the companion screenshot
    #[arg(long)]
    pub no_image: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Selected save format, if any.
    pub const fn format(&self) -> Option<Format> {
        if self.ns {
            Some(Format::Ns)
        } else if self.win {
            Some(Format::Win)
        } else {
            None
        }
    }
}

fn long_form(token: &str) -> Option<&'static str> {
    match Format::from_token(token) {
        Some(Format::Ns) => Some("--ns"),
        Some(Format::Win) => Some("--win"),
        None if token == "-docs" => Some("--docs"),
        None => None,
    }
}

/// Rewrites legacy single-dash words to the long flags clap understands.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let replacement = arg.to_str().and_then(long_form);
            replacement.map_or(arg, OsString::from)
        })
        .collect()
}
