pub mod commands;
pub mod logging;
pub mod output;

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::config::settings::{CliOptions, OutputFormat};

/// Report variables that the second env file has and the first is missing.
#[derive(Parser, Debug)]
#[command(
    name = "envdiff",
    version,
    about,
    long_about = None,
    after_help = "Example: envdiff envfile1 envfile2"
)]
pub struct Cli {
    /// Reference env file
    pub file1: String,

    /// Env file to compare against the reference
    pub file2: String,

    /// Exit with code 1 if any difference is found
    #[arg(long)]
    pub check: bool,

    /// Also report keys whose values differ
    #[arg(long)]
    pub cmpval: bool,

    /// Only compare keys matching this wildcard. Repeatable, e.g. --filter="KEY_*"
    #[arg(long, value_name = "WILDCARD", allow_hyphen_values = true)]
    pub filter: Vec<String>,

    /// Skip keys matching this wildcard. Repeatable, e.g. --ignore="FOO_*"
    #[arg(long, value_name = "WILDCARD", allow_hyphen_values = true)]
    pub ignore: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, env = "ENVDIFF_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn options(&self) -> CliOptions {
        CliOptions {
            check: self.check,
            cmpval: self.cmpval,
            filter: self.filter.clone(),
            ignore: self.ignore.clone(),
            format: self.format,
            quiet: self.quiet,
        }
    }
}

/// Rewrite single-dash long flags (`-check`, `-filter=X`) to their
/// double-dash form so the classic flag syntax keeps working.
///
/// Only names of known long options are rewritten; short flags, unknown
/// arguments, the value following an option written without `=`, and
/// anything after `--` pass through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let mut longs: Vec<&str> = Vec::new();
    let mut takes_value: Vec<&str> = Vec::new();
    for arg in command.get_arguments() {
        if let Some(long) = arg.get_long() {
            longs.push(long);
            if arg.get_action().takes_values() {
                takes_value.push(long);
            }
        }
    }
    longs.extend(["help", "version"]);

    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;

    for (idx, arg) in args.into_iter().enumerate() {
        if idx == 0 || passthrough || std::mem::take(&mut expect_value) {
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let option = text
            .strip_prefix("--")
            .or_else(|| text.strip_prefix('-'))
            .filter(|rest| !rest.is_empty() && !rest.contains('='))
            .filter(|name| takes_value.contains(name));
        expect_value = option.is_some();

        let rewritten = text
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .filter(|rest| {
                let name = rest.split_once('=').map_or(*rest, |(n, _)| n);
                longs.contains(&name)
            })
            .map(|rest| OsString::from(format!("--{rest}")));
        out.push(rewritten.unwrap_or(arg));
    }

    out
}
