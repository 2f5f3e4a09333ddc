use clap::ValueEnum;
use serde::Deserialize;

use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::diff_options::DiffOptions;
use crate::core::models::key_pattern::KeyPattern;
use crate::core::services::filter_service::KeyFilter;

/// How differences are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KEY=VALUE` line per difference
    #[default]
    Text,
    /// A JSON array of differences
    Json,
}

/// Raw option values as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub check: bool,
    pub cmpval: bool,
    pub filter: Vec<String>,
    pub ignore: Vec<String>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
}

/// Everything a diff run needs, resolved once before any file is read.
#[derive(Debug, Clone)]
pub struct Settings {
    pub check: bool,
    pub diff: DiffOptions,
    pub keys: KeyFilter,
    pub format: OutputFormat,
    /// Suppress non-error status messages.
    pub quiet: bool,
}

impl Settings {
    /// Merge command-line values over an optional config file.
    ///
    /// Flags are OR'd, pattern lists are concatenated (config first), and
    /// `--format` overrides the file. Fails if any wildcard does not compile.
    pub fn resolve(cli: &CliOptions, config: Option<&AppConfig>) -> Result<Self> {
        let file = config.map(|c| &c.envdiff);

        let filter: Vec<&str> = file
            .into_iter()
            .flat_map(|f| f.filter.iter())
            .chain(cli.filter.iter())
            .map(String::as_str)
            .collect();
        let ignore: Vec<&str> = file
            .into_iter()
            .flat_map(|f| f.ignore.iter())
            .chain(cli.ignore.iter())
            .map(String::as_str)
            .collect();

        let include = KeyPattern::compile_all(&filter)?;
        let exclude = KeyPattern::compile_all(&ignore)?;
        for p in include.iter().chain(exclude.iter()) {
            log::debug!("key pattern {:?} compiled to {}", p.wildcard(), p.as_str());
        }

        Ok(Self {
            check: cli.check || file.is_some_and(|f| f.check),
            diff: DiffOptions::with_compare_value(cli.cmpval || file.is_some_and(|f| f.cmpval)),
            keys: KeyFilter::new(include, exclude),
            format: cli
                .format
                .or_else(|| file.and_then(|f| f.format))
                .unwrap_or_default(),
            quiet: cli.quiet,
        })
    }
}
