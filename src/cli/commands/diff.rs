use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::adapters::parsers::dotenv_parser::DotenvParser;
use crate::cli::output;
use crate::config::settings::{OutputFormat, Settings};
use crate::core::errors::{EnvdiffError, Result};
use crate::core::models::diff_result::{DiffEntry, DiffRecord};
use crate::core::models::env_var::EnvVar;
use crate::core::services::diff_service::{DiffService, sort_by_key};
use crate::core::traits::parser::EnvParser;

/// Execute a diff of `file2` against `file1`.
///
/// Prints every variable `file2` has that `file1` is missing (or changes,
/// with value comparison on) and returns how many were found.
pub fn execute(file1: &str, file2: &str, settings: &Settings) -> Result<usize> {
    let parser = DotenvParser;

    let left = read_env_file(Path::new(file1), &parser)?;
    let right = read_env_file(Path::new(file2), &parser)?;

    let left = settings.keys.apply(&left);
    let right = settings.keys.apply(&right);

    let found = match settings.format {
        OutputFormat::Text => {
            let mut vars = DiffService.diff(&left, &right, &settings.diff);
            sort_by_key(&mut vars);
            print_text(&vars);
            vars.len()
        }
        OutputFormat::Json => {
            let mut entries = DiffService.classify(&left, &right, &settings.diff);
            entries.sort_by(|a, b| a.key().cmp(b.key()));
            log_summary(&entries);
            print_json(&entries)?;
            entries.len()
        }
    };

    log::info!("{found} difference(s) found");

    if settings.check && found > 0 && !settings.quiet {
        output::warning(&format!(
            "{found} difference(s) between {file1} and {file2}"
        ));
    }

    Ok(found)
}

/// Open `path` and read its variables in file order.
pub fn read_env_file(path: &Path, parser: &dyn EnvParser) -> Result<Vec<EnvVar>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => EnvdiffError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => EnvdiffError::FileOpen {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = BufReader::new(file);
    let vars = parser.read(&mut reader).map_err(|e| match e {
        EnvdiffError::Io(source) => EnvdiffError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    log::debug!("read {} variables from {}", vars.len(), path.display());
    Ok(vars)
}

fn print_text(vars: &[EnvVar]) {
    for var in vars {
        output::line(&var.to_string());
    }
}

fn print_json(entries: &[DiffEntry]) -> Result<()> {
    let records: Vec<DiffRecord<'_>> = entries.iter().map(DiffRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).map_err(io::Error::from)?;
    output::line(&json);
    Ok(())
}

fn log_summary(entries: &[DiffEntry]) {
    let added = entries.iter().filter(|e| e.is_added()).count();
    log::debug!("{added} added, {} modified", entries.len() - added);
}
