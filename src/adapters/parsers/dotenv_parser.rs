use crate::core::models::env_var::EnvVar;
use crate::core::traits::parser::EnvParser;

/// Parses plain `.env` lines.
///
/// Supports:
/// - `KEY=value` entries, split at the first `=`
/// - Comment lines (`# ...`)
///
/// Quotes are kept verbatim and values are never expanded. Lines without
/// `=` are skipped rather than rejected.
pub struct DotenvParser;

impl EnvParser for DotenvParser {
    fn parse_line(&self, line: &str) -> Option<EnvVar> {
        let trimmed = line.trim();

        if trimmed.starts_with('#') {
            return None;
        }

        let (key, value) = trimmed.split_once('=')?;
        Some(EnvVar::new(key.trim(), value.trim()))
    }
}
