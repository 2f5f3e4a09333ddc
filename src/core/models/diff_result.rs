use serde::Serialize;

use super::env_var::EnvVar;

/// Why a variable from the second file was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffKind {
    /// The key does not exist in the first file.
    Added,
    /// The key exists in both files but the value changed.
    Modified { old_value: String },
}

/// One reported variable, carrying the second file's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub var: EnvVar,
    pub kind: DiffKind,
}

impl DiffEntry {
    pub fn key(&self) -> &str {
        &self.var.key
    }

    pub fn is_added(&self) -> bool {
        matches!(self.kind, DiffKind::Added)
    }
}

/// Flat JSON shape for `--format json`.
#[derive(Debug, Serialize)]
pub struct DiffRecord<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<&'a str>,
}

impl<'a> From<&'a DiffEntry> for DiffRecord<'a> {
    fn from(entry: &'a DiffEntry) -> Self {
        let (kind, old_value) = match &entry.kind {
            DiffKind::Added => ("added", None),
            DiffKind::Modified { old_value } => ("modified", Some(old_value.as_str())),
        };
        DiffRecord {
            key: &entry.var.key,
            value: &entry.var.value,
            kind,
            old_value,
        }
    }
}
