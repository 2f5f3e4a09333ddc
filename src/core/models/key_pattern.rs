use regex::Regex;

use crate::core::errors::{EnvdiffError, Result};

/// Translate a key wildcard into an anchored regex source.
///
/// `?` becomes `.` and `*` becomes `.*`; the result must match the whole
/// key. Other regex metacharacters are not escaped, so `a.b` also
/// matches `aXb`.
pub fn wildcard_to_regex(wildcard: &str) -> String {
    let body = wildcard.replace('?', ".").replace('*', ".*");
    format!("^{body}$")
}

/// A compiled key matcher built from a user-supplied wildcard.
#[derive(Debug, Clone)]
pub struct KeyPattern {
    wildcard: String,
    regex: Regex,
}

impl KeyPattern {
    pub fn from_wildcard(wildcard: &str) -> Result<Self> {
        let source = wildcard_to_regex(wildcard);
        let regex = Regex::new(&source).map_err(|e| EnvdiffError::InvalidPattern {
            pattern: wildcard.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            wildcard: wildcard.to_string(),
            regex,
        })
    }

    /// Compile every wildcard, failing on the first invalid one.
    pub fn compile_all<S: AsRef<str>>(wildcards: &[S]) -> Result<Vec<Self>> {
        wildcards
            .iter()
            .map(|w| Self::from_wildcard(w.as_ref()))
            .collect()
    }

    pub fn is_match(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }

    /// The wildcard this pattern was built from.
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// The compiled regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
