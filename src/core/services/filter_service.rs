use crate::core::models::env_var::EnvVar;
use crate::core::models::key_pattern::KeyPattern;

/// True when `key` matches at least one pattern, or when there are no patterns.
fn matches_any(key: &str, patterns: &[KeyPattern]) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| p.is_match(key))
}

/// Keep only entries whose key matches one of `patterns`.
/// An empty pattern list keeps everything.
pub fn filter(list: &[EnvVar], patterns: &[KeyPattern]) -> Vec<EnvVar> {
    list.iter()
        .filter(|v| matches_any(&v.key, patterns))
        .cloned()
        .collect()
}

/// Drop entries whose key matches one of `patterns`.
/// An empty pattern list drops nothing.
pub fn ignore(list: &[EnvVar], patterns: &[KeyPattern]) -> Vec<EnvVar> {
    if patterns.is_empty() {
        return list.to_vec();
    }
    list.iter()
        .filter(|v| !matches_any(&v.key, patterns))
        .cloned()
        .collect()
}

/// Inclusion and exclusion rules applied to both input files.
#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    pub include: Vec<KeyPattern>,
    pub exclude: Vec<KeyPattern>,
}

impl KeyFilter {
    pub fn new(include: Vec<KeyPattern>, exclude: Vec<KeyPattern>) -> Self {
        Self { include, exclude }
    }

    /// Apply `filter` with the include list, then `ignore` with the exclude list.
    pub fn apply(&self, list: &[EnvVar]) -> Vec<EnvVar> {
        let kept = filter(list, &self.include);
        let kept = ignore(&kept, &self.exclude);
        log::debug!(
            "key filter kept {}/{} entries ({} include, {} exclude patterns)",
            kept.len(),
            list.len(),
            self.include.len(),
            self.exclude.len()
        );
        kept
    }
}
