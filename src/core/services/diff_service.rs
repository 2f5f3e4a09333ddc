use std::collections::HashMap;

use crate::core::models::diff_options::DiffOptions;
use crate::core::models::diff_result::{DiffEntry, DiffKind};
use crate::core::models::env_var::EnvVar;

/// Computes what the second env file has (or changes) relative to the first.
pub struct DiffService;

impl DiffService {
    /// Return the variables of `b` that `a` is missing.
    ///
    /// - Keys only in `b` are always reported with `b`'s value
    /// - Keys in both are reported only when `options.compare_value`
    ///   is set and the values differ
    /// - Keys only in `a` are never reported
    ///
    /// The order of the result is unspecified; use [`sort_by_key`] when
    /// output must be deterministic.
    pub fn diff(&self, a: &[EnvVar], b: &[EnvVar], options: &DiffOptions) -> Vec<EnvVar> {
        self.classify(a, b, options)
            .into_iter()
            .map(|entry| entry.var)
            .collect()
    }

    /// Same as [`DiffService::diff`], keeping the reason each variable was reported.
    pub fn classify(&self, a: &[EnvVar], b: &[EnvVar], options: &DiffOptions) -> Vec<DiffEntry> {
        let left = to_map(a);
        let right = to_map(b);

        let mut entries = Vec::with_capacity(right.len());

        for (key, value) in right {
            let kind = match left.get(key) {
                None => DiffKind::Added,
                Some(old) if options.compare_value && *old != value => DiffKind::Modified {
                    old_value: old.to_string(),
                },
                Some(_) => continue,
            };
            entries.push(DiffEntry {
                var: EnvVar::new(key, value),
                kind,
            });
        }

        entries
    }
}

/// Build a key → value lookup. A later duplicate key overwrites an earlier one.
pub fn to_map(list: &[EnvVar]) -> HashMap<&str, &str> {
    list.iter()
        .map(|v| (v.key.as_str(), v.value.as_str()))
        .collect()
}

/// Stable ascending sort by key.
pub fn sort_by_key(list: &mut [EnvVar]) {
    list.sort_by(|x, y| x.key.cmp(&y.key));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<EnvVar> {
        pairs.iter().map(|(k, v)| EnvVar::new(*k, *v)).collect()
    }

    fn sorted_diff(a: &[EnvVar], b: &[EnvVar], options: DiffOptions) -> Vec<EnvVar> {
        let mut got = DiffService.diff(a, b, &options);
        sort_by_key(&mut got);
        got
    }

    #[test]
    fn no_diff() {
        let a = vars(&[("ENV1", "KEY1")]);
        let b = vars(&[("ENV1", "KEY1")]);
        assert!(sorted_diff(&a, &b, DiffOptions::default()).is_empty());
    }

    #[test]
    fn identical_collections_are_empty_either_way() {
        let a = vars(&[("A", "1"), ("B", "2"), ("C", "")]);
        assert!(sorted_diff(&a, &a, DiffOptions::with_compare_value(false)).is_empty());
        assert!(sorted_diff(&a, &a, DiffOptions::with_compare_value(true)).is_empty());
    }

    #[test]
    fn a_has_more_is_not_reported() {
        let a = vars(&[("ENV1", "KEY1"), ("ENV2", "KEY2")]);
        let b = vars(&[("ENV1", "KEY1")]);
        assert!(sorted_diff(&a, &b, DiffOptions::default()).is_empty());
        assert!(sorted_diff(&a, &b, DiffOptions::with_compare_value(true)).is_empty());
    }

    #[test]
    fn b_has_more() {
        let a = vars(&[("ENV1", "KEY1")]);
        let b = vars(&[("ENV1", "KEY1"), ("ENV2", "KEY2")]);
        assert_eq!(
            sorted_diff(&a, &b, DiffOptions::default()),
            vars(&[("ENV2", "KEY2")])
        );
    }

    #[test]
    fn added_keys_reported_regardless_of_compare_value() {
        let a = vars(&[("A", "1")]);
        let b = vars(&[("A", "2"), ("NEW", "x")]);
        assert_eq!(
            sorted_diff(&a, &b, DiffOptions::with_compare_value(false)),
            vars(&[("NEW", "x")])
        );
        assert_eq!(
            sorted_diff(&a, &b, DiffOptions::with_compare_value(true)),
            vars(&[("A", "2"), ("NEW", "x")])
        );
    }

    #[test]
    fn b_has_diff_value() {
        let a = vars(&[("ENV1", "KEY1"), ("ENV2", "KEY2")]);
        let b = vars(&[("ENV1", "KEY1"), ("ENV2", "KEY33")]);
        assert_eq!(
            sorted_diff(&a, &b, DiffOptions::with_compare_value(true)),
            vars(&[("ENV2", "KEY33")])
        );
    }

    #[test]
    fn changed_value_ignored_without_compare_value() {
        let a = vars(&[("ENV2", "KEY2")]);
        let b = vars(&[("ENV2", "KEY33")]);
        assert!(sorted_diff(&a, &b, DiffOptions::default()).is_empty());
    }

    #[test]
    fn value_comparison_is_exact() {
        let a = vars(&[("K", "value")]);
        let b = vars(&[("K", "Value")]);
        assert_eq!(
            sorted_diff(&a, &b, DiffOptions::with_compare_value(true)),
            vars(&[("K", "Value")])
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        let a = vars(&[("key", "lower")]);
        let b = vars(&[("KEY", "upper")]);
        assert_eq!(
            sorted_diff(&a, &b, DiffOptions::default()),
            vars(&[("KEY", "upper")])
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let a = vars(&[("K", "old"), ("K", "same")]);
        let b = vars(&[("K", "first"), ("K", "same")]);
        assert!(sorted_diff(&a, &b, DiffOptions::with_compare_value(true)).is_empty());
    }

    #[test]
    fn empty_inputs_produce_empty_diff() {
        assert!(sorted_diff(&[], &[], DiffOptions::with_compare_value(true)).is_empty());
    }

    #[test]
    fn classify_labels_additions_and_modifications() {
        let a = vars(&[("DB", "localhost"), ("KEEP", "1")]);
        let b = vars(&[("DB", "rds"), ("KEEP", "1"), ("REDIS", "r:6379")]);
        let mut entries = DiffService.classify(&a, &b, &DiffOptions::with_compare_value(true));
        entries.sort_by(|x, y| x.key().cmp(y.key()));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].var, EnvVar::new("DB", "rds"));
        assert_eq!(
            entries[0].kind,
            DiffKind::Modified {
                old_value: "localhost".to_string()
            }
        );
        assert_eq!(entries[1].var, EnvVar::new("REDIS", "r:6379"));
        assert_eq!(entries[1].kind, DiffKind::Added);
    }

    #[test]
    fn to_map_keeps_last_value() {
        let list = vars(&[("A", "1"), ("B", "2"), ("A", "3")]);
        let map = to_map(&list);
        assert_eq!(map.len(), 2);
        assert_eq!(map["A"], "3");
    }

    #[test]
    fn sort_by_key_is_stable() {
        let mut list = vars(&[("B", "1"), ("A", "x"), ("B", "2"), ("A", "y")]);
        sort_by_key(&mut list);
        assert_eq!(list, vars(&[("A", "x"), ("A", "y"), ("B", "1"), ("B", "2")]));
    }
}
