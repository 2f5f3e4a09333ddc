/// Comparison settings for a single diff run.
///
/// Built once from the command line (and optional config file) and
/// passed by reference into `DiffService`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Also report keys present in both files whose values differ.
    /// Off by default: only keys missing from the first file are reported.
    pub compare_value: bool,
}

impl DiffOptions {
    pub fn with_compare_value(compare_value: bool) -> Self {
        Self { compare_value }
    }
}
