use std::path::PathBuf;

/// All domain errors for envdiff.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum EnvdiffError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error("Cannot open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Invalid key pattern '{pattern}': {reason}\n\n  \
         Patterns support '?' (any one character) and '*' (any run of characters).\n  \
         Other regex characters are passed through as-is, so they must form a valid expression."
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error(
        "Invalid configuration: {detail}\n\n  \
         Expected a TOML file with an [envdiff] table, e.g.:\n    \
         [envdiff]\n    \
         cmpval = true\n    \
         ignore = [\"*_SECRET\"]"
    )]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvdiffError>;
