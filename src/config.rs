// src/config.rs

use std::{env, ffi::OsString, path::PathBuf};

pub const DEFAULT_LOOKUP_PATH: &str = "public/data/lawmakers.csv";
pub const DEFAULT_PRIMARY_PATH: &str = "public/data/scores_wide.csv";

/// Overrides the lookup (lawmakers) path.
pub const LOOKUP_ENV: &str = "LAWMERGE_LOOKUP";
/// Overrides the primary (scores) path.
pub const PRIMARY_ENV: &str = "LAWMERGE_PRIMARY";

/// Where the two input files live. Relative paths resolve against the
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub lookup_path: PathBuf,
    pub primary_path: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            lookup_path: PathBuf::from(DEFAULT_LOOKUP_PATH),
            primary_path: PathBuf::from(DEFAULT_PRIMARY_PATH),
        }
    }
}

impl MergeConfig {
    /// Defaults, with any non-empty `LAWMERGE_*` variables applied.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var_os(key))
    }

    fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let pick = |key: &str, default: &str| {
            get(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            lookup_path: pick(LOOKUP_ENV, DEFAULT_LOOKUP_PATH),
            primary_path: pick(PRIMARY_ENV, DEFAULT_PRIMARY_PATH),
        }
    }
}
