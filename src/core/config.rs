use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings threaded into every extraction pass.
///
/// There is no process-wide configuration state; callers build one
/// `ExtractConfig` (from flags, from a TOML file, or both) and pass it
/// down, so independent files could be extracted with different settings
/// or in parallel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Emit warnings for recoverable conditions (unreadable files, orphan
    /// comments, undocumented declarations, failed cache writes).
    pub warn: bool,
    /// When set, each processed tunable/boolean file is additionally
    /// serialized to `<output_dir>/<file name>.xml`.
    pub output_dir: Option<PathBuf>,
}

impl ExtractConfig {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }
}
