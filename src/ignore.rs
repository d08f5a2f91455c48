//! Ignore markers for generated directories.
//!
//! Some output folders are only known once the build runs, so they can't be
//! listed in the top-level `.gitignore`. Dropping a marker inside them keeps
//! their contents out of version control.

use crate::constants::{IGNORE_ALL, IGNORE_FILE};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Writes `<dir>/.gitignore` containing `*`, replacing any existing file.
///
/// `dir` must already exist; it is not created.
pub fn write_ignore_marker(dir: &Path) -> anyhow::Result<PathBuf> {
    let marker = dir.join(IGNORE_FILE);
    std::fs::write(&marker, IGNORE_ALL)
        .with_context(|| format!("Failed to write ignore marker in {}", dir.display()))?;
    Ok(marker)
}
