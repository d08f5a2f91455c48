// binutils checkout: clone on first use, pull --rebase afterwards

use crate::constants::{BINUTILS_DIR, BINUTILS_REMOTE};
use crate::git::{self, GitLogger, GitRunner};
use crate::output;
use std::io::Write;
use std::path::{Path, PathBuf};

const UPDATING_HEADER: &str = "Updating binutils";
const DOWNLOADING_HEADER: &str = "Downloading binutils";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Pull and rebase an existing checkout instead of leaving it alone.
    pub update: bool,
    /// Clone only the latest revision.
    pub shallow: bool,
    pub remote: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            update: true,
            shallow: false,
            remote: BINUTILS_REMOTE.to_string(),
        }
    }
}

/// Which branch of the sync ran, with the checkout path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Cloned(PathBuf),
    Updated(PathBuf),
    Skipped(PathBuf),
}

impl SyncOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            SyncOutcome::Cloned(path) | SyncOutcome::Updated(path) | SyncOutcome::Skipped(path) => {
                path
            }
        }
    }
}

/// Path of the binutils checkout under `dir`.
#[must_use]
pub fn binutils_dir(dir: &Path) -> PathBuf {
    dir.join(BINUTILS_DIR)
}

/// Ensures a binutils checkout exists at `<dir>/binutils`.
///
/// An existing directory is rebased onto upstream when `options.update` is
/// set and left untouched otherwise. A missing one is cloned, shallowly if
/// `options.shallow` is set. Progress headers go to `out`.
///
/// Any non-zero git exit is returned as an error. Nothing is retried or
/// cleaned up, so a failed clone may leave a partial directory behind.
pub fn sync_repository<R, W>(
    dir: &Path,
    options: &SyncOptions,
    runner: &R,
    logger: GitLogger,
    out: &mut W,
) -> anyhow::Result<SyncOutcome>
where
    R: GitRunner + ?Sized,
    W: Write + ?Sized,
{
    let target = binutils_dir(dir);

    if target.is_dir() {
        if !options.update {
            return Ok(SyncOutcome::Skipped(target));
        }
        output::write_header(out, UPDATING_HEADER)?;
        git::pull_rebase(runner, logger, &target)?;
        return Ok(SyncOutcome::Updated(target));
    }

    output::write_header(out, DOWNLOADING_HEADER)?;
    git::clone(runner, logger, &options.remote, &target, options.shallow)?;
    Ok(SyncOutcome::Cloned(target))
}
