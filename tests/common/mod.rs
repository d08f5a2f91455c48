//! Test infrastructure for build-helpers integration tests.
#![allow(dead_code)]

use anyhow::{Context, Result};
use build_helpers::git::GitRunner;
use std::cell::RefCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Runs git in `dir` and returns trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .context("Failed to execute git command")?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr)
    }
}

/// Fake runner that records every invocation and answers with a fixed exit code.
pub struct RecordingRunner {
    calls: RefCell<Vec<Vec<String>>>,
    code: Option<i32>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self::with_code(Some(0))
    }

    pub fn with_code(code: Option<i32>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            code,
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for RecordingRunner {
    fn run(&self, args: &[OsString]) -> std::io::Result<Option<i32>> {
        self.calls.borrow_mut().push(
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
        );
        Ok(self.code)
    }
}

/// A local stand-in for the binutils upstream: a bare repository plus a
/// working clone used to publish new commits to it.
pub struct Upstream {
    _temp_dir: TempDir,
    work: PathBuf,
    bare: PathBuf,
}

impl Upstream {
    /// Creates an upstream with two commits on master.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let work = temp_dir.path().join("work");
        let bare = temp_dir.path().join("upstream.git");
        std::fs::create_dir(&work)?;

        git(&work, &["init", "-b", "master"])?;
        configure_identity(&work)?;

        std::fs::write(work.join("README"), "binutils\n")?;
        git(&work, &["add", "README"])?;
        git(&work, &["commit", "-m", "Initial commit"])?;
        std::fs::write(work.join("ChangeLog"), "first entry\n")?;
        git(&work, &["add", "ChangeLog"])?;
        git(&work, &["commit", "-m", "Add ChangeLog"])?;

        git(temp_dir.path(), &["clone", "--bare", "work", "upstream.git"])?;
        git(&work, &["remote", "add", "origin", path_str(&bare)?])?;
        git(&work, &["fetch", "origin"])?;
        git(&work, &["branch", "--set-upstream-to=origin/master"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            work,
            bare,
        })
    }

    /// `file://` URL, so shallow clones are honored.
    pub fn url(&self) -> String {
        format!("file://{}", self.bare.display())
    }

    /// Commits `file` with `content` and pushes it upstream.
    pub fn publish(&self, file: &str, content: &str) -> Result<()> {
        std::fs::write(self.work.join(file), content)?;
        git(&self.work, &["add", file])?;
        git(&self.work, &["commit", "-m", &format!("Update {}", file)])?;
        git(&self.work, &["push", "origin", "master"])?;
        Ok(())
    }

    pub fn head(&self) -> Result<String> {
        git(&self.work, &["rev-parse", "HEAD"])
    }
}

pub fn configure_identity(repo: &Path) -> Result<()> {
    git(repo, &["config", "user.email", "test@example.com"])?;
    git(repo, &["config", "user.name", "Test User"])?;
    Ok(())
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("Non UTF-8 path: {}", path.display()))
}
