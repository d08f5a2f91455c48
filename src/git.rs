//! Git command wrappers.
//!
//! This module provides a thin wrapper around the git CLI. Commands go
//! through a [`GitRunner`] so callers can swap the real subprocess for a
//! fake, and every invocation is announced to a [`GitLogger`] first.

use anyhow::Context;
use colored::Colorize;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Logger callback invoked with the arguments of each git command before it runs.
pub type GitLogger = fn(&[OsString]);

/// Prints the git command about to run, dimmed, to stderr.
pub fn verbose_logger(args: &[OsString]) {
    eprintln!("{}", format!("$ {}", display_command(args)).dimmed());
}

pub fn no_op_logger(_args: &[OsString]) {}

/// Executes git with the given arguments.
///
/// Returns the exit code, or `None` if the process was terminated by a signal.
pub trait GitRunner {
    fn run(&self, args: &[OsString]) -> std::io::Result<Option<i32>>;
}

/// Runs the `git` found on `PATH`.
///
/// Stdio is inherited, so git's own progress and error messages reach the
/// console directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, args: &[OsString]) -> std::io::Result<Option<i32>> {
        let status = Command::new("git").args(args).status()?;
        Ok(status.code())
    }
}

/// Runs a git command and fails on any non-zero exit.
pub fn run_git<R: GitRunner + ?Sized>(
    runner: &R,
    logger: GitLogger,
    args: &[OsString],
) -> anyhow::Result<()> {
    logger(args);

    let code = runner.run(args).context("Failed to spawn git command")?;

    match code {
        Some(0) => Ok(()),
        Some(code) => anyhow::bail!(
            "git {} failed: exit status {}",
            display_command_args(args),
            code
        ),
        None => anyhow::bail!(
            "git {} failed: terminated by signal",
            display_command_args(args)
        ),
    }
}

/// Arguments for `git clone [--depth 1] <remote> <target>`.
pub fn clone_args(remote: &str, target: &Path, shallow: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["clone".into()];
    if shallow {
        args.push("--depth".into());
        args.push("1".into());
    }
    args.push(remote.into());
    args.push(target.as_os_str().to_owned());
    args
}

/// Arguments for `git -C <repo> pull --rebase`.
pub fn pull_rebase_args(repo: &Path) -> Vec<OsString> {
    vec![
        "-C".into(),
        repo.as_os_str().to_owned(),
        "pull".into(),
        "--rebase".into(),
    ]
}

pub fn clone<R: GitRunner + ?Sized>(
    runner: &R,
    logger: GitLogger,
    remote: &str,
    target: &Path,
    shallow: bool,
) -> anyhow::Result<()> {
    run_git(runner, logger, &clone_args(remote, target, shallow))
        .with_context(|| format!("Failed to clone {} into {}", remote, target.display()))
}

pub fn pull_rebase<R: GitRunner + ?Sized>(
    runner: &R,
    logger: GitLogger,
    repo: &Path,
) -> anyhow::Result<()> {
    run_git(runner, logger, &pull_rebase_args(repo))
        .with_context(|| format!("Failed to update {}", repo.display()))
}

fn display_command_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_command(args: &[OsString]) -> String {
    format!("git {}", display_command_args(args))
}
