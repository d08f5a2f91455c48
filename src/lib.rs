//! Helpers for toolchain build scripts.
//!
//! This crate provides the small setup steps a build script runs:
//! - Writing a `.gitignore` that hides a generated directory
//! - Cloning or rebasing the binutils source checkout
//! - Printing colored section headers between build stages

pub mod config;
pub mod constants;
pub mod git;
pub mod ignore;
pub mod output;
pub mod sync;
