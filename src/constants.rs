//! Application-wide constants.
//!
//! Centralized names and byte sequences shared by the helpers.

/// Directory name, under the caller's folder, that holds the binutils checkout.
pub const BINUTILS_DIR: &str = "binutils";

/// Upstream binutils-gdb repository.
pub const BINUTILS_REMOTE: &str = "git://sourceware.org/git/binutils-gdb.git";

/// Environment variable that overrides [`BINUTILS_REMOTE`] in the CLI.
pub const BINUTILS_REMOTE_ENV: &str = "BINUTILS_REMOTE_URL";

/// Ignore marker file name.
pub const IGNORE_FILE: &str = ".gitignore";

/// Ignore marker content: match every entry in the directory.
pub const IGNORE_ALL: &str = "*";

/// Bold red.
pub const HEADER_COLOR: &str = "\x1b[01;31m";

/// Resets the color back to the user's default.
pub const HEADER_RESET: &str = "\x1b[0m";

/// Width added to the header text by the `== ` and ` ==` decorations.
pub const HEADER_PADDING: usize = 6;
