use build_helpers::config::{Config, Verbosity};
use build_helpers::constants::{BINUTILS_REMOTE, BINUTILS_REMOTE_ENV};
use build_helpers::git::SystemGit;
use build_helpers::sync::{self, SyncOptions};
use build_helpers::{ignore, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Setup steps for toolchain build scripts")]
struct Cli {
    /// Echo every git command before running it
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress headers and status lines
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a section header
    Header { text: String },

    /// Ignore every file in DIR by writing DIR/.gitignore
    Ignore { dir: PathBuf },

    /// Clone or update DIR/binutils
    Binutils {
        dir: PathBuf,

        /// Leave an existing checkout as it is
        #[arg(long)]
        no_update: bool,

        /// Clone only the latest revision
        #[arg(long)]
        shallow: bool,

        /// Repository to clone from
        #[arg(long, env = BINUTILS_REMOTE_ENV, default_value = BINUTILS_REMOTE)]
        remote: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config {
        verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
    };

    match cli.command {
        Command::Header { text } => output::print_header(&text),
        Command::Ignore { dir } => {
            ignore::write_ignore_marker(&dir)?;
            output::print_ignore_written(&dir, &config);
        }
        Command::Binutils {
            dir,
            no_update,
            shallow,
            remote,
        } => {
            let options = SyncOptions {
                update: !no_update,
                shallow,
                remote,
            };
            let mut sink = config.progress_sink();
            let outcome = sync::sync_repository(
                &dir,
                &options,
                &SystemGit,
                config.git_logger(),
                &mut *sink,
            )?;
            output::print_sync_outcome(&outcome, &config);
        }
    }

    Ok(())
}
