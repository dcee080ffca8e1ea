//! CLI entry point for the ftally tool.
//!
//! Walks a directory tree and prints how many files it holds per extension
//! or per directory, most common first.
//!
//! # Usage
//!
//! ```bash
//! ftally [OPTIONS] [PATH]
//!
//! # Count files under the current directory by extension
//! ftally
//!
//! # Count files per directory under ./src, fewest first
//! ftally -d ./src -g dir -a
//!
//! # Only the top level of /var/log
//! ftally -d /var/log -r
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use ft_core::{GroupBy, SortOrder, TallyConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Tally files in a directory tree by extension or by directory.
#[derive(Parser, Debug)]
#[command(name = "ftally", version, about, long_about = None)]
struct Cli {
    /// Directory to start with.
    #[arg(short, long, value_name = "PATH")]
    dir: Option<Utf8PathBuf>,

    /// Group by file extension ('ext' or 'e') or by directory ('dir' or 'd').
    #[arg(
        short,
        long,
        value_name = "MODE",
        default_value = "ext",
        value_parser = parse_group_by
    )]
    group_by: GroupBy,

    /// Suppress recursive counting into sub-directories.
    #[arg(short = 'r', long)]
    no_recursive: bool,

    /// Sort results in ascending order (default is descending).
    #[arg(short, long)]
    ascending: bool,

    /// Directory to start with (deprecated: use --dir).
    #[arg(value_name = "PATH", conflicts_with = "dir")]
    path: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn parse_group_by(value: &str) -> Result<GroupBy, ft_core::ConfigError> {
    value.parse()
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for diagnostics on stderr.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` level by default so that
/// stdout and stderr stay quiet on success.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("{level},ignore=warn,globset=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds the [`TallyConfig`] from parsed arguments.
///
/// `--dir` and the positional path are mutually exclusive; either one sets
/// the root, which otherwise defaults to the current directory.
fn build_config(cli: &Cli) -> TallyConfig {
    let root = cli
        .dir
        .clone()
        .or_else(|| cli.path.clone())
        .unwrap_or_else(|| Utf8PathBuf::from("."));

    TallyConfig::new(root)
        .with_group_by(cli.group_by)
        .with_recursive(!cli.no_recursive)
        .with_order(SortOrder::from_ascending(cli.ascending))
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments (an invalid --group-by exits here)
    let cli = Cli::parse();

    // 3. Initialize tracing
    init_tracing(cli.verbose, cli.no_color);

    // 4. Build the configuration once and run the pipeline
    let config = build_config(&cli);
    debug!(?config, "Resolved configuration");

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    ft_scanner::run(&config, &mut handle)?;
    handle.flush()?;

    Ok(())
}
