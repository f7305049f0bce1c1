//! # build-commands
//!
//! Reads the experiments table (`./experiments.csv` by default) and writes
//! `./scripts/commands.sh`, one benchmark invocation per row.
//!
//! ## Usage
//! ```sh
//! build-commands
//! build-commands --input runs.csv --output run-all.sh
//! build-commands --stdout
//! ```
//!
//! Defaults can also be set with `BENCH_COMMANDS_INPUT`, `BENCH_COMMANDS_OUTPUT`
//! and `BENCH_COMMANDS_EXECUTOR`, either in the environment or in `.config.env`.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

pub(crate) const LOG_TARGET: &str = "graph-bench-cli";

#[derive(Debug, Parser)]
#[command(name = "build-commands")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: command::BuildArgs,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
