//! Turns a CSV table of graph benchmark experiments into a chained shell script.
//!
//! Each data row of the table becomes one invocation of the benchmark executor:
//!
//! ```text
//! ./scripts/execute_single_bench.sh -graph-name <GRAPH_NAME> -graph-url <GRAPH_URL> -threads <THREADS> -analysis-type <ANALYSIS_TYPE>
//! ```
//!
//! and the invocations are joined with `" && \n"` so the script stops at the
//! first failing run.

pub mod error;
pub mod generator;
pub mod models;

pub use error::GenerateError;
pub use generator::{
    format_commands, generate_commands, generate_commands_with, read_experiments,
    write_commands, COMMAND_SEPARATOR, DEFAULT_EXECUTOR,
};
pub use models::{BenchCommand, ColumnIndex, Experiment};

pub(crate) const LOG_TARGET: &str = "graph-bench-commands";
