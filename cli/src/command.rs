use clap::Args;
use std::{io::Write, path::PathBuf};

use graph_bench_commands::{format_commands, generate_commands_with, write_commands};
use graph_bench_config::{Config, GeneratorConfig};

use crate::LOG_TARGET;

#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    /// CSV file listing the experiments. Defaults to ./experiments.csv.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the command script. Defaults to ./scripts/commands.sh.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Script invoked for each experiment. Defaults to ./scripts/execute_single_bench.sh.
    #[arg(long, value_name = "PATH")]
    pub executor: Option<String>,

    /// Print the script to stdout instead of writing the output file.
    #[arg(long)]
    pub stdout: bool,
}

impl BuildArgs {
    /// Flags take precedence over configured values.
    fn resolve(&self, config: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            input: self.input.clone().unwrap_or(config.input),
            output: self.output.clone().unwrap_or(config.output),
            executor: self.executor.clone().unwrap_or(config.executor),
        }
    }
}

pub fn handle_command(args: BuildArgs) -> anyhow::Result<()> {
    let config = GeneratorConfig::from_env()?;

    build_commands(&args, config, &mut std::io::stdout().lock())
}

/// Generate the commands and either write them to the configured output or,
/// with `--stdout`, to `out`.
pub fn build_commands<W: Write>(
    args: &BuildArgs,
    config: GeneratorConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let GeneratorConfig {
        input,
        output,
        executor,
    } = args.resolve(config);
    tracing::debug!(
        target: LOG_TARGET,
        "input: {}, output: {}, executor: {executor}",
        input.display(),
        output.display(),
    );

    let commands = generate_commands_with(&input, &executor)?;

    if args.stdout {
        writeln!(out, "{}", format_commands(&commands))?;
    } else {
        write_commands(&commands, &output)?;
    }
    Ok(())
}
