use clap::Parser;
use graph_bench_cli::{command, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let Cli { args } = Cli::parse();
    command::handle_command(args)
}
