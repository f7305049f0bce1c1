use std::path::PathBuf;

use serde::Deserialize;

use super::Config;

pub const DEFAULT_INPUT: &str = "./experiments.csv";
pub const DEFAULT_OUTPUT: &str = "./scripts/commands.sh";
pub const DEFAULT_EXECUTOR: &str = "./scripts/execute_single_bench.sh";

/// Paths used by the command generator.
///
/// Field names carry no underscores: `_` separates nesting levels in
/// environment keys, so `BENCH_COMMANDS_INPUT` maps to `input`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// CSV file listing the experiments.
    pub input: PathBuf,
    /// Shell script the commands are written to.
    pub output: PathBuf,
    /// Script invoked once per experiment.
    pub executor: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            executor: DEFAULT_EXECUTOR.to_owned(),
        }
    }
}

impl Config for GeneratorConfig {
    const PREFIX: &'static str = "COMMANDS";

    const DEFAULTS: &'static [(&'static str, &'static str)] = &[
        ("input", DEFAULT_INPUT),
        ("output", DEFAULT_OUTPUT),
        ("executor", DEFAULT_EXECUTOR),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [
        "BENCH_COMMANDS_INPUT",
        "BENCH_COMMANDS_OUTPUT",
        "BENCH_COMMANDS_EXECUTOR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn read_defaults() {
        clear_env();

        let config = <GeneratorConfig as Config>::from_env().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    #[serial]
    fn read_config() {
        clear_env();
        std::env::set_var("BENCH_COMMANDS_INPUT", "/tmp/runs.csv");
        std::env::set_var("BENCH_COMMANDS_EXECUTOR", "./run.sh");

        let config = <GeneratorConfig as Config>::from_env().unwrap();
        clear_env();

        assert_eq!(config.input, PathBuf::from("/tmp/runs.csv"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.executor, "./run.sh");
    }
}
