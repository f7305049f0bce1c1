use std::{fs, fs::File, io, path::Path};

use crate::{
    error::GenerateError,
    models::{ColumnIndex, Experiment},
    LOG_TARGET,
};

/// Joins consecutive commands: each must succeed before the next one runs.
pub const COMMAND_SEPARATOR: &str = " && \n";

/// Script invoked once per experiment.
pub const DEFAULT_EXECUTOR: &str = "./scripts/execute_single_bench.sh";

/// Parse every data row of an experiments table, in file order.
pub fn read_experiments<R: io::Read>(reader: R) -> Result<Vec<Experiment>, GenerateError> {
    // Row width is checked against the header by `Experiment::from_csv_record`.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = ColumnIndex::from_header(reader.headers()?)?;

    let mut experiments = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        experiments.push(Experiment::from_csv_record(&record, &index, row as u64 + 1)?);
    }
    Ok(experiments)
}

/// Build one executor invocation per row of the CSV file at `input`.
pub fn generate_commands(input: impl AsRef<Path>) -> Result<Vec<String>, GenerateError> {
    generate_commands_with(input, DEFAULT_EXECUTOR)
}

/// Like [`generate_commands`], invoking `executor` instead of the default script.
pub fn generate_commands_with(
    input: impl AsRef<Path>,
    executor: &str,
) -> Result<Vec<String>, GenerateError> {
    let path = input.as_ref();
    let file = File::open(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let experiments = read_experiments(file)?;
    tracing::info!(
        target: LOG_TARGET,
        "read {} experiments from {}",
        experiments.len(),
        path.display(),
    );

    Ok(experiments
        .iter()
        .map(|experiment| {
            let command = experiment.command(executor).to_string();
            tracing::debug!(target: LOG_TARGET, "{command}");
            command
        })
        .collect())
}

/// Join commands into the script text. No separator follows the last command.
pub fn format_commands<S: AsRef<str>>(commands: &[S]) -> String {
    commands
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(COMMAND_SEPARATOR)
}

/// Write the joined commands to `output`, replacing any previous content.
/// Parent directories are not created.
pub fn write_commands<S: AsRef<str>>(
    commands: &[S],
    output: impl AsRef<Path>,
) -> Result<(), GenerateError> {
    let path = output.as_ref();
    fs::write(path, format_commands(commands)).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        target: LOG_TARGET,
        "wrote {} commands to {}",
        commands.len(),
        path.display(),
    );
    Ok(())
}
