use csv::StringRecord;
use std::fmt;

use crate::error::GenerateError;

pub const GRAPH_NAME: &str = "GRAPH_NAME";
pub const GRAPH_URL: &str = "GRAPH_URL";
pub const THREADS: &str = "THREADS";
pub const ANALYSIS_TYPE: &str = "ANALYSIS_TYPE";

/// Columns every experiments table must declare, in command flag order.
pub const REQUIRED_COLUMNS: [&str; 4] = [GRAPH_NAME, GRAPH_URL, THREADS, ANALYSIS_TYPE];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    graph_name: usize,
    graph_url: usize,
    threads: usize,
    analysis_type: usize,
    width: usize,
}

impl ColumnIndex {
    /// Resolve the required columns by name. Extra columns are ignored and the
    /// first occurrence of a repeated name wins.
    pub fn from_header(header: &StringRecord) -> Result<Self, GenerateError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|column| column == name)
                .ok_or(GenerateError::MissingColumn(name))
        };

        Ok(ColumnIndex {
            graph_name: find(GRAPH_NAME)?,
            graph_url: find(GRAPH_URL)?,
            threads: find(THREADS)?,
            analysis_type: find(ANALYSIS_TYPE)?,
            width: header.len(),
        })
    }

    /// Number of fields in the header row.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// One benchmark run as listed in the experiments table.
///
/// Values are kept exactly as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    pub graph_name: String,
    pub graph_url: String,
    pub threads: String,
    pub analysis_type: String,
}

impl Experiment {
    /// Parse a data row; `row` is the 1-based data row number used in errors.
    pub fn from_csv_record(
        record: &StringRecord,
        index: &ColumnIndex,
        row: u64,
    ) -> Result<Self, GenerateError> {
        if record.len() < index.width {
            return Err(GenerateError::ShortRow {
                row,
                expected: index.width,
                found: record.len(),
            });
        }

        Ok(Experiment {
            graph_name: record[index.graph_name].to_string(),
            graph_url: record[index.graph_url].to_string(),
            threads: record[index.threads].to_string(),
            analysis_type: record[index.analysis_type].to_string(),
        })
    }

    /// The executor invocation for this experiment.
    pub fn command<'a>(&'a self, executor: &'a str) -> BenchCommand<'a> {
        BenchCommand {
            executor,
            experiment: self,
        }
    }
}

/// Shell invocation of `executor` for a single experiment. Field values are
/// substituted verbatim, without quoting.
#[derive(Debug, Clone, Copy)]
pub struct BenchCommand<'a> {
    pub executor: &'a str,
    pub experiment: &'a Experiment,
}

impl fmt::Display for BenchCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Experiment {
            graph_name,
            graph_url,
            threads,
            analysis_type,
        } = self.experiment;

        write!(
            f,
            "{} -graph-name {} -graph-url {} -threads {} -analysis-type {}",
            self.executor, graph_name, graph_url, threads, analysis_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web_google() -> Experiment {
        Experiment {
            graph_name: "web-Google".into(),
            graph_url: "http://x/web-Google.tsv".into(),
            threads: "4".into(),
            analysis_type: "bfs".into(),
        }
    }

    #[test]
    fn header_lookup_is_order_independent() {
        let header = StringRecord::from(vec![
            "THREADS",
            "NOTES",
            "ANALYSIS_TYPE",
            "GRAPH_URL",
            "GRAPH_NAME",
        ]);
        let index = ColumnIndex::from_header(&header).unwrap();
        assert_eq!(index.width(), 5);

        let record = StringRecord::from(vec!["8", "warm cache", "pagerank", "http://y/g", "g"]);
        let experiment = Experiment::from_csv_record(&record, &index, 1).unwrap();
        assert_eq!(
            experiment,
            Experiment {
                graph_name: "g".into(),
                graph_url: "http://y/g".into(),
                threads: "8".into(),
                analysis_type: "pagerank".into(),
            }
        );
    }

    #[test]
    fn header_lookup_is_case_sensitive() {
        let header = StringRecord::from(vec!["GRAPH_NAME", "GRAPH_URL", "threads", "ANALYSIS_TYPE"]);

        let err = ColumnIndex::from_header(&header).unwrap_err();
        assert!(matches!(err, GenerateError::MissingColumn(THREADS)));
    }

    #[test]
    fn short_row_is_rejected() {
        let header = StringRecord::from(REQUIRED_COLUMNS.to_vec());
        let index = ColumnIndex::from_header(&header).unwrap();
        let record = StringRecord::from(vec!["g", "http://y/g"]);

        let err = Experiment::from_csv_record(&record, &index, 3).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::ShortRow {
                row: 3,
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn command_uses_fixed_flag_order() {
        let experiment = web_google();

        assert_eq!(
            experiment.command("./scripts/execute_single_bench.sh").to_string(),
            "./scripts/execute_single_bench.sh -graph-name web-Google -graph-url http://x/web-Google.tsv -threads 4 -analysis-type bfs"
        );
    }

    #[test]
    fn command_does_not_quote_values() {
        let experiment = Experiment {
            graph_name: "road net".into(),
            threads: "$(nproc)".into(),
            ..web_google()
        };

        assert_eq!(
            experiment.command("run.sh").to_string(),
            "run.sh -graph-name road net -graph-url http://x/web-Google.tsv -threads $(nproc) -analysis-type bfs"
        );
    }
}
