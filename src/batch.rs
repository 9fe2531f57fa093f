use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::parser::{self, ParseError, Series};
use crate::writer;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to create output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to report progress")]
    Progress(#[source] io::Error),
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub series: Series,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            output_dir: PathBuf::from(writer::DEFAULT_OUTPUT_DIR),
            series: Series::UserPlusSys,
        }
    }
}

pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        BatchProcessor { config }
    }

    /// Processes `paths` one after another, stopping at the first failure.
    /// Progress and unrecognized lines go to `console`.
    pub fn run<P: AsRef<Path>>(
        &self,
        paths: &[P],
        console: &mut dyn Write,
    ) -> Result<Vec<PathBuf>, BatchError> {
        let dir = &self.config.output_dir;
        writer::ensure_output_dir(dir).map_err(|source| BatchError::OutputDir {
            path: dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            writeln!(console, "{}", path.display()).map_err(BatchError::Progress)?;

            let destination = writer::output_path(dir, path);
            let series = parser::parse_file(path, console).map_err(|source| BatchError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            let values = series.series(self.config.series);
            writer::write_series_file(&destination, values).map_err(|source| {
                BatchError::Write {
                    path: destination.clone(),
                    source,
                }
            })?;

            info!(
                "{}: wrote {} {} values to {}",
                path.display(),
                values.len(),
                self.config.series,
                destination.display()
            );
            written.push(destination);
        }

        Ok(written)
    }

    /// Parses one file and writes the selected series to `output`.
    pub fn process_file(
        &self,
        filename: &Path,
        output: &mut dyn Write,
        console: &mut dyn Write,
    ) -> Result<(), BatchError> {
        let series = parser::parse_file(filename, console).map_err(|source| BatchError::Parse {
            path: filename.to_path_buf(),
            source,
        })?;
        writer::write_series(output, series.series(self.config.series)).map_err(|source| {
            BatchError::Write {
                path: filename.to_path_buf(),
                source,
            }
        })
    }
}
