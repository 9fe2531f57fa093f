use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::batch::{BatchConfig, BatchError, BatchProcessor};
use crate::parser::Series;
use crate::writer::DEFAULT_OUTPUT_DIR;

/// Sum user and sys time of every run in `time` output files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files with concatenated `time` output, one real/user/sys group per run.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory receiving the `UserSys_<suffix>` files.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Which series to write.
    #[arg(short, long, value_enum, default_value_t = Series::UserPlusSys)]
    pub series: Series,
}

impl Args {
    pub fn config(&self) -> BatchConfig {
        BatchConfig {
            output_dir: self.output_dir.clone(),
            series: self.series,
        }
    }
}

pub fn run(args: &Args) -> Result<(), BatchError> {
    let processor = BatchProcessor::new(args.config());
    processor.run(&args.files, &mut io::stdout().lock())?;
    Ok(())
}
