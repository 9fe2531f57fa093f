use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

pub const DEFAULT_OUTPUT_DIR: &str = "UserPlusSysTimes";
pub const OUTPUT_PREFIX: &str = "UserSys_";

/// Renders `values` as a comma separated list without brackets,
/// e.g. `5.0, 1.25`.
pub fn format_series(values: &[f64]) -> String {
    let mut out = String::new();
    let mut first = true;
    for value in values {
        if !first {
            out.push_str(", ");
        } else {
            first = false
        }
        out.push_str(&format_value(*value));
    }
    out
}

pub fn write_series(output: &mut dyn Write, values: &[f64]) -> io::Result<()> {
    output.write_all(format_series(values).as_bytes())?;
    output.flush()
}

/// Writes `values` to a new file at `path`, replacing any previous content.
pub fn write_series_file(path: &Path, values: &[f64]) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_series(&mut file, values)
}

/// `<dir>/UserSys_<suffix>`, where suffix is what follows the last `_` of
/// the input path.
pub fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    let suffix = match input.rsplit_once('_') {
        Some((_, suffix)) => suffix,
        None => &*input,
    };
    dir.join(format!("{}{}", OUTPUT_PREFIX, suffix))
}

pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        debug!("creating output directory {}", dir.display());
    }
    fs::create_dir_all(dir)
}

// Shortest round-trip digits, keeping `.0` on integral values and switching
// to exponent notation outside [1e-4, 1e16).
fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let inf = if value > 0.0 { "inf" } else { "-inf" };
        return inf.to_string();
    }

    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && (exponent < -4 || exponent >= 16) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
