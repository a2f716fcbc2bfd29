//! Column file helpers.
//!
//! ## Purpose
//!
//! This module reads sampled series from whitespace-delimited text and writes
//! the `x y residual` export produced after smoothing.
//!
//! ## Design notes
//!
//! * **Reader-agnostic**: Parsing works on any `BufRead`; writing on any `Write`.
//! * **Comments**: Blank lines and lines starting with `#` are skipped.
//! * **Extra columns**: Only the first two columns are read.
//! * **Suffix rule**: Export paths get a `.txt` suffix unless already present.
//!
//! ## Non-goals
//!
//! * No file dialogs, delimiters other than whitespace, or header detection.

// External dependencies
use core::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// Suffix appended to export paths.
pub const EXPORT_SUFFIX: &str = ".txt";

// ============================================================================
// Reading
// ============================================================================

/// Read `(x, y)` from the first two whitespace-delimited columns.
pub fn read_columns<R: BufRead>(reader: R) -> Result<(Vec<f64>, Vec<f64>), SmoothError> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (xs, ys) = match (fields.next(), fields.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(SmoothError::Parse {
                    line: lineno + 1,
                    message: "expected at least two columns".to_string(),
                });
            }
        };

        x.push(parse_field(xs, lineno + 1)?);
        y.push(parse_field(ys, lineno + 1)?);
    }

    Ok((x, y))
}

/// Read `(x, y)` columns from a file.
pub fn read_columns_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<f64>, Vec<f64>), SmoothError> {
    let file = File::open(path)?;
    read_columns(std::io::BufReader::new(file))
}

fn parse_field(token: &str, line: usize) -> Result<f64, SmoothError> {
    token.parse::<f64>().map_err(|e| SmoothError::Parse {
        line,
        message: format!("invalid number '{token}': {e}"),
    })
}

// ============================================================================
// Writing
// ============================================================================

/// Write one `x y residual` row per sample.
pub fn write_columns<W: Write, T: Display>(
    mut writer: W,
    x: &[T],
    y: &[T],
    residuals: &[T],
) -> Result<(), SmoothError> {
    for other in [y.len(), residuals.len()] {
        if other != x.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: x.len(),
                y_len: other,
            });
        }
    }

    for ((xi, yi), ri) in x.iter().zip(y.iter()).zip(residuals.iter()) {
        writeln!(writer, "{xi} {yi} {ri}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Path with the export suffix appended unless already present.
pub fn export_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let ends_with_suffix = path
        .to_str()
        .map(|s| s.ends_with(EXPORT_SUFFIX))
        .unwrap_or(false);

    if ends_with_suffix {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(EXPORT_SUFFIX);
        PathBuf::from(raw)
    }
}

/// Write the export file and return the path written.
pub fn write_export<P: AsRef<Path>, T: Display>(
    path: P,
    x: &[T],
    y: &[T],
    residuals: &[T],
) -> Result<PathBuf, SmoothError> {
    let target = export_path(path);
    let file = File::create(&target)?;
    write_columns(BufWriter::new(file), x, y, residuals)?;
    Ok(target)
}
