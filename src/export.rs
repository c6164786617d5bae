//! Saving the summary to a dated text file.

use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound on `_N` suffixes tried before giving up.
const MAX_SUFFIX: u32 = 999;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No free file name for summary_{date} in '{dir}'")]
    NoFreeName { dir: PathBuf, date: NaiveDate },
}

/// `summary_YYYY-MM-DD.txt`, or `summary_YYYY-MM-DD_N.txt` for `suffix > 0`.
pub fn summary_file_name(date: NaiveDate, suffix: u32) -> String {
    if suffix == 0 {
        format!("summary_{}.txt", date.format("%Y-%m-%d"))
    } else {
        format!("summary_{}_{}.txt", date.format("%Y-%m-%d"), suffix)
    }
}

/// Today's date in UTC, as used for export names.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Write `text` into `dir` under the first free dated name.
///
/// Existing files are never overwritten.
pub fn write_summary(dir: &Path, date: NaiveDate, text: &str) -> Result<PathBuf, ExportError> {
    for suffix in 0..=MAX_SUFFIX {
        let path = dir.join(summary_file_name(date, suffix));
        let file = OpenOptions::new().write(true).create_new(true).open(&path);
        let mut file = match file {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(source) => return Err(ExportError::Write { path, source }),
        };
        if let Err(source) = file.write_all(text.as_bytes()).and_then(|_| file.flush()) {
            return Err(ExportError::Write { path, source });
        }
        return Ok(path);
    }

    Err(ExportError::NoFreeName {
        dir: dir.to_path_buf(),
        date,
    })
}
