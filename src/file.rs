// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::error;

use crate::config::options::PathOptions;
use crate::core::Diagnostics;
use crate::error::{ConvertError, Result};
use crate::model::{VeidemannSeed, Verdict};

/// One JSON value per line.
pub struct JsonLines<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> JsonLines<W> {
    pub fn new(inner: W) -> Self {
        Self { out: BufWriter::new(inner) }
    }

    pub fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)
            .map_err(|e| ConvertError::json("output record", e))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

/// Plain-text line log backing the error-URL channel.
///
/// `Diagnostics` cannot fail, so the first write error is kept and reported
/// by [`LineLog::finish`].
pub struct LineLog<W: Write> {
    out: BufWriter<W>,
    lines: usize,
    failed: Option<std::io::Error>,
}

impl<W: Write> LineLog<W> {
    pub fn new(inner: W) -> Self {
        Self { out: BufWriter::new(inner), lines: 0, failed: None }
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn finish(mut self) -> Result<W> {
        if let Some(e) = self.failed.take() {
            return Err(e.into());
        }
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> Diagnostics for LineLog<W> {
    fn url_error(&mut self, line: &str) {
        if self.failed.is_some() {
            return;
        }
        match writeln!(self.out, "{line}") {
            Ok(()) => self.lines += 1,
            Err(e) => {
                error!("error-url log write failed: {e}");
                self.failed = Some(e);
            }
        }
    }
}

/// The three run outputs, opened once and closed once.
pub struct Outputs {
    pub accepted: JsonLines<File>,
    pub rejected: JsonLines<File>,
    pub error_urls: LineLog<File>,
}

impl Outputs {
    /// Create (truncate) all outputs, making parent directories as needed.
    pub fn create(paths: &PathOptions) -> Result<Self> {
        Ok(Self {
            accepted: JsonLines::new(create_file(&paths.accepted)?),
            rejected: JsonLines::new(create_file(&paths.rejected)?),
            error_urls: LineLog::new(create_file(&paths.error_urls)?),
        })
    }

    /// Append `record` to the stream its verdict selects.
    pub fn route(&mut self, record: &VeidemannSeed, verdict: Verdict) -> Result<()> {
        match verdict {
            Verdict::Accepted => self.accepted.write_record(record),
            Verdict::Rejected { .. } => self.rejected.write_record(record),
        }
    }

    pub fn finish(self) -> Result<()> {
        self.accepted.finish()?;
        self.rejected.finish()?;
        self.error_urls.finish()?;
        Ok(())
    }
}

pub fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    File::create(path).map_err(|e| ConvertError::open(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ConvertError::NotADirectory(PathBuf::from(dir)));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ConvertError::open(dir, e))?;
    }
    Ok(())
}
