// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Everything a conversion run needs to know. Passed explicitly into the runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub paths: PathOptions,
    /// Value of the `source` provenance label put first on every entity and seed.
    pub source_tag: String,
    /// Emit a progress line every N records; 0 disables it.
    pub progress_every: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            paths: PathOptions::default(),
            source_tag: s!(DEFAULT_SOURCE_VALUE),
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathOptions {
    pub input: PathBuf,
    pub schools: PathBuf,
    pub accepted: PathBuf,
    pub rejected: PathBuf,
    pub error_urls: PathBuf,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            schools: PathBuf::from(DEFAULT_SCHOOLS),
            accepted: PathBuf::from(DEFAULT_ACCEPTED_OUT),
            rejected: PathBuf::from(DEFAULT_REJECTED_OUT),
            error_urls: PathBuf::from(DEFAULT_ERROR_URLS_OUT),
        }
    }
}

impl PathOptions {
    /// Place all three outputs in `dir`, keeping their default file names.
    pub fn set_output_dir(&mut self, dir: &std::path::Path) {
        for p in [&mut self.accepted, &mut self.rejected, &mut self.error_urls] {
            if let Some(name) = p.file_name().map(|n| n.to_os_string()) {
                *p = dir.join(name);
            }
        }
    }
}
