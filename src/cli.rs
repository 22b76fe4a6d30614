// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::options::ConvertOptions;
use crate::model::Verdict;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Convert a Heritrix seed dump into Veidemann import records.
///
/// With no flags, reads and writes the fixed default paths.
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Args {
    /// JSON array dump of Heritrix seeds
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// JSON list of {url, institusjon} school entries
    #[arg(long)]
    pub schools: Option<PathBuf>,
    /// Directory for all three outputs (keeps default file names)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Accepted records (JSON lines)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Rejected records (JSON lines)
    #[arg(long)]
    pub failed: Option<PathBuf>,
    /// Diagnostic lines for unparsable URLs
    #[arg(long)]
    pub error_urls: Option<PathBuf>,
    /// Value of the `source` provenance label
    #[arg(long)]
    pub source_tag: Option<String>,
    /// Log progress every N records (0 = off)
    #[arg(long)]
    pub progress_every: Option<usize>,
}

impl Args {
    /// Defaults, overridden by whatever was given on the command line.
    /// `--out-dir` applies first so explicit file flags win over it.
    pub fn into_options(self) -> ConvertOptions {
        let mut opts = ConvertOptions::default();
        let paths = &mut opts.paths;

        if let Some(dir) = self.out_dir {
            paths.set_output_dir(&dir);
        }
        if let Some(p) = self.input { paths.input = p; }
        if let Some(p) = self.schools { paths.schools = p; }
        if let Some(p) = self.out { paths.accepted = p; }
        if let Some(p) = self.failed { paths.rejected = p; }
        if let Some(p) = self.error_urls { paths.error_urls = p; }
        if let Some(tag) = self.source_tag { opts.source_tag = tag; }
        if let Some(n) = self.progress_every { opts.progress_every = n; }
        opts
    }
}

/// Logs a line every `every` routed records. Skipped records are not counted.
pub struct LogProgress {
    every: usize,
    routed: usize,
    accepted: usize,
    reports: usize,
}

impl LogProgress {
    pub fn new(every: usize) -> Self {
        Self { every, routed: 0, accepted: 0, reports: 0 }
    }

    /// Progress lines logged so far.
    pub fn reports(&self) -> usize {
        self.reports
    }
}

impl Progress for LogProgress {
    fn begin(&mut self) {
        info!("reading seeds…");
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn record_done(&mut self, index: usize, verdict: Verdict) {
        self.routed += 1;
        if verdict.is_accepted() {
            self.accepted += 1;
        }
        if self.every > 0 && self.routed % self.every == 0 {
            self.reports += 1;
            self.log(&format!(
                "{index} seeds checked, {} converted, {} accepted so far",
                self.routed, self.accepted
            ));
        }
    }

    fn finish(&mut self, summary: &RunSummary) {
        if summary.error_url_lines > 0 {
            self.log(&format!("{} unparsable url lines written", summary.error_url_lines));
        }
    }
}

/// Parse the command line, run the conversion and print the summary.
/// The summary is printed even when the input broke off; that error is
/// returned afterwards.
pub fn run() -> crate::error::Result<()> {
    let opts = Args::parse().into_options();
    let mut progress = LogProgress::new(opts.progress_every);

    let mut summary = runner::run(&opts, Some(&mut progress))?;
    println!("{summary}");
    match summary.input_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
