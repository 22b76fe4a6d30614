// src/runner.rs
use std::{
    fmt,
    path::PathBuf,
    time::{Duration, Instant},
};

use tracing::{debug, error, info};

use crate::{
    config::options::ConvertOptions,
    error::{ConvertError, Result},
    file::Outputs,
    model::Verdict,
    progress::Progress,
    source,
    transform::Transformer,
};

/// Counters for the end-of-run summary. Only the runner touches them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Every element of the input array.
    pub checked: usize,
    /// Elements without a usable `url`; never transformed.
    pub skipped: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub missing_name: usize,
    pub missing_uri: usize,
}

impl Counters {
    pub fn count(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Accepted => self.accepted += 1,
            Verdict::Rejected { missing_name, missing_uri } => {
                self.rejected += 1;
                self.missing_name += usize::from(missing_name);
                self.missing_uri += usize::from(missing_uri);
            }
        }
    }

    /// `checked == accepted + rejected + skipped`
    pub fn is_balanced(&self) -> bool {
        self.checked == self.accepted + self.rejected + self.skipped
    }
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub counters: Counters,
    pub error_url_lines: usize,
    pub elapsed: Duration,
    pub rejected_path: PathBuf,
    /// Set when the input could not be opened or stopped decoding partway.
    /// The counters still cover every record routed before that point.
    pub input_error: Option<ConvertError>,
}

const RULE: &str = "*****************************************************************************************************";

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counters;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Checked: {} seeds from heritrix", c.checked)?;
        writeln!(f, "Created: {} seeds for Veidemann", c.accepted)?;
        writeln!(f, "Skipped: {} seeds without url", c.skipped)?;
        writeln!(
            f,
            "Rejected: {} seeds, {} with invalid url and {} with invalid name",
            c.rejected, c.missing_uri, c.missing_name
        )?;
        writeln!(
            f,
            "These are not part of the import and can be inspected in: {}",
            self.rejected_path.display()
        )?;
        if let Some(e) = &self.input_error {
            writeln!(f, "Input ended early: {e}")?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Took: {:.3} seconds", self.elapsed.as_secs_f64())?;
        write!(f, "{RULE}")
    }
}

/// Convert the whole input dump. Records are read, transformed and routed one
/// at a time; per-record failures only affect routing.
///
/// An unreadable or malformed input still yields a summary, with the error in
/// [`RunSummary::input_error`]. Errors returned here are about the school list
/// or the outputs.
pub fn run(
    opts: &ConvertOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let t0 = Instant::now();
    let paths = &opts.paths;

    let schools = source::load_schools(&paths.schools)?;
    info!(
        input = %paths.input.display(),
        schools = schools.len(),
        "converting seeds"
    );

    let transformer = Transformer::new(&schools, &opts.source_tag);
    let mut outputs = Outputs::create(paths)?;
    let mut counters = Counters::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin();
    }

    let mut output_failed = false;
    let streamed = source::for_each_seed_in(&paths.input, |seed| {
        counters.checked += 1;

        let Some(seed) = seed.filter(|s| s.url().is_some()) else {
            counters.skipped += 1;
            return Ok(());
        };

        let record = transformer.transform(&seed, &mut outputs.error_urls);
        let verdict = record.verdict();
        if let Err(e) = outputs.route(&record, verdict) {
            output_failed = true;
            return Err(e);
        }
        counters.count(verdict);

        if !verdict.is_accepted() {
            debug!(url = seed.url(), ?verdict, "seed rejected");
        }
        if let Some(p) = progress.as_deref_mut() {
            p.record_done(counters.checked, verdict);
        }
        Ok(())
    });

    let input_error = match streamed {
        Ok(seen) => {
            debug_assert_eq!(seen, counters.checked);
            None
        }
        Err(e) if output_failed => return Err(e),
        Err(e) => {
            error!(checked = counters.checked, "input stopped: {e}");
            Some(e)
        }
    };

    let error_url_lines = outputs.error_urls.lines();
    outputs.finish()?;

    let summary = RunSummary {
        counters,
        error_url_lines,
        elapsed: t0.elapsed(),
        rejected_path: paths.rejected.clone(),
        input_error,
    };
    info!(
        checked = counters.checked,
        accepted = counters.accepted,
        rejected = counters.rejected,
        "conversion finished"
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(summary)
}
