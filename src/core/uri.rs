// src/core/uri.rs
//! Seed URL parsing with scheme inference.
//!
//! Legacy seeds are often stored without a scheme (`example.org/path`). Every
//! consumer goes through [`parse_seed_url`], which tries the text as given and,
//! only when it carries no scheme at all, once more with `http://` in front.
//!
//! An attempt is usable when it has a scheme, an authority (`//`), a non-empty
//! host and a serializable href. Parse errors never escape this module; they
//! become an unusable [`ParseAttempt`] that callers write to the error-URL log.

use serde::Serialize;
use tracing::warn;
use url::Url;

use super::diag::Diagnostics;
use crate::config::consts::INFERRED_SCHEME;

/// What a single parse attempt produced. Serialized as the "partial parse
/// state" in diagnostic lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseAttempt {
    pub input: String,
    pub scheme: Option<String>,
    pub slashes: bool,
    pub host: Option<String>,
    pub href: Option<String>,
    pub error: Option<String>,
}

impl ParseAttempt {
    fn from_url(input: &str, url: &Url) -> Self {
        Self {
            input: s!(input),
            scheme: Some(s!(url.scheme())),
            slashes: url.has_authority(),
            host: url.host_str().map(String::from),
            href: Some(s!(url.as_str())),
            error: None,
        }
    }

    fn from_error(input: &str, err: url::ParseError) -> Self {
        Self {
            input: s!(input),
            error: Some(err.to_string()),
            ..Self::default()
        }
    }

    pub fn is_usable(&self) -> bool {
        self.scheme.as_deref().is_some_and(|s| !s.is_empty())
            && self.slashes
            && self.host.as_deref().is_some_and(|h| !h.is_empty())
            && self.href.is_some()
    }

    /// Compact JSON form for the error-URL log.
    pub fn to_json(&self) -> String {
        // Plain strings/bools only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Outcome of [`parse_seed_url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedUrl {
    Usable { url: Url, inferred_scheme: bool },
    /// The last attempt made, for diagnostics.
    Unusable(ParseAttempt),
}

impl SeedUrl {
    pub fn host(&self) -> Option<&str> {
        match self {
            SeedUrl::Usable { url, .. } => url.host_str(),
            SeedUrl::Unusable(_) => None,
        }
    }
}

pub fn parse_seed_url(raw: &str) -> SeedUrl {
    let (url, first) = attempt(raw);

    // Anything that already names a scheme is judged as-is; retrying would
    // turn `http://bad host` into `http://http//bad%20host`.
    if first.scheme.is_some() || has_scheme_prefix(raw) {
        return settle(url, first, false);
    }

    let (url, second) = attempt(&join!(INFERRED_SCHEME, raw));
    settle(url, second, true)
}

fn attempt(input: &str) -> (Option<Url>, ParseAttempt) {
    match Url::parse(input) {
        Ok(url) => {
            let parsed = ParseAttempt::from_url(input, &url);
            (Some(url), parsed)
        }
        Err(e) => {
            warn!(input, error = %e, "url parse failed");
            (None, ParseAttempt::from_error(input, e))
        }
    }
}

fn settle(url: Option<Url>, attempt: ParseAttempt, inferred_scheme: bool) -> SeedUrl {
    match url {
        Some(url) if attempt.is_usable() => SeedUrl::Usable { url, inferred_scheme },
        _ => SeedUrl::Unusable(attempt),
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"` after leading blanks/controls.
fn has_scheme_prefix(raw: &str) -> bool {
    let s = raw.trim_start_matches(|c: char| c <= ' ');
    let mut chars = s.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {}
            _ => return false,
        }
    }
    false
}

/// Normalized absolute URL for `raw`, or `None` after logging one line to `diag`.
pub fn get_uri(raw: &str, diag: &mut dyn Diagnostics) -> Option<String> {
    match parse_seed_url(raw) {
        SeedUrl::Usable { url, .. } => Some(url.into()),
        SeedUrl::Unusable(attempt) => {
            diag.url_error(&join!(raw, ": ", &attempt.to_json()));
            None
        }
    }
}
