// src/core/diag.rs
/// Sink for the error-URL channel: one free-text line per URL that could not
/// be turned into a URI or an entity name.
pub trait Diagnostics {
    fn url_error(&mut self, line: &str);
}

/// Drops every line.
pub struct NullDiagnostics;
impl Diagnostics for NullDiagnostics {
    fn url_error(&mut self, _line: &str) {}
}

/// Collects lines in memory (tests, dry runs).
impl Diagnostics for Vec<String> {
    fn url_error(&mut self, line: &str) {
        self.push(s!(line));
    }
}
