// src/core/name.rs
use super::diag::Diagnostics;
use super::uri::{parse_seed_url, SeedUrl};
use crate::config::consts::{DOTLESS_HOST_NAME, WWW_MARKER};

/// Display name for the entity a seed belongs to, derived from its hostname.
///
/// `www.kommune-x.no` → `Kommune-x`, `ndla.blogg.no` → `Ndla blogg`.
/// Dotless hosts (`localhost`) get the placeholder `" "`, and `www.x` ends up
/// as `""`; both are returned as-is.
///
/// Returns `None` after writing one line to `diag` when no hostname can be
/// extracted.
pub fn get_entity_name(raw: &str, diag: &mut dyn Diagnostics) -> Option<String> {
    let parsed = parse_seed_url(raw);
    let Some(host) = parsed.host() else {
        let partial = match &parsed {
            SeedUrl::Unusable(attempt) => attempt.to_json(),
            SeedUrl::Usable { url, .. } => s!(url.as_str()),
        };
        diag.url_error(&join!(
            "Could not create entityname based on hostname from url: ",
            raw,
            &partial
        ));
        return None;
    };

    Some(capitalize_first(&name_from_host(host)))
}

fn name_from_host(host: &str) -> String {
    if !host.contains('.') {
        return s!(DOTLESS_HOST_NAME);
    }

    let mut labels: Vec<&str> = host.split('.').collect();
    labels.pop(); // TLD
    if labels.first().is_some_and(|l| l.contains(WWW_MARKER)) {
        labels.remove(0);
    }
    labels.join(" ")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}
