// src/classify/seed.rs
use crate::config::consts::PROFILE_KEY;
use crate::model::{HeritrixSeed, Label};

/// Comma-joined names of every profile flag set to exactly 1, in declaration
/// order (`"p1,p3,p99"`); `None` when no flag is set.
pub fn has_profiles(seed: &HeritrixSeed) -> Option<String> {
    let active: Vec<&str> = seed
        .profile_flags()
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();

    (!active.is_empty()).then(|| active.join(","))
}

pub fn seed_labels(seed: &HeritrixSeed, provenance: &Label) -> Vec<Label> {
    let mut labels = vec![provenance.clone()];
    if let Some(profiles) = has_profiles(seed) {
        labels.push(label!(PROFILE_KEY => profiles));
    }
    labels
}
