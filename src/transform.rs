// src/transform.rs
use crate::classify::{entity_labels, seed_labels};
use crate::config::consts::SOURCE_KEY;
use crate::core::{get_entity_name, get_uri, Diagnostics};
use crate::model::{HeritrixSeed, Label, School, VeidemannSeed};

/// Maps legacy seeds to Veidemann records. Holds only run-wide, read-only
/// context, so transforming the same seed twice yields the same record.
pub struct Transformer<'a> {
    schools: &'a [School],
    provenance: Label,
}

impl<'a> Transformer<'a> {
    pub fn new(schools: &'a [School], source_tag: &str) -> Self {
        Self {
            schools,
            provenance: label!(SOURCE_KEY => source_tag),
        }
    }

    /// Build the output candidate for `seed`. URL failures go to `diag`; the
    /// record is returned either way and judged with [`VeidemannSeed::verdict`].
    pub fn transform(&self, seed: &HeritrixSeed, diag: &mut dyn Diagnostics) -> VeidemannSeed {
        let url = seed.url.as_deref().unwrap_or("");

        VeidemannSeed {
            entity_name: get_entity_name(url, diag),
            uri: get_uri(url, diag),
            entity_description: seed.description.clone(),
            entity_label: entity_labels(seed, &self.provenance, self.schools),
            seed_label: seed_labels(seed, &self.provenance),
            seed_description: s!(),
        }
    }
}
