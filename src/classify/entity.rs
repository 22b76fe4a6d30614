// src/classify/entity.rs
use crate::config::consts::INDUSTRY_KEY;
use crate::model::{HeritrixSeed, Label, School};

/// Which seed text a rule looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Url,
    UrlOrDescription,
}

/// Emits `næring=<value>` when any needle occurs in the selected text.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub field: Field,
    pub needles: &'static [&'static str],
    pub value: &'static str,
}

impl Rule {
    pub fn matches(&self, url: &str, description: &str) -> bool {
        self.needles.iter().any(|n| {
            url.contains(n) || (self.field == Field::UrlOrDescription && description.contains(n))
        })
    }
}

pub const INDUSTRY_RULES: &[Rule] = &[
    Rule { field: Field::Url, needles: &["blog"], value: "blogg" },
    Rule { field: Field::Url, needles: &["avis", "posten", "tidende", "blad"], value: "avis" },
    Rule { field: Field::Url, needles: &["kommune"], value: "kommune" },
    Rule { field: Field::Url, needles: &["twitter"], value: "twitter" },
    Rule { field: Field::UrlOrDescription, needles: &["fylkeskommune"], value: "fylkeskommune" },
    Rule { field: Field::UrlOrDescription, needles: &["parti"], value: "politisk parti" },
    Rule { field: Field::UrlOrDescription, needles: &["teater", "theater"], value: "teater" },
    Rule { field: Field::UrlOrDescription, needles: &["museum"], value: "museum" },
];

/// Provenance label, then one industry label per matching rule, then one per
/// matching school (in list order).
pub fn entity_labels(seed: &HeritrixSeed, provenance: &Label, schools: &[School]) -> Vec<Label> {
    let url = seed.url.as_deref().unwrap_or("");
    let description = seed.description_or_empty();

    let industries = INDUSTRY_RULES
        .iter()
        .filter(|rule| rule.matches(url, description))
        .map(|rule| label!(INDUSTRY_KEY => rule.value));

    let institutions = schools
        .iter()
        .filter(|school| url.contains(school.url.as_str()))
        .map(|school| label!(INDUSTRY_KEY => school.institution.as_str()));

    std::iter::once(provenance.clone())
        .chain(industries)
        .chain(institutions)
        .collect()
}
