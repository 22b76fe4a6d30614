// src/model.rs
//! Record shapes on both sides of the conversion.
//!
//! - [`HeritrixSeed`] is one element of the legacy dump. Decoding is lenient:
//!   wrong-typed fields read as absent/unset instead of failing the record.
//!   `description` is kept as the raw JSON value so it can be copied through
//!   unchanged (`null` included).
//! - [`VeidemannSeed`] is what `veidemannctl` imports. Field order here is the
//!   key order of every emitted JSON line.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One legacy seed. Unknown fields (e.g. `deact`) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HeritrixSeed {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,

    #[serde(default, deserialize_with = "profile_flag")]
    pub p1: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p2: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p3: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p4: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p5: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p6: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p7: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p8: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p9: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p10: bool,
    #[serde(default, deserialize_with = "profile_flag")]
    pub p99: bool,
}

impl HeritrixSeed {
    /// Seed with only a URL; handy for tests and benches.
    pub fn with_url(url: &str) -> Self {
        Self { url: Some(s!(url)), ..Self::default() }
    }

    /// The URL if it is present and non-empty. Seeds without one are skipped.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Description text for matching; absent, null and non-strings read as empty.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_ref().and_then(Value::as_str).unwrap_or("")
    }

    /// Profile flags in declaration order.
    pub fn profile_flags(&self) -> [(&'static str, bool); 11] {
        [
            ("p1", self.p1),
            ("p2", self.p2),
            ("p3", self.p3),
            ("p4", self.p4),
            ("p5", self.p5),
            ("p6", self.p6),
            ("p7", self.p7),
            ("p8", self.p8),
            ("p9", self.p9),
            ("p10", self.p10),
            ("p99", self.p99),
        ]
    }
}

/// Strings stay strings; anything else (null, numbers, objects) is absent.
fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// `Some` whenever the key is present, so an explicit `null` survives.
fn present<'de, D>(de: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(de).map(Some)
}

/// A profile is set only when the flag is numerically exactly 1.
fn profile_flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(de)?.as_f64() == Some(1.0))
}

/// `{key, value}` classification tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Entry of the school/university lookup list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct School {
    pub url: String,
    #[serde(rename = "institusjon")]
    pub institution: String,
}

/// Output candidate. Built for every seed with a URL, valid or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeidemannSeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Input `description` as given; omitted only when the input had no such key.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub entity_description: Option<Value>,
    pub entity_label: Vec<Label>,
    pub seed_label: Vec<Label>,
    pub seed_description: String,
}

impl VeidemannSeed {
    /// Recomputed on every call; never stored on the record.
    pub fn verdict(&self) -> Verdict {
        let missing_name = self.entity_name.as_deref().is_none_or(str::is_empty);
        let missing_uri = self.uri.as_deref().is_none_or(str::is_empty);

        if missing_name || missing_uri {
            Verdict::Rejected { missing_name, missing_uri }
        } else {
            Verdict::Accepted
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected { missing_name: bool, missing_uri: bool },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}
