// src/classify/mod.rs
//! # Label classification
//!
//! Turns a legacy seed into the `{key, value}` labels Veidemann filters on.
//!
//! - `entity`: industry (`næring`) labels from URL/description substrings and
//!   the school/university lookup list.
//! - `seed`: the Heritrix crawl profiles the seed was registered under.
//!
//! Both label lists always open with the same provenance label
//! (`source=<tag>`), exactly once. Matching is case-sensitive and
//! non-exclusive: every rule that matches contributes a label, in table order.
pub mod entity;
pub mod seed;

pub use entity::{entity_labels, Field, Rule, INDUSTRY_RULES};
pub use seed::{has_profiles, seed_labels};
