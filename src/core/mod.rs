// src/core/mod.rs

pub mod diag;
pub mod name;
pub mod uri;

pub use diag::{Diagnostics, NullDiagnostics};
pub use name::get_entity_name;
pub use uri::{get_uri, parse_seed_url, ParseAttempt, SeedUrl};
