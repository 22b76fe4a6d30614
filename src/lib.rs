// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod classify;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod model;
pub mod progress;
pub mod runner;
pub mod source;
pub mod transform;

pub use error::{ConvertError, Result};
pub use model::{HeritrixSeed, Label, School, VeidemannSeed, Verdict};
pub use transform::Transformer;
