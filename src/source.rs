// src/source.rs
//! Input side: the seed dump and the school lookup list.
//!
//! The dump can be large, so it is never materialized. [`for_each_seed`]
//! drives a serde visitor over the top-level array and hands each element to a
//! callback as soon as it is decoded.

use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::model::{HeritrixSeed, School};

/// Load the ordered `{url, institusjon}` list.
pub fn load_schools(path: &Path) -> Result<Vec<School>> {
    let file = File::open(path).map_err(|e| ConvertError::open(path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ConvertError::json(path.display().to_string(), e))
}

/// Open `path` and stream its seeds. See [`for_each_seed`].
pub fn for_each_seed_in<F>(path: &Path, on_seed: F) -> Result<usize>
where
    F: FnMut(Option<HeritrixSeed>) -> Result<()>,
{
    let file = File::open(path).map_err(|e| ConvertError::open(path, e))?;
    for_each_seed(BufReader::new(file), path.display().to_string(), on_seed)
}

/// Decode a JSON array of seeds one element at a time.
///
/// `on_seed` gets `None` for elements that are not JSON objects. The first
/// error it returns stops the stream and is returned as-is. Returns the number
/// of elements seen.
pub fn for_each_seed<R, F>(reader: R, what: impl Into<String>, on_seed: F) -> Result<usize>
where
    R: Read,
    F: FnMut(Option<HeritrixSeed>) -> Result<()>,
{
    let what = what.into();
    let mut sink_error = None;
    let mut de = serde_json::Deserializer::from_reader(reader);

    let seen = de.deserialize_seq(SeedVisitor {
        on_seed,
        sink_error: &mut sink_error,
    });

    if let Some(e) = sink_error {
        return Err(e);
    }
    let seen = seen.map_err(|e| ConvertError::json(what.clone(), e))?;
    de.end().map_err(|e| ConvertError::json(what, e))?;
    Ok(seen)
}

struct SeedVisitor<'e, F> {
    on_seed: F,
    sink_error: &'e mut Option<ConvertError>,
}

impl<'de, F> Visitor<'de> for SeedVisitor<'_, F>
where
    F: FnMut(Option<HeritrixSeed>) -> Result<()>,
{
    type Value = usize;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON array of seed records")
    }

    fn visit_seq<A>(mut self, mut seq: A) -> std::result::Result<usize, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut seen = 0;
        while let Some(value) = seq.next_element::<Value>()? {
            seen += 1;
            // Derived structs also decode from arrays by position; only objects are seeds.
            let seed = value
                .is_object()
                .then(|| serde_json::from_value::<HeritrixSeed>(value).ok())
                .flatten();
            if let Err(e) = (self.on_seed)(seed) {
                *self.sink_error = Some(e);
                return Err(de::Error::custom("record sink failed"));
            }
        }
        Ok(seen)
    }
}
