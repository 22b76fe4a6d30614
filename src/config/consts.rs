// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "input/heritrixSeeds.json";
pub const DEFAULT_SCHOOLS: &str = "input/skolerOgUniversiteter.json";

// Output
pub const DEFAULT_ACCEPTED_OUT: &str = "output/veidemannSeeds.json";
pub const DEFAULT_REJECTED_OUT: &str = "output/failed_heritrix_seeds.json";
pub const DEFAULT_ERROR_URLS_OUT: &str = "output/failed_heritrix_url.txt";

// Labels
pub const SOURCE_KEY: &str = "source";
pub const DEFAULT_SOURCE_VALUE: &str = "heritrix";
pub const INDUSTRY_KEY: &str = "næring";
pub const PROFILE_KEY: &str = "heritrix_profile";

// URL parsing
pub const INFERRED_SCHEME: &str = "http://";
pub const WWW_MARKER: &str = "www";
pub const DOTLESS_HOST_NAME: &str = " ";

// Progress
pub const DEFAULT_PROGRESS_EVERY: usize = 10_000;
