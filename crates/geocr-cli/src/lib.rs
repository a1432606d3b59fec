//! # geocr-cli — GeoCroissant Converter CLI
//!
//! Provides the `geocr` command-line interface over `geocr-fetch`.
//!
//! ## Subcommands
//!
//! - `geocr convert` — Convert a UMM-G file, URL or CMR search result to
//!   GeoCroissant JSON-LD.
//!
//! ```bash
//! geocr convert granule.umm.json --output granule.geocroissant.json
//! geocr -v convert "https://cmr.earthdata.nasa.gov/search/granules.umm_json?concept_id=G2700719831-LPCLOUD"
//! ```

pub mod convert;
