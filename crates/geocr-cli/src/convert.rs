//! # Convert CLI — UMM-G to GeoCroissant.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a local UMM-G record and print the result:
//! geocr convert data/HLS.S30.T16SDD.2016134T163332.v2.0.umm.json
//!
//! # Convert the first granule of a CMR search and save it:
//! geocr convert \
//!   "https://cmr.earthdata.nasa.gov/search/granules.umm_json?concept_id=G2700719831-LPCLOUD" \
//!   --output out/hls_geocroissant.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use geocr_fetch::config::DEFAULT_TIMEOUT_SECS;
use geocr_fetch::{convert_source, DocumentSource, FetchConfig};

/// Convert subcommand arguments.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// UMM-G source: a local JSON file or an HTTP(S) URL.
    pub input: String,

    /// Write the GeoCroissant document here instead of standard output.
    /// Missing parent directories are created.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request timeout for URL sources, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print single-line JSON instead of indented JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the convert subcommand.
pub async fn run_convert(args: &ConvertArgs) -> Result<u8> {
    let source = DocumentSource::parse(&args.input)
        .with_context(|| format!("invalid input location {}", args.input))?;
    let config = FetchConfig::with_timeout(args.timeout_secs);

    let document = convert_source(source, args.output.as_deref(), &config)
        .await
        .with_context(|| format!("failed to convert {}", args.input))?;

    match &args.output {
        Some(path) => {
            println!("Wrote GeoCroissant document to {}", path.display());
        }
        None => {
            let text = if args.compact {
                serde_json::to_string(&document)?
            } else {
                serde_json::to_string_pretty(&document)?
            };
            println!("{text}");
        }
    }

    tracing::debug!(
        id = document["@id"].as_str().unwrap_or_default(),
        "conversion finished"
    );
    Ok(0)
}
