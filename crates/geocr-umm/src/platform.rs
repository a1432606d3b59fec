//! Platform and instrument extractor.

use crate::model::Granule;

/// Name used for a platform or instrument the record does not name.
pub const UNKNOWN: &str = "Unknown";

/// Acquisition platform and its first instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub platform: String,
    pub instrument: String,
    pub platform_long_name: String,
    pub instrument_long_name: String,
}

/// Read the first platform and its first instrument.
///
/// Returns `None` when `Platforms` is empty; no defaults are synthesized in
/// that case.
pub fn extract_platform(granule: &Granule) -> Option<PlatformInfo> {
    let platform = granule.platforms.first()?;
    let instrument = platform.instruments.first();

    Some(PlatformInfo {
        platform: platform.short_name.clone().unwrap_or_else(|| UNKNOWN.to_owned()),
        instrument: instrument
            .and_then(|i| i.short_name.clone())
            .unwrap_or_else(|| UNKNOWN.to_owned()),
        platform_long_name: platform.long_name.clone().unwrap_or_default(),
        instrument_long_name: instrument
            .and_then(|i| i.long_name.clone())
            .unwrap_or_default(),
    })
}
