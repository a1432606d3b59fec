//! Temporal extent extractor.

use crate::model::Granule;

/// Acquisition range. Either bound may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemporalInfo {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Read `TemporalExtent.RangeDateTime`.
///
/// A present `RangeDateTime` yields a value even when both bounds are
/// missing; only an absent `TemporalExtent` or `RangeDateTime` yields `None`.
pub fn extract_temporal(granule: &Granule) -> Option<TemporalInfo> {
    let range = granule.temporal_extent.as_ref()?.range_date_time.as_ref()?;
    Some(TemporalInfo {
        start: range.beginning_date_time.clone(),
        end: range.ending_date_time.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    fn temporal(extent: Value) -> Option<TemporalInfo> {
        let granule = Granule::deserialize(&json!({"TemporalExtent": extent})).unwrap();
        extract_temporal(&granule)
    }

    #[test]
    fn reads_both_bounds() {
        let info = temporal(json!({"RangeDateTime": {
            "BeginningDateTime": "2020-01-01T00:00:00Z",
            "EndingDateTime": "2020-01-01T23:59:59Z"
        }}))
        .unwrap();
        assert_eq!(info.start.as_deref(), Some("2020-01-01T00:00:00Z"));
        assert_eq!(info.end.as_deref(), Some("2020-01-01T23:59:59Z"));
    }

    #[test]
    fn empty_range_is_retained() {
        assert_eq!(temporal(json!({"RangeDateTime": {}})), Some(TemporalInfo::default()));
    }

    #[test]
    fn missing_range_is_none() {
        assert_eq!(temporal(json!({})), None);
        assert_eq!(temporal(json!({"SingleDateTime": "2020-01-01T00:00:00Z"})), None);
        assert_eq!(extract_temporal(&Granule::default()), None);
    }

    #[test]
    fn partial_range() {
        let info = temporal(json!({"RangeDateTime": {"BeginningDateTime": "2020-01-01"}})).unwrap();
        assert_eq!(info.start.as_deref(), Some("2020-01-01"));
        assert_eq!(info.end, None);
    }
}
