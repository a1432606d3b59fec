//! # Document Assembler
//!
//! Merges the extractor and normalizer outputs into a [`Dataset`].
//!
//! ## Field precedence
//!
//! Every tier treats an empty string as absent.
//!
//! | Field         | 1st              | 2nd                              | Fallback            |
//! |---------------|------------------|----------------------------------|---------------------|
//! | `@id`         | `GranuleUR`      | `meta.concept-id`                | `"unnamed_dataset"` |
//! | `name`        | `EntryTitle`     | `CollectionReference.EntryTitle` | `"Unnamed Dataset"` |
//! | `version`     | `Version`        | `meta.revision-id`               | `"1.0.0"`           |
//! | `description` | `Abstract`       | `CollectionReference.Abstract`   | `""`                |
//!
//! `name` is sanitized and `version` normalized after selection.

use std::borrow::Cow;

use geocr_core::{
    normalize_version, sanitize_name, ChecksumProvider, CollectionSummary, DataGranuleSummary,
    Dataset, TemporalCoverage,
};

use crate::citation::extract_cite_as;
use crate::distribution::extract_distributions;
use crate::model::{present, Scalar};
use crate::platform::extract_platform;
use crate::source::GranuleRecord;
use crate::spatial::extract_spatial;
use crate::temporal::extract_temporal;

/// `@id` used when neither the granule nor CMR names the record.
pub const DEFAULT_ID: &str = "unnamed_dataset";

/// Title used when neither the granule nor its collection has one.
pub const DEFAULT_TITLE: &str = "Unnamed Dataset";

/// Assemble the output document for a resolved granule record.
pub fn assemble(record: &GranuleRecord, checksums: &dyn ChecksumProvider) -> Dataset {
    let GranuleRecord { meta, granule } = record;
    let collection = granule.collection_reference.as_ref();

    let id = present(&granule.granule_ur)
        .or_else(|| present(&meta.concept_id))
        .unwrap_or(DEFAULT_ID);

    let title = present(&granule.entry_title)
        .or_else(|| collection.and_then(|c| present(&c.entry_title)))
        .unwrap_or(DEFAULT_TITLE);

    let version: Option<Cow<'_, str>> = granule
        .version
        .as_ref()
        .and_then(Scalar::as_text)
        .or_else(|| meta.revision_id.as_ref().and_then(Scalar::as_text));

    let description = present(&granule.abstract_text)
        .or_else(|| collection.and_then(|c| present(&c.abstract_text)))
        .unwrap_or_default();

    let mut dataset = Dataset::new(
        id,
        sanitize_name(Some(title)),
        description,
        normalize_version(version.as_deref()),
        extract_cite_as(granule),
    );

    if let Some(spatial) = extract_spatial(granule) {
        dataset.bounding_box = spatial.bbox;
        dataset.geometry = spatial.geometry.filter(|wkt| !wkt.is_empty());
    }

    if let Some(temporal) = extract_temporal(granule) {
        let start = temporal.start.filter(|s| !s.is_empty());
        let end = temporal.end.filter(|s| !s.is_empty());
        if let (Some(start_date), Some(end_date)) = (start, end) {
            dataset.date_published = Some(start_date.clone());
            dataset.temporal = Some(TemporalCoverage {
                start_date,
                end_date,
            });
        }
    }

    if let Some(platform) = extract_platform(granule) {
        dataset.platform = Some(platform.platform);
        dataset.instrument = Some(platform.instrument);
    }

    dataset.distribution = extract_distributions(granule, checksums);
    dataset.additional_attributes = granule.additional_attributes.clone();

    dataset.collection = collection
        .filter(|c| !c.is_empty())
        .map(|c| CollectionSummary {
            short_name: c.member("ShortName"),
            version: c.member("Version"),
            entry_title: c.member("EntryTitle"),
        });

    dataset.data_granule = granule
        .data_granule
        .as_ref()
        .filter(|g| !g.is_empty())
        .map(|g| DataGranuleSummary {
            day_night_flag: g.member("DayNightFlag"),
            production_date_time: g.member("ProductionDateTime"),
            pge_version: g.member("PGEVersion"),
        });

    tracing::debug!(
        id = %dataset.id,
        distributions = dataset.distribution.len(),
        "assembled GeoCroissant dataset"
    );
    dataset
}
