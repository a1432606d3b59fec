//! # GeoCroissant Document
//!
//! The typed output of a conversion. Serializing a [`Dataset`] yields the
//! GeoCroissant JSON-LD tree: the mandatory Croissant fields, then each
//! optional geospatial block only when it carries data.
//!
//! Optional blocks are `Option`/`Vec` fields skipped during serialization
//! when empty, so an absent block never appears as `null`. The members of
//! [`CollectionSummary`] and [`DataGranuleSummary`] are the exception: they
//! carry source values verbatim, and a missing member serializes as `null`.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::context::{self, geocroissant_context};

/// A GeoCroissant `Dataset` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// The fixed JSON-LD context.
    #[serde(rename = "@context")]
    pub context: &'static Value,
    /// Always `"Dataset"`.
    #[serde(rename = "@type")]
    pub dataset_type: &'static str,
    /// Dataset identifier.
    #[serde(rename = "@id")]
    pub id: String,
    /// Identifier-safe dataset name.
    pub name: String,
    pub description: String,
    /// Dotted three-component version.
    pub version: String,
    pub license: &'static str,
    #[serde(rename = "conformsTo")]
    pub conforms_to: &'static str,
    #[serde(rename = "citeAs")]
    pub cite_as: String,

    /// `[west, south, east, north]`.
    #[serde(rename = "geocr:BoundingBox", skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<[Number; 4]>,
    /// WKT polygon.
    #[serde(rename = "geocr:Geometry", skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    #[serde(rename = "dct:temporal", skip_serializing_if = "Option::is_none")]
    pub temporal: Option<TemporalCoverage>,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(rename = "geocr:Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(rename = "geocr:Instrument", skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub distribution: Vec<FileObject>,
    /// Source attributes, passed through unchanged.
    #[serde(
        rename = "geocr:AdditionalAttributes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_attributes: Vec<Value>,
    #[serde(rename = "geocr:Collection", skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionSummary>,
    #[serde(rename = "geocr:DataGranule", skip_serializing_if = "Option::is_none")]
    pub data_granule: Option<DataGranuleSummary>,
}

impl Dataset {
    /// Create a dataset carrying only the mandatory fields.
    ///
    /// `@context`, `@type`, `license` and `conformsTo` are fixed; every
    /// optional block starts out absent.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
        cite_as: impl Into<String>,
    ) -> Self {
        Self {
            context: geocroissant_context(),
            dataset_type: context::DATASET_TYPE,
            id: id.into(),
            name: name.into(),
            description: description.into(),
            version: version.into(),
            license: context::LICENSE,
            conforms_to: context::CONFORMS_TO,
            cite_as: cite_as.into(),
            bounding_box: None,
            geometry: None,
            temporal: None,
            date_published: None,
            platform: None,
            instrument: None,
            distribution: Vec::new(),
            additional_attributes: Vec::new(),
            collection: None,
            data_granule: None,
        }
    }

    /// Serialize into a JSON value tree.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// `dct:temporal` date pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalCoverage {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

/// A `cr:FileObject` distribution entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileObject {
    #[serde(rename = "@type")]
    pub object_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "contentUrl")]
    pub content_url: String,
    #[serde(rename = "encodingFormat")]
    pub encoding_format: String,
    pub md5: String,
    pub sha256: String,
}

/// `geocr:Collection` summary of the parent collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    #[serde(rename = "ShortName")]
    pub short_name: Value,
    #[serde(rename = "Version")]
    pub version: Value,
    #[serde(rename = "EntryTitle")]
    pub entry_title: Value,
}

/// `geocr:DataGranule` production metadata summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataGranuleSummary {
    #[serde(rename = "DayNightFlag")]
    pub day_night_flag: Value,
    #[serde(rename = "ProductionDateTime")]
    pub production_date_time: Value,
    #[serde(rename = "PGEVersion")]
    pub pge_version: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Dataset {
        Dataset::new("G1", "Name", "", "1.0.0", context::DEFAULT_CITATION)
    }

    #[test]
    fn mandatory_fields_serialize() {
        let v = minimal().to_value().unwrap();
        assert_eq!(v["@type"], "Dataset");
        assert_eq!(v["@id"], "G1");
        assert_eq!(v["name"], "Name");
        assert_eq!(v["description"], "");
        assert_eq!(v["version"], "1.0.0");
        assert_eq!(v["license"], "CC-BY-4.0");
        assert_eq!(v["conformsTo"], "http://mlcommons.org/croissant/1.0");
        assert_eq!(v["citeAs"], "https://doi.org/10.5067/HLS/HLSS30.002");
        assert_eq!(&v["@context"], geocroissant_context());
    }

    #[test]
    fn absent_blocks_are_omitted_not_null() {
        let v = minimal().to_value().unwrap();
        let obj = v.as_object().unwrap();
        for key in [
            "geocr:BoundingBox",
            "geocr:Geometry",
            "dct:temporal",
            "datePublished",
            "geocr:Platform",
            "geocr:Instrument",
            "distribution",
            "geocr:AdditionalAttributes",
            "geocr:Collection",
            "geocr:DataGranule",
        ] {
            assert!(!obj.contains_key(key), "{key} should be absent");
        }
        assert_eq!(obj.len(), 9);
    }

    #[test]
    fn bounding_box_keeps_number_representation() {
        let mut ds = minimal();
        ds.bounding_box = Some([
            Number::from(-122),
            Number::from(37),
            Number::from_f64(-121.5).unwrap(),
            Number::from(38),
        ]);
        let v = ds.to_value().unwrap();
        assert_eq!(v["geocr:BoundingBox"], json!([-122, 37, -121.5, 38]));
    }

    #[test]
    fn summary_members_serialize_as_null_when_missing() {
        let mut ds = minimal();
        ds.collection = Some(CollectionSummary {
            short_name: json!("HLSS30"),
            version: json!(2.0),
            ..Default::default()
        });
        ds.data_granule = Some(DataGranuleSummary::default());
        let v = ds.to_value().unwrap();
        assert_eq!(
            v["geocr:Collection"],
            json!({"ShortName": "HLSS30", "Version": 2.0, "EntryTitle": null})
        );
        assert_eq!(
            v["geocr:DataGranule"],
            json!({"DayNightFlag": null, "ProductionDateTime": null, "PGEVersion": null})
        );
    }

    #[test]
    fn file_object_field_names() {
        let fo = FileObject {
            object_type: context::FILE_OBJECT_TYPE,
            id: "distribution_0".into(),
            name: "data.tif".into(),
            description: "GeoTIFF".into(),
            content_url: "https://example.com/data.tif".into(),
            encoding_format: "image/tiff".into(),
            md5: "m".into(),
            sha256: "s".into(),
        };
        assert_eq!(
            serde_json::to_value(&fo).unwrap(),
            json!({
                "@type": "cr:FileObject",
                "@id": "distribution_0",
                "name": "data.tif",
                "description": "GeoTIFF",
                "contentUrl": "https://example.com/data.tif",
                "encodingFormat": "image/tiff",
                "md5": "m",
                "sha256": "s"
            })
        );
    }
}
