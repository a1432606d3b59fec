//! # UMM-G Granule Model
//!
//! An explicit optional-field record of the parts of a UMM-G granule the
//! converter reads. Every field is optional and every field is *lenient*:
//! a member that is missing, `null`, or of the wrong JSON kind deserializes
//! to `None` (or an empty sequence) instead of failing. Deserializing any
//! JSON object into [`Granule`] therefore always succeeds, and extractors
//! handle absence through the type system rather than by probing maps.
//!
//! Sequence members are lenient per element: an entry that does not fit the
//! element type keeps its slot as an all-absent default, so "first platform",
//! "first polygon" and distribution numbering always refer to source
//! positions.
//!
//! `CollectionReference` and `DataGranule` keep their members verbatim.
//! Their summaries copy member values through unchanged and are emitted
//! whenever the source mapping has any member, whatever its kind.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

/// A scalar that UMM-G producers emit either as text or as a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
}

impl Scalar {
    /// Text form of the scalar, or `None` for an empty string.
    ///
    /// Numbers use their JSON formatting: `2.5` gives `"2.5"`, `1` gives `"1"`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
        }
    }
}

/// CMR provenance carried next to the `umm` body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceMeta {
    #[serde(rename = "concept-id", default, deserialize_with = "lenient")]
    pub concept_id: Option<String>,
    #[serde(rename = "revision-id", default, deserialize_with = "lenient")]
    pub revision_id: Option<Scalar>,
}

/// The `umm` body of a granule record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Granule {
    #[serde(rename = "GranuleUR", default, deserialize_with = "lenient")]
    pub granule_ur: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub entry_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<Scalar>,
    #[serde(rename = "Abstract", default, deserialize_with = "lenient")]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub collection_reference: Option<CollectionReference>,
    #[serde(default, deserialize_with = "lenient")]
    pub spatial_extent: Option<SpatialExtent>,
    #[serde(default, deserialize_with = "lenient")]
    pub temporal_extent: Option<TemporalExtent>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub platforms: Vec<Platform>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub related_urls: Vec<RelatedUrl>,
    /// Kept verbatim for pass-through; read through [`AdditionalAttribute`].
    #[serde(default, deserialize_with = "lenient_seq")]
    pub additional_attributes: Vec<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub data_granule: Option<DataGranule>,
}

/// Reference from a granule to its parent collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CollectionReference {
    pub entry_title: Option<String>,
    pub abstract_text: Option<String>,
    /// Every source member, unchanged.
    pub members: Map<String, Value>,
}

impl From<Map<String, Value>> for CollectionReference {
    fn from(members: Map<String, Value>) -> Self {
        Self {
            entry_title: text_member(&members, "EntryTitle"),
            abstract_text: text_member(&members, "Abstract"),
            members,
        }
    }
}

impl CollectionReference {
    /// Raw value of a member, `null` when missing.
    pub fn member(&self, key: &str) -> Value {
        self.members.get(key).cloned().unwrap_or_default()
    }

    /// True when the source mapping had no members at all.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpatialExtent {
    #[serde(rename = "HorizontalSpatialDomain", default, deserialize_with = "lenient")]
    pub horizontal_spatial_domain: Option<HorizontalSpatialDomain>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HorizontalSpatialDomain {
    #[serde(default, deserialize_with = "lenient")]
    pub bounding_rectangle: Option<BoundingRectangle>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
}

/// Bounds of a rectangle; any bound may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingRectangle {
    #[serde(default, deserialize_with = "lenient")]
    pub west_bounding_coordinate: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub south_bounding_coordinate: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub east_bounding_coordinate: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub north_bounding_coordinate: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Geometry {
    #[serde(rename = "GPolygons", default, deserialize_with = "lenient_seq")]
    pub gpolygons: Vec<GPolygon>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GPolygon {
    #[serde(rename = "Boundary", default, deserialize_with = "lenient")]
    pub boundary: Option<Boundary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Boundary {
    #[serde(rename = "Points", default, deserialize_with = "lenient_seq")]
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemporalExtent {
    #[serde(rename = "RangeDateTime", default, deserialize_with = "lenient")]
    pub range_date_time: Option<RangeDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RangeDateTime {
    #[serde(default, deserialize_with = "lenient")]
    pub beginning_date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ending_date_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Platform {
    #[serde(default, deserialize_with = "lenient")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub instruments: Vec<Instrument>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instrument {
    #[serde(default, deserialize_with = "lenient")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_name: Option<String>,
}

/// One `RelatedUrls` entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelatedUrl {
    #[serde(rename = "URL", default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "lenient")]
    pub url_type: Option<String>,
    #[serde(rename = "Subtype", default, deserialize_with = "lenient")]
    pub subtype: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Typed view over one `AdditionalAttributes` entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalAttribute {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub values: Vec<Value>,
}

impl AdditionalAttribute {
    /// Read an entry; `None` when it is not a mapping.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }
}

/// Production metadata of the granule, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DataGranule {
    pub members: Map<String, Value>,
}

impl DataGranule {
    /// Raw value of a member, `null` when missing.
    pub fn member(&self, key: &str) -> Value {
        self.members.get(key).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn text_member(members: &Map<String, Value>, key: &str) -> Option<String> {
    members.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Non-empty text of an optional string.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Deserialize a member, mapping any kind mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed UMM-G member");
            Ok(None)
        }
    }
}

/// Deserialize a sequence member element by element. An element that does
/// not fit `T` becomes `T::default()` so positions are preserved. A member
/// that is not a sequence yields an empty vector.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "defaulting malformed UMM-G sequence entry");
                T::default()
            })
        })
        .collect())
}
