//! # GeoCroissant JSON-LD Context and Vocabulary Literals
//!
//! The `@context` block is identical for every conversion. It maps the
//! Croissant (`cr:`), GeoCroissant (`geocr:`), Dublin Core (`dct:`) and
//! schema.org (`sc:`) vocabularies, plus the Croissant term aliases.
//!
//! ## Invariant
//!
//! The context is built once, on first use, and is never mutated afterwards.
//! It is safe to share across threads and conversions.

use std::sync::LazyLock;

use serde_json::{json, Map, Value};

/// `@type` of the top-level document.
pub const DATASET_TYPE: &str = "Dataset";

/// `@type` of every distribution entry.
pub const FILE_OBJECT_TYPE: &str = "cr:FileObject";

/// License attached to every converted granule.
pub const LICENSE: &str = "CC-BY-4.0";

/// Croissant conformance URI.
pub const CONFORMS_TO: &str = "http://mlcommons.org/croissant/1.0";

/// Resolver prefix for DOI citations.
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Citation used when the granule carries no product DOI (HLS Sentinel-2 v2.0).
pub const DEFAULT_CITATION: &str = "https://doi.org/10.5067/HLS/HLSS30.002";

/// Plain string terms of the context, in document order.
const STRING_TERMS: &[(&str, &str)] = &[
    ("@language", "en"),
    ("@vocab", "https://schema.org/"),
    ("cr", "http://mlcommons.org/croissant/"),
    ("geocr", "http://mlcommons.org/geocroissant/"),
    ("dct", "http://purl.org/dc/terms/"),
    ("sc", "https://schema.org/"),
    ("citeAs", "cr:citeAs"),
    ("column", "cr:column"),
    ("conformsTo", "dct:conformsTo"),
    ("dataBiases", "cr:dataBiases"),
    ("dataCollection", "cr:dataCollection"),
    ("extract", "cr:extract"),
    ("field", "cr:field"),
    ("fileProperty", "cr:fileProperty"),
    ("fileObject", "cr:fileObject"),
    ("fileSet", "cr:fileSet"),
    ("format", "cr:format"),
    ("includes", "cr:includes"),
    ("isLiveDataset", "cr:isLiveDataset"),
    ("jsonPath", "cr:jsonPath"),
    ("key", "cr:key"),
    ("parentField", "cr:parentField"),
    ("path", "cr:path"),
    ("personalSensitiveInformation", "cr:personalSensitiveInformation"),
    ("recordSet", "cr:recordSet"),
    ("references", "cr:references"),
    ("regex", "cr:regex"),
    ("repeated", "cr:repeated"),
    ("replace", "cr:replace"),
    ("separator", "cr:separator"),
    ("source", "cr:source"),
    ("subField", "cr:subField"),
    ("transform", "cr:transform"),
];

/// Terms carrying an explicit `@type`: `(term, @id, @type)`.
const TYPED_TERMS: &[(&str, &str, &str)] = &[
    ("data", "cr:data", "@json"),
    ("dataType", "cr:dataType", "@vocab"),
    ("md5", "cr:md5", "sc:Text"),
    ("sha256", "cr:sha256", "sc:Text"),
];

static GEOCROISSANT_CONTEXT: LazyLock<Value> = LazyLock::new(|| {
    let mut context = Map::new();
    for &(term, iri) in STRING_TERMS {
        context.insert(term.to_owned(), Value::from(iri));
    }
    for &(term, id, ty) in TYPED_TERMS {
        context.insert(term.to_owned(), json!({"@id": id, "@type": ty}));
    }
    Value::Object(context)
});

/// The fixed GeoCroissant `@context` mapping.
pub fn geocroissant_context() -> &'static Value {
    &GEOCROISSANT_CONTEXT
}
