//! Contract tests for loading, converting and saving documents.
//!
//! | Source        | Scenario                        | Test                          |
//! |---------------|---------------------------------|-------------------------------|
//! | local file    | granule record, output written  | `local_file_round_trip`       |
//! | local file    | missing                         | `missing_local_file`          |
//! | URL           | granule record                  | `url_granule_record`          |
//! | URL           | CMR search response             | `url_cmr_response`            |
//! | URL           | CMR response with no items      | `url_empty_cmr_response`      |
//! | URL           | 404                             | `url_not_found`               |
//! | URL           | body is not JSON                | `url_invalid_json`            |
//! | URL           | nothing listening               | `url_unreachable`             |

use geocr_core::ConvertError;
use geocr_fetch::{convert_source, DocumentSource, FetchConfig, FetchError};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn granule_record() -> Value {
    json!({
        "meta": {"concept-id": "G2700719831-LPCLOUD", "revision-id": 1},
        "umm": {
            "GranuleUR": "HLS.S30.T32NPH.2020001T143919.v2.0",
            "CollectionReference": {"EntryTitle": "Harmonized Landsat Sentinel-2"},
            "Version": "2.0",
            "RelatedUrls": [{"URL": "https://example.com/data.tif", "Type": "GET DATA"}]
        }
    })
}

fn test_config() -> FetchConfig {
    FetchConfig::with_timeout(5)
}

fn source(server: &MockServer, route: &str) -> DocumentSource {
    DocumentSource::parse(&format!("{}{route}", server.uri())).unwrap()
}

#[tokio::test]
async fn local_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("umm.json");
    std::fs::write(&input, granule_record().to_string()).unwrap();
    let output = dir.path().join("out/geocroissant.json");

    let result = convert_source(input.into(), Some(&output), &test_config())
        .await
        .unwrap();

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved, result);
    assert_eq!(saved["@id"], "HLS.S30.T32NPH.2020001T143919.v2.0");
    assert_eq!(saved["name"], "Harmonized-Landsat-Sentinel-2");
    assert_eq!(saved["version"], "2.0.0");
}

#[tokio::test]
async fn missing_local_file() {
    let source = DocumentSource::parse("/nonexistent/file.json").unwrap();
    let err = convert_source(source, None, &test_config()).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound { .. }));
}

#[tokio::test]
async fn in_memory_document_is_converted_without_output() {
    let result = convert_source(granule_record().into(), None, &test_config())
        .await
        .unwrap();
    assert_eq!(result["distribution"][0]["encodingFormat"], "image/tiff");
}

#[tokio::test]
async fn url_granule_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/umm.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(granule_record()))
        .expect(1)
        .mount(&server)
        .await;

    let result = convert_source(source(&server, "/umm.json"), None, &test_config())
        .await
        .unwrap();
    assert_eq!(result["@type"], "Dataset");
    assert_eq!(result["@id"], "HLS.S30.T32NPH.2020001T143919.v2.0");
}

#[tokio::test]
async fn url_cmr_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/granules.umm_json"))
        .and(query_param("concept_id", "G2700719831-LPCLOUD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": 1,
            "took": 4034,
            "items": [granule_record()]
        })))
        .mount(&server)
        .await;

    let result = convert_source(
        source(&server, "/search/granules.umm_json?concept_id=G2700719831-LPCLOUD"),
        None,
        &test_config(),
    )
    .await
    .unwrap();
    assert_eq!(result["@id"], "HLS.S30.T32NPH.2020001T143919.v2.0");
}

#[tokio::test]
async fn url_empty_cmr_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let err = convert_source(source(&server, "/empty.json"), None, &test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Convert(ConvertError::NoResults)));
    assert_eq!(err.to_string(), "CMR response contains no granules");
}

#[tokio::test]
async fn url_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notfound.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = convert_source(source(&server, "/notfound.json"), None, &test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Retrieval { .. }));
    assert!(err.to_string().starts_with("Failed to fetch UMM-G data from URL"));
}

#[tokio::test]
async fn url_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/invalid.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = convert_source(source(&server, "/invalid.json"), None, &test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::InvalidJson { .. }));
    assert!(err.to_string().starts_with("Invalid JSON response from URL"));
}

#[tokio::test]
async fn url_unreachable() {
    let source = DocumentSource::parse("http://127.0.0.1:9/unreachable.json").unwrap();
    let err = convert_source(source, None, &test_config()).await.unwrap_err();
    assert!(matches!(err, FetchError::Retrieval { .. }));
}
