use postgrest::{PostgrestAdapter, Settings};
use serde_json::json;
use species_core::{Species, SpeciesId, SpeciesStorePort, SpeciesUpdate};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

use crate::helper::{API_KEY, TestHelper};

fn update() -> SpeciesUpdate {
    SpeciesUpdate {
        scientific_name: "Panthera leo".into(),
        common_name: Some("Lion".into()),
        total_population: Some(23_000),
        description: None,
    }
}

#[tokio::test]
async fn update_patches_only_editable_fields_of_matching_id() {
    let helper = TestHelper::new().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/species"))
        .and(query_param("id", "eq.7"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({
            "scientific_name": "Panthera leo",
            "common_name": "Lion",
            "total_population": 23000,
            "description": null,
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    helper
        .adapter
        .update_species(SpeciesId::new(7), &update())
        .await
        .unwrap();
}

#[tokio::test]
async fn update_failure_reports_store_message_verbatim() {
    let helper = TestHelper::new().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/species"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "details": null,
            "hint": null,
            "message": "permission denied for table species",
        })))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    let error = helper
        .adapter
        .update_species(SpeciesId::new(7), &update())
        .await
        .unwrap_err();

    assert_eq!(error.message(), "permission denied for table species");
}

#[tokio::test]
async fn update_failure_without_json_body_uses_raw_body() {
    let helper = TestHelper::new().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/species"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&helper.mock_server)
        .await;

    let error = helper
        .adapter
        .update_species(SpeciesId::new(7), &update())
        .await
        .unwrap_err();

    assert_eq!(error.message(), "bad request");
}

#[tokio::test]
async fn species_are_listed_in_scientific_name_order() {
    let helper = TestHelper::new().await;
    let lion = Species::test_default();

    Mock::given(method("GET"))
        .and(path("/rest/v1/species"))
        .and(query_param("select", "*"))
        .and(query_param("order", "scientific_name.asc"))
        .and(header("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 7,
            "scientific_name": "Panthera leo",
            "common_name": "Lion",
            "total_population": 20000,
            "kingdom": "Animalia",
            "description": null,
            "image": null,
        }])))
        .mount(&helper.mock_server)
        .await;

    let species = helper.adapter.species().await.unwrap();

    assert_eq!(species, vec![lion]);
}

#[tokio::test]
async fn species_query_failure_reports_store_message() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/species"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid API key" })),
        )
        .mount(&helper.mock_server)
        .await;

    let error = helper.adapter.species().await.unwrap_err();

    assert_eq!(error.message(), "Invalid API key");
}

#[tokio::test]
async fn update_failure_with_empty_body_reports_failed_request() {
    let helper = TestHelper::new().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/species"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    let error = helper
        .adapter
        .update_species(SpeciesId::new(7), &update())
        .await
        .unwrap_err();

    let message = error.message();
    assert!(
        message.starts_with("HTTP request failed, status: '502 Bad Gateway'"),
        "{message}"
    );
    assert!(message.contains("/rest/v1/species?id=eq.7"), "{message}");
    assert!(message.ends_with("body: ''"), "{message}");
}

#[tokio::test]
async fn unreachable_store_reports_transport_error() {
    let adapter = PostgrestAdapter::new(&Settings {
        url: "http://127.0.0.1:1".into(),
        api_key: API_KEY.into(),
        timeout: None,
        max_retries: Some(0),
    })
    .unwrap();

    let error = adapter
        .update_species(SpeciesId::new(7), &update())
        .await
        .unwrap_err();

    let message = error.message();
    assert!(message.starts_with("HTTP reqwest error: "), "{message}");
    assert!(
        message.contains("http://127.0.0.1:1/rest/v1/species?id=eq.7"),
        "{message}"
    );
}
