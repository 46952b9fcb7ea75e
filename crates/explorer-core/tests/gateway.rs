// crates/explorer-core/tests/gateway.rs
mod common;

use common::{config_for, country_json, gateway_for, sample_catalog};
use explorer_core::config::constants::LIST_FIELDS;
use explorer_core::{CountryGateway, HttpGateway};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_all_uses_reduced_field_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", LIST_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let countries = gateway_for(&server).fetch_all_countries().await;
    assert_eq!(countries.len(), 5);
    assert_eq!(countries[0].common_name(), "Peru");
}

#[tokio::test]
async fn bad_request_falls_back_to_plain_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", LIST_FIELDS))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param_is_missing("fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let countries = gateway_for(&server).fetch_all_countries().await;
    assert_eq!(countries.len(), 5);
}

#[tokio::test]
async fn failing_primary_uses_alternative_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/independent"))
        .and(query_param("status", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([country_json("Peru", "PER", "Americas", &[])])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let countries = gateway_for(&server).fetch_all_countries().await;
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].cca3, "PER");
}

#[tokio::test]
async fn every_attempt_failing_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(gateway_for(&server).fetch_all_countries().await.is_empty());
}

#[tokio::test]
async fn malformed_payload_counts_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/independent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(gateway_for(&server).fetch_all_countries().await.len(), 5);
}

#[tokio::test]
async fn slow_catalog_times_out_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_catalog())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeout(Duration::from_millis(100));
    let gateway = HttpGateway::new(&config).unwrap();
    assert!(gateway.fetch_all_countries().await.is_empty());
}

#[tokio::test]
async fn by_code_takes_first_array_element() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/PER"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            country_json("Peru", "PER", "Americas", &["BOL"]),
            country_json("Ignored", "XXX", "Nowhere", &[]),
        ])))
        .mount(&server)
        .await;

    let country = gateway_for(&server)
        .fetch_country_by_code("PER")
        .await
        .unwrap();
    assert_eq!(country.common_name(), "Peru");
    assert_eq!(country.borders, vec!["BOL".to_string()]);
}

#[tokio::test]
async fn by_code_accepts_a_bare_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/CHL"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(country_json("Chile", "CHL", "Americas", &[])),
        )
        .mount(&server)
        .await;

    let country = gateway_for(&server).fetch_country_by_code("CHL").await;
    assert_eq!(country.map(|c| c.cca3), Some("CHL".to_string()));
}

#[tokio::test]
async fn by_code_not_found_and_empty_array_are_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/NOP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.fetch_country_by_code("ZZZ").await.is_none());
    assert!(gateway.fetch_country_by_code("NOP").await.is_none());
}

#[tokio::test]
async fn blank_code_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.fetch_country_by_code("   ").await.is_none());
    assert!(gateway.fetch_countries_by_codes(&[]).await.is_empty());
}

#[tokio::test]
async fn batch_lookup_joins_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha"))
        .and(query_param("codes", "BOL,CHL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            country_json("Bolivia", "BOL", "Americas", &[]),
            country_json("Chile", "CHL", "Americas", &[]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let codes = vec!["BOL".to_string(), "CHL".to_string()];
    let countries = gateway_for(&server).fetch_countries_by_codes(&codes).await;
    let names: Vec<_> = countries.iter().map(|c| c.common_name()).collect();
    assert_eq!(names, ["Bolivia", "Chile"]);
}

#[tokio::test]
async fn batch_lookup_failure_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let codes = vec!["BOL".to_string()];
    assert!(gateway_for(&server)
        .fetch_countries_by_codes(&codes)
        .await
        .is_empty());
}

#[tokio::test]
async fn connection_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/usa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    assert!(gateway_for(&server).test_connection().await);

    let down = MockServer::start().await;
    assert!(!gateway_for(&down).test_connection().await);
}

#[tokio::test]
async fn path_like_codes_never_reach_other_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    for code in ["../all", "..", "PER?fields=name", "PER#frag", "a/b"] {
        assert!(gateway.fetch_country_by_code(code).await.is_none(), "{code}");
    }
}

#[tokio::test]
async fn batch_codes_are_sent_as_one_query_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha"))
        .and(query_param("codes", "PER&x=1,CHL#y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            country_json("Peru", "PER", "Americas", &[]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let codes = vec!["PER&x=1".to_string(), "CHL#y".to_string()];
    let countries = gateway_for(&server).fetch_countries_by_codes(&codes).await;
    assert_eq!(countries.len(), 1);
}
