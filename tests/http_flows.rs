use std::time::Duration;

use anyhow::Result;
use http::StatusCode;
use portal_sdk::{PortalAsync, PortalError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

async fn mock_get(server: &MockServer, endpoint: &str, response: ResponseTemplate, expected: u64) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .expect(expected)
        .up_to_n_times(expected)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn profile_resolves_with_response_body() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/api/profile",
        ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice" })),
        1,
    )
    .await;

    let client = PortalAsync::builder(server.uri()).build()?;
    let profile = client.profile().await?;

    assert_eq!(profile, json!({ "name": "Alice" }));

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn requests_carry_json_accept_header() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/countries"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalAsync::builder(server.uri()).build()?;
    client.countries().await?;

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn countries_rejects_on_transport_timeout() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/api/countries",
        ResponseTemplate::new(200)
            .set_body_json(json!([]))
            .set_delay(Duration::from_secs(5)),
        1,
    )
    .await;

    let client = PortalAsync::builder(server.uri())
        .timeout(Duration::from_millis(50))
        .build()?;

    let err = client
        .countries()
        .await
        .expect_err("expected transport timeout");

    match err {
        PortalError::Reqwest { source, .. } => assert!(source.is_timeout()),
        other => panic!("unexpected error variant: {other:?}"),
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn non_success_status_surfaces_verbatim_body() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/api/profile",
        ResponseTemplate::new(500).set_body_string("portal unavailable"),
        1,
    )
    .await;

    let client = PortalAsync::builder(server.uri()).build()?;
    let err = client.profile().await.expect_err("expected HTTP error");

    match err {
        PortalError::Http { code, body, .. } => {
            assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "portal unavailable");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn organisation_requests_built_resource_path() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/api/organisations/7",
        ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "name": "Acme" })),
        1,
    )
    .await;

    let client = PortalAsync::builder(server.uri()).build()?;
    let org = client.organisation("7").await?;

    assert_eq!(org, json!({ "id": 7, "name": "Acme" }));

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn client_supports_base_sub_path() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/leases/api/organisations/42",
        ResponseTemplate::new(200).set_body_json(json!({ "id": 42 })),
        1,
    )
    .await;

    let base_url = format!("{}/leases", server.uri());
    let client = PortalAsync::builder(base_url).build()?;
    let org = client.organisation("42").await?;

    assert_eq!(org["id"], 42);

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_calls_settle_independently() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/api/profile",
        ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice" })),
        1,
    )
    .await;
    mock_get(
        &server,
        "/api/countries",
        ResponseTemplate::new(503).set_body_string("down"),
        1,
    )
    .await;

    let client = PortalAsync::builder(server.uri()).build()?;

    let (profile, countries) = tokio::join!(client.profile(), client.countries());

    assert_eq!(profile?, json!({ "name": "Alice" }));
    match countries.expect_err("expected HTTP error") {
        PortalError::Http { code, .. } => assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE),
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}
