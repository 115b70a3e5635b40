//! Response envelope contract: every failure carries
//! `{"status":"nok","error":...}`, including body decode problems and bad
//! path parameters. None of these touch the database.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn category_create_without_name_is_rejected_with_envelope() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/category", server.base_url))
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "nok");
    assert_eq!(body["error"], "name is required");
    Ok(())
}

#[tokio::test]
async fn malformed_json_body_is_rejected_with_envelope() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/category", server.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "nok");
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn non_numeric_path_id_is_rejected_with_envelope() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/category/abc", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "nok");
    let error = body["error"].as_str().unwrap_or_default();
    assert!(error.starts_with("Invalid request parameter"), "{}", error);
    Ok(())
}

#[tokio::test]
async fn variant_create_requires_a_price() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/variant", server.base_url))
        .json(&json!({ "product_id": 1 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "nok");
    assert_eq!(body["error"], "max_retail_price is required");
    Ok(())
}

#[tokio::test]
async fn storage_failures_use_the_envelope_with_a_generic_message() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // The test server's database is unreachable, so the listing fails with
    // an internal error after the pool acquire timeout.
    let res = client
        .get(format!("{}/category", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "nok");
    assert_eq!(
        body["error"],
        "An error occurred while processing your request"
    );
    Ok(())
}
