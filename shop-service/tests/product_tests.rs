mod common;

use common::TestApp;
use reqwest::Method;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

const MISSING_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn create(app: &TestApp, payload: Value) -> reqwest::Response {
    app.post("/products")
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = TestApp::spawn().await;
    app.signed_in("merchant").await;

    let response = create(
        &app,
        json!({ "name": "X", "description": "Y", "price": 9.99 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let fetched = app
        .anonymous(Method::GET, &format!("/products/{}", id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: Value = fetched.json().await.expect("Failed to parse response");
    assert_eq!(fetched["success"], true);
    assert_eq!(fetched["data"]["id"], id.as_str());
    assert_eq!(fetched["data"]["name"], "X");
    assert_eq!(fetched["data"]["description"], "Y");
    assert_eq!(fetched["data"]["price"], 9.99);
}

#[tokio::test]
async fn test_invalid_products_persist_nothing() {
    let app = TestApp::spawn().await;
    app.signed_in("merchant").await;

    let payloads = [
        json!({ "name": "X", "description": "Y", "price": 0 }),
        json!({ "name": "X", "description": "Y", "price": -3.5 }),
        json!({ "name": "", "description": "Y", "price": 9.99 }),
        json!({ "name": "X", "description": "   ", "price": 9.99 }),
        json!({ "name": "X", "description": "Y" }),
    ];

    for payload in payloads {
        let response = create(&app, payload.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["success"], false);
    }

    assert!(app.product_repository.is_empty().await);
}

#[tokio::test]
async fn test_list_products() {
    let app = TestApp::spawn().await;

    let empty: Value = app
        .anonymous(Method::GET, "/products")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(empty["data"], json!([]));

    app.signed_in("merchant").await;
    create(&app, json!({ "name": "First", "description": "d", "price": 1.0 })).await;
    create(&app, json!({ "name": "Second", "description": "d", "price": 2.0 })).await;

    let listed: Value = app
        .get("/products")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let names: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"First"));
    assert!(names.contains(&"Second"));
}

#[tokio::test]
async fn test_update_product() {
    let app = TestApp::spawn().await;
    app.signed_in("merchant").await;

    let created: Value = create(&app, json!({ "name": "Lamp", "description": "d", "price": 5.0 }))
        .await
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .put(&format!("/products/{}", id))
        .json(&json!({ "name": "Desk lamp", "description": "LED", "price": 7.5 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Desk lamp");
    assert_eq!(body["data"]["price"], 7.5);

    let rejected = app
        .put(&format!("/products/{}", id))
        .json(&json!({ "name": "Desk lamp", "description": "LED", "price": 0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::spawn().await;
    app.signed_in("merchant").await;

    let created: Value = create(&app, json!({ "name": "Lamp", "description": "d", "price": 5.0 }))
        .await
        .json()
        .await
        .unwrap();
    let path = format!("/products/{}", created["data"]["id"].as_str().unwrap());

    let deleted = app.delete(&path).send().await.expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = app.get(&path).send().await.expect("Failed to execute request");
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let again = app.delete(&path).send().await.expect("Failed to execute request");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_and_malformed_ids() {
    let app = TestApp::spawn().await;
    app.signed_in("merchant").await;

    let missing = app
        .get(&format!("/products/{}", MISSING_ID))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let update_missing = app
        .put(&format!("/products/{}", MISSING_ID))
        .json(&json!({ "name": "X", "description": "Y", "price": 1.0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update_missing.status(), StatusCode::NOT_FOUND);

    let malformed = app
        .get("/products/42")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_writes_require_token() {
    let app = TestApp::spawn().await;

    let create_response = app
        .anonymous(Method::POST, "/products")
        .json(&json!({ "name": "X", "description": "Y", "price": 9.99 }))
        .send()
        .await
        .expect("Failed to execute request");
    let update_response = app
        .anonymous(Method::PUT, &format!("/products/{}", MISSING_ID))
        .json(&json!({ "name": "X", "description": "Y", "price": 9.99 }))
        .send()
        .await
        .expect("Failed to execute request");
    let delete_response = app
        .anonymous(Method::DELETE, &format!("/products/{}", MISSING_ID))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create_response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(update_response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(delete_response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.product_repository.is_empty().await);
}
