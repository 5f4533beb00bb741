mod common;

use auth::Claims;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

fn bench_press() -> Value {
    json!({
        "name": "Bench Press",
        "description": "Flat bench",
        "min_weight": 20.0,
        "max_weight": 120.0,
        "weight_increment": 2.5
    })
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let body = app.register("nicola", "pass_word!").await;

    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["user"]["username"], "nicola");
    assert!(body["data"]["user"]["id"].is_i64());
    assert!(body["data"]["user"]["created_at"].is_string());
    assert!(body["data"]["user"].get("password_hash").is_none());

    let token = body["data"]["token"].as_str().unwrap();
    let claims: Claims = app.jwt_handler.decode(token).unwrap();
    assert_eq!(Some(claims.user_id), body["data"]["user"]["id"].as_i64());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register("nicola", "pass_word!").await;

    let response = app
        .post("/users/register")
        .json(&json!({ "username": "nicola", "password": "other" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 409);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/users/register")
        .json(&json!({ "username": "nicola" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("password"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    let registered = app.register("nicola", "pass_word!").await;

    let response = app
        .post("/users/login")
        .json(&json!({ "username": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"]["id"], registered["data"]["user"]["id"]);

    let token = body["data"]["token"].as_str().unwrap();
    let me = app
        .get_authenticated("/me", token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("nicola", "pass_word!").await;

    let unknown_user = app
        .post("/users/login")
        .json(&json!({ "username": "nobody", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    let wrong_password = app
        .post("/users/login")
        .json(&json!({ "username": "nicola", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_user: Value = unknown_user.json().await.unwrap();
    let wrong_password: Value = wrong_password.json().await.unwrap();
    assert_eq!(unknown_user, wrong_password);
}

#[tokio::test]
async fn test_get_public_profile() {
    let app = TestApp::spawn().await;
    let registered = app.register("nicola", "pass_word!").await;
    let id = registered["data"]["user"]["id"].as_i64().unwrap();

    let response = app
        .get(&format!("/users/{}", id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_public_profile_errors() {
    let app = TestApp::spawn().await;

    let missing = app
        .get("/users/999")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let malformed = app
        .get("/users/not-a-number")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/me")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get_authenticated("/me", "not-a-token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 401);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::spawn().await;
    app.register("nicola", "pass_word!").await;

    let claims = Claims::for_user(1)
        .expiring_in(chrono::Duration::hours(-2))
        .unwrap();
    let token = app.jwt_handler.encode(&claims).unwrap();

    let response = app
        .get_authenticated("/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_expiry_accepted() {
    let app = TestApp::spawn().await;
    let registered = app.register("nicola", "pass_word!").await;
    let id = registered["data"]["user"]["id"].as_i64().unwrap();

    let token = app.jwt_handler.encode(&Claims::for_user(id)).unwrap();

    let response = app
        .get_authenticated("/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let response = app
        .put_authenticated("/profile/update", &token)
        .json(&json!({ "username": "nicola_d", "password": "new_pass" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola_d");

    let login = app
        .post("/users/login")
        .json(&json!({ "username": "nicola_d", "password": "new_pass" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(login.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_keeps_own_username() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let response = app
        .put_authenticated("/profile/update", &token)
        .json(&json!({ "username": "nicola" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_conflict_and_empty() {
    let app = TestApp::spawn().await;
    app.register("taken", "pass_word!").await;
    let token = app.register_token("nicola").await;

    let conflict = app
        .put_authenticated("/profile/update", &token)
        .json(&json!({ "username": "taken" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(conflict.status(), StatusCode::CONFLICT);

    let empty = app
        .put_authenticated("/profile/update", &token)
        .json(&json!({ "username": "", "password": "" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_profile() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let response = app
        .delete_authenticated("/profile/delete", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The token still verifies but the user is gone
    let me = app
        .get_authenticated("/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(me.status(), StatusCode::NOT_FOUND);

    let again = app
        .delete_authenticated("/profile/delete", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_simulator_success() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let response = app
        .post_authenticated("/simulators", &token)
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Bench Press");
    assert_eq!(body["data"]["description"], "Flat bench");
    assert_eq!(body["data"]["min_weight"], 20.0);
    assert_eq!(body["data"]["max_weight"], 120.0);
    assert_eq!(body["data"]["weight_increment"], 2.5);
    assert!(body["data"]["id"].is_i64());
}

#[tokio::test]
async fn test_create_simulator_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/simulators")
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_simulator_duplicate_name() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    app.post_authenticated("/simulators", &token)
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post_authenticated("/simulators", &token)
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_simulator_weight_rules() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let cases = [
        ((-1.0, 100.0, 10.0), "negative"),
        ((0.0, 100.0, 0.0), "zero"),
        ((50.0, 50.0, 5.0), "cannot be equal"),
        ((0.0, 5.0, 10.0), "too close"),
        ((0.0, 100.0, -5.0), "must be positive"),
        ((100.0, 0.0, 5.0), "must be negative"),
    ];

    for ((min, max, increment), expected) in cases {
        let response = app
            .post_authenticated("/simulators", &token)
            .json(&json!({
                "name": "Leg Press",
                "min_weight": min,
                "max_weight": max,
                "weight_increment": increment
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.expect("Failed to parse response");
        let message = body["data"]["message"].as_str().unwrap();
        assert!(
            message.contains(expected),
            "{message:?} should contain {expected:?}"
        );
    }
}

#[tokio::test]
async fn test_create_simulator_empty_name() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let response = app
        .post_authenticated("/simulators", &token)
        .json(&json!({
            "name": "",
            "min_weight": 0.0,
            "max_weight": 100.0,
            "weight_increment": 10.0
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_simulator_by_id_and_name() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let created: Value = app
        .post_authenticated("/simulators", &token)
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["data"]["id"].as_i64().unwrap();

    let by_id = app
        .get_authenticated(&format!("/simulators/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(by_id.status(), StatusCode::OK);
    let by_id: Value = by_id.json().await.unwrap();
    assert_eq!(by_id["data"]["id"], id);
    assert_eq!(by_id["data"]["name"], "Bench Press");
    assert_eq!(by_id["data"]["weight_increment"], 2.5);

    let by_name = app
        .get_authenticated("/simulators/by-name/Bench%20Press", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(by_name.status(), StatusCode::OK);
    let by_name: Value = by_name.json().await.unwrap();
    assert_eq!(by_name["data"]["id"], id);

    let missing = app
        .get_authenticated("/simulators/by-name/Rowing", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_simulator() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let created: Value = app
        .post_authenticated("/simulators", &token)
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .put_authenticated(&format!("/simulators/{}", id), &token)
        .json(&json!({ "max_weight": 150.0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Bench Press");
    assert_eq!(body["data"]["min_weight"], 20.0);
    assert_eq!(body["data"]["max_weight"], 150.0);

    let invalid = app
        .put_authenticated(&format!("/simulators/{}", id), &token)
        .json(&json!({ "weight_increment": -2.5 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let missing = app
        .put_authenticated("/simulators/999", &token)
        .json(&json!({ "name": "Rowing" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_simulator() {
    let app = TestApp::spawn().await;
    let token = app.register_token("nicola").await;

    let created: Value = app
        .post_authenticated("/simulators", &token)
        .json(&bench_press())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .delete_authenticated(&format!("/simulators/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let again = app
        .delete_authenticated(&format!("/simulators/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let gone = app
        .get_authenticated(&format!("/simulators/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
