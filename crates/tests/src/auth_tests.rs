use crate::fixtures::test_app::{ADMIN_EMAIL, TestApp};
use serde_json::Value;

#[tokio::test]
async fn bootstrap_admin_can_login() {
    let app = TestApp::spawn().await;

    let admin = app.admin().await;
    assert!(!admin.access_token.is_empty());
    assert!(!admin.refresh_token.is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": ADMIN_EMAIL,
            "password": "WrongPassword!",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn login_with_nonexistent_email_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "nobody@test.com",
            "password": "Password123!",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn me_endpoint_returns_current_user_with_role() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let resp = app
        .auth_get("/api/auth/me", &admin.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["email"], ADMIN_EMAIL);
    assert_eq!(json["role"], "admin");
}

#[tokio::test]
async fn me_endpoint_rejects_no_token() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn refresh_token_generates_new_access_token() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let resp = app
        .client
        .post(app.url("/api/auth/refresh"))
        .json(&serde_json::json!({
            "refresh_token": admin.refresh_token,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    let new_token = json["access_token"].as_str().unwrap();

    let resp = app.auth_get("/api/auth/me", new_token).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn only_admin_can_create_users() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let investor = app
        .create_investor(&admin.access_token, "vc@test.com")
        .await;

    // Investor cannot create users
    let resp = app
        .auth_post("/api/user", &investor.access_token)
        .json(&serde_json::json!({
            "email": "other@test.com",
            "password": "Password123!",
            "display_name": "Other",
            "role": "investor",
            "investor_id": "INV-002",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn user_creation_enforces_role_matched_ids() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    // College without college_id
    let resp = app
        .auth_post("/api/user", &admin.access_token)
        .json(&serde_json::json!({
            "email": "college@test.com",
            "password": "Password123!",
            "display_name": "College",
            "role": "college",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    // Investor carrying a college_id
    let resp = app
        .auth_post("/api/user", &admin.access_token)
        .json(&serde_json::json!({
            "email": "vc@test.com",
            "password": "Password123!",
            "display_name": "VC",
            "role": "investor",
            "investor_id": "INV-001",
            "college_id": "CLG-001",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    app.create_investor(&admin.access_token, "dup@test.com").await;

    let resp = app
        .auth_post("/api/user", &admin.access_token)
        .json(&serde_json::json!({
            "email": "dup@test.com",
            "password": "Password123!",
            "display_name": "Dup",
            "role": "investor",
            "investor_id": "INV-009",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 409);
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/api/health")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
}
