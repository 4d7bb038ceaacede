use bson::doc;
use serde_json::Value;

use crate::fixtures::test_app::TestApp;

#[tokio::test]
async fn admin_issues_invite_with_fresh_token() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let invite = app.issue_invite(&admin.access_token, "founder@test.com").await;

    let token = invite["token"].as_str().unwrap();
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(invite["email"], "founder@test.com");
    assert_eq!(invite["invite_number"], 1);
    assert_eq!(invite["status"], "pending");
    // SMTP is unreachable in tests; invite creation still succeeds and
    // surfaces the link for manual delivery.
    assert_eq!(invite["email_sent"], false);
    assert!(
        invite["register_url"]
            .as_str()
            .unwrap()
            .ends_with(&format!("/register/{}", token))
    );
}

#[tokio::test]
async fn repeat_invites_to_same_email_increment_invite_number() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let first = app.issue_invite(&admin.access_token, "founder@test.com").await;
    let second = app.issue_invite(&admin.access_token, "founder@test.com").await;

    assert_eq!(first["invite_number"], 1);
    assert_eq!(second["invite_number"], 2);
    assert_ne!(first["token"], second["token"]);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let resp = app
        .auth_post("/api/invite", &admin.access_token)
        .json(&serde_json::json!({ "email": "not-an-email" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn non_admin_cannot_issue_invites() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;
    let investor = app.create_investor(&admin.access_token, "vc@test.com").await;

    let resp = app
        .auth_post("/api/invite", &investor.access_token)
        .json(&serde_json::json!({ "email": "founder@test.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn pending_token_resolves_to_invite_info() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let invite = app.issue_invite(&admin.access_token, "founder@test.com").await;
    let token = invite["token"].as_str().unwrap();

    let resp = app
        .client
        .get(app.url(&format!("/api/invite/{}", token)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["email"], "founder@test.com");
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/invite/00000000000000000000000000000000"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn unreadable_invite_is_an_internal_error_not_missing() {
    let app = TestApp::spawn().await;

    // A document the Invite model cannot decode: the lookup fails, which
    // must not be reported as an unknown token.
    app.db
        .collection::<bson::Document>("invites")
        .insert_one(doc! { "token": "cafecafecafecafecafecafecafecafe" })
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url("/api/invite/cafecafecafecafecafecafecafecafe"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 500);
}

#[tokio::test]
async fn admin_lists_invites_newest_first() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    app.issue_invite(&admin.access_token, "first@test.com").await;
    app.issue_invite(&admin.access_token, "second@test.com").await;

    let resp = app
        .auth_get("/api/invite", &admin.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let invites: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(invites.len(), 2);
    let emails: Vec<&str> = invites.iter().map(|i| i["email"].as_str().unwrap()).collect();
    assert!(emails.contains(&"first@test.com"));
    assert!(emails.contains(&"second@test.com"));
}
