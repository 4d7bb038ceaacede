use bson::doc;
use serde_json::Value;

use crate::fixtures::test_app::TestApp;

#[tokio::test]
async fn profile_read_fills_placeholders() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let slug = app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    let resp = app
        .client
        .get(app.url(&format!("/api/startup/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let profile: Value = resp.json().await.unwrap();
    assert_eq!(profile["sector"], "Technology");
    assert_eq!(profile["logo"], "/images/default-logo.png");
    assert_eq!(profile["solution"], "Solution description not available");
    assert_eq!(profile["collaboration_message"], "Open to collaboration opportunities");
    assert_eq!(profile["website"], "");
    assert_eq!(profile["contact_email"], "founder@feed.app");
}

#[tokio::test]
async fn profile_is_served_from_backup_when_primary_is_lost() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let slug = app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    app.db
        .collection::<bson::Document>("startups")
        .delete_one(doc! { "_id": &slug })
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(&format!("/api/startup/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let profile: Value = resp.json().await.unwrap();
    assert_eq!(profile["name"], "Feed App");
}

#[tokio::test]
async fn unreadable_profile_is_an_internal_error_not_missing() {
    let app = TestApp::spawn().await;

    // A document the Startup model cannot decode: the read fails, which
    // must not be reported as an absent profile.
    app.db
        .collection::<bson::Document>("startups")
        .insert_one(doc! { "_id": "broken" })
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url("/api/startup/broken"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 500);
}

#[tokio::test]
async fn missing_profile_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/startup/no-such-startup"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn listing_requires_authentication() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    // The shared client carries the admin's session cookie; use a fresh
    // one for the anonymous request.
    let anonymous = reqwest::Client::new();
    let resp = anonymous.get(app.url("/api/startup")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = app
        .auth_get("/api/startup", &admin.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let startups: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(startups.len(), 1);
    assert_eq!(startups[0]["slug"], "feed-app");
}

#[tokio::test]
async fn interest_toggle_is_reversible() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;
    let investor = app.create_investor(&admin.access_token, "vc@test.com").await;

    let slug = app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    let resp = app
        .auth_post(&format!("/api/startup/{}/interest", slug), &investor.access_token)
        .json(&serde_json::json!({ "kind": "investment" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["interested"], true);

    let resp = app
        .client
        .get(app.url(&format!("/api/startup/{}", slug)))
        .send()
        .await
        .unwrap();
    let profile: Value = resp.json().await.unwrap();
    assert_eq!(profile["interested_investors"].as_array().unwrap().len(), 1);

    // Second toggle restores the original state.
    let resp = app
        .auth_post(&format!("/api/startup/{}/interest", slug), &investor.access_token)
        .json(&serde_json::json!({ "kind": "investment" }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["interested"], false);

    let resp = app
        .client
        .get(app.url(&format!("/api/startup/{}", slug)))
        .send()
        .await
        .unwrap();
    let profile: Value = resp.json().await.unwrap();
    assert!(profile["interested_investors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn hiring_interest_is_tracked_separately() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;
    let investor = app.create_investor(&admin.access_token, "vc@test.com").await;

    let slug = app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    let resp = app
        .auth_post(&format!("/api/startup/{}/interest", slug), &investor.access_token)
        .json(&serde_json::json!({ "kind": "hiring" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/api/startup/{}", slug)))
        .send()
        .await
        .unwrap();
    let profile: Value = resp.json().await.unwrap();
    assert_eq!(profile["hiring_investors"].as_array().unwrap().len(), 1);
    assert!(profile["interested_investors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn only_investors_can_express_interest() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;
    let college = app.create_college(&admin.access_token, "college@test.com").await;

    let slug = app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    let resp = app
        .auth_post(&format!("/api/startup/{}/interest", slug), &college.access_token)
        .json(&serde_json::json!({ "kind": "investment" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn likes_accumulate() {
    let app = TestApp::spawn().await;
    let admin = app.admin().await;

    let slug = app.seed_startup(&admin.access_token, "founder@feed.app", "Feed App").await;

    let resp = app
        .client
        .post(app.url(&format!("/api/startup/{}/like", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 1);

    let resp = app
        .client
        .post(app.url(&format!("/api/startup/{}/like", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);

    let resp = app
        .client
        .get(app.url(&format!("/api/startup/{}/like", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn liking_an_unknown_profile_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/startup/no-such-startup/like"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
