use serde_json::Value;

use crate::fixtures::test_app::TestApp;

#[tokio::test]
async fn contact_form_is_acknowledged() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/contact"))
        .json(&serde_json::json!({
            "name": "Asha",
            "email": "asha@test.com",
            "phone": "+91 98765 43210",
            "message": "How do I get my college on board?",
            "contact_type": "partnership",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn contact_form_rejects_invalid_email() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/contact"))
        .json(&serde_json::json!({
            "name": "Asha",
            "email": "not-an-email",
            "message": "hello",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn contact_form_requires_name_and_message() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/contact"))
        .json(&serde_json::json!({
            "name": "  ",
            "email": "asha@test.com",
            "message": "hello",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    let resp = app
        .client
        .post(app.url("/api/contact"))
        .json(&serde_json::json!({
            "name": "Asha",
            "email": "asha@test.com",
            "message": "",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}
