use serde_json::Value;

use super::test_app::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

pub struct SeededUser {
    pub id: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    /// Login a user and return their auth info.
    pub async fn login(&self, email: &str, password: &str) -> SeededUser {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Login request failed");

        assert!(
            resp.status().is_success(),
            "Login failed: {}",
            resp.text().await.unwrap_or_default()
        );

        let json: Value = resp.json().await.expect("Failed to parse login response");

        SeededUser {
            id: json["user"]["id"].as_str().unwrap().to_string(),
            email: email.to_string(),
            access_token: json["access_token"].as_str().unwrap().to_string(),
            refresh_token: json["refresh_token"].as_str().unwrap().to_string(),
        }
    }

    /// Login the bootstrapped admin.
    pub async fn admin(&self) -> SeededUser {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Create and login an investor account via the admin API.
    pub async fn create_investor(&self, admin_token: &str, email: &str) -> SeededUser {
        let resp = self
            .auth_post("/api/user", admin_token)
            .json(&serde_json::json!({
                "email": email,
                "password": "Investor123!",
                "display_name": "Test Investor",
                "role": "investor",
                "investor_id": "INV-001",
            }))
            .send()
            .await
            .expect("Create investor failed");
        assert_eq!(
            resp.status().as_u16(),
            201,
            "Create investor failed: {}",
            resp.text().await.unwrap_or_default()
        );

        self.login(email, "Investor123!").await
    }

    /// Create and login a college account via the admin API.
    pub async fn create_college(&self, admin_token: &str, email: &str) -> SeededUser {
        let resp = self
            .auth_post("/api/user", admin_token)
            .json(&serde_json::json!({
                "email": email,
                "password": "College123!",
                "display_name": "Test College",
                "role": "college",
                "college_id": "CLG-001",
            }))
            .send()
            .await
            .expect("Create college failed");
        assert_eq!(resp.status().as_u16(), 201);

        self.login(email, "College123!").await
    }

    /// Issue an invite as admin and return the response body.
    pub async fn issue_invite(&self, admin_token: &str, email: &str) -> Value {
        let resp = self
            .auth_post("/api/invite", admin_token)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .expect("Issue invite failed");
        assert_eq!(
            resp.status().as_u16(),
            201,
            "Issue invite failed: {}",
            resp.text().await.unwrap_or_default()
        );
        resp.json().await.expect("Failed to parse invite response")
    }

    /// Submit a registration with just the required text fields.
    pub async fn register_startup(
        &self,
        token: &str,
        name: &str,
        tagline: &str,
        story: &str,
    ) -> reqwest::Response {
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("tagline", tagline.to_string())
            .text("story", story.to_string());

        self.client
            .post(self.url(&format!("/api/register/{}", token)))
            .multipart(form)
            .send()
            .await
            .expect("Registration request failed")
    }

    /// Issue an invite and complete registration in one step; returns the
    /// published slug.
    pub async fn seed_startup(&self, admin_token: &str, email: &str, name: &str) -> String {
        let invite = self.issue_invite(admin_token, email).await;
        let resp = self
            .register_startup(invite["token"].as_str().unwrap(), name, "tagline", "story")
            .await;
        assert_eq!(
            resp.status().as_u16(),
            201,
            "Seed registration failed: {}",
            resp.text().await.unwrap_or_default()
        );
        let body: Value = resp.json().await.unwrap();
        body["slug"].as_str().unwrap().to_string()
    }

    /// Create an authenticated request with the given token.
    pub fn auth_get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }
}
