use serde_json::Value;

/// Thin request builder over the five /users operations, used by the
/// end-to-end tests. Returns the raw response untouched: no retries and no
/// status interpretation, callers decide what counts as success.
pub struct UsersClient {
    base_url: String,
    http: reqwest::Client,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /users
    pub async fn create_user(&self, payload: &Value) -> Result<reqwest::Response, reqwest::Error> {
        self.http.post(self.url("/users")).json(payload).send().await
    }

    /// GET /users/{id}
    pub async fn get_user(&self, id: i64) -> Result<reqwest::Response, reqwest::Error> {
        self.http.get(self.url(&format!("/users/{id}"))).send().await
    }

    /// PUT /users/{id}
    pub async fn update_user(
        &self,
        id: i64,
        payload: &Value,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.http
            .put(self.url(&format!("/users/{id}")))
            .json(payload)
            .send()
            .await
    }

    /// PATCH /users/{id}
    pub async fn partial_update_user(
        &self,
        id: i64,
        payload: &Value,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.http
            .patch(self.url(&format!("/users/{id}")))
            .json(payload)
            .send()
            .await
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, id: i64) -> Result<reqwest::Response, reqwest::Error> {
        self.http
            .delete(self.url(&format!("/users/{id}")))
            .send()
            .await
    }
}
