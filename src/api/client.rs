use crate::utils::error::{ClientError, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Message used when a failed response carries no `message`/`error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// JSON-over-HTTP wrapper around the billing backend. Holds a cookie jar so
/// the login session travels with every later request.
pub struct ApiClient {
    base: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| ClientError::InvalidConfigValueError {
            field: "api_base".to_string(),
            value: base.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        // cookie_store 保存伺服器發下的 session cookie
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidConfigValueError {
                field: "path".to_string(),
                value: path.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::POST, path, None::<&()>).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let bytes = response.bytes().await?;

        // 非 2xx：從回應主體取出人類可讀的錯誤訊息
        if !status.is_success() {
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: extract_error_message(&bytes),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn extract_error_message(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return FALLBACK_ERROR_MESSAGE.to_string();
    };

    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
