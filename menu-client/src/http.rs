//! HTTP client for the menu catalog source

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{MenuItem, MenuListResponse};
use std::time::Duration;

/// Header carrying the CMS API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for reading the catalog
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    limit: Option<u32>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            limit: config.limit,
        })
    }

    /// Endpoint this client reads from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Make a GET request
    ///
    /// The API key header is always sent; an unset key goes out empty.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let request = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, self.api_key.as_deref().unwrap_or(""))
            .query(query);

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        if text.trim().is_empty() {
            return Err(ClientError::InvalidResponse("Empty response body".to_string()));
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Menu API ==========

    /// Fetch the raw catalog list response
    pub async fn fetch_menu_page(&self) -> ClientResult<MenuListResponse> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        self.get::<MenuListResponse>("", &query).await
    }

    /// Fetch every item listed under `contents`
    pub async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        let page = self.fetch_menu_page().await?;

        tracing::debug!(
            items = page.contents.len(),
            total_count = ?page.total_count,
            "Fetched menu catalog"
        );

        Ok(page.contents)
    }
}
