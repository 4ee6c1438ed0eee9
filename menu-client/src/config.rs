//! Client configuration

/// Default catalog endpoint (microCMS list API for the `menu` model)
pub const DEFAULT_MENU_API_URL: &str = "https://w564vvtx9v.microcms.io/api/v1/menu";

/// Client configuration for the menu catalog source
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog list endpoint (e.g., "https://xxx.microcms.io/api/v1/menu")
    pub base_url: String,

    /// Value sent in the `X-API-KEY` header
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Optional `limit` query parameter (the CMS defaults to 10 records)
    pub limit: Option<u32>,
}

impl ClientConfig {
    /// Create a new client configuration for the given endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_ms: 30_000,
            limit: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the `limit` query parameter
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_API_URL)
    }
}
