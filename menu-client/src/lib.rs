//! Menu Client - HTTP client for the menu catalog source
//!
//! Reads the list of sellable items from the CMS list endpoint.

pub mod config;
pub mod error;
pub mod http;

pub use config::{ClientConfig, DEFAULT_MENU_API_URL};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{MenuImage, MenuItem, MenuListResponse};
