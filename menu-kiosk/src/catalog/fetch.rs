//! Catalog fetch task
//!
//! The catalog is fetched once at startup on a background tokio task. There
//! is no retry and no cancellation; the HTTP client's timeout bounds a slow
//! source. The outcome is delivered over a oneshot channel.

use async_trait::async_trait;
use menu_client::{ClientResult, HttpClient};
use shared::models::MenuItem;
use tokio::sync::oneshot;
use tracing::{info, warn};

use super::CatalogOutcome;

/// Source of catalog items
#[async_trait]
pub trait CatalogSource: Send + Sync + 'static {
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>>;
}

#[async_trait]
impl CatalogSource for HttpClient {
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        HttpClient::fetch_menu(self).await
    }
}

/// Fetch the catalog once and turn the result into an outcome
pub async fn load_catalog<S: CatalogSource + ?Sized>(source: &S) -> CatalogOutcome {
    match source.fetch_menu().await {
        Ok(items) => {
            info!(items = items.len(), "Menu catalog loaded");
            CatalogOutcome::Loaded(items)
        }
        Err(e) => {
            warn!(error = %e, "Menu catalog fetch failed, menu stays empty");
            CatalogOutcome::Failed(e.to_string())
        }
    }
}

/// Spawn the startup fetch; the receiver yields exactly one outcome
pub fn spawn_catalog_fetch<S: CatalogSource>(source: S) -> oneshot::Receiver<CatalogOutcome> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let outcome = load_catalog(&source).await;
        if tx.send(outcome).is_err() {
            tracing::debug!("Catalog receiver dropped before fetch completed");
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_client::ClientError;

    struct FixedSource(Vec<MenuItem>);

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
            Err(ClientError::Unauthorized)
        }
    }

    #[tokio::test]
    async fn test_spawned_fetch_delivers_items() {
        let rx = spawn_catalog_fetch(FixedSource(vec![MenuItem::new("a", "A", 500)]));
        match rx.await.unwrap() {
            CatalogOutcome::Loaded(items) => assert_eq!(items.len(), 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_is_exposed() {
        let outcome = load_catalog(&FailingSource).await;
        assert_eq!(
            outcome,
            CatalogOutcome::Failed("Authentication required".to_string())
        );
    }
}
