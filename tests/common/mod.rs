use std::sync::Arc;
use std::time::Duration;

use cart_wishlist_api::{
    catalog::CatalogClient, config::AppConfig, db, events, handlers::AppServices, AppState,
};

/// Harness spinning up application state backed by an in-memory SQLite
/// database. The default catalog URL is unroutable so enrichment exercises
/// the degrade path; tests needing a live catalog point it at a mock server.
pub struct TestApp {
    pub state: Arc<AppState>,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_catalog_url("http://127.0.0.1:1").await
    }

    pub async fn with_catalog_url(catalog_url: &str) -> Self {
        let cfg = AppConfig::new("sqlite::memory:", catalog_url, "127.0.0.1", 18_080, "test");

        // A single connection keeps the in-memory database alive for the
        // whole test.
        let pool = db::establish_connection_with_config(&db::DbConfig {
            url: cfg.database_url.clone(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        })
        .await
        .expect("failed to create test database");

        db::ensure_schema(&pool)
            .await
            .expect("failed to create test schema");

        let db = Arc::new(pool);
        let (event_sender, event_rx) = events::channel(64);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let catalog = CatalogClient::new(catalog_url, Duration::from_millis(500))
            .expect("failed to build catalog client");

        let services = AppServices::new(db.clone(), event_sender.clone(), catalog);

        let state = Arc::new(AppState {
            db,
            config: cfg,
            event_sender,
            services,
        });

        Self {
            state,
            _event_task: event_task,
        }
    }
}
