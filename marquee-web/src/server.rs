//! Web server wiring: shared state, routes, and startup.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use marquee_core::MarqueeConfig;
use marquee_search::client::{CatalogClient, OmdbClient};
use marquee_search::controller::SearchController;
use marquee_search::detail::DetailLoader;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::handlers::actions::{
    change_page, close_modal, dismiss_error, select_title, submit_search,
};
use crate::handlers::api::{api_search, api_title};
use crate::pages::search_page;

/// Shared application state.
///
/// The list and detail channels live behind separate locks so a detail
/// fetch never blocks list loading and vice versa. Handlers take a
/// lock only for the synchronous begin/apply transitions, never across
/// a catalog await.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn CatalogClient>,
    list: Arc<RwLock<SearchController>>,
    detail: Arc<RwLock<DetailLoader>>,
}

impl AppState {
    /// Creates fresh state around a catalog client.
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            catalog,
            list: Arc::new(RwLock::new(SearchController::new())),
            detail: Arc::new(RwLock::new(DetailLoader::new())),
        }
    }

    /// The catalog client.
    pub fn catalog(&self) -> &Arc<dyn CatalogClient> {
        &self.catalog
    }

    /// The list-channel state machine.
    pub fn list(&self) -> &Arc<RwLock<SearchController>> {
        &self.list
    }

    /// The detail-channel state machine.
    pub fn detail(&self) -> &Arc<RwLock<DetailLoader>> {
        &self.detail
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(search_page))
        // Form actions
        .route("/search", post(submit_search))
        .route("/page/{n}", get(change_page))
        .route("/title/{imdb_id}", get(select_title))
        .route("/close", post(close_modal))
        .route("/dismiss", post(dismiss_error))
        // JSON passthrough API
        .route("/api/search", get(api_search))
        .route("/api/title/{imdb_id}", get(api_title))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web UI and serves until shutdown.
///
/// # Errors
///
/// Returns an error when the catalog client cannot be constructed or
/// the listener cannot bind.
pub async fn run_server(config: MarqueeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = OmdbClient::from_config(&config.catalog)?;
    let state = AppState::new(Arc::new(catalog));
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("marquee web UI listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
