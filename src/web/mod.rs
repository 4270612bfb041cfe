//! Web layer module
//!
//! HTTP interface for the application: the channel listing endpoint, the
//! profile API consumed by the shell, and the embedded shell itself.
//! Handlers stay thin and delegate to the services in `AppState`; errors
//! are mapped to status codes and JSON bodies in one place (`responses`).

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    accounts::AccountService, config::Config, favorites::FavoritesService,
    history::HistoryService, playlist::PlaylistFetcher, store::KeyValueStore,
};

pub mod handlers;
pub mod responses;

pub use responses::ErrorBody;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(
        config: &Config,
        fetcher: PlaylistFetcher,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self> {
        let app = Self::create_router(AppState {
            fetcher: Arc::new(fetcher),
            accounts: AccountService::new(store.clone()),
            history: HistoryService::new(store.clone()),
            favorites: FavoritesService::new(store),
        });

        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;

        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware.
    ///
    /// Public so the integration tests can drive the exact production
    /// router without binding a socket.
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            // Health check endpoint
            .route("/health", get(handlers::health::health_check))
            // Channel listing per configured playlist
            .route("/tv/:id", get(handlers::tv::list_channels))
            // Profile API
            .nest("/api/v1", Self::api_v1_routes())
            // Embedded web shell
            .route("/", get(handlers::static_assets::index))
            .route("/sw.js", get(handlers::static_assets::service_worker))
            .route("/manifest.webmanifest", get(handlers::static_assets::manifest))
            .route("/static/*path", get(handlers::static_assets::serve_static_asset))
            // Middleware (applied in reverse order)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            // Shared state
            .with_state(state)
    }

    /// API v1 routes
    fn api_v1_routes() -> Router<AppState> {
        Router::new()
            .route("/auth/register", post(handlers::auth::register))
            .route("/auth/login", post(handlers::auth::login))
            .route("/auth/logout", post(handlers::auth::logout))
            .route("/auth/session", get(handlers::auth::session))
            .route(
                "/history",
                get(handlers::history::list)
                    .post(handlers::history::add)
                    .delete(handlers::history::clear),
            )
            .route(
                "/favorites",
                get(handlers::favorites::list)
                    .post(handlers::favorites::add)
                    .delete(handlers::favorites::remove),
            )
            .route("/playback/plan", post(handlers::playback::plan))
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<PlaylistFetcher>,
    pub accounts: AccountService,
    pub history: HistoryService,
    pub favorites: FavoritesService,
}
