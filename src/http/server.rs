//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, limits, timeout, metrics)
//! - Bind server to listener and shut it down gracefully
//! - Serve the frontend shell for history-mode deep links

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, FrontendConfig};
use crate::http::cors::cors_layer;
use crate::http::frontend::spa_handler;
use crate::http::handlers::{get_questions, health, register_participant, submit_answers};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::websocket::{ws_handler, LeaderboardHub};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::quiz::SessionRegistry;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: SessionRegistry,
    pub routes: Arc<RouteTable>,
    pub frontend: Arc<FrontendConfig>,
    pub leaderboard: LeaderboardHub,
    pub shutdown: Shutdown,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            registry: SessionRegistry::from_config(&config.quizzes),
            routes: Arc::new(RouteTable::new(&config.frontend.base_url)),
            frontend: Arc::new(config.frontend.clone()),
            leaderboard: LeaderboardHub::default(),
            shutdown: Shutdown::new(),
        }
    }
}

/// HTTP server for the quiz service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/quizzes/participant", post(register_participant))
            .route("/quizzes/questions", get(get_questions))
            .route("/quizzes/answers", post(submit_answers))
            .route("/ws", get(ws_handler))
            .route("/health", get(health))
            .fallback(get(spa_handler))
            .layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(propagate_request_id_layer())
                    .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
                    .layer(cors_layer(&config.cors))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_url = %self.state.routes.base_url(),
            quizzes = ?self.state.registry.ids(),
            "HTTP server starting"
        );

        let sockets = self.state.shutdown.clone();
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                sockets.trigger();
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared state, e.g. to seed sessions before serving.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Records request count and latency per matched route.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "frontend".to_string());

    let response = next.run(request).await;
    metrics::record_request(&method, &endpoint, response.status().as_u16(), start);
    response
}
