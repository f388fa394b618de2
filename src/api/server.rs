//! # Flight API HTTP Server
//!
//! Axum-based HTTP server exposing the operation endpoint.
//!
//! All five operations go through `POST /query` as JSON envelopes. A health
//! probe lives at `GET /health`, and when the schema browser is enabled a
//! machine-readable catalog of types and operations is served at
//! `GET /schema`.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::errors::ApiError;
use super::handler::ApiHandler;
use super::request::Request;
use super::response::SuccessResponse;

/// HTTP server for the flight API
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Create a new server around a handler
    pub fn new(handler: ApiHandler, config: ServerConfig, schema_browser: bool) -> Self {
        let router = Self::build_router(Arc::new(handler), schema_browser);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(handler: Arc<ApiHandler>, schema_browser: bool) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let mut router = Router::new()
            .route("/query", post(query_handler))
            .route("/health", get(health_handler));

        if schema_browser {
            router = router.route("/schema", get(schema_handler));
        }

        router
            .with_state(handler)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        tracing::info!("flight API listening on {}", addr);

        // The configured host may be a hostname; bind resolves it.
        let listener = TcpListener::bind(addr.as_str()).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Operation endpoint handler
async fn query_handler(
    State(handler): State<Arc<ApiHandler>>,
    body: String,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request = Request::parse(&body)?;
    let data = handler.execute(request).await?;
    Ok(Json(SuccessResponse::new(data)))
}

/// Health check handler
async fn health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Schema browser handler
async fn schema_handler() -> Json<Value> {
    Json(json!({
        "types": {
            "Flight": {
                "id": "Int",
                "flight_code": "String",
                "origin": "String",
                "destination": "String",
                "air_time": "Float",
                "distance": "Float",
                "airport": "String"
            },
            "FlightInput": {
                "flight_code": "String",
                "origin": "String",
                "destination": "String",
                "air_time": "Float",
                "distance": "Float",
                "airport": "String"
            }
        },
        "queries": {
            "flights": "[Flight]",
            "flight(id)": "Flight"
        },
        "mutations": {
            "createFlight(input)": "Flight",
            "updateFlight(id, input)": "Flight",
            "deleteFlight(id)": "Flight"
        }
    }))
}
