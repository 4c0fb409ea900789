//! HTTP transport for the GraphQL schema.

use crate::schema::DogparkSchema;
use crate::utils::error::{ParkError, Result};
use async_graphql::http::GraphiQLSource;
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(
    State(schema): State<DogparkSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!("GraphQL request returned {} errors", response.errors.len());
    }
    Json(response)
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Delays every request before it reaches the schema.
async fn latency(State(delay): State<Duration>, request: Request, next: Next) -> Response {
    tokio::time::sleep(delay).await;
    next.run(request).await
}

pub struct GraphqlServer {
    schema: DogparkSchema,
    host: String,
    port: u16,
    latency: Duration,
}

impl GraphqlServer {
    pub fn new(schema: DogparkSchema, host: impl Into<String>, port: u16) -> Self {
        Self {
            schema,
            host: host.into(),
            port,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn router(&self) -> Router {
        let router = Router::new()
            .route(GRAPHQL_PATH, get(graphiql_handler).post(graphql_handler))
            .with_state(self.schema.clone());

        let router = if self.latency.is_zero() {
            router
        } else {
            router.layer(middleware::from_fn_with_state(self.latency, latency))
        };

        router.layer(CorsLayer::permissive())
    }

    pub async fn start(&self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            "🚀 Server ready at http://localhost:{}{}",
            self.port, GRAPHQL_PATH
        );
        if !self.latency.is_zero() {
            info!("Adding {}ms latency to every request", self.latency.as_millis());
        }

        axum::serve(listener, self.router())
            .await
            .map_err(|e| ParkError::ServerError {
                message: e.to_string(),
            })
    }
}
