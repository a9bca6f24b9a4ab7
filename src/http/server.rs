//! Standalone host for the forwarder.
//!
//! # Responsibilities
//! - Build the forwarder from the host configuration
//! - Install it on an Axum router with request tracing
//! - Serve until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::trace::TraceLayer;

use crate::config::{ComponentSink, HostConfig};
use crate::error::ConfigurationError;
use crate::http::client::ProxiedClient;
use crate::http::forwarder::Forwarder;
use crate::http::layer::ForwarderLayer;
use crate::http::request::parse_proxy;
use crate::observability::{LogSink, StdoutSink, TracingSink};

/// HTTP server hosting a single forwarder.
pub struct HttpServer {
    router: Router,
    config: HostConfig,
    forwarder: Arc<Forwarder>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: HostConfig) -> Result<Self, ConfigurationError> {
        let sink: Arc<dyn LogSink> = match config.observability.component_sink {
            ComponentSink::Stdout => Arc::new(StdoutSink),
            ComponentSink::Tracing => Arc::new(TracingSink),
        };
        let client = ProxiedClient::new(parse_proxy(&config.forwarder.proxy)?)?;
        let forwarder = Arc::new(Forwarder::with_client_and_sink(
            &config.forwarder,
            &config.listener.instance_name,
            Arc::new(client),
            sink,
        )?);

        let router = Self::build_router(forwarder.clone());
        Ok(Self {
            router,
            config,
            forwarder,
        })
    }

    /// Build the Axum router: every request lands on the forwarder.
    fn build_router(forwarder: Arc<Forwarder>) -> Router {
        let forwarding = ForwarderLayer::new(forwarder).layer(any::<_, _, ()>(next_handler));
        Router::new()
            .fallback_service(forwarding)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            instance = %self.config.listener.instance_name,
            upstream = %self.forwarder.target().authority(),
            keep_host_header = self.forwarder.keeps_host_header(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn forwarder(&self) -> &Arc<Forwarder> {
        &self.forwarder
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Next handler of the chain. The forwarder answers every request itself.
async fn next_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no handler")
}

/// Wait for shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received");
}
