//! HTTP listener, middleware stack and graceful shutdown

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::{Config, CorsMode},
    error::Result,
    middleware::{request_id_layer, request_id_propagation_layer, sensitive_headers_layer},
};

/// Serves a router on the configured port until SIGINT or SIGTERM
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Wrap `app` in the middleware stack
    ///
    /// The last layer added is the outermost: request ids are assigned before
    /// the trace span opens.
    pub fn layered(&self, app: Router) -> Router {
        let middleware = &self.config.middleware;

        app.layer(cors_layer(middleware.cors_mode))
            .layer(CompressionLayer::new())
            .layer(TimeoutLayer::with_status_code(
                http::StatusCode::REQUEST_TIMEOUT,
                self.config.service.timeout(),
            ))
            .layer(RequestBodyLimitLayer::new(middleware.body_limit_bytes()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            .layer(sensitive_headers_layer())
            .layer(request_id_propagation_layer())
            .layer(request_id_layer())
            .layer(CatchPanicLayer::new())
    }

    /// Bind, serve and drain in-flight requests on shutdown
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.service.port));

        tracing::info!(
            service = %self.config.service.name,
            %addr,
            cors = ?self.config.middleware.cors_mode,
            body_limit_mb = self.config.middleware.body_limit_mb,
            timeout_secs = self.config.service.timeout_secs,
            "starting"
        );

        let app = self.layered(app);
        let listener = TcpListener::bind(&addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn cors_layer(mode: CorsMode) -> CorsLayer {
    match mode {
        CorsMode::Permissive => CorsLayer::permissive(),
        // An empty CorsLayer answers no preflight and adds no allow headers
        CorsMode::Restrictive => CorsLayer::new(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(signal = received, "draining in-flight requests");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::post};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_server_creation() {
        let config = Config::default();
        let server = Server::new(config.clone());
        assert_eq!(server.config().service.port, config.service.port);
    }

    #[tokio::test]
    async fn test_body_limit_is_enforced() {
        let mut config = Config::default();
        config.middleware.body_limit_mb = 1;
        let server = Server::new(config);

        let app = server.layered(Router::new().route("/", post(|body: String| async move { body.len().to_string() })));
        let oversized = "x".repeat(2 * 1024 * 1024);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from(oversized))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_restrictive_cors_omits_allow_origin() {
        let mut config = Config::default();
        config.middleware.cors_mode = CorsMode::Restrictive;
        let app = Server::new(config).layered(Router::new().route("/", post(|| async { "ok" })));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("origin", "https://walks.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(!response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_layered_router_tags_responses_with_request_id() {
        let server = Server::new(Config::default());
        let app = server.layered(Router::new().route("/", post(|| async { "ok" })));

        let response = app
            .oneshot(Request::builder().method("POST").uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }
}
