//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{repository::Store, state::AppState};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Storage backend label
    pub backend: String,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health<S: Store>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// Pings the store. Returns 503 Service Unavailable when it does not answer.
pub async fn readiness<S: Store>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let store = state.store();

    let status = match store.ping().await {
        Ok(()) => DependencyStatus {
            healthy: true,
            backend: store.backend().to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => {
            tracing::error!(backend = store.backend(), "Store health check failed: {}", e);
            DependencyStatus {
                healthy: false,
                backend: store.backend().to_string(),
                message: Some("Store unreachable".to_string()),
            }
        }
    };

    let ready = status.healthy;
    let mut dependencies = HashMap::new();
    dependencies.insert("store".to_string(), status);

    let response = ReadinessResponse {
        ready,
        service: state.config().service.name.clone(),
        dependencies,
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, repository::MemoryStore};
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let state = AppState::new(Config::default(), MemoryStore::new());
        let response = health(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "nzwalks");
    }

    #[tokio::test]
    async fn test_readiness_with_memory_store() {
        let state = AppState::new(Config::default(), MemoryStore::new());
        let response = readiness(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ReadinessResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.ready);
        assert_eq!(body.dependencies["store"].backend, "memory");
    }
}
