//! # nzwalks-service
//!
//! CRUD backend for New Zealand walking tracks: regions, walks and walk
//! difficulties exposed as REST collections.
//!
//! ## Features
//!
//! - **Validated writes**: every create and update runs an accumulating
//!   validator, so one rejection reports every violated rule
//! - **Cross-entity checks**: a walk must reference an existing region and an
//!   existing walk difficulty
//! - **Generic storage**: one [`Repository`](repository::Repository) contract
//!   with an in-process backend and a PostgreSQL backend
//! - **Middleware stack**: request IDs, CORS, compression, timeouts, body
//!   size limits, panic recovery
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: SIGTERM and SIGINT drain in-flight requests
//!
//! ## Example
//!
//! ```rust,no_run
//! use nzwalks_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), MemoryStore::new());
//!
//!     Server::new(config).serve(router(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, DatabaseConfig};
    pub use crate::database::create_pool;
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{ApiError, ApiErrorKind, ApiOperation, Resource};
    pub use crate::health::{health, readiness};
    pub use crate::models::{Identified, Region, Walk, WalkDifficulty};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{MemoryStore, PgStore, Repository, RepositoryError, Store};
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::validation::{validate, FieldErrors, Validate};

    pub use axum::{
        extract::{Path, State},
        routing::get,
        Json, Router,
    };
}
