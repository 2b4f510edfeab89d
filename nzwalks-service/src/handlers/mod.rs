//! REST collection handlers
//!
//! Each entity is exposed as a collection with the standard five operations.
//! The handlers are generic: [`Resource`] supplies the entity's name,
//! collection path and DTOs, and any [`Store`](crate::repository::Store)
//! supplies persistence.
//!
//! | Operation | Success | Failure |
//! |---|---|---|
//! | list | 200, array in storage order | storage fault |
//! | get | 200 | 404 |
//! | create | 201 + `Location` | 400 with field errors |
//! | update | 200 | 400 with field errors, 404 |
//! | delete | 200, echoes the removed entity | 404 |
//!
//! # Integration with Axum
//!
//! ```rust,ignore
//! use axum::{routing::get, Router};
//! use nzwalks_service::handlers::collection;
//! use nzwalks_service::models::Region;
//!
//! let router = Router::new().route(
//!     "/regions",
//!     get(collection::list::<S, Region>).post(collection::create::<S, Region>),
//! );
//! ```

pub mod collection;
mod error;
mod resource;

pub use error::{ApiError, ApiErrorKind, ApiOperation};
pub use resource::Resource;
