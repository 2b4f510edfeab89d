//! Route table
//!
//! | Path | Methods |
//! |---|---|
//! | `/regions`, `/walks`, `/walkdifficulties` | GET, POST |
//! | `/regions/{id}`, `/walks/{id}`, `/walkdifficulties/{id}` | GET, PUT, DELETE |
//! | `/health` | GET |
//! | `/ready` | GET |

use axum::{routing::get, Router};

use crate::handlers::{collection, Resource};
use crate::health::{health, readiness};
use crate::models::{Region, Walk, WalkDifficulty};
use crate::repository::{Repository, Store};
use crate::state::AppState;

/// Build the application router over any store
pub fn router<S: Store>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::<S>))
        .route("/ready", get(readiness::<S>))
        .merge(collection_routes::<S, Region>())
        .merge(collection_routes::<S, Walk>())
        .merge(collection_routes::<S, WalkDifficulty>())
        .with_state(state)
}

/// The five collection routes of one resource
fn collection_routes<S, M>() -> Router<AppState<S>>
where
    S: Store + Repository<M>,
    M: Resource,
{
    let collection_path = format!("/{}", M::COLLECTION);
    let item_path = format!("/{}/{{id}}", M::COLLECTION);

    Router::new()
        .route(
            &collection_path,
            get(collection::list::<S, M>).post(collection::create::<S, M>),
        )
        .route(
            &item_path,
            get(collection::get::<S, M>)
                .put(collection::update::<S, M>)
                .delete(collection::delete::<S, M>),
        )
}
