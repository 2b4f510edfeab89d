//! Storage layer
//!
//! A single generic [`Repository`] contract covers regions, walks and walk
//! difficulties. Two backends implement it:
//!
//! - [`MemoryStore`]: insertion-ordered tables held in process
//! - [`PgStore`]: PostgreSQL through a `sqlx` pool
//!
//! Both implement [`Store`], which is what the HTTP layer is generic over.
//!
//! # Example
//!
//! ```rust
//! use nzwalks_service::models::WalkDifficulty;
//! use nzwalks_service::repository::{MemoryStore, Repository};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = MemoryStore::new();
//! let easy = store
//!     .create(WalkDifficulty { code: "Easy".into() })
//!     .await
//!     .unwrap();
//! assert!(Repository::<WalkDifficulty>::exists(&store, easy.id).await.unwrap());
//! # }
//! ```

mod error;
mod memory;
mod postgres;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::{HasTable, MemoryStore, MemoryTable};
pub use postgres::{PgModel, PgStore};
pub use traits::{Repository, RepositoryResult, Store};
