//! Identifier generation for newly created entities
//!
//! Entity ids are opaque UUIDs. The default generator produces UUIDv7 values,
//! which sort by creation time and keep B-tree primary keys append-mostly.

use std::fmt;
use uuid::Uuid;

/// Produces a fresh identifier for every entity added to a repository.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Return an identifier that has never been returned before.
    fn next_id(&self) -> Uuid;
}

/// Time-ordered UUIDv7 generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Random UUIDv4 generator
///
/// Use when ids must not leak creation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
