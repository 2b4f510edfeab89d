//! Domain models
//!
//! A model holds the mutable fields of an entity and nothing else. Once a
//! repository has stored it, the model travels together with its assigned id
//! as an [`Identified`] value. Mappers from request DTOs therefore cannot set
//! an id, and updates cannot change one.

mod region;
mod walk;
mod walk_difficulty;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use region::Region;
pub use walk::Walk;
pub use walk_difficulty::WalkDifficulty;

/// A stored entity: the repository-assigned id plus the model's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identified<M> {
    /// Identifier assigned at creation, immutable afterwards
    pub id: Uuid,
    /// Current field values
    #[serde(flatten)]
    pub model: M,
}

impl<M> Identified<M> {
    /// Pair a model with its identifier
    pub fn new(id: Uuid, model: M) -> Self {
        Self { id, model }
    }

    /// Replace every mutable field, keeping the id
    pub fn replace(&mut self, model: M) {
        self.model = model;
    }
}
