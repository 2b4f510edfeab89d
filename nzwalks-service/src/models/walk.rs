use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named walking track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    /// Display name
    pub name: String,
    /// Track length in kilometres, strictly positive
    pub length: f64,
    /// Region the walk is located in
    pub region_id: Uuid,
    /// Difficulty grade of the walk
    pub walk_difficulty_id: Uuid,
}
