use serde::{Deserialize, Serialize};

/// A difficulty grade such as `Easy`, `Medium` or `Hard`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkDifficulty {
    /// Grade code
    pub code: String,
}
