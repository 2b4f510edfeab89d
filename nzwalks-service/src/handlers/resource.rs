//! Per-entity wiring for the generic collection handlers

use serde::{de::DeserializeOwned, Serialize};

use crate::dto::{
    AddRegionRequest, AddWalkDifficultyRequest, AddWalkRequest, RegionResponse,
    UpdateRegionRequest, UpdateWalkDifficultyRequest, UpdateWalkRequest, WalkDifficultyResponse,
    WalkResponse,
};
use crate::models::{Identified, Region, Walk, WalkDifficulty};
use crate::validation::Validate;

/// A model exposed as a REST collection
///
/// Ties the model to its request and response DTOs. The mapping itself is the
/// DTOs' `From` conversions.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Display name used in messages, e.g. `Walk Difficulty`
    const NAME: &'static str;

    /// Path segment of the collection, e.g. `walkdifficulties`
    const COLLECTION: &'static str;

    /// Body of a create request
    type AddRequest: Validate + DeserializeOwned + Into<Self> + Send + Sync + 'static;

    /// Body of an update request
    type UpdateRequest: Validate + DeserializeOwned + Into<Self> + Send + Sync + 'static;

    /// Representation returned to clients
    type Response: From<Identified<Self>> + Serialize + Send + 'static;

    /// Location of one entity in the collection
    fn location(id: impl std::fmt::Display) -> String {
        format!("/{}/{}", Self::COLLECTION, id)
    }
}

impl Resource for Region {
    const NAME: &'static str = "Region";
    const COLLECTION: &'static str = "regions";

    type AddRequest = AddRegionRequest;
    type UpdateRequest = UpdateRegionRequest;
    type Response = RegionResponse;
}

impl Resource for Walk {
    const NAME: &'static str = "Walk";
    const COLLECTION: &'static str = "walks";

    type AddRequest = AddWalkRequest;
    type UpdateRequest = UpdateWalkRequest;
    type Response = WalkResponse;
}

impl Resource for WalkDifficulty {
    const NAME: &'static str = "Walk Difficulty";
    const COLLECTION: &'static str = "walkdifficulties";

    type AddRequest = AddWalkDifficultyRequest;
    type UpdateRequest = UpdateWalkDifficultyRequest;
    type Response = WalkDifficultyResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_location_uses_collection_path() {
        let id = Uuid::from_u128(7);
        assert_eq!(
            WalkDifficulty::location(id),
            format!("/walkdifficulties/{id}")
        );
        assert_eq!(Region::location("abc"), "/regions/abc");
    }
}
