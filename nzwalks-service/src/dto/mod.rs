//! Request and response DTOs and their mapping to domain models
//!
//! Mapping is expressed as `From` conversions:
//!
//! - request DTO → model (`Region::from(AddRegionRequest)`) copies every field
//!   and never sets an id;
//! - stored entity → response DTO (`RegionResponse::from(Identified<Region>)`)
//!   copies every field and always includes the id.
//!
//! Request fields default to their zero value when absent from the JSON body,
//! so missing fields reach the validator and are reported there.

mod region;
mod walk;
mod walk_difficulty;

pub use region::{AddRegionRequest, RegionResponse, UpdateRegionRequest};
pub use walk::{AddWalkRequest, UpdateWalkRequest, WalkResponse};
pub use walk_difficulty::{
    AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficultyResponse,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identified, Region, Walk, WalkDifficulty};
    use uuid::Uuid;

    #[test]
    fn test_region_round_trip_preserves_fields() {
        let input = AddRegionRequest {
            code: "NZ-AKL".to_string(),
            name: "Auckland".to_string(),
            area: 5.0,
            lat: -36.8,
            long: 174.7,
            population: 100_000,
        };
        let id = Uuid::now_v7();

        let response = RegionResponse::from(Identified::new(id, Region::from(input.clone())));

        assert_eq!(response.id, id);
        assert_eq!(response.code, input.code);
        assert_eq!(response.name, input.name);
        assert_eq!(response.area, input.area);
        assert_eq!(response.lat, input.lat);
        assert_eq!(response.long, input.long);
        assert_eq!(response.population, input.population);
    }

    #[test]
    fn test_walk_round_trip_preserves_references() {
        let region_id = Uuid::now_v7();
        let difficulty_id = Uuid::now_v7();
        let input = UpdateWalkRequest {
            name: "Tongariro Alpine Crossing".to_string(),
            length: 19.4,
            region_id,
            walk_difficulty_id: difficulty_id,
        };
        let id = Uuid::now_v7();

        let response = WalkResponse::from(Identified::new(id, Walk::from(input)));

        assert_eq!(response.id, id);
        assert_eq!(response.name, "Tongariro Alpine Crossing");
        assert_eq!(response.length, 19.4);
        assert_eq!(response.region_id, region_id);
        assert_eq!(response.walk_difficulty_id, difficulty_id);
    }

    #[test]
    fn test_walk_difficulty_mapping() {
        let model = WalkDifficulty::from(AddWalkDifficultyRequest {
            code: "Medium".to_string(),
        });
        assert_eq!(model.code, "Medium");
    }

    #[test]
    fn test_requests_use_camel_case_and_default_missing_fields() {
        let request: AddWalkRequest =
            serde_json::from_str(r#"{"name":"Coast Track","regionId":"00000000-0000-0000-0000-000000000001"}"#)
                .unwrap();
        assert_eq!(request.name, "Coast Track");
        assert_eq!(request.length, 0.0);
        assert_eq!(request.region_id, Uuid::from_u128(1));
        assert_eq!(request.walk_difficulty_id, Uuid::nil());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = WalkResponse {
            id: Uuid::nil(),
            name: "Loop".to_string(),
            length: 2.5,
            region_id: Uuid::nil(),
            walk_difficulty_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("regionId").is_some());
        assert!(json.get("walkDifficultyId").is_some());
        assert!(json.get("region_id").is_none());
    }
}
