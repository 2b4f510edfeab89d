//! Field rules for each request type

use super::{FieldErrors, Reference, ReferenceTarget, Validate};
use crate::dto::{
    AddRegionRequest, AddWalkDifficultyRequest, AddWalkRequest, UpdateRegionRequest,
    UpdateWalkDifficultyRequest, UpdateWalkRequest,
};

fn require_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{field} cannot be Null or Empty."));
    }
}

fn require_positive(errors: &mut FieldErrors, field: &str, value: f64) {
    if value <= 0.0 {
        errors.add(field, format!("{field} cannot be less than or equal to zero."));
    }
}

fn require_non_zero(errors: &mut FieldErrors, field: &str, value: f64) {
    if value == 0.0 {
        errors.add(field, format!("{field} cannot be equal to zero."));
    }
}

fn require_non_negative(errors: &mut FieldErrors, field: &str, value: i64) {
    if value < 0 {
        errors.add(field, format!("{field} cannot be less than zero."));
    }
}

fn check_region(
    errors: &mut FieldErrors,
    code: &str,
    name: &str,
    area: f64,
    lat: f64,
    long: f64,
    population: i64,
) {
    require_text(errors, "Code", code);
    require_text(errors, "Name", name);
    require_positive(errors, "Area", area);
    require_non_zero(errors, "Lat", lat);
    require_non_zero(errors, "Long", long);
    require_non_negative(errors, "Population", population);
}

fn walk_references(region_id: uuid::Uuid, walk_difficulty_id: uuid::Uuid) -> Vec<Reference> {
    vec![
        Reference::new("RegionId", ReferenceTarget::Region, region_id),
        Reference::new(
            "WalkDifficultyId",
            ReferenceTarget::WalkDifficulty,
            walk_difficulty_id,
        ),
    ]
}

impl Validate for AddRegionRequest {
    const SUBJECT: &'static str = "Add Region";

    fn check_fields(&self, errors: &mut FieldErrors) {
        check_region(
            errors,
            &self.code,
            &self.name,
            self.area,
            self.lat,
            self.long,
            self.population,
        );
    }
}

impl Validate for UpdateRegionRequest {
    const SUBJECT: &'static str = "Update Region";

    fn check_fields(&self, errors: &mut FieldErrors) {
        check_region(
            errors,
            &self.code,
            &self.name,
            self.area,
            self.lat,
            self.long,
            self.population.unwrap_or_default(),
        );
        if self.population.is_none() {
            errors.add("Population", "Population cannot be Null or Empty.");
        }
    }
}

impl Validate for AddWalkDifficultyRequest {
    const SUBJECT: &'static str = "Add Walk Difficulty";

    fn check_fields(&self, errors: &mut FieldErrors) {
        require_text(errors, "Code", &self.code);
    }
}

impl Validate for UpdateWalkDifficultyRequest {
    const SUBJECT: &'static str = "Update Walk Difficulty";

    fn check_fields(&self, errors: &mut FieldErrors) {
        require_text(errors, "Code", &self.code);
    }
}

impl Validate for AddWalkRequest {
    const SUBJECT: &'static str = "Add Walk";

    fn check_fields(&self, errors: &mut FieldErrors) {
        require_text(errors, "Name", &self.name);
        require_positive(errors, "Length", self.length);
    }

    fn references(&self) -> Vec<Reference> {
        walk_references(self.region_id, self.walk_difficulty_id)
    }
}

impl Validate for UpdateWalkRequest {
    const SUBJECT: &'static str = "Update Walk";

    fn check_fields(&self, errors: &mut FieldErrors) {
        require_text(errors, "Name", &self.name);
        require_positive(errors, "Length", self.length);
    }

    fn references(&self) -> Vec<Reference> {
        walk_references(self.region_id, self.walk_difficulty_id)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{Region, WalkDifficulty};
    use crate::repository::{MemoryStore, Repository};
    use crate::validation::validate;

    fn auckland() -> AddRegionRequest {
        AddRegionRequest {
            code: "AKL".into(),
            name: "Auckland".into(),
            area: 4894.0,
            lat: -36.8485,
            long: 174.7633,
            population: 1_717_500,
        }
    }

    async fn seeded_store() -> (MemoryStore, Uuid, Uuid) {
        let store = MemoryStore::new();
        let region = store.create(Region::from(auckland())).await.unwrap();
        let difficulty = store
            .create(WalkDifficulty {
                code: "Easy".into(),
            })
            .await
            .unwrap();
        (store, region.id, difficulty.id)
    }

    #[tokio::test]
    async fn test_valid_region_passes() {
        let store = MemoryStore::new();
        assert!(validate(Some(&auckland()), &store).await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_region_reports_every_violation() {
        let store = MemoryStore::new();
        let request = AddRegionRequest {
            code: String::new(),
            name: "   ".into(),
            area: 0.0,
            lat: 0.0,
            long: 174.7,
            population: 10,
        };

        let errors = validate(Some(&request), &store).await.unwrap().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("Code").unwrap(), ["Code cannot be Null or Empty."]);
        assert_eq!(errors.get("Name").unwrap(), ["Name cannot be Null or Empty."]);
        assert_eq!(
            errors.get("Area").unwrap(),
            ["Area cannot be less than or equal to zero."]
        );
        assert_eq!(errors.get("Lat").unwrap(), ["Lat cannot be equal to zero."]);
        assert!(errors.get("Long").is_none());
    }

    #[tokio::test]
    async fn test_update_region_rules_match_add() {
        let store = MemoryStore::new();
        let request = UpdateRegionRequest {
            code: "WGN".into(),
            name: "Wellington".into(),
            area: -1.0,
            lat: -41.28,
            long: 0.0,
            population: Some(-5),
        };

        let errors = validate(Some(&request), &store).await.unwrap().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("Long").unwrap(), ["Long cannot be equal to zero."]);
        assert_eq!(
            errors.get("Population").unwrap(),
            ["Population cannot be less than zero."]
        );
    }

    #[tokio::test]
    async fn test_update_region_requires_population() {
        let store = MemoryStore::new();
        let request = UpdateRegionRequest {
            code: "WGN".into(),
            name: "Wellington".into(),
            area: 444.0,
            lat: -41.28,
            long: 174.77,
            population: None,
        };

        let errors = validate(Some(&request), &store).await.unwrap().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("Population").unwrap(),
            ["Population cannot be Null or Empty."]
        );
    }

    #[tokio::test]
    async fn test_absent_update_uses_update_subject() {
        let store = MemoryStore::new();
        let errors = validate::<UpdateWalkDifficultyRequest, _>(None, &store)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            errors.get("request").unwrap(),
            ["Update Walk Difficulty Data Required."]
        );
    }

    #[tokio::test]
    async fn test_walk_with_resolved_references_passes() {
        let (store, region_id, difficulty_id) = seeded_store().await;
        let request = AddWalkRequest {
            name: "Rangitoto Summit".into(),
            length: 7.0,
            region_id,
            walk_difficulty_id: difficulty_id,
        };

        assert!(validate(Some(&request), &store).await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_walk_with_unknown_region_is_rejected() {
        let (store, _, difficulty_id) = seeded_store().await;
        let request = AddWalkRequest {
            name: "Rangitoto Summit".into(),
            length: 7.0,
            region_id: Uuid::now_v7(),
            walk_difficulty_id: difficulty_id,
        };

        let errors = validate(Some(&request), &store).await.unwrap().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("RegionId").unwrap(), ["RegionId is Invalid"]);
    }

    #[tokio::test]
    async fn test_walk_ids_must_match_their_own_table() {
        let (store, region_id, difficulty_id) = seeded_store().await;
        let request = UpdateWalkRequest {
            name: "Swapped".into(),
            length: 1.5,
            region_id: difficulty_id,
            walk_difficulty_id: region_id,
        };

        let errors = validate(Some(&request), &store).await.unwrap().unwrap_err();

        assert_eq!(errors.get("RegionId").unwrap(), ["RegionId is Invalid"]);
        assert_eq!(
            errors.get("WalkDifficultyId").unwrap(),
            ["WalkDifficultyId is Invalid"]
        );
    }

    #[tokio::test]
    async fn test_empty_walk_collects_field_and_reference_errors() {
        let store = MemoryStore::new();

        let errors = validate(Some(&AddWalkRequest::default()), &store)
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            ["Length", "Name", "RegionId", "WalkDifficultyId"]
        );
    }
}
