use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Identified, Region};

/// Body of `POST /regions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Body of `PUT /regions/{id}`
///
/// An update replaces every field, so `population` has no zero default here:
/// leaving it out is a validation failure rather than a reset to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: Option<i64>,
}

/// Region as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<AddRegionRequest> for Region {
    fn from(request: AddRegionRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            area: request.area,
            lat: request.lat,
            long: request.long,
            population: request.population,
        }
    }
}

impl From<UpdateRegionRequest> for Region {
    fn from(request: UpdateRegionRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            area: request.area,
            lat: request.lat,
            long: request.long,
            population: request.population.unwrap_or_default(),
        }
    }
}

impl From<Identified<Region>> for RegionResponse {
    fn from(Identified { id, model }: Identified<Region>) -> Self {
        Self {
            id,
            code: model.code,
            name: model.name,
            area: model.area,
            lat: model.lat,
            long: model.long,
            population: model.population,
        }
    }
}
