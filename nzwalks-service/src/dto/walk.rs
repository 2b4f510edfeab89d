use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Identified, Walk};

/// Body of `POST /walks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddWalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Body of `PUT /walks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Walk as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkResponse {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl From<AddWalkRequest> for Walk {
    fn from(request: AddWalkRequest) -> Self {
        Self {
            name: request.name,
            length: request.length,
            region_id: request.region_id,
            walk_difficulty_id: request.walk_difficulty_id,
        }
    }
}

impl From<UpdateWalkRequest> for Walk {
    fn from(request: UpdateWalkRequest) -> Self {
        Self {
            name: request.name,
            length: request.length,
            region_id: request.region_id,
            walk_difficulty_id: request.walk_difficulty_id,
        }
    }
}

impl From<Identified<Walk>> for WalkResponse {
    fn from(Identified { id, model }: Identified<Walk>) -> Self {
        Self {
            id,
            name: model.name,
            length: model.length,
            region_id: model.region_id,
            walk_difficulty_id: model.walk_difficulty_id,
        }
    }
}
