use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Identified, WalkDifficulty};

/// Body of `POST /walkdifficulties`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddWalkDifficultyRequest {
    pub code: String,
}

/// Body of `PUT /walkdifficulties/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkDifficultyRequest {
    pub code: String,
}

/// Walk difficulty as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyResponse {
    pub id: Uuid,
    pub code: String,
}

impl From<AddWalkDifficultyRequest> for WalkDifficulty {
    fn from(request: AddWalkDifficultyRequest) -> Self {
        Self { code: request.code }
    }
}

impl From<UpdateWalkDifficultyRequest> for WalkDifficulty {
    fn from(request: UpdateWalkDifficultyRequest) -> Self {
        Self { code: request.code }
    }
}

impl From<Identified<WalkDifficulty>> for WalkDifficultyResponse {
    fn from(Identified { id, model }: Identified<WalkDifficulty>) -> Self {
        Self {
            id,
            code: model.code,
        }
    }
}
