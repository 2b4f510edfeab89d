use serde::{Deserialize, Serialize};

/// A geographic region walks belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Short region code, e.g. `NZ-AKL`
    pub code: String,
    /// Display name
    pub name: String,
    /// Area in square kilometres, strictly positive
    pub area: f64,
    /// Latitude of the region's reference point, never exactly zero
    pub lat: f64,
    /// Longitude of the region's reference point, never exactly zero
    pub long: f64,
    /// Resident population, non-negative
    pub population: i64,
}
