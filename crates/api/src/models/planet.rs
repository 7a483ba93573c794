//! Planet domain type.

use serde::{Deserialize, Serialize};

use holocron_core::PlanetId;

/// A catalog planet.
///
/// Read-only through this API; rows are managed by external seed tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    /// Unique planet ID.
    pub id: PlanetId,
    /// Planet name.
    pub name: String,
    /// Dominant climate.
    pub climate: String,
    /// Dominant terrain.
    pub terrain: String,
    /// Known population.
    pub population: i64,
}
