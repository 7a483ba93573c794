//! Character domain type.

use serde::{Deserialize, Serialize};

use holocron_core::{CharacterId, PlanetId};

/// A catalog character.
///
/// Read-only through this API; rows are managed by external seed tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique character ID.
    pub id: CharacterId,
    /// Character name.
    pub name: String,
    /// Species name.
    pub species: String,
    /// Gender, as recorded in the catalog.
    pub gender: String,
    /// In-universe birth year (e.g. "19BBY").
    pub birth_year: String,
    /// Home planet, when one is recorded.
    pub homeworld_id: Option<PlanetId>,
}
