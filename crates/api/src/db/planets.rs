//! Planet repository for database operations.

use sqlx::SqlitePool;

use holocron_core::PlanetId;

use super::RepositoryError;
use crate::models::Planet;

/// Raw `planet` row as stored.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PlanetRow {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: PlanetId::new(row.id),
            name: row.name,
            climate: row.climate,
            terrain: row.terrain,
            population: row.population,
        }
    }
}

const PLANET_COLUMNS: &str = "id, name, climate, terrain, population";

/// Repository for planet database operations.
///
/// Planets are read-only through the API; there are no write methods.
pub struct PlanetRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PlanetRepository<'a> {
    /// Create a new planet repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all planets, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Planet>, RepositoryError> {
        let rows = sqlx::query_as::<_, PlanetRow>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planet ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    /// Get a planet by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: PlanetId) -> Result<Option<Planet>, RepositoryError> {
        let row = sqlx::query_as::<_, PlanetRow>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planet WHERE id = ?"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Planet::from))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_planet, memory_pool};

    #[tokio::test]
    async fn test_get_returns_row_fields() {
        let pool = memory_pool().await;
        insert_planet(&pool, 5.into(), "Tatooine").await;

        let planet = PlanetRepository::new(&pool)
            .get(PlanetId::new(5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(planet.id, PlanetId::new(5));
        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.climate, "arid");
    }

    #[tokio::test]
    async fn test_get_missing_planet_is_none() {
        let pool = memory_pool().await;
        let found = PlanetRepository::new(&pool).get(PlanetId::new(404)).await;
        assert!(found.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_length_matches_table() {
        let pool = memory_pool().await;
        insert_planet(&pool, 1.into(), "Hoth").await;
        insert_planet(&pool, 2.into(), "Endor").await;
        insert_planet(&pool, 3.into(), "Dagobah").await;

        let planets = PlanetRepository::new(&pool).list().await.unwrap();
        assert_eq!(planets.len(), 3);
    }
}
