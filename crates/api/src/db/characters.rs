//! Character repository for database operations.

use sqlx::SqlitePool;

use holocron_core::{CharacterId, PlanetId};

use super::RepositoryError;
use crate::models::Character;

/// Raw `character` row as stored.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CharacterRow {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub gender: String,
    pub birth_year: String,
    pub homeworld_id: Option<i32>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: CharacterId::new(row.id),
            name: row.name,
            species: row.species,
            gender: row.gender,
            birth_year: row.birth_year,
            homeworld_id: row.homeworld_id.map(PlanetId::new),
        }
    }
}

const CHARACTER_COLUMNS: &str = "id, name, species, gender, birth_year, homeworld_id";

/// Repository for character database operations.
///
/// Characters are read-only through the API; there are no write methods.
pub struct CharacterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CharacterRepository<'a> {
    /// Create a new character repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all characters, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Character>, RepositoryError> {
        let rows = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM character ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Character::from).collect())
    }

    /// Get a character by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepositoryError> {
        let row = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM character WHERE id = ?"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Character::from))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_character, memory_pool};

    #[tokio::test]
    async fn test_get_returns_row_fields() {
        let pool = memory_pool().await;
        insert_character(&pool, 3.into(), "Luke Skywalker").await;

        let character = CharacterRepository::new(&pool)
            .get(CharacterId::new(3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(character.id, CharacterId::new(3));
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(character.homeworld_id, None);
    }

    #[tokio::test]
    async fn test_get_missing_character_is_none() {
        let pool = memory_pool().await;
        let found = CharacterRepository::new(&pool)
            .get(CharacterId::new(404))
            .await;
        assert!(found.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_length_matches_table() {
        let pool = memory_pool().await;
        insert_character(&pool, 1.into(), "Luke Skywalker").await;
        insert_character(&pool, 2.into(), "Leia Organa").await;

        let characters = CharacterRepository::new(&pool).list().await.unwrap();
        assert_eq!(characters.len(), 2);
    }
}
