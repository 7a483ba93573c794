//! Favorite-association repository.
//!
//! Favorites are plain many-to-many association rows between a user and a
//! catalog entity. Membership is a set: the composite primary keys in the
//! schema reject duplicates, and `add_*` uses `INSERT OR IGNORE` so adding
//! an already-favorited item succeeds as a no-op.

use sqlx::SqlitePool;

use holocron_core::{CharacterId, PlanetId, UserId};

use super::RepositoryError;
use super::characters::CharacterRow;
use super::planets::PlanetRow;
use crate::models::{Character, Planet};

/// Repository for a user's favorite planets and characters.
pub struct FavoriteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's favorite planets, ordered by planet id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn planets_for(&self, user_id: UserId) -> Result<Vec<Planet>, RepositoryError> {
        let rows = sqlx::query_as::<_, PlanetRow>(
            "SELECT p.id, p.name, p.climate, p.terrain, p.population
             FROM planet p
             JOIN favorite_planet fp ON fp.planet_id = p.id
             WHERE fp.user_id = ?
             ORDER BY p.id",
        )
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    /// List a user's favorite characters, ordered by character id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn characters_for(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Character>, RepositoryError> {
        let rows = sqlx::query_as::<_, CharacterRow>(
            "SELECT c.id, c.name, c.species, c.gender, c.birth_year, c.homeworld_id
             FROM character c
             JOIN favorite_character fc ON fc.character_id = c.id
             WHERE fc.user_id = ?
             ORDER BY c.id",
        )
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Character::from).collect())
    }

    /// Add a planet to a user's favorites. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_planet(
        &self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT OR IGNORE INTO favorite_planet (user_id, planet_id) VALUES (?, ?)")
            .bind(user_id.as_i32())
            .bind(planet_id.as_i32())
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Add a character to a user's favorites. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_character(
        &self,
        user_id: UserId,
        character_id: CharacterId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT OR IGNORE INTO favorite_character (user_id, character_id) VALUES (?, ?)",
        )
        .bind(user_id.as_i32())
        .bind(character_id.as_i32())
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Remove a planet from a user's favorites.
    ///
    /// Returns `true` if a row was removed, `false` if the planet was not
    /// in the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove_planet(
        &self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM favorite_planet WHERE user_id = ? AND planet_id = ?")
                .bind(user_id.as_i32())
                .bind(planet_id.as_i32())
                .execute(self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a character from a user's favorites.
    ///
    /// Returns `true` if a row was removed, `false` if the character was
    /// not in the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove_character(
        &self,
        user_id: UserId,
        character_id: CharacterId,
    ) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM favorite_character WHERE user_id = ? AND character_id = ?")
                .bind(user_id.as_i32())
                .bind(character_id.as_i32())
                .execute(self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_character, insert_planet, insert_user, memory_pool};

    const USER: UserId = UserId::new(1);

    async fn seeded_pool() -> SqlitePool {
        let pool = memory_pool().await;
        insert_user(&pool, USER, "leia@example.com").await;
        insert_planet(&pool, 5.into(), "Tatooine").await;
        insert_character(&pool, 3.into(), "Luke Skywalker").await;
        pool
    }

    #[tokio::test]
    async fn test_add_planet_appears_in_favorites() {
        let pool = seeded_pool().await;
        let repo = FavoriteRepository::new(&pool);

        repo.add_planet(USER, PlanetId::new(5)).await.unwrap();

        let planets = repo.planets_for(USER).await.unwrap();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].name, "Tatooine");
    }

    #[tokio::test]
    async fn test_add_planet_twice_is_idempotent() {
        let pool = seeded_pool().await;
        let repo = FavoriteRepository::new(&pool);

        repo.add_planet(USER, PlanetId::new(5)).await.unwrap();
        repo.add_planet(USER, PlanetId::new(5)).await.unwrap();

        assert_eq!(repo.planets_for(USER).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_planet_reports_membership() {
        let pool = seeded_pool().await;
        let repo = FavoriteRepository::new(&pool);

        repo.add_planet(USER, PlanetId::new(5)).await.unwrap();
        assert!(repo.remove_planet(USER, PlanetId::new(5)).await.unwrap());
        // Second delete finds nothing to remove
        assert!(!repo.remove_planet(USER, PlanetId::new(5)).await.unwrap());
        assert!(repo.planets_for(USER).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_character_favorites_roundtrip() {
        let pool = seeded_pool().await;
        let repo = FavoriteRepository::new(&pool);

        repo.add_character(USER, CharacterId::new(3)).await.unwrap();
        let characters = repo.characters_for(USER).await.unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "Luke Skywalker");

        assert!(
            repo.remove_character(USER, CharacterId::new(3))
                .await
                .unwrap()
        );
        assert!(repo.characters_for(USER).await.unwrap().is_empty());
    }
}
