//! Database access for the Holocron catalog store.
//!
//! # Tables
//!
//! - `user` - API users (pre-seeded; never created through the API)
//! - `planet` / `character` - read-only catalog entities
//! - `favorite_planet` / `favorite_character` - favorite membership sets
//!
//! The association tables carry composite primary keys on
//! `(user_id, target_id)`, so favorite membership is a set: adding an
//! already-favorited item is a no-op at the storage level.
//!
//! # Schema
//!
//! The schema is bootstrapped idempotently at startup via
//! [`init_schema`]; there is no migrations framework. Seeding lives in
//! `holocron-cli`.

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;

pub use characters::CharacterRepository;
pub use favorites::FavoriteRepository;
pub use planets::PlanetRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing so the file-backed fallback
/// store works on first run. Foreign keys are enforced on every
/// connection.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot
/// be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Idempotent DDL for the catalog store.
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS user (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS planet (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        climate TEXT NOT NULL,
        terrain TEXT NOT NULL,
        population INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS character (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        species TEXT NOT NULL,
        gender TEXT NOT NULL,
        birth_year TEXT NOT NULL,
        homeworld_id INTEGER REFERENCES planet(id)
    )",
    "CREATE TABLE IF NOT EXISTS favorite_planet (
        user_id INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        planet_id INTEGER NOT NULL REFERENCES planet(id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, planet_id)
    )",
    "CREATE TABLE IF NOT EXISTS favorite_character (
        user_id INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        character_id INTEGER NOT NULL REFERENCES character(id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, character_id)
    )",
];

/// Create the catalog tables if they do not already exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if a DDL statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use holocron_core::{CharacterId, PlanetId, UserId};
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Fresh in-memory database with the schema applied.
    ///
    /// A single connection is required: every `SQLite` `:memory:`
    /// connection is its own database.
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        super::init_schema(&pool)
            .await
            .expect("failed to create schema");
        pool
    }

    pub async fn insert_user(pool: &SqlitePool, id: UserId, email: &str) {
        sqlx::query("INSERT INTO user (id, email) VALUES (?, ?)")
            .bind(id.as_i32())
            .bind(email)
            .execute(pool)
            .await
            .expect("failed to insert user");
    }

    pub async fn insert_planet(pool: &SqlitePool, id: PlanetId, name: &str) {
        sqlx::query(
            "INSERT INTO planet (id, name, climate, terrain, population)
             VALUES (?, ?, 'arid', 'desert', 200000)",
        )
        .bind(id.as_i32())
        .bind(name)
        .execute(pool)
        .await
        .expect("failed to insert planet");
    }

    pub async fn insert_character(pool: &SqlitePool, id: CharacterId, name: &str) {
        sqlx::query(
            "INSERT INTO character (id, name, species, gender, birth_year, homeworld_id)
             VALUES (?, ?, 'Human', 'male', '19BBY', NULL)",
        )
        .bind(id.as_i32())
        .bind(name)
        .execute(pool)
        .await
        .expect("failed to insert character");
    }
}
