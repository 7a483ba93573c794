//! Seed command: the fixed user and a small sample catalog.
//!
//! All inserts use `INSERT OR IGNORE` with explicit ids, so re-running
//! the command against an existing store is harmless.

use sqlx::SqlitePool;
use tracing::info;

use holocron_api::config::ApiConfig;
use holocron_api::db;
use holocron_api::identity::FIXED_USER_ID;

/// Sample planets: (id, name, climate, terrain, population).
const PLANETS: &[(i32, &str, &str, &str, i64)] = &[
    (1, "Alderaan", "temperate", "grasslands, mountains", 2_000_000_000),
    (2, "Hoth", "frozen", "tundra, ice caves", 0),
    (3, "Dagobah", "murky", "swamp, jungles", 0),
    (4, "Endor", "temperate", "forests, mountains", 30_000_000),
    (5, "Tatooine", "arid", "desert", 200_000),
];

/// Sample characters: (id, name, species, gender, birth year, homeworld id).
const CHARACTERS: &[(i32, &str, &str, &str, &str, Option<i32>)] = &[
    (1, "Luke Skywalker", "Human", "male", "19BBY", Some(5)),
    (2, "Leia Organa", "Human", "female", "19BBY", Some(1)),
    (3, "Han Solo", "Human", "male", "29BBY", None),
    (4, "Yoda", "Yoda's species", "male", "896BBY", None),
];

/// Bootstrap the schema and insert the fixed user plus the sample catalog.
///
/// # Errors
///
/// Returns an error if configuration is invalid or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;

    seed_fixed_user(&pool).await?;
    seed_catalog(&pool).await?;

    info!("Seeding complete");
    Ok(())
}

async fn seed_fixed_user(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO user (id, email) VALUES (?, ?)")
        .bind(FIXED_USER_ID.as_i32())
        .bind("explorer@holocron.local")
        .execute(pool)
        .await?;
    info!(user_id = %FIXED_USER_ID, "Fixed user present");
    Ok(())
}

async fn seed_catalog(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (id, name, climate, terrain, population) in PLANETS {
        sqlx::query(
            "INSERT OR IGNORE INTO planet (id, name, climate, terrain, population)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(climate)
        .bind(terrain)
        .bind(population)
        .execute(pool)
        .await?;
    }
    info!(count = PLANETS.len(), "Planets seeded");

    for (id, name, species, gender, birth_year, homeworld_id) in CHARACTERS {
        sqlx::query(
            "INSERT OR IGNORE INTO character (id, name, species, gender, birth_year, homeworld_id)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(species)
        .bind(gender)
        .bind(birth_year)
        .bind(homeworld_id)
        .execute(pool)
        .await?;
    }
    info!(count = CHARACTERS.len(), "Characters seeded");

    Ok(())
}
