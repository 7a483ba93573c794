//! Catalog route handlers for planets and characters.
//!
//! Catalog entities are read-only through the API: handlers here only
//! look rows up and serialize them.

use axum::{
    Json,
    extract::{Path, State},
};

use holocron_core::{CharacterId, PlanetId};

use crate::db::{CharacterRepository, PlanetRepository};
use crate::error::{AppError, Result};
use crate::models::{Character, Planet};
use crate::state::AppState;

/// `GET /people` - list all characters.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Character>>> {
    let characters = CharacterRepository::new(state.pool()).list().await?;
    Ok(Json(characters))
}

/// `GET /people/{id}` - one character.
///
/// # Errors
///
/// Returns 404 if the id does not correspond to a character.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
) -> Result<Json<Character>> {
    let character = CharacterRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("character", id))?;
    Ok(Json(character))
}

/// `GET /planets` - list all planets.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>> {
    let planets = PlanetRepository::new(state.pool()).list().await?;
    Ok(Json(planets))
}

/// `GET /planets/{id}` - one planet.
///
/// # Errors
///
/// Returns 404 if the id does not correspond to a planet.
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<PlanetId>,
) -> Result<Json<Planet>> {
    let planet = PlanetRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("planet", id))?;
    Ok(Json(planet))
}
