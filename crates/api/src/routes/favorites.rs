//! Favorite-list mutation handlers.
//!
//! All four handlers act on behalf of the identity-resolved user and
//! require both the user row and the catalog row to exist (404 otherwise).
//! Adding is idempotent; removing an absent favorite is a deliberate
//! no-op success, not an error.

use axum::{
    Json,
    extract::{Path, State},
};

use holocron_core::{CharacterId, PlanetId};

use crate::db::{CharacterRepository, FavoriteRepository, PlanetRepository};
use crate::error::{AppError, Result};
use crate::routes::Msg;
use crate::routes::users::require_user;
use crate::state::AppState;

/// `POST /favorite/planet/{id}` - add a planet to the current user's favorites.
///
/// # Errors
///
/// Returns 404 if the user or planet row is missing.
pub async fn add_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<PlanetId>,
) -> Result<Json<Msg>> {
    let user = require_user(&state, state.identity().current_user()).await?;
    PlanetRepository::new(state.pool())
        .get(planet_id)
        .await?
        .ok_or_else(|| AppError::not_found("planet", planet_id))?;

    FavoriteRepository::new(state.pool())
        .add_planet(user.id, planet_id)
        .await?;
    Ok(Json(Msg::new("Planet added to favorites")))
}

/// `POST /favorite/people/{id}` - add a character to the current user's favorites.
///
/// # Errors
///
/// Returns 404 if the user or character row is missing.
pub async fn add_character(
    State(state): State<AppState>,
    Path(character_id): Path<CharacterId>,
) -> Result<Json<Msg>> {
    let user = require_user(&state, state.identity().current_user()).await?;
    CharacterRepository::new(state.pool())
        .get(character_id)
        .await?
        .ok_or_else(|| AppError::not_found("character", character_id))?;

    FavoriteRepository::new(state.pool())
        .add_character(user.id, character_id)
        .await?;
    Ok(Json(Msg::new("Character added to favorites")))
}

/// `DELETE /favorite/planet/{id}` - remove a planet from the current user's favorites.
///
/// Removing a planet that is not currently favorited is a no-op success
/// with an explanatory message.
///
/// # Errors
///
/// Returns 404 if the user or planet row itself is missing.
pub async fn remove_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<PlanetId>,
) -> Result<Json<Msg>> {
    let user = require_user(&state, state.identity().current_user()).await?;
    PlanetRepository::new(state.pool())
        .get(planet_id)
        .await?
        .ok_or_else(|| AppError::not_found("planet", planet_id))?;

    let removed = FavoriteRepository::new(state.pool())
        .remove_planet(user.id, planet_id)
        .await?;
    if removed {
        Ok(Json(Msg::new("Planet removed from favorites")))
    } else {
        Ok(Json(Msg::new("Planet not found in favorites")))
    }
}

/// `DELETE /favorite/people/{id}` - remove a character from the current user's favorites.
///
/// Removing a character that is not currently favorited is a no-op
/// success with an explanatory message.
///
/// # Errors
///
/// Returns 404 if the user or character row itself is missing.
pub async fn remove_character(
    State(state): State<AppState>,
    Path(character_id): Path<CharacterId>,
) -> Result<Json<Msg>> {
    let user = require_user(&state, state.identity().current_user()).await?;
    CharacterRepository::new(state.pool())
        .get(character_id)
        .await?
        .ok_or_else(|| AppError::not_found("character", character_id))?;

    let removed = FavoriteRepository::new(state.pool())
        .remove_character(user.id, character_id)
        .await?;
    if removed {
        Ok(Json(Msg::new("Character removed from favorites")))
    } else {
        Ok(Json(Msg::new("Character not found in favorites")))
    }
}
