//! User route handlers: greeting, user listing, and the favorites view.

use axum::{Json, extract::State};
use serde::Serialize;

use holocron_core::UserId;

use crate::db::{FavoriteRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::models::{Character, Planet, User};
use crate::routes::Msg;
use crate::state::AppState;

/// A user's favorites, grouped by catalog type.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
    /// Always empty: no vehicle catalog exists yet. Kept so the response
    /// shape stays stable for clients that already read it.
    pub vehicles: Vec<serde_json::Value>,
}

/// Fetch a user or fail with a not-found error.
pub(crate) async fn require_user(state: &AppState, id: UserId) -> Result<User> {
    UserRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))
}

/// `GET /user` - static greeting.
pub async fn greeting() -> Json<Msg> {
    Json(Msg::new("Hello, this is your GET /user response"))
}

/// `GET /users` - list all users.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// `GET /users/favorites` - the current user's favorites.
///
/// # Errors
///
/// Returns 404 if the current user row is missing.
pub async fn favorites(State(state): State<AppState>) -> Result<Json<FavoritesResponse>> {
    let user_id = state.identity().current_user();
    let user = require_user(&state, user_id).await?;

    let repo = FavoriteRepository::new(state.pool());
    let planets = repo.planets_for(user.id).await?;
    let characters = repo.characters_for(user.id).await?;

    Ok(Json(FavoritesResponse {
        planets,
        characters,
        vehicles: Vec::new(),
    }))
}
