//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                       - Route map (discovery endpoint)
//! GET    /user                   - Static greeting
//! GET    /users                  - List all users
//! GET    /users/favorites        - Current user's favorites
//!
//! # Catalog (read-only)
//! GET    /people                 - List all characters
//! GET    /people/{id}            - One character
//! GET    /planets                - List all planets
//! GET    /planets/{id}           - One planet
//!
//! # Favorites (current user)
//! POST   /favorite/planet/{id}   - Add planet to favorites
//! DELETE /favorite/planet/{id}   - Remove planet from favorites
//! POST   /favorite/people/{id}   - Add character to favorites
//! DELETE /favorite/people/{id}   - Remove character from favorites
//! ```
//!
//! Liveness and readiness endpoints are registered in `main.rs`.

pub mod catalog;
pub mod favorites;
pub mod users;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Confirmation message body: `{"msg": ...}`.
#[derive(Debug, Serialize)]
pub struct Msg {
    pub msg: String,
}

impl Msg {
    /// Create a message body.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// One registered route, as exposed by the discovery endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

/// Every route the service registers, for external tooling.
///
/// Must stay in sync with [`routes`] and the health routes in `main.rs`.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { method: "GET", path: "/" },
    RouteEntry { method: "GET", path: "/health" },
    RouteEntry { method: "GET", path: "/health/ready" },
    RouteEntry { method: "GET", path: "/user" },
    RouteEntry { method: "GET", path: "/users" },
    RouteEntry { method: "GET", path: "/users/favorites" },
    RouteEntry { method: "GET", path: "/people" },
    RouteEntry { method: "GET", path: "/people/{id}" },
    RouteEntry { method: "GET", path: "/planets" },
    RouteEntry { method: "GET", path: "/planets/{id}" },
    RouteEntry { method: "POST", path: "/favorite/planet/{id}" },
    RouteEntry { method: "DELETE", path: "/favorite/planet/{id}" },
    RouteEntry { method: "POST", path: "/favorite/people/{id}" },
    RouteEntry { method: "DELETE", path: "/favorite/people/{id}" },
];

/// `GET /` - machine-readable map of registered routes.
pub async fn sitemap() -> Json<&'static [RouteEntry]> {
    Json(ROUTES)
}

/// Create all routes for the catalog API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap))
        .route("/user", get(users::greeting))
        .route("/users", get(users::index))
        .route("/users/favorites", get(users::favorites))
        .route("/people", get(catalog::list_people))
        .route("/people/{id}", get(catalog::get_person))
        .route("/planets", get(catalog::list_planets))
        .route("/planets/{id}", get(catalog::get_planet))
        .route(
            "/favorite/planet/{id}",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(favorites::add_character).delete(favorites::remove_character),
        )
}
