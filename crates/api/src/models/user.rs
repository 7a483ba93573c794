//! User domain type.

use serde::{Deserialize, Serialize};

use holocron_core::{Email, UserId};

/// An API user.
///
/// Users are pre-seeded; the API only ever reads them and mutates their
/// favorite associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}
