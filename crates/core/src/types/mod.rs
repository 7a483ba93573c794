//! Newtype wrappers for domain values.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::{CharacterId, PlanetId, UserId};
