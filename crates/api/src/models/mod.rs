//! Domain models for the catalog API.
//!
//! Every entity is a statically-typed struct with a derived `Serialize`
//! impl; the JSON shape of an API response is exactly the field list of
//! the struct behind it. No internal bookkeeping (association rows,
//! connection state) is ever serialized.

pub mod character;
pub mod planet;
pub mod user;

pub use character::Character;
pub use planet::Planet;
pub use user::User;
