//! Integration tests for the Holocron API.
//!
//! # Running Tests
//!
//! ```bash
//! # Seed a fresh store and start the server
//! cargo run -p holocron-cli -- seed
//! cargo run -p holocron-api
//!
//! # Run integration tests
//! cargo test -p holocron-integration-tests -- --ignored
//! ```
//!
//! The tests in `tests/` drive a running server over HTTP with `reqwest`
//! and assume the seed catalog from `holocron-cli seed`. They are
//! `#[ignore]`d by default so `cargo test` stays self-contained.
