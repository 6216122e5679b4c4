//! Test utilities
//!
//! Manual in-memory implementations of the repository ports plus fixture
//! factories. Repositories are injected as trait objects, so the same mocks
//! back both service-level unit tests and full router tests via axum-test.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
