//! Domain layer
//!
//! Pure business logic with no external dependencies.
//! - `entities`: domain models for the clinic's core concepts
//! - `ports`: trait definitions the adapters implement

pub mod entities;
pub mod ports;
