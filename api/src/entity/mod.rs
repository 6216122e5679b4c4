//! SeaORM table models
//!
//! One model per table; the `schema.sql` at the repository root is the
//! matching DDL. Domain types live in `domain::entities`, conversions in the
//! postgres adapters.

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod rooms;
