//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod scheduling;

pub use scheduling::SchedulingService;
