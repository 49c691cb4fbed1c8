//! Domain layer - aggregates, value objects, and pure business logic.

pub mod agenda;
pub mod foundation;
pub mod meeting;
pub mod numbering;
pub mod resolution;
