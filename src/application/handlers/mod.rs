//! Command handlers (CQRS command side) plus the publish cascade
//! event handler.

pub mod agenda;
pub mod meeting;
mod publish_cascade;
pub mod resolution;

#[cfg(test)]
pub(crate) mod test_support;

pub use publish_cascade::{CascadeReport, PublishCascadeHandler};
