//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResolutionRepository` / `MeetingRepository` - aggregate persistence
//! - `EventPublisher` / `EventSubscriber` / `EventHandler` - event bus
//! - `AccessChecker` - centralized capability gate for the command surface

mod access_checker;
mod event_publisher;
mod event_subscriber;
mod meeting_repository;
mod resolution_repository;

pub use access_checker::{AccessChecker, AccessDeniedReason, AccessResult, MANAGE_RESOLUTIONS};
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use meeting_repository::MeetingRepository;
pub use resolution_repository::ResolutionRepository;
