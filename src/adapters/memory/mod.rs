//! In-memory adapters for repositories and access control.

mod access_checker;
mod meeting_repository;
mod resolution_repository;

pub use access_checker::InMemoryAccessChecker;
pub use meeting_repository::InMemoryMeetingRepository;
pub use resolution_repository::InMemoryResolutionRepository;
