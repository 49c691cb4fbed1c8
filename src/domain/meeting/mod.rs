//! Meeting domain module.
//!
//! Board meetings own the consent agenda and the schedule data that
//! resolution numbering derives from.
//!
//! # Events
//!
//! - `MeetingStatusChanged` - Published on every status change; the
//!   publish cascade subscribes to this
//! - `AgendaOrderSaved` - Published when a custom order is persisted

mod agenda_order;
mod aggregate;
mod errors;
mod events;

pub use agenda_order::ConsentAgendaOrder;
pub use aggregate::{Meeting, MAX_TITLE_LENGTH};
pub use errors::MeetingError;
pub use events::{AgendaOrderSaved, MeetingStatusChanged};
