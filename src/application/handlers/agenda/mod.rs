//! Consent-agenda command and query handlers.

mod meeting_resolutions;
mod save_order;

pub use meeting_resolutions::{AgendaEntry, GetMeetingResolutionsHandler};
pub use save_order::{SaveAgendaOrderCommand, SaveAgendaOrderHandler, SaveAgendaOrderResult};
