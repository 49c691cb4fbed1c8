//! Meeting command handlers.

mod change_status;

pub use change_status::{
    ChangeMeetingStatusCommand, ChangeMeetingStatusHandler, ChangeMeetingStatusResult,
};
