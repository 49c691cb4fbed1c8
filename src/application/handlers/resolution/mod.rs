//! Resolution workflow command handlers.

mod approve;
mod deny;
mod reassign;
mod submit;

pub use approve::{ApproveResolutionCommand, ApproveResolutionHandler, ApproveResolutionResult};
pub use deny::{DenyResolutionCommand, DenyResolutionHandler, DenyResolutionResult};
pub use reassign::{
    ReassignResolutionCommand, ReassignResolutionHandler, ReassignResolutionResult,
};
pub use submit::{SubmitResolutionCommand, SubmitResolutionHandler, SubmitResolutionResult};
