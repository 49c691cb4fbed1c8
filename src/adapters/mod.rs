//! Adapter implementations of the ports.
//!
//! Only in-memory adapters ship with this crate; storage- or
//! broker-backed adapters live with the deployments that need them.

pub mod events;
pub mod memory;
