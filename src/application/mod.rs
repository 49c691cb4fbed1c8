//! Application layer: command/query handlers over the ports.

pub mod handlers;
