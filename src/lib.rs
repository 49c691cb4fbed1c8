//! Board Docket - Resolution Lifecycle & Consent-Agenda Engine
//!
//! This crate implements the governance workflow for board resolutions:
//! drafting, review/approval, consent-agenda ordering, and the publish
//! cascade that assigns sequential resolution numbers when the owning
//! meeting is published.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
