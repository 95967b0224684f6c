//! Networking for the lab service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the `LabService` seam and its HTTP implementation, `types`
//! defines the JSON wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_service;
