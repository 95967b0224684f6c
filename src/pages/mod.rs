//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches and state signals and delegates rendering
//! details to `components`.

pub mod lab_detail;
pub mod lab_selection;
