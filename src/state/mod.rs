//! Client-side state for the lab selection view.
//!
//! DESIGN
//! ======
//! List/selection, the add-lab modal and the caller's identity are separate
//! models so each transition can be tested without a DOM.

pub mod lab_detail;
pub mod labs;
pub mod new_lab;
pub mod session;
