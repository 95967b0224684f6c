//! Presentational pieces of the lab selection view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the props they are given and report user intent
//! through callbacks; state transitions stay in `state`.

pub mod add_lab_dialog;
pub mod lab_card;
pub mod load_error_banner;
pub mod selection_footer;
