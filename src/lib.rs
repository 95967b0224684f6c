//! # lab-selection
//!
//! Leptos + WASM view for picking a laboratory from the lab service and,
//! for signed-in users, registering new ones.
//!
//! `pages::lab_selection::LabSelectionView` is the embeddable component;
//! `app::App` wires it into a small routed application with the lab detail
//! page behind it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(|| view! { <App/> });
}
