//! Selectable card for one lab in the selection list.

#[cfg(test)]
#[path = "lab_card_test.rs"]
mod lab_card_test;

use leptos::prelude::*;

use crate::net::types::Lab;
use crate::state::labs::{bookings_label, capacity_label};

/// A clickable lab row. Clicking always reports the nickname; the parent
/// decides what selection means.
#[component]
pub fn LabCard(lab: Lab, #[prop(optional)] selected: bool, on_select: Callback<String>) -> impl IntoView {
    let capacity = capacity_label(&lab);
    let bookings = bookings_label(&lab);
    let location = lab.location_label().map(str::to_owned);
    let nickname = lab.nickname.clone();
    let key_nickname = lab.nickname.clone();
    let pressed = if selected { "true" } else { "false" };

    view! {
        <div
            class="lab-card"
            class:lab-card--selected=selected
            role="button"
            tabindex="0"
            aria-pressed=pressed
            on:click=move |_| on_select.run(nickname.clone())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    on_select.run(key_nickname.clone());
                }
            }
        >
            <div class="lab-card__header">
                <div class="lab-card__badges">
                    <span class="lab-card__name">{lab.name}</span>
                    <span class="lab-card__nickname">{lab.nickname}</span>
                    <span class="lab-card__capacity">{capacity}</span>
                    {bookings.map(|text| view! { <span class="lab-card__bookings">{text}</span> })}
                </div>
                <Show when=move || selected>
                    <span class="lab-card__selected">"✓ Selecionado"</span>
                </Show>
            </div>
            {location.map(|loc| view! { <div class="lab-card__location">{format!("📍 {loc}")}</div> })}
        </div>
    }
}

/// Keys that activate a focused `role="button"` element.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
