//! Fixed footer summarizing the selected lab with the proceed action.

use leptos::prelude::*;

use crate::net::types::Lab;

#[component]
pub fn SelectionFooter(lab: Lab, on_proceed: Callback<()>) -> impl IntoView {
    view! {
        <div class="selection-footer">
            <div class="selection-footer__inner">
                <div class="selection-footer__summary">
                    "Selecionado: "
                    <span class="selection-footer__name">{lab.name}</span>
                    <span class="selection-footer__nickname">{format!("({})", lab.nickname)}</span>
                </div>
                <button class="btn btn--primary selection-footer__proceed" on:click=move |_| on_proceed.run(())>
                    "Prosseguir para Reserva"
                </button>
            </div>
        </div>
    }
}
