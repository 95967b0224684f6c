//! Modal form for registering a new lab.
//!
//! DESIGN
//! ======
//! The dialog only edits `AddLabState.form` and reports submit/cancel; the
//! page owns the create call and list update.

use leptos::prelude::*;

use crate::state::new_lab::{AddLabState, NewLabField};

#[component]
pub fn AddLabDialog(modal: RwSignal<AddLabState>, on_submit: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--add-lab" role="dialog" aria-modal="true">
                <h2>"Adicionar Novo Laboratório"</h2>
                <Show when=move || modal.with(|m| m.error.is_some())>
                    <div class="dialog__error" role="alert">
                        <p>{move || modal.with(|m| m.error.clone().unwrap_or_default())}</p>
                    </div>
                </Show>
                <form class="dialog__form" on:submit=on_form_submit>
                    <LabFormField modal=modal field=NewLabField::Name/>
                    <LabFormField modal=modal field=NewLabField::Nickname/>
                    <LabFormField modal=modal field=NewLabField::Capacity/>
                    <LabFormField modal=modal field=NewLabField::Location/>
                    <div class="dialog__actions">
                        <button class="btn btn--outline" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || modal.with(|m| m.submitting)
                        >
                            {move || modal.with(AddLabState::submit_label)}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// One labelled input bound to a form field.
#[component]
fn LabFormField(modal: RwSignal<AddLabState>, field: NewLabField) -> impl IntoView {
    let input_type = if field == NewLabField::Capacity { "number" } else { "text" };
    let min = (field == NewLabField::Capacity).then_some("1");

    view! {
        <label class="dialog__label">
            {field.label()}
            <input
                class="dialog__input"
                type=input_type
                min=min
                placeholder=field.placeholder()
                required=field.required()
                prop:value=move || modal.with(|m| m.form.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| m.form.set(field, value));
                }
            />
        </label>
    }
}
