//! Lab selection view: list, select, proceed, and optionally add a lab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only outputs are the `on_lab_select` callback and the create-lab call.
//! The list is fetched once on mount and again on explicit retry; there is no
//! polling and no timeout, so a hung request keeps the spinner up.

#[cfg(test)]
#[path = "lab_selection_test.rs"]
mod lab_selection_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_lab_dialog::AddLabDialog;
use crate::components::lab_card::LabCard;
use crate::components::load_error_banner::LoadErrorBanner;
use crate::components::selection_footer::SelectionFooter;
use crate::net::api::{HttpLabService, LabService};
use crate::net::types::{CreateLabInput, CurrentUser};
use crate::state::labs::LabsState;
use crate::state::new_lab::AddLabState;
use crate::state::session::SessionState;

/// Route wrapper: reads the session from context and navigates to the lab's
/// page on proceed.
#[component]
pub fn LabSelectionPage() -> impl IntoView {
    let session = use_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let on_lab_select = Callback::new(move |nickname: String| {
        navigate(&format!("/labs/{nickname}"), NavigateOptions::default());
    });
    let current_user = session.and_then(|s| s.get_untracked().user);

    view! { <LabSelectionView on_lab_select=on_lab_select current_user=current_user/> }
}

/// The selection view itself, embeddable by any host.
///
/// `service` defaults to a context-provided `HttpLabService`, then to one
/// built from the compile-time config.
#[component]
pub fn LabSelectionView(
    on_lab_select: Callback<String>,
    #[prop(optional_no_strip)] current_user: Option<CurrentUser>,
    #[prop(optional)] service: Option<HttpLabService>,
) -> impl IntoView {
    let service = service
        .or_else(use_context::<HttpLabService>)
        .unwrap_or_else(|| HttpLabService::new(crate::config::ApiConfig::from_build_env()));
    let labs = RwSignal::new(LabsState::default());
    let modal = RwSignal::new(AddLabState::default());
    let show_add = SessionState { user: current_user }.can_add_labs();

    let load = Callback::new({
        let service = service.clone();
        move |()| spawn_load(&service, labs)
    });
    load.run(());

    let on_select = Callback::new(move |nickname: String| {
        labs.update(|s| {
            s.select(&nickname);
        });
    });

    let on_proceed = Callback::new(move |()| {
        proceed(labs, on_lab_select);
    });

    let on_open_modal = move |_| modal.update(AddLabState::open);
    let on_cancel = Callback::new(move |()| modal.update(AddLabState::close));
    let on_submit = Callback::new(move |()| spawn_create(&service, labs, modal));

    view! {
        <div class="lab-selection">
            <header class="lab-selection__header">
                <span class="lab-selection__spacer"></span>
                <h1 class="lab-selection__title">"Selecione o Laboratório"</h1>
                <span class="lab-selection__actions">
                    <Show when=move || show_add>
                        <button class="btn btn--primary lab-selection__add" on:click=on_open_modal>
                            "+ Adicionar Lab"
                        </button>
                    </Show>
                </span>
            </header>

            <Show when=move || labs.with(|s| s.error.is_some())>
                <LoadErrorBanner
                    message=labs.with_untracked(|s| s.error.clone().unwrap_or_default())
                    on_retry=load
                />
            </Show>

            <Show
                when=move || labs.with(|s| !s.loading)
                fallback=|| {
                    view! {
                        <div class="lab-selection__loading">
                            <span class="spinner" aria-hidden="true"></span>
                            <span>"Carregando laboratórios..."</span>
                        </div>
                    }
                }
            >
                <Show when=move || labs.with(LabsState::show_empty_notice)>
                    <div class="lab-selection__empty">
                        <p class="lab-selection__empty-title">"Nenhum laboratório disponível"</p>
                        <p>"Não há laboratórios cadastrados no sistema no momento."</p>
                    </div>
                </Show>
                <div class="lab-selection__list">
                    {move || {
                        labs.with(LabsState::rows)
                            .into_iter()
                            .map(|row| view! { <LabCard lab=row.lab selected=row.selected on_select=on_select/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                {move || {
                    labs.with(|s| s.selected_lab().cloned())
                        .map(|lab| view! { <SelectionFooter lab=lab on_proceed=on_proceed/> })
                }}
            </Show>

            <Show when=move || modal.with(|m| m.open)>
                <AddLabDialog modal=modal on_submit=on_submit on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Hand the selected nickname to the host. Returns whether the callback ran.
pub(crate) fn proceed(labs: RwSignal<LabsState>, on_lab_select: Callback<String>) -> bool {
    let Some(nickname) = labs.with_untracked(|s| s.proceed_target().map(str::to_owned)) else {
        return false;
    };
    on_lab_select.run(nickname);
    true
}

/// Mark a list fetch as started and return its ticket.
pub(crate) fn begin_load(labs: RwSignal<LabsState>) -> u64 {
    let mut seq = 0;
    labs.update(|s| seq = s.begin_load());
    seq
}

/// Fetch the list and apply it unless a newer load has started since.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) async fn load_labs<S: LabService>(service: &S, seq: u64, labs: RwSignal<LabsState>) -> bool {
    let result = service.list_labs().await;
    match &result {
        Ok(items) => leptos::logging::log!("loaded {} labs", items.len()),
        Err(e) => leptos::logging::error!("lab list failed: {e}"),
    }
    let mut applied = false;
    labs.update(|s| applied = s.finish_load(seq, result));
    if !applied {
        leptos::logging::warn!("dropped stale lab list response (load {seq})");
    }
    applied
}

/// Validate the modal and start a submission, if one may start.
pub(crate) fn begin_create(modal: RwSignal<AddLabState>) -> Option<CreateLabInput> {
    let mut started = None;
    modal.update(|m| started = Some(m.begin_submit()));
    match started? {
        Ok(input) => Some(input),
        Err(blocked) => {
            leptos::logging::warn!("add lab not submitted: {blocked}");
            None
        }
    }
}

/// Create the lab, then close the modal and append the row, or show the
/// error inline. Returns whether a row was appended.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) async fn create_lab<S: LabService>(
    service: &S,
    input: CreateLabInput,
    labs: RwSignal<LabsState>,
    modal: RwSignal<AddLabState>,
) -> bool {
    let result = service.create_lab(&input).await;
    match &result {
        Ok(lab) => leptos::logging::log!("lab created: {}", lab.nickname),
        Err(e) => leptos::logging::error!("create lab failed: {e}"),
    }
    let mut created = None;
    modal.update(|m| created = m.finish_submit(result));
    let Some(lab) = created else {
        return false;
    };
    labs.update(|s| s.append_lab(lab));
    true
}

fn spawn_load(service: &HttpLabService, labs: RwSignal<LabsState>) {
    let seq = begin_load(labs);

    #[cfg(feature = "hydrate")]
    {
        let service = service.clone();
        leptos::task::spawn_local(async move {
            load_labs(&service, seq, labs).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service, seq);
    }
}

fn spawn_create(service: &HttpLabService, labs: RwSignal<LabsState>, modal: RwSignal<AddLabState>) {
    let Some(input) = begin_create(modal) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let service = service.clone();
        leptos::task::spawn_local(async move {
            create_lab(&service, input, labs, modal).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service, labs, input);
    }
}
