//! Page for one lab, reached after proceeding from the selection view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::HttpLabService;
use crate::state::labs::{bookings_label, capacity_label};
use crate::state::lab_detail::LabDetailState;

#[component]
pub fn LabDetailPage() -> impl IntoView {
    let params = use_params_map();
    let service = use_context::<HttpLabService>()
        .unwrap_or_else(|| HttpLabService::new(crate::config::ApiConfig::from_build_env()));
    let detail = RwSignal::new(LabDetailState::default());
    let nickname = move || params.read().get("nickname").unwrap_or_default();

    Effect::new(move || {
        let nickname = nickname();
        detail.set(LabDetailState::Loading);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::LabService as _;

            let service = service.clone();
            leptos::task::spawn_local(async move {
                let result = service.fetch_lab(&nickname).await;
                if let Err(e) = &result {
                    leptos::logging::error!("lab {nickname} lookup failed: {e}");
                }
                detail.set(LabDetailState::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&service, nickname);
        }
    });

    view! {
        <div class="lab-detail">
            <a class="lab-detail__back" href="/">"← Voltar"</a>
            {move || match detail.get() {
                LabDetailState::Loaded(lab) => {
                    let capacity = capacity_label(&lab);
                    let bookings = bookings_label(&lab);
                    let location = lab.location_label().map(str::to_owned);
                    let description = lab.description.clone().filter(|d| !d.trim().is_empty());
                    view! {
                        <article class="lab-detail__card">
                            <h1 class="lab-detail__name">{lab.name}</h1>
                            <span class="lab-detail__nickname">{lab.nickname}</span>
                            <span class="lab-detail__capacity">{capacity}</span>
                            {bookings.map(|text| view! { <span class="lab-detail__bookings">{text}</span> })}
                            {location.map(|loc| view! { <p class="lab-detail__location">{format!("📍 {loc}")}</p> })}
                            {description.map(|text| view! { <p class="lab-detail__description">{text}</p> })}
                        </article>
                    }
                        .into_any()
                }
                other => {
                    let text = other.status_text().unwrap_or_default().to_owned();
                    view! { <p class="lab-detail__status">{text}</p> }.into_any()
                }
            }}
        </div>
    }
}
