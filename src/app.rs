//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpLabService;
use crate::net::types::CurrentUser;
use crate::pages::{lab_detail::LabDetailPage, lab_selection::LabSelectionPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the lab service and the host-supplied session, then routes `/`
/// to the selection view and `/labs/:nickname` to the chosen lab.
#[component]
pub fn App(#[prop(optional_no_strip)] current_user: Option<CurrentUser>) -> impl IntoView {
    provide_meta_context();

    let service = HttpLabService::new(ApiConfig::from_build_env());
    leptos::logging::log!("lab service at {}", service.config().base_url);

    provide_context(service);
    provide_context(RwSignal::new(SessionState { user: current_user }));

    view! {
        <Stylesheet id="leptos" href="/pkg/lab-selection.css"/>
        <Title text="Laboratórios"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LabSelectionPage/>
                <Route path=(StaticSegment("labs"), ParamSegment("nickname")) view=LabDetailPage/>
            </Routes>
        </Router>
    }
}
