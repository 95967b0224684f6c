//! Banner shown when the lab list could not be fetched.

use leptos::prelude::*;

#[component]
pub fn LoadErrorBanner(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <div class="load-error__message">
                <span class="load-error__icon" aria-hidden="true">"⚠"</span>
                <span>{message}</span>
            </div>
            <button class="btn btn--outline load-error__retry" on:click=move |_| on_retry.run(())>
                "Tentar Novamente"
            </button>
        </div>
    }
}
