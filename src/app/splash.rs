use leptos::prelude::*;

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-content">
                <div class="loading-spinner"></div>
                <p>"Loading Portfolio..."</p>
            </div>
        </div>
    }
}
