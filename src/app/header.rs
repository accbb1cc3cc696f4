use leptos::prelude::*;

use crate::state::Section;

use super::homepage::PageHandle;

#[component]
pub fn Header() -> impl IntoView {
    let page = expect_context::<PageHandle>();

    view! {
        <nav class=move || {
            if page.is_active(Section::Home) { "navbar" } else { "navbar scrolled" }
        }>
            <div class="nav-container center-only">
                <ul class="nav-links center-nav">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <button
                                        on:click=move |_| page.navigate(section)
                                        class=move || {
                                            if page.is_active(section) { "active" } else { "" }
                                        }
                                        aria-current=move || {
                                            page.is_active(section).then_some("true")
                                        }
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
