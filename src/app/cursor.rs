use leptos::prelude::*;

use super::homepage::PageHandle;

/// Decorative dot that trails the pointer.
#[component]
pub fn CursorFollower() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    let size = page.config.with_value(|c| c.follower_size);
    view! {
        <div
            class="cursor-follower"
            aria-hidden="true"
            style:width=format!("{size}px")
            style:height=format!("{size}px")
            style:transform=move || page.state.with(|s| s.pointer.follower_transform(size))
        ></div>
    }
}
