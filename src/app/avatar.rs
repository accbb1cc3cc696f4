use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn ProfileImage() -> impl IntoView {
    view! {
        <div class="profile-image-container">
            <img src=PROFILE.image alt=format!("{} profile photo", PROFILE.name) class="profile-img" />
        </div>
    }
}
