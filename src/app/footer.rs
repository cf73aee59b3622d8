use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::data::OWNER_NAME;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    view! {
        <footer class="mb-10 px-4 text-center text-gray-500">
            <small class="mb-2 block text-xs">
                {format!("© {} {OWNER_NAME}. All rights reserved.", built.year())}
            </small>
            <p class="text-xs">
                <span class="font-semibold">"About this website: "</span>
                "built with Rust, Leptos & Axum, Tailwind CSS, Resend. Last built "
                <time datetime=BUILD_TIME>{built.format("%B %-d, %Y").to_string()}</time>
                "."
            </p>
        </footer>
    }
}
