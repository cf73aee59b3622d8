use leptos::prelude::*;

use super::reveal::HighlightText;

#[component]
pub fn Quote() -> impl IntoView {
    view! {
        <section class="py-20 text-center px-4 scroll-mt-28">
            <div class="max-w-4xl mx-auto">
                <blockquote class="text-4xl sm:text-6xl font-bold leading-tight text-gray-700 dark:text-gray-200">
                    <span class="block mb-3 sm:mb-0">
                        "Talk is " <HighlightText color="#34d399">"cheap."</HighlightText>
                    </span>
                    <span class="block mt-2">
                        "Show me " <HighlightText color="#fde047">"the code."</HighlightText>
                    </span>
                </blockquote>
                <p class="mt-8 text-xl text-gray-500 dark:text-gray-400 italic">"Linus Torvalds"</p>
            </div>
        </section>
    }
}
