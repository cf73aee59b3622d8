use leptos::prelude::*;

use crate::{data::LINKS, section::SectionName};

use super::section::ActiveSectionContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<ActiveSectionContext>();

    let links = LINKS
        .iter()
        .filter_map(|link| {
            let section = link.name.parse::<SectionName>().ok()?;
            Some(view! {
                <li class="h-3/4 flex items-center justify-center relative">
                    <a
                        class=move || {
                            let base = "flex w-full items-center justify-center px-3 py-3 transition hover:text-gray-950 dark:hover:text-gray-300";
                            if ctx.active() == section {
                                format!("{base} text-gray-950 dark:text-gray-200")
                            } else {
                                format!("{base} text-gray-500 dark:text-gray-500")
                            }
                        }
                        href=format!("/{}", link.hash)
                        on:click=move |_| ctx.navigate_to(section)
                    >
                        {link.name}
                        <Show when=move || ctx.active() == section>
                            <span class="bg-gray-100 rounded-full absolute inset-0 -z-10 dark:bg-gray-800"></span>
                        </Show>
                    </a>
                </li>
            })
        })
        .collect_view();

    view! {
        <header class="z-[999] relative">
            <div class="fixed top-0 left-1/2 -translate-x-1/2 h-[4.5rem] w-full rounded-none border border-white border-opacity-40 bg-white bg-opacity-80 shadow-lg shadow-black/[0.03] backdrop-blur-[0.5rem] sm:top-6 sm:h-[3.25rem] sm:w-[36rem] sm:rounded-full dark:bg-gray-950 dark:border-black/40 dark:bg-opacity-75"></div>
            <nav class="flex fixed top-[0.15rem] left-1/2 h-12 -translate-x-1/2 py-2 sm:top-[1.7rem] sm:h-[initial] sm:py-0">
                <ul class="flex w-[22rem] flex-wrap items-center justify-center gap-y-1 text-[0.9rem] font-medium text-gray-500 sm:w-[initial] sm:flex-nowrap sm:gap-5">
                    {links}
                </ul>
            </nav>
        </header>
    }
}
