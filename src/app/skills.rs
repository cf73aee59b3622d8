use leptos::prelude::*;

use crate::{data::SKILLS, section::SectionName};

use super::{
    section::{use_section_in_view, DEFAULT_THRESHOLD},
    SectionHeading,
};

#[component]
pub fn Skills() -> impl IntoView {
    let node = use_section_in_view(SectionName::Skills, DEFAULT_THRESHOLD);

    view! {
        <section
            node_ref=node
            id="skills"
            class="mb-28 max-w-[53rem] scroll-mt-28 text-center sm:mb-40"
        >
            <SectionHeading>"My skills"</SectionHeading>
            <ul class="flex flex-wrap justify-center gap-2 text-lg text-gray-800">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <li
                                class="bg-white borderBlack rounded-xl px-5 py-3 dark:bg-white/10 dark:text-white/80 animate-rise-in"
                                style:animation-delay=format!("{}ms", i * 50)
                            >
                                {*skill}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
