use leptos::prelude::*;

use crate::{data::EXPERIENCES, section::SectionName};

use super::{
    reveal::Reveal,
    section::{use_section_in_view, DEFAULT_THRESHOLD},
    SectionHeading,
};

#[component]
pub fn Experience() -> impl IntoView {
    let node = use_section_in_view(SectionName::Experience, DEFAULT_THRESHOLD);

    view! {
        <section node_ref=node id="experience" class="scroll-mt-28 mb-28 sm:mb-40 w-full max-w-4xl">
            <SectionHeading>"My experience"</SectionHeading>
            <ol class="relative border-l-4 border-gray-200 dark:border-white/20 ml-6">
                {EXPERIENCES
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="mb-10 ml-10">
                                <Reveal>
                                    <span class="absolute -left-7 flex h-12 w-12 items-center justify-center rounded-full bg-white text-xl shadow dark:bg-gray-800">
                                        {entry.icon.glyph()}
                                    </span>
                                    <div class="bg-gray-100 rounded-lg border border-black/5 px-8 py-4 text-left dark:bg-white/5">
                                        <h3 class="font-semibold capitalize">{entry.title}</h3>
                                        <p class="font-normal !mt-0">{entry.location}</p>
                                        <p class="!mt-1 !font-normal text-gray-700 dark:text-white/75">
                                            {entry.description}
                                        </p>
                                        {(!entry.score.is_empty())
                                            .then(|| view! { <p class="mt-1 text-sm font-medium">{entry.score}</p> })}
                                        <time class="mt-2 block text-sm text-gray-500">{entry.date}</time>
                                    </div>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
