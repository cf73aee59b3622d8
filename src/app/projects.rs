use leptos::prelude::*;

use crate::{
    data::{Project, PROJECTS},
    section::SectionName,
};

use super::{reveal::Reveal, section::use_section_in_view, SectionHeading};

/// Projects is long; half of it on screen is enough.
const PROJECTS_THRESHOLD: f64 = 0.5;

#[component]
pub fn Projects() -> impl IntoView {
    let node = use_section_in_view(SectionName::Projects, PROJECTS_THRESHOLD);

    view! {
        <section node_ref=node id="projects" class="scroll-mt-28 mb-28">
            <SectionHeading>"My projects"</SectionHeading>
            <div>
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project odd=i % 2 == 1 /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, odd: bool) -> impl IntoView {
    let text_side = if odd { "sm:ml-[18rem]" } else { "" };
    let image_side = if odd {
        "sm:-left-40 group-hover:translate-x-3 group-hover:rotate-2"
    } else {
        "sm:-right-40 group-hover:-translate-x-3 group-hover:-rotate-2"
    };

    view! {
        <Reveal class="group mb-3 sm:mb-8 last:mb-0">
            <a href=project.url target="_blank" rel="noopener noreferrer">
                <div class="bg-gray-100 max-w-[42rem] border border-black/5 rounded-lg overflow-hidden sm:pr-8 relative sm:h-[20rem] hover:bg-gray-200 transition sm:group-even:pl-8 dark:text-white dark:bg-white/10 dark:hover:bg-white/20">
                    <div class=format!("pt-4 pb-7 px-5 sm:pl-10 sm:pr-2 sm:pt-10 sm:max-w-[50%] flex flex-col h-full {text_side}")>
                        <h3 class="text-2xl font-semibold">{project.title}</h3>
                        <p class="mt-2 leading-relaxed text-gray-700 dark:text-white/70">
                            {project.description}
                        </p>
                        <ul class="flex flex-wrap mt-4 gap-2 sm:mt-auto">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <li class="bg-black/[0.7] px-3 py-1 text-[0.7rem] uppercase tracking-wider text-white rounded-full dark:text-white/70">
                                            {*tag}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <img
                        src=project.image_url
                        alt=project.title
                        loading="lazy"
                        class=format!("absolute hidden sm:block top-8 w-[28.25rem] rounded-t-lg shadow-2xl transition group-hover:scale-[1.04] {image_side}")
                    />
                </div>
            </a>
        </Reveal>
    }
}
