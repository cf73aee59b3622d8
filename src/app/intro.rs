use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    data::{CV_PATH, FOCUS_WORDS, GITHUB_URL, LINKEDIN_URL},
    section::SectionName,
    words::{WordCycle, FLIP_INTERVAL_MS},
};

use super::{
    particle_field::ParticleField,
    section::{use_section_in_view, ActiveSectionContext, DEFAULT_THRESHOLD},
};

#[component]
pub fn Intro() -> impl IntoView {
    let node = use_section_in_view(SectionName::Home, DEFAULT_THRESHOLD);
    let ctx = expect_context::<ActiveSectionContext>();

    view! {
        <section
            node_ref=node
            id="home"
            class="relative mb-28 max-w-[50rem] text-center sm:mb-0 scroll-mt-[100rem]"
        >
            <ParticleField />
            <div class="flex items-center justify-center">
                <div class="relative">
                    <img
                        src="/avt4.png"
                        alt="khadon"
                        width="200"
                        height="200"
                        class="h-28 w-28 rounded-full object-cover border-[0.30rem] border-white shadow-xl dark:border-gray-800 dark:bg-gray-50 dark:bg-opacity-10 animate-pop-in"
                    />
                    <span class="text-4xl absolute bottom-0 right-0 animate-pop-in">"👋"</span>
                </div>
            </div>

            <h2 class="mb-10 mt-4 px-4 text-xl font-medium !leading-[1.5] sm:text-3xl animate-rise-in">
                <span class="font-bold">"Hello, I'm Khadon."</span>
                " I'm a "
                <span class="font-bold">"full-stack developer"</span>
                " with "
                <span class="font-bold">"8 months"</span>
                " of experience. I enjoy building "
                <span class="italic">"websites & apps"</span>
                ". My focus is "
                <strong>
                    <FlipWords words=FOCUS_WORDS />
                </strong>
            </h2>

            <div class="flex flex-col sm:flex-row items-center justify-center gap-4 px-4 text-lg font-medium animate-rise-in">
                <a
                    href=SectionName::Contact.hash()
                    data-particle-target=""
                    class="group bg-gray-900 text-white px-7 py-3 flex items-center gap-2 rounded-full outline-none focus:scale-110 hover:scale-110 hover:bg-gray-950 active:scale-105 transition"
                    on:click=move |_| ctx.navigate_to(SectionName::Contact)
                >
                    "Contact me here "
                    <span class="opacity-70 group-hover:translate-x-1 transition">"→"</span>
                </a>

                <a
                    href=CV_PATH
                    download="Khadon_CV.pdf"
                    data-particle-target=""
                    class="group bg-white px-7 py-3 flex items-center gap-2 rounded-full outline-none focus:scale-110 hover:scale-110 active:scale-105 transition cursor-pointer borderBlack text-gray-700 dark:bg-white/10 dark:text-white/90"
                >
                    "Download CV "
                    <span class="opacity-60 group-hover:translate-y-1 transition">"↓"</span>
                </a>

                <div class="flex gap-2">
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                        data-particle-target=""
                        class="bg-white p-4 text-gray-700 hover:text-gray-950 flex items-center gap-2 rounded-full focus:scale-[1.15] hover:scale-[1.15] active:scale-105 transition cursor-pointer borderBlack dark:bg-white/10 dark:text-white/60"
                    >
                        "in"
                    </a>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                        data-particle-target=""
                        class="bg-white p-4 text-gray-700 flex items-center gap-2 text-[1.35rem] rounded-full focus:scale-[1.15] hover:scale-[1.15] hover:text-gray-950 active:scale-105 transition cursor-pointer borderBlack dark:bg-white/10 dark:text-white/60"
                    >
                        "gh"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Cycles through `words`, swapping every few seconds with a blur-in.
#[component]
fn FlipWords(words: &'static [&'static str]) -> impl IntoView {
    let cycle = RwSignal::new(WordCycle::new(words));
    use_interval_fn(
        move || {
            cycle.update(|c| {
                c.advance();
            })
        },
        FLIP_INTERVAL_MS,
    );

    view! {
        <span class="relative inline-block w-max align-top">
            {move || {
                let word = cycle.with(|c| c.current());
                view! { <span class="inline-block animate-flip-in">{word}</span> }
            }}
        </span>
    }
}
