use leptos::prelude::*;

use crate::section::SectionName;

use super::{
    section::{use_section_in_view, DEFAULT_THRESHOLD},
    SectionHeading,
};

#[component]
pub fn About() -> impl IntoView {
    let node = use_section_in_view(SectionName::About, DEFAULT_THRESHOLD);

    view! {
        <section
            node_ref=node
            id="about"
            class="mb-28 max-w-[45rem] text-center leading-8 sm:mb-40 scroll-mt-28 animate-rise-in"
        >
            <SectionHeading>"About Me"</SectionHeading>
            <p class="mb-3">
                "After graduating with a degree in "
                <span class="font-medium">"Business Administration at"</span>
                " "
                <span class="underline">"TDTU"</span>
                ", I decided to pursue my passion for programming. I enrolled in a coding bootcamp and learned "
                <span class="font-medium">"full-stack web development"</span>
                ". "
                <span class="italic">"My favorite part of programming"</span>
                " is the problem-solving aspect. I "
                <span class="underline">"love"</span>
                " the feeling of finally figuring out a solution to a problem. My core stack is "
                <span class="font-medium">"React, Next.js, Typescript and MongoDB"</span>
                ". I am also familiar with Prisma, and lately Rust. I am always looking to learn new technologies. I am currently looking for a "
                <span class="font-medium">"full-time position"</span>
                " as a software developer."
            </p>
            <p>
                "Every day, "
                <span class="italic">"I dedicate over 8 hours to coding and expanding my skills. "</span>
                "Currently, I am pursuing a "
                <span class="underline">"Second degree"</span>
                ", where I focus on deepening my knowledge and honing my expertise in the field. I am enrolled at the "
                <span class="font-medium underline">
                    "University of Information Technology - CITD"
                </span>
                ", actively learning and embracing new concepts to grow as a developer."
            </p>
        </section>
    }
}
