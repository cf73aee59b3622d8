use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{
    components::A,
    hooks::{use_location, use_params_map},
};

use crate::{
    data::{certificate_by_slug, CERTIFICATES},
    menu::{item_number, MenuState, OPEN_CLIP_PATH},
    section::SectionName,
};

use super::{
    section::{use_section_in_view, DEFAULT_THRESHOLD},
    SectionHeading,
};

#[component]
pub fn Certificates() -> impl IntoView {
    let node = use_section_in_view(SectionName::Certificate, DEFAULT_THRESHOLD);

    view! {
        <section node_ref=node id="certificate" class="scroll-mt-28 animate-rise-in">
            <SectionHeading>"Certificate"</SectionHeading>
            <div class="flex justify-center gap-5 flex-wrap pb-24">
                {CERTIFICATES
                    .iter()
                    .map(|certificate| {
                        view! {
                            <div class="bg-gray-50 relative group shadow-2xl hover:shadow-purple-500/[0.4] dark:hover:shadow-emerald-500/[0.3] dark:bg-black dark:border-white/[0.2] border-black/[0.1] w-auto sm:w-[30rem] h-auto rounded-xl p-6 border transition-shadow">
                                <h3 class="text-xl font-bold text-neutral-600 dark:text-white">
                                    {certificate.title}
                                </h3>
                                <p class="text-neutral-500 text-sm max-w-sm mt-2 dark:text-neutral-300">
                                    {certificate.description}
                                </p>
                                <A href=certificate.href() attr:class="block w-full mt-4">
                                    <img
                                        src=certificate.image_src
                                        alt=certificate.alt_text
                                        loading="lazy"
                                        class="h-60 w-full object-cover rounded-xl group-hover:shadow-xl"
                                    />
                                </A>
                                <div class="flex justify-end items-center mt-10">
                                    <A
                                        href=certificate.href()
                                        attr:class="px-4 py-2 rounded-xl bg-black dark:bg-white dark:text-black text-white text-lg font-bold"
                                    >
                                        "View Detail"
                                    </A>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Full-screen view of one certificate, or a not-found message with a 404.
#[component]
pub fn CertificatePage() -> impl IntoView {
    let params = use_params_map();
    let certificate = move || params.read().get("slug").and_then(|slug| certificate_by_slug(&slug));

    move || match certificate() {
        Some(certificate) => Either::Left(view! {
            <Title text=certificate.title />
            <div class="fixed inset-0 flex items-center justify-center bg-black bg-opacity-80 backdrop-blur-lg z-[999]">
                <div class="relative w-full h-full max-w-4xl mx-auto p-6 flex flex-col items-center justify-center">
                    <A
                        href="/#certificate"
                        attr:class="absolute top-3 right-3 bg-white p-2 rounded-full shadow-lg text-black text-lg hover:bg-gray-200"
                        attr:aria-label="Close"
                    >
                        "❌"
                    </A>
                    <img
                        src=certificate.image_src
                        alt=certificate.title
                        class="max-w-full max-h-[75vh] rounded-lg shadow-lg object-contain"
                    />
                    <h1 class="mt-4 text-2xl font-bold text-white">{certificate.title}</h1>
                    <p class="mt-1 text-white/80">{certificate.description}</p>
                </div>
            </div>
        }),
        None => {
            #[cfg(feature = "ssr")]
            if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                response.set_status(http::StatusCode::NOT_FOUND);
            }
            Either::Right(view! {
                <Title text="Certificate not found" />
                <div class="flex flex-col items-center gap-4 py-20">
                    <p class="text-lg">"Certificate not found"</p>
                    <A href="/" attr:class="underline">
                        "Back home"
                    </A>
                </div>
            })
        }
    }
}

/// Side menu of every certificate with a hover preview. Only shown on
/// certificate pages.
#[component]
pub fn CertificateMenu() -> impl IntoView {
    let location = use_location();
    let on_certificate_page = move || location.pathname.get().starts_with("/certificate");

    view! {
        <Show when=on_certificate_page>
            <CertificateMenuPanel />
        </Show>
    }
}

#[component]
fn CertificateMenuPanel() -> impl IntoView {
    let menu = RwSignal::new(MenuState::new(CERTIFICATES.len()));
    let open = move || menu.with(|m| m.is_open());
    let active = move || CERTIFICATES.get(menu.with(|m| m.active()));

    let items = CERTIFICATES
        .iter()
        .enumerate()
        .map(|(index, certificate)| {
            let highlighted = move || menu.with(|m| m.is_highlighted(index));
            view! {
                <li
                    class=move || {
                        toggled("group relative border-b border-white/10 transition-colors duration-300", "bg-white/10", highlighted())
                    }
                    on:mouseenter=move |_| menu.update(|m| m.hover(index))
                    on:mouseleave=move |_| menu.update(|m| m.leave())
                >
                    <span
                        class=move || {
                            toggled("absolute left-0 top-0 bottom-0 w-1 bg-blue-500 transition-opacity duration-300", "opacity-0", !highlighted())
                        }
                    ></span>
                    <A href=certificate.href() attr:class="flex items-start gap-4 py-5 px-4">
                        <span class="text-white/40 text-sm font-mono mt-1 group-hover:text-white/60">
                            {item_number(index)}
                        </span>
                        <div class="flex-1">
                            <h4 class="text-white text-lg font-semibold mb-1 line-clamp-2 group-hover:text-blue-400">
                                {certificate.title}
                            </h4>
                            <p class="text-white/50 text-sm line-clamp-2 group-hover:text-white/70">
                                {certificate.description}
                            </p>
                        </div>
                        <span class="text-white/40 transition-transform group-hover:translate-x-1">"›"</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 z-50 pointer-events-none">
            <button
                class=move || {
                    toggled("pointer-events-auto fixed top-8 right-8 z-[9999] w-14 h-14 bg-white/5 border-2 border-white/10 hover:border-white/20 rounded-full shadow-lg flex flex-col items-center justify-center gap-1.5 transition-all duration-300", "ring-4 ring-blue-500", open())
                }
                aria-label="Toggle Certificate Menu"
                aria-expanded=move || open().to_string()
                on:click=move |_| menu.update(|m| m.toggle())
            >
                <span
                    class=move || {
                        toggled("w-6 h-0.5 bg-white/90 rounded-full transition-transform duration-300", "translate-y-2 rotate-45", open())
                    }
                ></span>
                <span
                    class=move || {
                        toggled("w-6 h-0.5 bg-white/70 rounded-full transition-opacity duration-300", "opacity-0", open())
                    }
                ></span>
                <span
                    class=move || {
                        toggled("w-6 h-0.5 bg-white/90 rounded-full transition-transform duration-300", "-translate-y-2 -rotate-45", open())
                    }
                ></span>
            </button>

            <div
                class="absolute inset-0 right-[320px] overflow-hidden transition-[clip-path] duration-700 ease-out"
                style:clip-path=move || {
                    menu.with(|m| {
                        if m.is_previewing() { OPEN_CLIP_PATH } else { m.variant().hidden_clip_path() }
                    })
                }
            >
                {move || {
                    active()
                        .map(|certificate| {
                            view! {
                                <img
                                    src=certificate.image_src
                                    alt=certificate.alt_text
                                    class="absolute inset-0 h-full w-full object-cover"
                                />
                                <div class="absolute inset-0 flex flex-col justify-end p-12 bg-gradient-to-t from-black/90 via-black/60 to-transparent">
                                    <h2 class="text-white text-5xl md:text-7xl font-bold mb-4 drop-shadow-2xl">
                                        {certificate.title}
                                    </h2>
                                    <div class="flex gap-2 mb-4">
                                        <span class="px-4 py-2 bg-white/20 rounded-full text-white text-sm font-medium">
                                            "Certificate"
                                        </span>
                                        <span class="px-4 py-2 bg-blue-500/30 rounded-full text-white text-sm font-medium">
                                            {move || menu.with(|m| m.counter())}
                                        </span>
                                    </div>
                                    <p class="text-gray-200 text-lg max-w-2xl drop-shadow-lg">
                                        {certificate.description}
                                    </p>
                                </div>
                            }
                        })
                }}
            </div>

            <nav
                class=move || {
                    let state = if open() { "pointer-events-auto" } else { "translate-x-full" };
                    format!("absolute right-0 top-0 h-full flex items-center transition-transform duration-500 ease-out {state}")
                }
            >
                <div class="bg-gradient-to-l from-black/95 via-black/90 to-black/60 backdrop-blur-sm px-6 py-12 h-full flex flex-col justify-center min-w-[320px] border-l border-white/10">
                    <div class="mb-8 border-b border-white/20 pb-4">
                        <h3 class="text-white/60 text-xs uppercase tracking-widest mb-2">
                            "Selected Works"
                        </h3>
                        <p class="text-white text-2xl font-bold">"My Certificates"</p>
                    </div>
                    <ul class="space-y-1 overflow-y-auto flex-1 pr-2">{items}</ul>
                    <p class="mt-8 pt-4 border-t border-white/20 text-white/40 text-xs">
                        "Hover to preview • Click to view full certificate"
                    </p>
                </div>
            </nav>
        </div>
    }
}

fn toggled(base: &str, extra: &str, on: bool) -> String {
    if on {
        format!("{base} {extra}")
    } else {
        base.to_string()
    }
}
