mod about;
mod certificates;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod intro;
mod loading;
mod particle_field;
mod projects;
mod quote;
mod reveal;
mod section;
mod skills;
mod theme;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use certificates::{CertificateMenu, CertificatePage, Certificates};
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::HeroScroll;
use intro::Intro;
use loading::{provide_loading_context, LoadingGate};
use projects::Projects;
use quote::Quote;
use section::provide_active_section_context;
use skills::Skills;
use theme::{provide_theme_context, ThemeSwitch};
use toast::{provide_toast_context, Toaster};

pub use contact::SendEmail;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="!scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/svg+xml" href="/kd_logo.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/khadon-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-gray-50 text-gray-950 relative dark:bg-gray-900 dark:text-gray-50 dark:text-opacity-90">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme_context();
    provide_loading_context();
    provide_active_section_context();
    provide_toast_context();

    view! {
        <Title formatter=|title| format!("Khadondev | {title}") />
        <Meta name="description" content="Khadon - Frontend Developer about Web application" />

        <Router>
            <BackgroundBlurs />
            <Header />
            <div class="pt-28 sm:pt-36">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/certificate/:slug") view=CertificatePage />
                </Routes>
            </div>
            <Footer />
            <Toaster />
            <ThemeSwitch />
            <CertificateMenu />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Personal Portfolio" />
        <LoadingGate>
            <HeroScroll />
            <main class="flex flex-col items-center px-4">
                <Intro />
                <SectionDivider />
                <About />
                <Certificates />
                <Projects />
                <Quote />
                <Skills />
                <Experience />
                <Contact />
            </main>
        </LoadingGate>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="flex flex-col items-center px-4 py-20 text-center">
            <h1 class="text-3xl font-medium mb-4">"Page not found."</h1>
            <A href="/" attr:class="underline">
                "Back home"
            </A>
        </main>
    }
}

#[component]
fn SectionDivider() -> impl IntoView {
    view! { <div class="bg-gray-200 my-24 h-16 w-1 rounded-full hidden sm:block dark:bg-opacity-20"></div> }
}

#[component]
fn SectionHeading(children: Children) -> impl IntoView {
    view! { <h2 class="text-3xl font-medium capitalize mb-8 text-center">{children()}</h2> }
}

#[component]
fn BackgroundBlurs() -> impl IntoView {
    view! {
        <div class="bg-[#fbe2e3] absolute top-[-6rem] -z-10 right-[11rem] h-[31.25rem] w-[31.25rem] rounded-full blur-[10rem] sm:w-[68.75rem] dark:bg-[#946263]"></div>
        <div class="bg-[#dbd7fb] absolute top-[-1rem] -z-10 left-[-35rem] h-[31.25rem] w-[50rem] rounded-full blur-[10rem] sm:w-[68.75rem] md:left-[-33rem] lg:left-[-28rem] xl:left-[-15rem] 2xl:left-[-5rem] dark:bg-[#676394]"></div>
    }
}
