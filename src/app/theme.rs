use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_session_storage;

use crate::theme::Theme;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    persist: Callback<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// For render loops outside the reactive graph.
    pub fn is_dark_untracked(&self) -> bool {
        self.theme.get_untracked().is_dark()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggle();
        self.theme.set(next);
        self.persist.run(next);
    }
}

/// The stored choice lives for the browser session only. Without one the
/// system colour scheme decides.
pub fn provide_theme_context() -> ThemeContext {
    let prefers_dark = use_preferred_dark();
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    let persist = {
        let (stored, set_stored, _) =
            use_session_storage::<Option<Theme>, JsonSerdeWasmCodec>("theme");

        Effect::watch(
            move || (stored.get(), prefers_dark.get()),
            move |(stored, prefers_dark), _, _| {
                theme.set(stored.unwrap_or_else(|| Theme::from_preference(*prefers_dark)));
            },
            true,
        );

        Effect::watch(
            move || theme.get(),
            move |theme, _, _| apply_theme_class(*theme),
            true,
        );

        Callback::new(move |next: Theme| set_stored.set(Some(next)))
    };

    #[cfg(not(feature = "hydrate"))]
    let persist = {
        let _ = prefers_dark;
        Callback::new(|_: Theme| {})
    };

    let ctx = ThemeContext { theme, persist };
    provide_context(ctx);
    ctx
}

#[cfg(feature = "hydrate")]
fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if res.is_err() {
        log::warn!("couldn't apply {theme} theme");
    }
}

#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <button
            class="fixed bottom-5 right-8 bg-white w-[3rem] h-[3rem] bg-opacity-70 backdrop-blur-[0.7rem] border border-gray-300 border-opacity-40 shadow-lg rounded-full flex items-center justify-center hover:scale-[1.15] active:scale-105 transition-all dark:bg-gray-950 dark:bg-opacity-70 z-[999]"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || {
                let path = if ctx.theme().is_dark() {
                    "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"
                } else {
                    "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10zM12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"
                };
                view! {
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
                    </svg>
                }
            }}
        </button>
    }
}
