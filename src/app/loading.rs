use leptos::prelude::*;

use crate::loading::LoadingState;

#[derive(Clone, Copy)]
pub struct LoadingContext {
    state: RwSignal<LoadingState>,
}

impl LoadingContext {
    pub fn is_ready(&self) -> bool {
        self.state.with(|s| s.is_ready())
    }

    pub fn set_progress(&self, percent: u8) {
        self.state.update(|s| s.set_progress(percent));
    }

    pub fn mark_ready(&self) {
        self.state.update(|s| s.mark_ready());
    }

    pub fn fail(&self) {
        self.state.update(|s| s.fail());
    }
}

pub fn provide_loading_context() -> LoadingContext {
    let ctx = LoadingContext {
        state: RwSignal::new(LoadingState::default()),
    };
    provide_context(ctx);
    ctx
}

/// Keeps its children mounted but invisible until the hero reports ready.
#[component]
pub fn LoadingGate(children: Children) -> impl IntoView {
    let ctx = expect_context::<LoadingContext>();
    let state = ctx.state;

    view! {
        <div style:visibility=move || if ctx.is_ready() { "visible" } else { "hidden" }>
            {children()}
        </div>
        <Show when=move || !ctx.is_ready()>
            <div class="fixed inset-0 z-[99999] flex items-center justify-center bg-gray-50 dark:bg-gray-900 transition-opacity duration-700">
                <div class="flex flex-col items-center gap-6 p-8">
                    <div class="relative w-20 h-20">
                        <div class="absolute inset-0 rounded-full border-4 border-gray-200 dark:border-gray-700"></div>
                        <div class="absolute inset-0 rounded-full border-4 border-t-pink-500 animate-spin"></div>
                    </div>
                    <div class="text-center">
                        <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-2">
                            {move || state.with(|s| s.label())}
                        </h3>
                        <div class="w-64 h-1.5 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden mt-4">
                            <div
                                class="h-full bg-gradient-to-r from-pink-500 to-purple-500 transition-all duration-300"
                                style:width=move || format!("{}%", state.with(|s| s.load_progress()))
                            ></div>
                        </div>
                        <p class="text-xs text-gray-500 dark:text-gray-400 mt-2">
                            {move || format!("{}%", state.with(|s| s.load_progress()))}
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
