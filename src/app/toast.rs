use leptos::prelude::*;

use crate::toast::{Toast, ToastKind, ToastQueue};
#[cfg(feature = "hydrate")]
use crate::toast::TOAST_DURATION_MS;

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            set_timeout(
                move || ctx.dismiss(id),
                std::time::Duration::from_millis(TOAST_DURATION_MS),
            );
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

pub fn provide_toast_context() -> ToastContext {
    let ctx = ToastContext {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(ctx);
    ctx
}

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = expect_context::<ToastContext>();

    view! {
        <div class="fixed top-4 right-4 z-[1000] flex flex-col gap-2 max-w-sm">
            <For
                each=move || ctx.queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                let:toast
            >
                <ToastItem toast ctx />
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, ctx: ToastContext) -> impl IntoView {
    let (icon, accent) = match toast.kind {
        ToastKind::Success => ("✓", "text-green-500"),
        ToastKind::Error => ("✕", "text-red-500"),
    };
    let id = toast.id;

    view! {
        <div
            role="status"
            class="flex items-center gap-3 px-4 py-3 rounded-lg bg-white text-gray-900 shadow-lg border border-black/5 dark:bg-gray-800 dark:text-white"
        >
            <span class=format!("font-bold {accent}")>{icon}</span>
            <p class="flex-1 text-sm">{toast.message}</p>
            <button
                class="text-gray-400 hover:text-gray-700 dark:hover:text-white"
                aria-label="Dismiss"
                on:click=move |_| ctx.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
