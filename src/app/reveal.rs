use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to true the first time `visible` is true.
fn seen_once(visible: Signal<bool>) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !seen.get_untracked() {
            set_seen.set(true);
        }
    });
    seen
}

/// Fades and lifts its children in once they are on screen.
#[component]
pub fn Reveal(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let seen = seen_once(use_element_visibility(node));

    view! {
        <div
            node_ref=node
            class=move || {
                let state = if seen.get() { "reveal reveal-visible" } else { "reveal" };
                format!("{state} {class}")
            }
        >
            {children()}
        </div>
    }
}

/// Marker-pen highlight that sweeps up behind the text when it first shows.
#[component]
pub fn HighlightText(
    children: Children,
    #[prop(default = "#fcd34d")] color: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Span>::new();
    let seen = seen_once(use_element_visibility(node));

    view! {
        <span
            node_ref=node
            class="relative inline px-1 mx-1 rounded-sm bg-no-repeat box-decoration-clone transition-[background-size] duration-700 ease-out"
            style:background-image=format!("linear-gradient(to right, {color}, {color})")
            style:background-position="bottom left"
            style:background-size=move || if seen.get() { "100% 100%" } else { "100% 0%" }
        >
            {children()}
        </span>
    }
}
