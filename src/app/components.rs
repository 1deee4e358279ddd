use leptos::{html, prelude::*};

use crate::{content::{Behavior, Icon}, reveal::reveal_classes};

use super::hooks::use_reveal;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class_name()) aria-hidden="true"></i> }
}

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn RevealOnScroll(
    /// Transition delay in milliseconds, for staggering siblings.
    #[prop(optional)]
    delay: u32,
    children: Children,
) -> impl IntoView {
    let threshold = use_context::<Behavior>()
        .unwrap_or_default()
        .reveal_threshold;
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, threshold);

    view! {
        <div
            node_ref=target
            style=format!("transition-delay: {delay}ms")
            class=move || reveal_classes(revealed.get())
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(icon: Icon, title: &'static str) -> impl IntoView {
    view! {
        <RevealOnScroll>
            <div class="flex items-center gap-4 border-b border-slate-700 pb-4 mb-12">
                <IconGlyph icon class="text-3xl text-cyan-400 animate-bounce-slow" />
                <h2 class="text-3xl font-bold text-white">{title}</h2>
            </div>
        </RevealOnScroll>
    }
}

#[component]
pub fn ContentUnavailable(error: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-2xl font-bold text-red-400">"Contenu indisponible"</h1>
            <pre class="whitespace-pre-wrap text-slate-400">{error}</pre>
        </div>
    }
}
