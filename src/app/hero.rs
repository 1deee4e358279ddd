use leptos::prelude::*;

use crate::{
    content::{Behavior, Profile},
    section::SectionId,
};

use super::{
    components::RevealOnScroll,
    hooks::{use_pointer, use_typewriter, PageState},
};

/// Background glow that follows the pointer.
#[component]
pub fn Spotlight() -> impl IntoView {
    let pointer = use_pointer();
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none transition-opacity duration-300">
            <div
                class="absolute inset-0 z-0 opacity-20"
                style:background=move || pointer.get().gradient()
            ></div>
            <div class="absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bg-blue-900/20 rounded-full blur-[120px] animate-pulse-slow"></div>
            <div
                class="absolute bottom-[-10%] right-[-10%] w-[40%] h-[40%] bg-cyan-900/10 rounded-full blur-[120px] animate-pulse-slow"
                style="animation-delay: 2s"
            ></div>
        </div>
    }
}

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let state = expect_context::<PageState>();
    let behavior = use_context::<Behavior>().unwrap_or_default();
    let Profile {
        name,
        subtitle,
        photo,
        ..
    } = profile;
    let alt = name.clone();
    let subtitle = use_typewriter(
        Signal::stored(subtitle),
        Signal::stored(behavior.typewriter_speed_ms),
    );

    view! {
        <section
            id=SectionId::Home.as_str()
            class="min-h-screen flex flex-col items-center justify-center text-center space-y-8 py-20"
        >
            <RevealOnScroll>
                <div class="relative group inline-block">
                    <div class="absolute -inset-1 bg-gradient-to-r from-cyan-400 to-blue-600 rounded-full blur opacity-75 group-hover:opacity-100 transition duration-1000 group-hover:duration-200"></div>
                    <div class="relative bg-slate-900 rounded-full p-1.5 border-2 border-cyan-500/30 w-40 h-40 md:w-56 md:h-56 overflow-hidden">
                        <img
                            src=photo
                            alt=alt
                            class="w-full h-full object-cover rounded-full transform group-hover:scale-110 transition-transform duration-700 ease-out"
                        />
                    </div>
                </div>
            </RevealOnScroll>
            <RevealOnScroll delay=200>
                <div class="space-y-4 pt-4 max-w-3xl mx-auto">
                    <h1 class="text-5xl md:text-7xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 pb-2 animate-gradient-x">
                        {name}
                    </h1>
                    <p class="text-xl md:text-3xl text-slate-300 font-light h-16 md:h-auto">
                        {subtitle}
                        <span class="animate-blink">"|"</span>
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center mt-8 pt-4">
                        <button
                            on:click=move |_| state.go_to(SectionId::Projects)
                            class="px-8 py-4 bg-gradient-to-r from-cyan-600 to-blue-600 hover:from-cyan-500 hover:to-blue-500 text-white rounded-full font-bold transition-all shadow-lg shadow-cyan-500/25 hover:shadow-cyan-500/50 hover:-translate-y-1"
                        >
                            "Voir mes projets"
                        </button>
                        <button
                            on:click=move |_| state.go_to(SectionId::Contact)
                            class="px-8 py-4 bg-transparent border-2 border-slate-600 hover:border-cyan-400 text-slate-300 hover:text-cyan-400 rounded-full font-bold transition-all hover:bg-slate-800/50 hover:-translate-y-1"
                        >
                            "Me contacter"
                        </button>
                    </div>
                </div>
            </RevealOnScroll>
        </section>
    }
}
