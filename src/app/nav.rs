use leptos::prelude::*;

use crate::{
    content::{Icon, NavItem},
    section::SectionId,
};

use super::{components::IconGlyph, hooks::PageState};

fn desktop_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 flex items-center gap-2 relative overflow-hidden group text-white bg-cyan-600/20 border border-cyan-500/30 shadow-[0_0_15px_rgba(6,182,212,0.3)]"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 flex items-center gap-2 relative overflow-hidden group text-slate-400 hover:text-white hover:bg-white/5"
    }
}

fn mobile_class(active: bool) -> &'static str {
    if active {
        "w-full text-left px-4 py-4 rounded-xl text-base font-medium flex items-center gap-3 transition-colors text-cyan-400 bg-cyan-900/20 border border-cyan-500/30"
    } else {
        "w-full text-left px-4 py-4 rounded-xl text-base font-medium flex items-center gap-3 transition-colors text-slate-300 hover:text-white hover:bg-slate-800"
    }
}

#[component]
pub fn NavBar(name: String, initial: String, items: Vec<NavItem>) -> impl IntoView {
    let state = expect_context::<PageState>();
    let items = StoredValue::new(items);

    let desktop = items
        .get_value()
        .into_iter()
        .map(|item| {
            let id = item.id;
            let is_active = move || state.active.get() == id;
            view! {
                <button on:click=move |_| state.go_to(id) class=move || desktop_class(is_active())>
                    <span class="relative z-10 flex items-center gap-2">
                        <IconGlyph icon=item.icon />
                        {item.label}
                    </span>
                    {move || {
                        is_active()
                            .then(|| {
                                view! {
                                    <span class="absolute bottom-0 left-0 h-[2px] w-full bg-cyan-400 animate-slide-in-left"></span>
                                }
                            })
                    }}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="fixed w-full z-50 top-0 left-0 bg-[#0a0a0a]/80 backdrop-blur-md border-b border-white/5 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <div
                        class="flex items-center gap-3 cursor-pointer group"
                        on:click=move |_| state.go_to(SectionId::Home)
                    >
                        <div class="w-10 h-10 bg-gradient-to-br from-cyan-400 to-blue-600 rounded-lg flex items-center justify-center text-white font-bold text-xl shadow-lg group-hover:rotate-12 transition-transform duration-300">
                            {initial}
                        </div>
                        <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-white to-slate-400">
                            {name}
                        </span>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-2">{desktop}</div>
                    </div>
                    <div class="-mr-2 flex md:hidden">
                        <button
                            aria-label="Menu"
                            on:click=move |_| state.toggle_menu()
                            class="bg-slate-900 inline-flex items-center justify-center p-2 rounded-md text-slate-400 hover:text-white hover:bg-slate-800 focus:outline-none border border-slate-700"
                        >
                            {move || {
                                let icon = if state.menu_open.get() { Icon::Close } else { Icon::Menu };
                                view! { <IconGlyph icon class="text-2xl" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>
            {move || {
                state
                    .menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-slate-900 border-b border-slate-800 shadow-xl animate-fade-in-down">
                                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|item| {
                                            let id = item.id;
                                            view! {
                                                <button
                                                    on:click=move |_| state.go_to(id)
                                                    class=move || mobile_class(state.active.get() == id)
                                                >
                                                    <IconGlyph icon=item.icon />
                                                    {item.label}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <button
            aria-label="Retour en haut"
            on:click=move |_| state.go_to(SectionId::Home)
            class=move || {
                format!(
                    "fixed bottom-8 right-8 p-3 bg-cyan-600 text-white rounded-full shadow-lg z-50 transition-all duration-300 hover:bg-cyan-500 {}",
                    if state.show_back_to_top.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    },
                )
            }
        >
            <IconGlyph icon=Icon::ChevronUp class="text-2xl" />
        </button>
    }
}
