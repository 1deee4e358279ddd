mod components;
mod contact;
mod hero;
mod hooks;
mod nav;
mod sections;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    build_info::build_year,
    content::{Portfolio, PORTFOLIO},
};

use components::ContentUnavailable;
use contact::Contact;
use hero::{Hero, Spotlight};
use hooks::use_page_state;
use nav::{BackToTop, NavBar};
use sections::{About, Experience, Projects, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/lucide-static@0.460.0/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />
        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match &*PORTFOLIO {
        Ok(portfolio) => Either::Left(view! { <PortfolioView portfolio=portfolio.clone() /> }),
        Err(e) => {
            log::error!("Couldn't load portfolio content: {e}");
            Either::Right(view! { <ContentUnavailable error=e.to_string() /> })
        }
    }
}

#[component]
fn PortfolioView(portfolio: Portfolio) -> impl IntoView {
    let Portfolio {
        profile,
        behavior,
        nav,
        about,
        skills,
        projects,
        experience,
    } = portfolio;

    provide_context(behavior);
    provide_context(use_page_state(behavior));

    let title = profile.name.clone();
    let nav_name = profile.name.clone();
    let name = profile.name.clone();
    let initial = profile.initial.clone();
    let footer_note = profile.footer_note.clone();
    let hero_profile = profile.clone();

    view! {
        <Title text=title />
        <div class="min-h-screen bg-[#0a0a0a] text-slate-200 font-sans selection:bg-cyan-500/30 selection:text-cyan-200 overflow-x-hidden">
            <Spotlight />
            <NavBar name=nav_name initial items=nav />
            <main class="relative z-10 pt-20 px-4 sm:px-6 lg:px-8 max-w-7xl mx-auto min-h-screen">
                <Hero profile=hero_profile />
                <About cards=about />
                <Skills groups=skills />
                <Projects projects />
                <Experience entries=experience />
                <Contact profile />
            </main>
            <BackToTop />
            <Footer name note=footer_note />
        </div>
    }
}

#[component]
fn Footer(name: String, note: String) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {name}. Tous droits réservés."),
        None => format!("© {name}. Tous droits réservés."),
    };
    view! {
        <footer class="relative z-10 bg-[#050505] py-8 border-t border-slate-800 text-center">
            <p class="text-slate-500 text-sm">{copyright}</p>
            <p class="text-slate-600 text-xs mt-2">{note}</p>
        </footer>
    }
}
