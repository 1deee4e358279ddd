use leptos::{either::Either, prelude::*};

use crate::{
    content::{AboutCard, ExperienceEntry, Icon, Project, ProjectLink, SkillGroup},
    section::SectionId,
};

use super::components::{IconGlyph, RevealOnScroll, SectionHeading};

const STAGGER_MS: u32 = 100;

fn stagger(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

#[component]
pub fn About(cards: Vec<AboutCard>) -> impl IntoView {
    // two columns of cards, the right one revealed a little later
    let mid = cards.len().div_ceil(2);
    let right = cards[mid..].to_vec();
    let left = cards[..mid].to_vec();

    view! {
        <section id=SectionId::About.as_str() class="py-20 scroll-mt-20">
            <SectionHeading icon=Icon::BookOpen title="À propos de moi" />
            <div class="grid md:grid-cols-2 gap-8">
                <RevealOnScroll delay=100>
                    <AboutColumn cards=left />
                </RevealOnScroll>
                <RevealOnScroll delay=300>
                    <AboutColumn cards=right />
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn AboutColumn(cards: Vec<AboutCard>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <div class="bg-slate-800/50 p-6 rounded-2xl border border-slate-700 hover:border-cyan-500/50 transition-all hover:bg-slate-800 hover:shadow-lg hover:shadow-cyan-900/20 group">
                            <h3 class="text-xl font-semibold text-white mb-3 flex items-center gap-2 group-hover:text-cyan-400 transition-colors">
                                <IconGlyph icon=card.icon />
                                {card.title}
                            </h3>
                            {card
                                .paragraphs
                                .into_iter()
                                .map(|p| view! { <p class="text-slate-300 leading-relaxed">{p}</p> })
                                .collect_view()}
                            <ul class="space-y-2 text-slate-300">
                                {card
                                    .highlights
                                    .into_iter()
                                    .map(|h| {
                                        view! {
                                            <li class="flex items-center gap-2">
                                                <span class="w-2 h-2 bg-cyan-400 rounded-full"></span>
                                                <span>
                                                    <strong>{h.label} " :"</strong>
                                                    " "
                                                    {h.text}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Skills(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-20 scroll-mt-20">
            <SectionHeading icon=Icon::Code title="Mes Compétences" />
            <div class="grid md:grid-cols-2 gap-6">
                {groups
                    .into_iter()
                    .enumerate()
                    .map(|(i, group)| {
                        view! {
                            <RevealOnScroll delay=stagger(i)>
                                <div class="bg-slate-800/40 p-6 rounded-2xl border border-slate-700 hover:border-cyan-400 transition-all duration-300 hover:-translate-y-2 hover:shadow-xl hover:shadow-cyan-500/10 group cursor-default">
                                    <div class="flex items-center gap-4 mb-6">
                                        <div class="p-3 bg-slate-900 rounded-lg border border-slate-700 group-hover:border-cyan-400 group-hover:bg-cyan-900/20 transition-all duration-300">
                                            <IconGlyph icon=group.icon class="text-cyan-400" />
                                        </div>
                                        <h3 class="text-xl font-bold text-white group-hover:text-cyan-400 transition-colors">
                                            {group.category}
                                        </h3>
                                    </div>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="px-3 py-1.5 bg-cyan-900/20 text-cyan-200 rounded-lg text-sm border border-cyan-800/30 hover:bg-cyan-500 hover:text-white hover:border-cyan-400 transition-all duration-300 transform hover:scale-105">
                                                        {item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-20 scroll-mt-20">
            <SectionHeading icon=Icon::Terminal title="Projets" />
            <div class="grid md:grid-cols-1 lg:grid-cols-2 gap-8">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <RevealOnScroll delay=stagger(i)>
                                <ProjectCard project />
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let link = match project.link {
        ProjectLink::Url(url) => Either::Left(view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 text-cyan-400 hover:text-cyan-300 font-bold hover:underline transition-all transform hover:translate-x-2"
            >
                "Voir le code"
                <IconGlyph icon=Icon::ExternalLink />
            </a>
        }),
        ProjectLink::Private => Either::Right(view! {
            <span class="text-slate-600 text-sm italic">"Code non public"</span>
        }),
    };

    view! {
        <div class="group relative bg-slate-800 rounded-2xl overflow-hidden border border-slate-700 hover:border-cyan-500 transition-all duration-300 flex flex-col h-full hover:shadow-2xl hover:shadow-cyan-900/20 hover:-translate-y-2">
            <div class="absolute top-0 left-0 w-1 h-full bg-cyan-500 transform origin-top scale-y-0 group-hover:scale-y-100 transition-transform duration-500"></div>
            <div class="p-8 flex flex-col flex-grow relative z-10">
                <h3 class="text-2xl font-bold text-white mb-4 group-hover:text-cyan-400 transition-colors">
                    {project.title}
                </h3>
                <span class="inline-block w-fit mb-4 text-xs font-bold px-3 py-1 bg-slate-700 text-cyan-300 rounded-full uppercase tracking-wider group-hover:bg-cyan-900/30 transition-colors">
                    {project.kind}
                </span>
                <p class="text-slate-400 mb-6 leading-relaxed flex-grow text-sm group-hover:text-slate-300 transition-colors">
                    {project.description}
                </p>
                <div class="mt-auto">
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tags
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <span class="text-xs text-slate-300 bg-slate-900 border border-slate-700 px-2 py-1 rounded transition-colors group-hover:border-cyan-500/50">
                                        "#"
                                        {tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    {link}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Experience(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-20 scroll-mt-20">
            <SectionHeading icon=Icon::Briefcase title="Parcours Professionnel" />
            <div class="space-y-8 relative">
                <div class="hidden md:block absolute left-[27px] top-4 bottom-0 w-0.5 bg-gradient-to-b from-cyan-500 to-transparent opacity-30"></div>
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <RevealOnScroll delay=200>
                                <TimelineEntry entry />
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <div class="relative pl-0 md:pl-16 group" title=entry.title>
            <div class="hidden md:block absolute left-[18px] top-8 w-5 h-5 rounded-full bg-slate-900 border-4 border-cyan-500 z-10 group-hover:scale-125 transition-transform duration-300"></div>
            <div class="bg-slate-800 p-8 rounded-2xl border border-slate-700 shadow-lg hover:shadow-cyan-500/10 transition-all hover:bg-slate-800/80 hover:border-cyan-500/50">
                <div class="flex flex-col md:flex-row md:justify-between md:items-center mb-6 border-b border-slate-700 pb-4">
                    <div>
                        <h3 class="text-2xl font-bold text-white group-hover:text-cyan-400 transition-colors">
                            {entry.role}
                        </h3>
                        <h4 class="text-lg text-cyan-400 font-medium">{entry.company}</h4>
                    </div>
                    <span class="mt-2 md:mt-0 px-4 py-1 bg-cyan-900/30 text-cyan-200 rounded-full text-sm font-mono border border-cyan-800/30">
                        {entry.period}
                    </span>
                </div>
                <p class="text-slate-300 mb-6 italic text-lg">{entry.description}</p>
                <div class="grid md:grid-cols-1 gap-3">
                    {entry
                        .details
                        .into_iter()
                        .map(|detail| {
                            view! {
                                <div class="flex gap-3 items-start">
                                    <div class="mt-2 w-1.5 h-1.5 rounded-full bg-cyan-400 flex-shrink-0"></div>
                                    <p class="text-slate-400 text-sm leading-relaxed">{detail}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
