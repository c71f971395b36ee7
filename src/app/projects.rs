use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{project_delay_ms, Project, PROJECTS};
use crate::scroll::Section;

use super::{SectionHeading, TechTag};

#[component]
pub fn Projects(#[prop(into)] on_select: Callback<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="Featured Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <ProjectCard
                                    project
                                    delay_ms=project_delay_ms(index)
                                    on_select
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, delay_ms: u64, on_select: Callback<Project>) -> impl IntoView {
    view! {
        <div
            class="group bg-gray-800/50 backdrop-blur-sm rounded-xl overflow-hidden border border-gray-700 hover:border-blue-500/50 transition-all duration-500 hover:transform hover:scale-105 hover:shadow-2xl hover:shadow-blue-500/20"
            style:animation-delay=format!("{delay_ms}ms")
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                <div class="absolute top-4 right-4 flex space-x-2 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <ExternalLink href=project.github_url label="Code" icon="</>" />
                    <ExternalLink href=project.live_url label="Live Demo" icon="↗" />
                </div>
            </div>
            <div class="p-6 cursor-pointer" on:click=move |_| on_select.run(project)>
                <h3 class="text-xl font-semibold text-white mb-2 group-hover:text-blue-400 transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-gray-400 mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <TechTag name=*tech /> })
                        .collect_view()}
                </div>
                <div class="mt-4 text-sm text-blue-400 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    "Click to view details →"
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExternalLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="p-2 bg-gray-900/80 rounded-full hover:bg-gray-900 transition-colors duration-200 text-white text-sm font-mono"
            on:click=|ev| ev.stop_propagation()
        >
            {icon}
        </a>
    }
}

#[component]
pub fn ProjectModal(selected: RwSignal<Option<Project>>) -> impl IntoView {
    move || {
        selected
            .get()
            .map(|project| {
                let close = move |_: MouseEvent| selected.set(None);
                view! {
                    <div
                        class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
                        on:click=close
                    >
                        <div
                            class="bg-gray-800 rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto border border-gray-700"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <div class="relative">
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-64 object-cover rounded-t-2xl"
                                />
                                <button
                                    class="absolute top-4 right-4 p-2 bg-gray-900/80 rounded-full hover:bg-gray-900 transition-colors duration-200 text-white"
                                    aria-label="Close"
                                    on:click=close
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="p-8">
                                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6">
                                    <h2 class="text-3xl font-bold text-white mb-4 sm:mb-0">
                                        {project.title}
                                    </h2>
                                    <div class="flex gap-3">
                                        <a
                                            href=project.github_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-2 px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors duration-200"
                                        >
                                            "</>"
                                            "Code"
                                        </a>
                                        <a
                                            href=project.live_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-2 px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg transition-colors duration-200"
                                        >
                                            "↗"
                                            "Live Demo"
                                        </a>
                                    </div>
                                </div>
                                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                                    {project
                                        .duration
                                        .map(|d| view! { <ProjectFact icon="📅" label="Duration" value=d /> })}
                                    {project
                                        .team_size
                                        .map(|t| view! { <ProjectFact icon="👥" label="Team Size" value=t /> })}
                                    {project
                                        .role
                                        .map(|r| view! { <ProjectFact icon="🧑‍💻" label="My Role" value=r /> })}
                                </div>
                                <div class="mb-8">
                                    <h3 class="text-xl font-semibold mb-4 text-blue-400">
                                        "Project Overview"
                                    </h3>
                                    <p class="text-gray-300 leading-relaxed">{project.overview()}</p>
                                </div>
                                {project
                                    .features
                                    .map(|features| {
                                        view! {
                                            <div class="mb-8">
                                                <h3 class="text-xl font-semibold mb-4 text-green-400">
                                                    "Key Features"
                                                </h3>
                                                <ul class="grid grid-cols-1 md:grid-cols-2 gap-3">
                                                    {features
                                                        .iter()
                                                        .map(|feature| {
                                                            view! {
                                                                <li class="flex items-start gap-3 text-gray-300">
                                                                    <div class="w-2 h-2 bg-green-400 rounded-full mt-2 flex-shrink-0"></div>
                                                                    {*feature}
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                        }
                                    })}
                                <div>
                                    <h3 class="text-xl font-semibold mb-4 text-purple-400">
                                        "Technologies Used"
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|tech| view! { <TechTag name=*tech large=true /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })
    }
}

#[component]
fn ProjectFact(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 p-4 bg-gray-700/50 rounded-lg">
            <span class="text-xl">{icon}</span>
            <div>
                <p class="text-sm text-gray-400">{label}</p>
                <p class="font-medium">{value}</p>
            </div>
        </div>
    }
}
