mod about;
mod contact;
mod dom;
mod experience;
mod hero;
mod navigation;
mod projects;
mod skills;

use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, use_window_scroll, UseTimeoutFnReturn};

use crate::config::{ScrollConfig, LOADING_SCREEN_MS};
use crate::content::{Project, OWNER_NAME};
use crate::scroll::{resolve_active_section, Section};

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use navigation::{Navigation, ScrollToTop};
use projects::{ProjectModal, Projects};
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
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
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let scroll_config = ScrollConfig::default();
    let (is_loading, set_is_loading) = signal(true);
    let (active, set_active) = signal(Section::Home);
    let menu_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<Project>);
    let (_, scroll_y) = use_window_scroll();

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_is_loading.set(false), LOADING_SCREEN_MS as f64);
    Effect::new(move |_| start(()));

    // effects only run in the browser, so the DOM lookups below are safe
    Effect::new(move |_| {
        let y = scroll_y.get();
        if let Some(section) = resolve_active_section(
            &Section::ALL,
            dom::section_top,
            y,
            scroll_config.activation_offset,
        ) {
            set_active.set(*section);
        }
    });

    let navigate = Callback::new(move |section: Section| {
        dom::scroll_to_section(section, scroll_config.nav_offset);
        set_active.set(section);
        menu_open.set(false);
    });

    view! {
        <Title text="Portfolio" />
        <Show when=move || !is_loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <div class="bg-gray-900 text-white min-h-screen">
                <Navigation active menu_open on_navigate=navigate />
                <Hero on_navigate=navigate />
                <About />
                <Skills />
                <Projects on_select=move |project: Project| selected.set(Some(project)) />
                <Experience />
                <Contact />
                <Footer />
                <ProjectModal selected />
                <ScrollToTop scroll_y threshold=scroll_config.scroll_top_threshold />
            </div>
        </Show>
    }
}

#[component]
fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900">
            <div class="relative">
                <div class="w-16 h-16 border-4 border-blue-500/30 border-t-blue-500 rounded-full animate-spin"></div>
                <div class="absolute inset-0 w-16 h-16 border-4 border-purple-500/30 border-b-purple-500 rounded-full animate-spin animate-reverse"></div>
            </div>
            <div class="ml-4">
                <h2 class="text-xl font-semibold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                    "Loading Portfolio..."
                </h2>
            </div>
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl sm:text-5xl font-bold mb-6">
                <span class="bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                    {title}
                </span>
            </h2>
            <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-500 mx-auto"></div>
        </div>
    }
}

#[component]
fn TechTag(name: &'static str, #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "text-sm" } else { "text-xs" };
    view! {
        <span class=format!(
            "px-3 py-1 {size} font-medium bg-blue-500/20 text-blue-300 rounded-full border border-blue-500/30",
        )>{name}</span>
    }
}

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 sm:px-6 lg:px-8 bg-gray-800/50 border-t border-gray-700">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-gray-400">
                    {format!(
                        "© {} {OWNER_NAME}. All rights reserved. Built with Rust & Leptos.",
                        build_year(),
                    )}
                </p>
            </div>
        </footer>
    }
}
