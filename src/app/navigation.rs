use leptos::prelude::*;

use crate::content::OWNER_NAME;
use crate::scroll::{show_scroll_to_top, Section};

use super::dom::smooth_scroll_to;

#[component]
pub fn Navigation(
    active: ReadSignal<Section>,
    menu_open: RwSignal<bool>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full z-40 bg-gray-900/90 backdrop-blur-sm border-b border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent"
                        on:click=move |_| on_navigate.run(Section::Home)
                    >
                        {OWNER_NAME}
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section active on_navigate /> })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden p-2 text-gray-300 hover:text-white"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-gray-900/95 border-t border-gray-800 px-4 py-2 flex flex-col">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section active on_navigate /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(
    section: Section,
    active: ReadSignal<Section>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if active.get() == section {
                    "py-2 text-left font-medium text-blue-400 transition-colors duration-300"
                } else {
                    "py-2 text-left font-medium text-gray-300 hover:text-white transition-colors duration-300"
                }
            }
            on:click=move |_| on_navigate.run(section)
        >
            {section.label()}
        </button>
    }
}

#[component]
pub fn ScrollToTop(scroll_y: Signal<f64>, threshold: f64) -> impl IntoView {
    view! {
        <button
            aria-label="Scroll to top"
            class=move || {
                let shown = if show_scroll_to_top(scroll_y.get(), threshold) {
                    "translate-y-0 opacity-100"
                } else {
                    "translate-y-16 opacity-0"
                };
                format!(
                    "fixed bottom-8 right-8 z-40 p-3 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full shadow-lg hover:shadow-xl transform transition-all duration-300 hover:scale-110 {shown}",
                )
            }
            on:click=move |_| smooth_scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
