use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::config::TypingConfig;
use crate::content::{cv_data_url, AVATAR_URL, CV_FILE_NAME, OWNER_NAME};
use crate::scroll::Section;
use crate::typing::{CursorBlink, TypingEngine};

#[component]
pub fn Hero(on_navigate: Callback<Section>) -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-900/20 via-gray-900 to-purple-900/20"></div>
            <div class="relative z-10 text-center px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <img
                        src=AVATAR_URL
                        alt="Profile"
                        class="w-32 h-32 rounded-full mx-auto mb-6 border-4 border-blue-500 shadow-2xl shadow-blue-500/50"
                    />
                </div>
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold mb-6">
                    <span class="bg-gradient-to-r from-blue-400 via-purple-500 to-cyan-400 bg-clip-text text-transparent">
                        {OWNER_NAME}
                    </span>
                </h1>
                <div class="text-2xl sm:text-3xl lg:text-4xl mb-8 h-12">
                    <TypingAnimation config=TypingConfig::default() />
                </div>
                <p class="text-xl text-gray-300 mb-12 max-w-3xl mx-auto leading-relaxed">
                    "Passionate about creating exceptional digital experiences through innovative web technologies and modern development practices."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full font-semibold hover:from-blue-700 hover:to-purple-700 transform hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-xl"
                        on:click=move |_| on_navigate.run(Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <a
                        href=cv_data_url()
                        download=CV_FILE_NAME
                        class="px-8 py-4 border-2 border-blue-500 rounded-full font-semibold hover:bg-blue-500 hover:bg-opacity-20 transform hover:scale-105 transition-all duration-300 flex items-center justify-center gap-2"
                    >
                        "⬇ Download CV"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TypingAnimation(config: TypingConfig) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let blink = CursorBlink::new(config.cursor_blink());
    let blink_ms = blink.interval().as_millis() as u64;
    let cursor = RwSignal::new(blink);
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let _blink = use_interval_fn(
        move || {
            cursor.update(|c| {
                c.toggle();
            })
        },
        blink_ms,
    );

    match TypingEngine::from_config(&config) {
        Ok(engine) => {
            let engine = StoredValue::new(engine);
            Effect::new(move |_| schedule_tick(engine, set_text, timer));
        }
        Err(e) => log::warn!("typing animation disabled: {e}"),
    }

    on_cleanup(move || {
        if let Some(handle) = timer.try_with_value(|h| *h).flatten() {
            handle.clear();
        }
    });

    view! {
        <span class="font-mono">
            {text}
            <span class=move || {
                if cursor.get().is_visible() {
                    "opacity-100 transition-opacity duration-100"
                } else {
                    "opacity-0 transition-opacity duration-100"
                }
            }>"|"</span>
        </span>
    }
}

fn schedule_tick(
    engine: StoredValue<TypingEngine>,
    set_text: WriteSignal<String>,
    timer: StoredValue<Option<TimeoutHandle>>,
) {
    let Some(delay) = engine.try_with_value(|e| e.next_delay()) else {
        return;
    };
    let handle = set_timeout_with_handle(
        move || {
            let Some(displayed) = engine.try_update_value(|e| {
                e.tick();
                e.displayed().to_string()
            }) else {
                return;
            };
            set_text.set(displayed);
            schedule_tick(engine, set_text, timer);
        },
        delay,
    );
    match handle {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(e) => log::warn!("couldn't schedule typing step: {e:?}"),
    }
}
