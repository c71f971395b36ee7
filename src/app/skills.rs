use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_timeout_fn, UseIntersectionObserverOptions,
    UseTimeoutFnReturn,
};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::content::{
    skill_delay_ms, Skill, BACKEND_SKILLS, BACKEND_SKILL_OFFSET_MS, FRONTEND_SKILLS,
};
use crate::reveal::RevealOnce;
use crate::scroll::Section;

use super::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-gray-800/30">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="Skills & Expertise" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <SkillGroup
                        title="Frontend Development"
                        icon="💻"
                        accent="text-blue-400"
                        skills=&FRONTEND_SKILLS
                        offset_ms=0
                    />
                    <SkillGroup
                        title="Backend Development"
                        icon="🖥"
                        accent="text-green-400"
                        skills=&BACKEND_SKILLS
                        offset_ms=BACKEND_SKILL_OFFSET_MS
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillGroup(
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    skills: &'static [Skill],
    offset_ms: u64,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-sm rounded-2xl p-8 border border-gray-700">
            <h3 class=format!("text-2xl font-semibold mb-8 {accent} flex items-center gap-3")>
                <span>{icon}</span>
                {title}
            </h3>
            {skills
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    view! { <SkillBar skill=*skill delay_ms=skill_delay_ms(index, offset_ms) /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SkillBar(skill: Skill, delay_ms: u64) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (is_visible, set_is_visible) = signal(false);
    let (animated, set_animated) = signal(0u8);
    let reveal = StoredValue::new(RevealOnce::new());
    let percentage = skill.percentage;

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_animated.set(percentage), delay_ms as f64);

    let _observer = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            if reveal.try_update_value(|r| r.observe(visible)) == Some(true) {
                set_is_visible.set(true);
                start(());
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.1]),
    );

    view! {
        <div node_ref=target class="mb-6">
            <div class="flex justify-between items-center mb-2">
                <span class="text-sm font-medium text-gray-300">{skill.name}</span>
                <span class="text-sm text-gray-400">{move || format!("{}%", animated.get())}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-2">
                <div
                    class=format!("h-2 rounded-full transition-all duration-1000 ease-out {}", skill.color)
                    style:width=move || {
                        if is_visible.get() {
                            format!("{}%", animated.get())
                        } else {
                            "0%".to_string()
                        }
                    }
                ></div>
            </div>
        </div>
    }
}
