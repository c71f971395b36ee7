use leptos::prelude::*;

use crate::content::EXPERIENCES;
use crate::scroll::Section;

use super::{SectionHeading, TechTag};

#[component]
pub fn Experience() -> impl IntoView {
    let last = EXPERIENCES.len() - 1;
    view! {
        <section id=Section::Experience.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-gray-800/30">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="Work Experience" />
                <div class="max-w-4xl mx-auto">
                    {EXPERIENCES
                        .into_iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            view! {
                                <div class="relative">
                                    // timeline connector down to the next role
                                    {(index < last)
                                        .then(|| {
                                            view! {
                                                <div class="absolute left-6 top-20 w-0.5 h-full bg-gradient-to-b from-blue-500 to-purple-500"></div>
                                            }
                                        })}
                                    <div class="flex items-start mb-12">
                                        <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full flex items-center justify-center mr-6 z-10">
                                            "💼"
                                        </div>
                                        <div class="bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 border border-gray-700 flex-1 hover:border-blue-500/50 transition-all duration-300">
                                            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-4">
                                                <h3 class="text-xl font-semibold text-white">{exp.role}</h3>
                                                <div class="flex items-center gap-2 text-blue-400 text-sm">
                                                    "📅 " {exp.period}
                                                </div>
                                            </div>
                                            <h4 class="text-lg text-blue-400 mb-3">{exp.company}</h4>
                                            <p class="text-gray-300 mb-4 leading-relaxed">
                                                {exp.description}
                                            </p>
                                            <div class="flex flex-wrap gap-2">
                                                {exp
                                                    .technologies
                                                    .iter()
                                                    .map(|tech| view! { <TechTag name=*tech /> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
