use leptos::prelude::*;

use crate::scroll::Section;

use super::SectionHeading;

const FOCUS_AREAS: [(&str, &str, &str, &str); 4] = [
    (
        "💻",
        "Frontend",
        "React, Vue.js, TypeScript",
        "from-blue-600/20 to-purple-600/20 border-blue-500/30",
    ),
    (
        "🖥",
        "Backend",
        "Node.js, Python, Express",
        "from-green-600/20 to-teal-600/20 border-green-500/30",
    ),
    (
        "🗄",
        "Database",
        "PostgreSQL, MongoDB",
        "from-purple-600/20 to-pink-600/20 border-purple-500/30",
    ),
    (
        "📱",
        "Mobile",
        "React Native, Flutter",
        "from-orange-600/20 to-red-600/20 border-orange-500/30",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="About Me" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="bg-gray-800/50 backdrop-blur-sm rounded-2xl p-8 border border-gray-700">
                        <h3 class="text-2xl font-semibold mb-6 text-blue-400">"Who I Am"</h3>
                        <p class="text-gray-300 leading-relaxed mb-6">
                            "I'm a passionate Full Stack Developer with over 5 years of experience in creating robust web applications. I specialize in modern JavaScript frameworks and have a strong background in both frontend and backend development."
                        </p>
                        <p class="text-gray-300 leading-relaxed mb-6">
                            "My journey in web development started with a curiosity about how websites work, and it has evolved into a deep passion for creating seamless user experiences and scalable applications."
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <div class="flex items-center gap-2 text-blue-400">
                                <span>"👤"</span>
                                <span>"5+ Years Experience"</span>
                            </div>
                            <div class="flex items-center gap-2 text-green-400">
                                <span>"🛠"</span>
                                <span>"50+ Projects Completed"</span>
                            </div>
                        </div>
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {FOCUS_AREAS
                            .into_iter()
                            .map(|(icon, title, stack, colors)| {
                                view! {
                                    <div class=format!(
                                        "bg-gradient-to-br {colors} backdrop-blur-sm rounded-xl p-6 border text-center hover:transform hover:scale-105 transition-all duration-300",
                                    )>
                                        <div class="text-5xl mb-4">{icon}</div>
                                        <h4 class="text-lg font-semibold mb-2">{title}</h4>
                                        <p class="text-gray-400 text-sm">{stack}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
