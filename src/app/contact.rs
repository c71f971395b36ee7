use leptos::{either::*, ev::SubmitEvent, prelude::*};

use crate::config::SubmissionConfig;
use crate::contact::{
    self, Field, MessageSender, SendError, SimulatedSender, SubmissionStatus, SubmitError,
};
use crate::content::{OWNER_EMAIL, OWNER_LOCATION, OWNER_PHONE, OWNER_PHONE_HREF};
use crate::scroll::Section;

use super::SectionHeading;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading title="Get In Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-semibold mb-6">"Let's Work Together"</h3>
                        <p class="text-gray-300 mb-8 leading-relaxed">
                            "I'm always interested in new opportunities and exciting projects. Whether you have a question or just want to say hi, feel free to reach out!"
                        </p>
                        <div class="space-y-4">
                            <ContactDetail
                                icon="✉"
                                label="Email"
                                value=OWNER_EMAIL
                                href=Some(format!("mailto:{OWNER_EMAIL}"))
                            />
                            <ContactDetail
                                icon="☎"
                                label="Phone"
                                value=OWNER_PHONE
                                href=Some(OWNER_PHONE_HREF.to_string())
                            />
                            <ContactDetail icon="📍" label="Location" value=OWNER_LOCATION href=None />
                        </div>
                    </div>
                    <div class="bg-gray-800/50 backdrop-blur-sm rounded-2xl p-8 border border-gray-700">
                        <ContactForm config=SubmissionConfig::default() />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <span class="text-2xl text-blue-400">{icon}</span>
        <div>
            <p class="font-medium">{label}</p>
            <p class="text-gray-400 group-hover:text-blue-400 transition-colors duration-300">
                {value}
            </p>
        </div>
    };
    let class = "flex items-center gap-4 p-4 bg-gray-800/50 backdrop-blur-sm rounded-lg border border-gray-700 hover:border-blue-500/50 transition-all duration-300 group";
    match href {
        Some(href) => Either::Left(view! { <a href=href class=class>{body}</a> }),
        None => Either::Right(view! { <div class=class>{body}</div> }),
    }
}

#[component]
pub fn ContactForm(config: SubmissionConfig) -> impl IntoView {
    let form = RwSignal::new(contact::ContactForm::new());
    let timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = timer.try_with_value(|h| *h).flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let pending = match form.try_update(|f| f.submit()) {
            Some(Ok(pending)) => pending,
            Some(Err(SubmitError::InFlight)) | None => return,
            // errors are already on the form for display
            Some(Err(SubmitError::Invalid(_))) => return,
        };
        let in_flight = pending.clone();
        let handle = set_timeout_with_handle(
            move || {
                let mut sender = SimulatedSender::new(rand::thread_rng(), config.success_rate);
                let outcome = sender.send(&in_flight.input);
                form.try_update(|f| f.resolve(&in_flight, outcome));
            },
            config.delay(),
        );
        match handle {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => {
                log::warn!("couldn't schedule contact form send: {e:?}");
                form.update(|f| {
                    f.resolve(
                        &pending,
                        Err(SendError::Unavailable("timer unavailable".to_string())),
                    );
                });
            }
        }
    };

    let is_submitting = move || form.with(|f| f.is_submitting());

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate=true>
            <FormField form field=Field::Name label="Name *" placeholder="Your full name" />
            <FormField
                form
                field=Field::Email
                label="Email *"
                placeholder="your.email@example.com"
            />
            <FormField
                form
                field=Field::Message
                label="Message *"
                placeholder="Tell me about your project or just say hello..."
            />
            <button
                type="submit"
                disabled=is_submitting
                class=move || {
                    if is_submitting() {
                        "w-full px-8 py-4 rounded-lg font-semibold transition-all duration-300 flex items-center justify-center gap-2 bg-gray-600 cursor-not-allowed"
                    } else {
                        "w-full px-8 py-4 rounded-lg font-semibold transition-all duration-300 flex items-center justify-center gap-2 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 transform hover:scale-105 shadow-lg hover:shadow-xl"
                    }
                }
            >
                {move || {
                    if is_submitting() {
                        Either::Left(
                            view! {
                                <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                "Sending..."
                            },
                        )
                    } else {
                        Either::Right("➤ Send Message")
                    }
                }}
            </button>
            {move || match form.with(|f| f.status()) {
                SubmissionStatus::Success => {
                    EitherOf3::A(
                        view! {
                            <div class="p-4 bg-green-500/20 border border-green-500/30 rounded-lg flex items-center gap-2 text-green-400">
                                <span>"✔"</span>
                                <span>"Message sent successfully! I'll get back to you soon."</span>
                            </div>
                        },
                    )
                }
                SubmissionStatus::Error => {
                    EitherOf3::B(
                        view! {
                            <div class="p-4 bg-red-500/20 border border-red-500/30 rounded-lg flex items-center gap-2 text-red-400">
                                <span>"⚠"</span>
                                <span>
                                    "Failed to send message. Please try again or contact me directly."
                                </span>
                            </div>
                        },
                    )
                }
                SubmissionStatus::Idle | SubmissionStatus::Submitting => EitherOf3::C(()),
            }}
        </form>
    }
}

#[component]
fn FormField(
    form: RwSignal<contact::ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.errors().message(field));
    let value = move || form.with(|f| f.input().get(field).to_string());
    let on_input = move |ev| form.update(|f| f.edit(field, event_target_value(&ev)));
    let class = move || {
        let border = if error().is_some() {
            "border-red-500 focus:border-red-400"
        } else {
            "border-gray-600 focus:border-blue-500 focus:ring-2 focus:ring-blue-500/20"
        };
        let resize = if field == Field::Message { " resize-none" } else { "" };
        format!(
            "w-full px-4 py-3 bg-gray-700/50 border rounded-lg focus:outline-none transition-all duration-300 {border}{resize}",
        )
    };
    let id = field.as_str();

    let input = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=id
                name=id
                rows=5
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }),
        Field::Name | Field::Email => {
            let kind = if field == Field::Email { "email" } else { "text" };
            Either::Right(view! {
                <input
                    type=kind
                    id=id
                    name=id
                    class=class
                    placeholder=placeholder
                    prop:value=value
                    on:input=on_input
                />
            })
        }
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2 text-gray-300">
                {label}
            </label>
            {input}
            {move || {
                error()
                    .map(|message| {
                        view! {
                            <p class="mt-1 text-sm text-red-400 flex items-center gap-1">
                                <span>"⚠"</span>
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
