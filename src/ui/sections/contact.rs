use dioxus::prelude::*;

use crate::{
    domain::{ContactField, LandingState, SubmissionStatus},
    infra::contact::ContactClient,
    ui::{
        components::{
            section_heading::SectionHeading,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn ContactSection() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<ContactClient>();

    let form = state.with(|st| st.contact.clone());
    let submitting = state.with(|st| st.submission.is_submitting());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.with(|st| st.submission.is_submitting()) {
            return;
        }

        let snapshot = state.with(|st| st.contact.clone());
        let client = client.clone();
        state.with_mut(|st| st.submission = SubmissionStatus::Submitting);
        spawn(async move {
            match client.submit(&snapshot).await {
                Ok(receipt) => {
                    tracing::info!(sender = %receipt.sender, "contact form delivered");
                    state.with_mut(|st| st.contact.reset());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        receipt.title,
                        Some(receipt.detail.to_string()),
                    );
                }
                Err(err) => {
                    tracing::warn!(%err, "contact form rejected");
                    push_toast(toasts, ToastKind::Error, "Message not sent", Some(err.to_string()));
                }
            }
            state.with_mut(|st| st.submission = SubmissionStatus::Idle);
        });
    };

    let submit_class = if submitting {
        "bg-gradient-primary w-full cursor-wait rounded-xl px-6 py-4 text-lg font-semibold text-white opacity-60"
    } else {
        "bg-gradient-primary w-full rounded-xl px-6 py-4 text-lg font-semibold text-white hover-glow"
    };

    rsx! {
        section { id: "contact", class: theme::SECTION,
            div { class: theme::CONTAINER,
                SectionHeading {
                    badge_icon: "✉",
                    badge: "Get In Touch",
                    lead: "Ready to",
                    highlight: "Transform",
                    tail: " Your Marketing?",
                    subtitle: "Talk to our team about how ADmyBRAND AI Suite fits your business. We'll get back to you within 24 hours.",
                }
                div { class: "mx-auto grid max-w-6xl grid-cols-1 gap-12 lg:grid-cols-2",
                    div { class: "space-y-6",
                        ContactDetail { icon: "✉", title: "Email Us", detail: "hello@admybrand.ai" }
                        ContactDetail { icon: "☎", title: "Call Us", detail: "+1 (555) 123-4567" }
                        ContactDetail { icon: "📍", title: "Visit Us", detail: "San Francisco, CA" }
                    }
                    form {
                        class: "{theme::PANEL} space-y-6",
                        onsubmit: on_submit,
                        div { class: "grid grid-cols-1 gap-6 md:grid-cols-2",
                            FormInput { field: ContactField::Name, value: form.name.clone(), placeholder: "Your full name" }
                            FormInput { field: ContactField::Email, value: form.email.clone(), placeholder: "you@company.com", input_type: "email" }
                        }
                        FormInput { field: ContactField::Company, value: form.company.clone(), placeholder: "Your company name" }
                        div {
                            label { class: "mb-2 block text-sm font-medium", "Message *" }
                            textarea {
                                class: "{theme::INPUT} min-h-32 resize-none",
                                name: "message",
                                required: true,
                                placeholder: "Tell us about your marketing goals...",
                                value: "{form.message}",
                                oninput: move |evt| state.with_mut(|st| st.contact.set(ContactField::Message, evt.value())),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: submit_class,
                            disabled: submitting,
                            if submitting { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormInput(
    field: ContactField,
    value: String,
    placeholder: &'static str,
    #[props(default = "text")] input_type: &'static str,
) -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    rsx! {
        div {
            label { class: "mb-2 block text-sm font-medium", "{label}" }
            input {
                class: theme::INPUT,
                r#type: input_type,
                name: field.label().to_lowercase(),
                required: field.is_required(),
                placeholder: placeholder,
                value: "{value}",
                oninput: move |evt| state.with_mut(|st| st.contact.set(field, evt.value())),
            }
        }
    }
}

#[component]
fn ContactDetail(icon: &'static str, title: &'static str, detail: &'static str) -> Element {
    rsx! {
        div { class: "glass-card flex items-center gap-4 rounded-xl border border-white/10 p-6",
            div { class: "bg-gradient-primary flex h-12 w-12 items-center justify-center rounded-xl text-xl text-white", "{icon}" }
            div {
                h3 { class: "font-semibold", "{title}" }
                p { class: theme::TEXT_MUTED, "{detail}" }
            }
        }
    }
}
