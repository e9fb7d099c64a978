use dioxus::prelude::*;

use crate::{
    domain::{content::FAQS, LandingState},
    ui::{components::section_heading::SectionHeading, theme},
};

#[component]
pub fn FaqSection() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let accordion = state.with(|st| st.faq);

    rsx! {
        section { id: "faq", class: theme::SECTION,
            div { class: "mx-auto max-w-4xl px-4",
                SectionHeading {
                    badge_icon: "❓",
                    badge: "Frequently Asked Questions",
                    lead: "Got",
                    highlight: "Questions?",
                    subtitle: "Everything you need to know about ADmyBRAND AI Suite. Can't find the answer you're looking for? Reach out to our team.",
                }
                div { class: "space-y-4",
                    for (idx, faq) in FAQS.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: "glass-card overflow-hidden rounded-xl border border-white/10 transition hover:border-violet-500/30",
                            button {
                                class: "flex w-full items-center justify-between px-6 py-4 text-left font-semibold",
                                onclick: move |_| state.with_mut(|st| st.faq.toggle(idx)),
                                span { "{faq.question}" }
                                span {
                                    class: "ml-4 text-violet-300 transition-transform",
                                    if accordion.is_open(idx) { "−" } else { "+" }
                                }
                            }
                            if accordion.is_open(idx) {
                                div { class: "px-6 pb-6 leading-relaxed {theme::TEXT_MUTED}", "{faq.answer}" }
                            }
                        }
                    }
                }
                div { class: "{theme::PANEL} mt-12 text-center",
                    h3 { class: "mb-2 text-xl font-bold", "Still have questions?" }
                    p { class: "mb-4 {theme::TEXT_MUTED}", "Our team is here to help you get the most out of AI marketing." }
                    a { href: "#contact", class: theme::BTN_PRIMARY, "Contact Support" }
                }
            }
        }
    }
}
