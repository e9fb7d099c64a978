use dioxus::prelude::*;

use crate::{
    domain::LandingState,
    ui::{components::section_heading::SectionHeading, theme},
};

#[component]
pub fn DemoSection() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let playing = state.with(|st| st.demo.playing);

    rsx! {
        section { id: "demo", class: theme::SECTION,
            div { class: theme::CONTAINER,
                SectionHeading {
                    badge_icon: "▶",
                    badge: "See It In Action",
                    lead: "Watch AI Transform",
                    highlight: "Your Marketing",
                    subtitle: "See how ADmyBRAND AI Suite creates, launches, and optimizes a complete campaign in minutes instead of weeks.",
                }
                div { class: "glass-card relative mx-auto aspect-video max-w-5xl overflow-hidden rounded-2xl border border-violet-500/30",
                    div { class: "absolute inset-0 flex flex-col items-center justify-center gap-4",
                        button {
                            class: "bg-gradient-primary flex h-20 w-20 items-center justify-center rounded-full text-3xl text-white shadow-glow transition hover:scale-110",
                            onclick: move |_| state.with_mut(|st| st.demo.toggle()),
                            if playing { "⏸" } else { "▶" }
                        }
                        p { class: theme::TEXT_MUTED,
                            if playing { "Playing product tour…" } else { "Product tour · 2:30" }
                        }
                    }
                    div { class: "absolute inset-x-0 bottom-0 flex items-center justify-between px-6 py-4 text-slate-300",
                        span { "🔊" }
                        span { "⛶" }
                    }
                }
            }
        }
    }
}
