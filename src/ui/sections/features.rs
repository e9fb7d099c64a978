use dioxus::prelude::*;

use crate::{
    domain::content::FEATURES,
    ui::{components::section_heading::SectionHeading, theme},
};

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { id: "features", class: theme::SECTION,
            div { class: theme::CONTAINER,
                SectionHeading {
                    badge_icon: "🧠",
                    badge: "AI-Powered Features",
                    lead: "Everything You Need to",
                    highlight: "Dominate Marketing",
                    subtitle: "Our comprehensive AI suite provides all the tools you need to create, manage, and optimize marketing campaigns that deliver exceptional results.",
                }
                div { class: "grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3",
                    for (idx, feature) in FEATURES.iter().enumerate() {
                        div {
                            key: "{feature.title}",
                            class: "glass-card fade-in group h-full rounded-2xl border border-white/10 p-8 transition duration-300 hover:border-violet-500/30",
                            div {
                                class: icon_class(idx),
                                "{feature.icon}"
                            }
                            h3 { class: "mb-4 text-xl font-semibold transition group-hover:text-violet-300", "{feature.title}" }
                            p { class: "leading-relaxed {theme::TEXT_MUTED}", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

fn icon_class(idx: usize) -> &'static str {
    if idx % 2 == 0 {
        "bg-gradient-primary mb-6 flex h-16 w-16 items-center justify-center rounded-2xl text-3xl"
    } else {
        "bg-gradient-accent mb-6 flex h-16 w-16 items-center justify-center rounded-2xl text-3xl"
    }
}
