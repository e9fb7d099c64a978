use dioxus::prelude::*;

use crate::{
    domain::content::{HERO_HIGHLIGHTS, HERO_STATS},
    ui::theme,
};

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "top", class: "relative flex min-h-screen items-center justify-center overflow-hidden pt-24",
            div { class: "{theme::CONTAINER} fade-in text-center",
                div { class: "mb-8",
                    span { class: theme::SECTION_BADGE, "✨ Powered by Advanced AI Technology" }
                }
                h1 { class: "mb-6 text-4xl font-bold leading-tight md:text-6xl lg:text-7xl",
                    "Transform Your Marketing with "
                    span { class: "gradient-text", "AI Excellence" }
                }
                p { class: "mx-auto mb-8 max-w-3xl text-lg leading-relaxed md:text-xl {theme::TEXT_MUTED}",
                    "Unlock the power of artificial intelligence to revolutionize your marketing campaigns. Create, optimize, and scale your brand presence with our comprehensive AI suite."
                }
                div { class: "mb-12 flex flex-col items-center justify-center gap-4 sm:flex-row",
                    a { href: "#pricing", class: theme::BTN_PRIMARY, "Start Free Trial →" }
                    a { href: "#demo", class: theme::BTN_OUTLINE, "▶ Watch Demo" }
                }
                div { class: "relative mx-auto max-w-4xl",
                    div { class: "glass-card rounded-2xl p-8",
                        div { class: "grid grid-cols-1 gap-6 md:grid-cols-3",
                            for highlight in HERO_HIGHLIGHTS {
                                div {
                                    key: "{highlight.title}",
                                    class: "rounded-lg border border-violet-500/20 p-6 transition hover:scale-105",
                                    div { class: "mb-4 text-3xl", "{highlight.icon}" }
                                    h3 { class: "mb-2 font-semibold", "{highlight.title}" }
                                    p { class: "text-sm {theme::TEXT_MUTED}", "{highlight.description}" }
                                }
                            }
                        }
                    }
                    div { class: "mt-6 flex justify-center gap-6",
                        for stat in HERO_STATS {
                            div { key: "{stat.label}", class: "glass-card rounded-xl p-4",
                                div { class: "text-2xl font-bold text-violet-300", "{stat.value}" }
                                div { class: "text-sm {theme::TEXT_MUTED}", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
