use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    domain::{content::TESTIMONIALS, LandingState},
    ui::{components::section_heading::SectionHeading, theme},
    util::config::LandingConfig,
};

#[component]
pub fn TestimonialsSection() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let config = use_context::<LandingConfig>();
    let carousel = state.with(|st| st.testimonials);

    let _autoplay = use_future(move || {
        let interval: Duration = config.carousel_interval;
        async move {
            loop {
                tokio::time::sleep(interval).await;
                state.with_mut(|st| st.testimonials.advance());
            }
        }
    });

    let Some(current) = TESTIMONIALS.get(carousel.index()).copied() else {
        return rsx! { Fragment {} };
    };
    let stars = "★".repeat(current.rating as usize);

    rsx! {
        section { id: "testimonials", class: theme::SECTION,
            div { class: theme::CONTAINER,
                SectionHeading {
                    badge_icon: "💬",
                    badge: "Customer Success",
                    lead: "Loved by",
                    highlight: "Marketing Teams",
                    tail: " Worldwide",
                    subtitle: "Join thousands of businesses that have transformed their marketing with ADmyBRAND AI Suite.",
                }
                div { class: "relative mx-auto max-w-4xl",
                    div { class: "{theme::PANEL} fade-in text-center md:p-12",
                        div { class: "mb-6 text-xl tracking-widest text-amber-300", "{stars}" }
                        blockquote { class: "mb-8 text-lg italic leading-relaxed md:text-xl",
                            "“{current.content}”"
                        }
                        div { class: "flex items-center justify-center gap-4",
                            div { class: "bg-gradient-primary flex h-12 w-12 items-center justify-center rounded-full font-bold text-white", "{current.avatar}" }
                            div { class: "text-left",
                                div { class: "font-semibold", "{current.author}" }
                                div { class: "text-sm {theme::TEXT_MUTED}", "{current.role}, {current.company}" }
                            }
                        }
                    }
                    div { class: "mt-8 flex items-center justify-center gap-4",
                        button {
                            class: theme::BTN_ICON,
                            title: "Previous testimonial",
                            onclick: move |_| state.with_mut(|st| st.testimonials.prev()),
                            "‹"
                        }
                        div { class: "flex gap-2",
                            for idx in 0..carousel.len() {
                                button {
                                    key: "{idx}",
                                    class: dot_class(idx == carousel.index()),
                                    title: format!("Show testimonial {}", idx + 1),
                                    onclick: move |_| state.with_mut(|st| st.testimonials.go_to(idx)),
                                }
                            }
                        }
                        button {
                            class: theme::BTN_ICON,
                            title: "Next testimonial",
                            onclick: move |_| state.with_mut(|st| st.testimonials.next()),
                            "›"
                        }
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "h-3 w-8 rounded-full bg-violet-400 transition-all"
    } else {
        "h-3 w-3 rounded-full bg-slate-600 transition-all hover:bg-slate-400"
    }
}
