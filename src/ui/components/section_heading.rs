use dioxus::prelude::*;

use crate::ui::theme;

/// Badge, headline with a gradient highlight, and an optional lead paragraph.
#[component]
pub fn SectionHeading(
    badge_icon: &'static str,
    badge: &'static str,
    lead: &'static str,
    highlight: &'static str,
    #[props(default)] tail: &'static str,
    #[props(default)] subtitle: Option<&'static str>,
) -> Element {
    rsx! {
        div { class: "fade-in mb-16 text-center",
            div { class: "mb-4",
                span { class: theme::SECTION_BADGE,
                    span { "{badge_icon}" }
                    "{badge}"
                }
            }
            h2 { class: "mb-6 text-3xl font-bold md:text-5xl",
                "{lead} "
                span { class: "gradient-text", "{highlight}" }
                "{tail}"
            }
            if let Some(subtitle) = subtitle {
                p { class: "mx-auto max-w-3xl text-lg {theme::TEXT_MUTED}", "{subtitle}" }
            }
        }
    }
}
