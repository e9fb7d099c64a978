use dioxus::prelude::*;

/// Labelled range input that reports raw integer positions.
#[component]
pub fn RangeSlider(
    icon: &'static str,
    label: &'static str,
    value: u32,
    min: u32,
    max: u32,
    #[props(default = 1)] step: u32,
    badge: String,
    on_change: EventHandler<i64>,
) -> Element {
    rsx! {
        div {
            div { class: "mb-4 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    span { class: "text-violet-300", "{icon}" }
                    span { class: "font-medium", "{label}" }
                }
                span { class: "rounded-full bg-violet-500/20 px-3 py-0.5 text-sm text-violet-300", "{badge}" }
            }
            input {
                r#type: "range",
                class: "range-slider w-full",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                title: label,
                oninput: move |evt| {
                    match evt.value().trim().parse::<i64>() {
                        Ok(raw) => on_change.call(raw),
                        Err(err) => tracing::debug!(%err, label, "ignoring non-numeric slider value"),
                    }
                },
            }
        }
    }
}
