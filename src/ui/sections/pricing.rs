use dioxus::prelude::*;

use crate::{
    domain::{plans::ANNUAL_DISCOUNT_LABEL, BillingPeriod, LandingState, Plan, PLANS},
    ui::{components::section_heading::SectionHeading, theme},
};

#[component]
pub fn PricingSection() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let period = state.with(|st| st.billing);

    let toggle_class = if period.is_annual() {
        "relative h-6 w-11 rounded-full bg-violet-500 transition"
    } else {
        "relative h-6 w-11 rounded-full bg-slate-700 transition"
    };
    let knob_class = if period.is_annual() {
        "absolute top-0.5 left-5 h-5 w-5 rounded-full bg-white transition-all"
    } else {
        "absolute top-0.5 left-0.5 h-5 w-5 rounded-full bg-white transition-all"
    };

    rsx! {
        section { id: "pricing", class: theme::SECTION,
            div { class: theme::CONTAINER,
                SectionHeading {
                    badge_icon: "👑",
                    badge: "Flexible Pricing",
                    lead: "Choose Your",
                    highlight: "AI Marketing",
                    tail: " Plan",
                    subtitle: "Scale your marketing efforts with plans designed for every business size. Start free and upgrade as you grow.",
                }
                div { class: "-mt-8 mb-12 flex items-center justify-center gap-4",
                    span { class: theme::billing_label(!period.is_annual()), "Monthly" }
                    button {
                        class: toggle_class,
                        role: "switch",
                        onclick: move |_| {
                            state.with_mut(|st| st.billing = st.billing.toggle());
                            tracing::debug!("billing period toggled");
                        },
                        span { class: knob_class }
                    }
                    span { class: theme::billing_label(period.is_annual()), "Annual" }
                    span { class: "rounded-full border border-cyan-500/30 bg-cyan-500/20 px-3 py-0.5 text-xs text-cyan-300", "{ANNUAL_DISCOUNT_LABEL}" }
                }
                div { class: "mx-auto grid max-w-7xl grid-cols-1 gap-8 lg:grid-cols-3",
                    for plan in PLANS {
                        PlanCard { key: "{plan.tier}", plan, period }
                    }
                }
                div { class: "{theme::PANEL} fade-in mx-auto mt-16 max-w-4xl text-center",
                    h3 { class: "mb-4 text-2xl font-bold", "Not sure which plan is right for you?" }
                    p { class: "mb-6 {theme::TEXT_MUTED}",
                        "Try our AI-powered recommendation tool or speak with our experts to find your perfect plan."
                    }
                    div { class: "flex flex-col justify-center gap-4 sm:flex-row",
                        a { href: "#calculator", class: theme::BTN_OUTLINE, "Get Recommendation" }
                        a { href: "#contact", class: theme::BTN_PRIMARY, "Book Consultation" }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: Plan, period: BillingPeriod) -> Element {
    let rate = plan.monthly_rate(period);
    let wrapper = if plan.popular {
        "group relative order-first lg:order-none"
    } else {
        "group relative"
    };

    rsx! {
        div { class: wrapper,
            if plan.popular {
                div { class: "absolute -top-4 left-1/2 -translate-x-1/2",
                    span { class: "bg-gradient-primary rounded-full px-4 py-1 text-sm text-white", "Most Popular" }
                }
            }
            div { class: theme::plan_card(plan.popular),
                div { class: "mb-8 text-center",
                    div { class: "bg-gradient-primary mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-2xl text-3xl", "{plan.icon}" }
                    h3 { class: "mb-2 text-2xl font-bold", "{plan.tier}" }
                    p { class: "mb-4 text-sm {theme::TEXT_MUTED}", "{plan.description}" }
                    div { class: "flex items-baseline justify-center",
                        span { class: "text-4xl font-bold", "${rate}" }
                        span { class: "ml-1 {theme::TEXT_MUTED}", "/month" }
                    }
                    if period.is_annual() {
                        p { class: "mt-1 text-sm text-cyan-300", "Billed annually (${plan.billed_annually_total()})" }
                    }
                }
                ul { class: "mb-8 space-y-4",
                    for feature in plan.features.iter() {
                        li { key: "{feature}", class: "flex items-start gap-3",
                            span { class: "text-cyan-300", "✓" }
                            span { class: "text-sm", "{feature}" }
                        }
                    }
                    for limitation in plan.limitations.iter() {
                        li { key: "{limitation}", class: "flex items-start gap-3 opacity-50",
                            span { class: "text-slate-500", "✕" }
                            span { class: "text-sm {theme::TEXT_MUTED}", "{limitation}" }
                        }
                    }
                }
                a { href: "#contact", class: theme::plan_cta(plan.popular), "{plan.cta_label()}" }
            }
        }
    }
}
