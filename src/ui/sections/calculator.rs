use dioxus::prelude::*;

use crate::{
    domain::{
        pricing::{CAMPAIGNS_RANGE, CONTENT_PIECES_RANGE, CONTENT_PIECES_STEP, TEAM_SIZE_RANGE},
        plan_for_tier, LandingState,
    },
    ui::{
        components::{range_slider::RangeSlider, stat_card::StatCard, tier_badge::TierBadge},
        theme,
    },
    util::format_dollars,
};

#[component]
pub fn PricingCalculator() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let calculator = state.with(|st| st.calculator);
    let input = calculator.input();
    let result = calculator.estimate();
    let list_plan = plan_for_tier(result.recommended_tier);

    let team_badge = match input.team_size() {
        1 => "1 member".to_string(),
        n => format!("{n} members"),
    };

    rsx! {
        div { id: "calculator", class: "{theme::CONTAINER}",
            div { class: "{theme::PANEL} mx-auto mt-16 max-w-2xl",
                div { class: "mb-8 text-center",
                    div { class: "bg-gradient-primary mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-2xl text-3xl", "🧮" }
                    h3 { class: "mb-2 text-2xl font-bold", "Interactive Pricing Calculator" }
                    p { class: theme::TEXT_MUTED, "Customize your plan based on your specific needs" }
                }
                div { class: "space-y-8",
                    RangeSlider {
                        icon: "👥",
                        label: "Team Size",
                        value: input.team_size(),
                        min: *TEAM_SIZE_RANGE.start(),
                        max: *TEAM_SIZE_RANGE.end(),
                        badge: team_badge,
                        on_change: move |raw| state.with_mut(|st| st.calculator.set_team_size(raw)),
                    }
                    RangeSlider {
                        icon: "🎯",
                        label: "Campaigns per Month",
                        value: input.monthly_campaigns(),
                        min: *CAMPAIGNS_RANGE.start(),
                        max: *CAMPAIGNS_RANGE.end(),
                        badge: format!("{} campaigns", input.monthly_campaigns()),
                        on_change: move |raw| state.with_mut(|st| st.calculator.set_campaigns(raw)),
                    }
                    RangeSlider {
                        icon: "⚡",
                        label: "AI Content Pieces",
                        value: input.monthly_content_pieces(),
                        min: *CONTENT_PIECES_RANGE.start(),
                        max: *CONTENT_PIECES_RANGE.end(),
                        step: CONTENT_PIECES_STEP,
                        badge: format!("{} pieces", input.monthly_content_pieces()),
                        on_change: move |raw| state.with_mut(|st| st.calculator.set_content_pieces(raw)),
                    }
                    div {
                        class: "glass-card fade-in rounded-xl border border-cyan-500/30 p-6 text-center",
                        div { class: "gradient-text mb-2 text-3xl font-bold", "${result.price}/month" }
                        div { class: "mb-4 flex items-center justify-center gap-2 text-sm {theme::TEXT_MUTED}",
                            "Recommended:"
                            TierBadge { tier: result.recommended_tier }
                            "Plan"
                        }
                        p { class: "-mt-2 mb-4 text-xs text-slate-500",
                            "{list_plan.tier} list price: ${list_plan.monthly_price}/month"
                        }
                        div { class: "mb-6 grid grid-cols-2 gap-4",
                            StatCard {
                                value: format_dollars(result.monthly_savings),
                                label: "Monthly Savings vs Traditional Tools",
                                accent: "text-cyan-300",
                            }
                            StatCard {
                                value: format!("{}%", result.cost_reduction_percent),
                                label: "Cost Reduction",
                            }
                        }
                        a { href: "#contact", class: "bg-gradient-primary block w-full rounded-xl px-6 py-3 font-semibold text-white hover-glow",
                            "{result.recommended_tier.trial_cta()}"
                        }
                    }
                }
            }
        }
    }
}
