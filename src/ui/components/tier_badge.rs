use dioxus::prelude::*;

use crate::domain::Tier;
use crate::ui::theme;

#[component]
pub fn TierBadge(tier: Tier) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-3 py-0.5 text-xs font-medium {theme::tier_badge(tier)}",
            "{tier}"
        }
    }
}
