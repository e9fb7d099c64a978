//! Shared class strings so sections stay visually consistent.

use crate::domain::Tier;

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "rounded-xl bg-gradient-primary px-8 py-4 text-lg font-semibold text-white transition hover-glow";
pub const BTN_OUTLINE: &str = "glass-card rounded-xl border border-violet-500/30 px-8 py-4 text-lg font-semibold text-slate-100 transition hover:bg-violet-500/10";
pub const BTN_ICON: &str = "glass-card flex h-10 w-10 items-center justify-center rounded-full border border-violet-500/30 text-slate-200 transition hover:bg-violet-500/10";

pub fn plan_cta(popular: bool) -> &'static str {
    if popular {
        "w-full rounded-xl bg-gradient-primary px-6 py-3 font-semibold text-white transition hover-glow"
    } else {
        "w-full rounded-xl bg-gradient-accent px-6 py-3 font-semibold text-white transition hover-glow"
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub const SECTION: &str = "relative overflow-hidden py-20";
pub const CONTAINER: &str = "mx-auto max-w-7xl px-4";
pub const PANEL: &str = "glass-card rounded-2xl border border-violet-500/30 p-8";

pub fn plan_card(popular: bool) -> &'static str {
    if popular {
        "glass-card h-full rounded-2xl border border-violet-500/50 p-8 shadow-glow transition duration-300"
    } else {
        "glass-card h-full rounded-2xl border border-white/10 p-8 transition duration-300 hover:border-violet-500/30"
    }
}

// ============================================
// TEXT / BADGE STYLES
// ============================================

pub const SECTION_BADGE: &str = "glass-card inline-flex items-center gap-2 rounded-full border border-violet-500/30 px-4 py-2 text-sm text-slate-200";
pub const TEXT_MUTED: &str = "text-slate-400";
pub const INPUT: &str = "w-full rounded-xl border border-white/10 bg-slate-950/60 px-4 py-3 text-sm text-slate-100 placeholder-slate-500 focus:border-violet-500 focus:outline-none";

pub fn tier_badge(tier: Tier) -> &'static str {
    match tier {
        Tier::Starter => "border-cyan-500/40 bg-cyan-500/10 text-cyan-300",
        Tier::Professional => "border-violet-500/40 bg-violet-500/10 text-violet-300",
        Tier::Enterprise => "border-amber-500/40 bg-amber-500/10 text-amber-300",
    }
}

pub fn billing_label(active: bool) -> &'static str {
    if active {
        "text-sm font-semibold text-violet-300"
    } else {
        "text-sm text-slate-400"
    }
}
