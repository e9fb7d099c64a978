use serde::{Deserialize, Serialize};

use super::pricing::Tier;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Annual,
            BillingPeriod::Annual => BillingPeriod::Monthly,
        }
    }

    pub fn is_annual(&self) -> bool {
        matches!(self, BillingPeriod::Annual)
    }
}

/// A plan card in the pricing section.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub tier: Tier,
    pub icon: &'static str,
    pub monthly_price: u32,
    /// Per-month rate when billed yearly.
    pub annual_price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    pub fn monthly_rate(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Annual => self.annual_price,
        }
    }

    pub fn billed_annually_total(&self) -> u32 {
        self.annual_price * 12
    }

    pub fn cta_label(&self) -> &'static str {
        match self.tier {
            Tier::Enterprise => "Contact Sales",
            _ => "Start Free Trial",
        }
    }
}

pub const ANNUAL_DISCOUNT_LABEL: &str = "Save 20%";

pub const PLANS: [Plan; 3] = [
    Plan {
        tier: Tier::Starter,
        icon: "⚡",
        monthly_price: 29,
        annual_price: 25,
        description: "Perfect for small businesses getting started with AI marketing",
        features: &[
            "AI Content Generation (50 pieces/month)",
            "Basic Analytics Dashboard",
            "Email Campaign Automation",
            "Social Media Scheduling",
            "Template Library Access",
            "Email Support",
        ],
        limitations: &[
            "Advanced AI Features",
            "Custom Integrations",
            "Priority Support",
        ],
        popular: false,
    },
    Plan {
        tier: Tier::Professional,
        icon: "👑",
        monthly_price: 79,
        annual_price: 65,
        description: "Ideal for growing businesses that need advanced AI capabilities",
        features: &[
            "Everything in Starter",
            "AI Content Generation (500 pieces/month)",
            "Advanced Analytics & Insights",
            "A/B Testing Automation",
            "Custom AI Model Training",
            "Multi-channel Campaigns",
            "API Access",
            "Priority Support",
        ],
        limitations: &["White-label Options", "Dedicated Account Manager"],
        popular: true,
    },
    Plan {
        tier: Tier::Enterprise,
        icon: "🚀",
        monthly_price: 199,
        annual_price: 165,
        description: "For large organizations requiring maximum AI power and customization",
        features: &[
            "Everything in Professional",
            "Unlimited AI Content Generation",
            "Custom AI Model Development",
            "Advanced Integrations (CRM, ERP)",
            "White-label Solutions",
            "Dedicated Account Manager",
            "Custom Training & Onboarding",
            "24/7 Phone Support",
            "SLA Guarantee",
        ],
        limitations: &[],
        popular: false,
    },
];

pub fn plan_for_tier(tier: Tier) -> &'static Plan {
    match tier {
        Tier::Starter => &PLANS[0],
        Tier::Professional => &PLANS[1],
        Tier::Enterprise => &PLANS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_tier_in_order() {
        let tiers: Vec<_> = PLANS.iter().map(|plan| plan.tier).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());
        for tier in Tier::ALL {
            assert_eq!(plan_for_tier(tier).tier, tier);
        }
    }

    #[test]
    fn annual_billing_is_cheaper_per_month() {
        for plan in &PLANS {
            assert!(plan.monthly_rate(BillingPeriod::Annual) < plan.monthly_rate(BillingPeriod::Monthly));
        }
        let pro = plan_for_tier(Tier::Professional);
        assert_eq!(pro.monthly_rate(BillingPeriod::Monthly), 79);
        assert_eq!(pro.monthly_rate(BillingPeriod::Annual), 65);
        assert_eq!(pro.billed_annually_total(), 780);
    }

    #[test]
    fn monthly_prices_match_tier_thresholds() {
        assert_eq!(plan_for_tier(Tier::Starter).monthly_price, 29);
        assert_eq!(plan_for_tier(Tier::Enterprise).monthly_price, 199);
    }

    #[test]
    fn enterprise_routes_to_sales() {
        assert_eq!(plan_for_tier(Tier::Enterprise).cta_label(), "Contact Sales");
        assert_eq!(plan_for_tier(Tier::Starter).cta_label(), "Start Free Trial");
    }

    #[test]
    fn only_professional_is_popular() {
        let popular: Vec<_> = PLANS.iter().filter(|plan| plan.popular).map(|plan| plan.tier).collect();
        assert_eq!(popular, vec![Tier::Professional]);
    }

    #[test]
    fn billing_toggle_flips() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
        assert!(BillingPeriod::Monthly.toggle().is_annual());
        assert_eq!(BillingPeriod::Annual.toggle(), BillingPeriod::Monthly);
    }
}
