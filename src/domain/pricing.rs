#![allow(dead_code)]

//! Pricing estimator behind the interactive calculator.
//!
//! Everything here is a pure function of a [`PricingInput`]; the UI rebuilds
//! the input on every slider change and calls [`estimate`] again.

use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TEAM_SIZE_RANGE: RangeInclusive<u32> = 1..=50;
pub const CAMPAIGNS_RANGE: RangeInclusive<u32> = 1..=100;
pub const CONTENT_PIECES_RANGE: RangeInclusive<u32> = 10..=1000;
pub const CONTENT_PIECES_STEP: u32 = 10;

const BASE_PRICE: u32 = 29;
const PRICE_CEILING: u32 = 199;

const FREE_TEAM_MEMBERS: u32 = 5;
const TEAM_MEMBER_SURCHARGE: u32 = 15;
const FREE_CAMPAIGNS: u32 = 10;
const CAMPAIGN_SURCHARGE: u32 = 8;
const FREE_CONTENT_PIECES: u32 = 100;
const CONTENT_BLOCK: u32 = 50;
const CONTENT_BLOCK_SURCHARGE: u32 = 20;

const STARTER_MAX_PRICE: u32 = 29;
const PROFESSIONAL_MAX_PRICE: u32 = 79;

/// Baseline cost model for doing the same work without the suite.
const TRADITIONAL_PER_MEMBER: u32 = 150;
const TRADITIONAL_PER_CAMPAIGN: u32 = 50;
const TRADITIONAL_CONTENT_BATCH: u32 = 10;
const TRADITIONAL_PER_CONTENT_BATCH: u32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Starter,
    Professional,
    Enterprise,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Professional, Tier::Enterprise];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Professional => "Professional",
            Tier::Enterprise => "Enterprise",
        }
    }

    /// Call-to-action label for the calculator's result card.
    pub fn trial_cta(&self) -> String {
        format!("Start {} Plan Free Trial", self.name())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PricingField {
    TeamSize,
    MonthlyCampaigns,
    MonthlyContentPieces,
}

impl fmt::Display for PricingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PricingField::TeamSize => "team size",
            PricingField::MonthlyCampaigns => "campaigns per month",
            PricingField::MonthlyContentPieces => "content pieces per month",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: PricingField,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{field} must be a multiple of {step}, got {value}")]
    OffStep {
        field: PricingField,
        value: u32,
        step: u32,
    },
}

/// Validated calculator inputs. Only constructible inside the documented domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPricingInput")]
pub struct PricingInput {
    team_size: u32,
    monthly_campaigns: u32,
    monthly_content_pieces: u32,
}

impl PricingInput {
    /// Rejects any value outside its domain, including off-step content counts.
    pub fn new(
        team_size: u32,
        monthly_campaigns: u32,
        monthly_content_pieces: u32,
    ) -> Result<Self, PricingError> {
        check_range(PricingField::TeamSize, team_size, &TEAM_SIZE_RANGE)?;
        check_range(
            PricingField::MonthlyCampaigns,
            monthly_campaigns,
            &CAMPAIGNS_RANGE,
        )?;
        check_range(
            PricingField::MonthlyContentPieces,
            monthly_content_pieces,
            &CONTENT_PIECES_RANGE,
        )?;
        if monthly_content_pieces % CONTENT_PIECES_STEP != 0 {
            return Err(PricingError::OffStep {
                field: PricingField::MonthlyContentPieces,
                value: monthly_content_pieces,
                step: CONTENT_PIECES_STEP,
            });
        }

        Ok(Self {
            team_size,
            monthly_campaigns,
            monthly_content_pieces,
        })
    }

    /// Forces every value into its domain. Content pieces snap to the nearest step.
    pub fn clamped(team_size: i64, monthly_campaigns: i64, monthly_content_pieces: i64) -> Self {
        let content = clamp_to(monthly_content_pieces, &CONTENT_PIECES_RANGE);
        let snapped = (content + CONTENT_PIECES_STEP / 2) / CONTENT_PIECES_STEP * CONTENT_PIECES_STEP;

        Self {
            team_size: clamp_to(team_size, &TEAM_SIZE_RANGE),
            monthly_campaigns: clamp_to(monthly_campaigns, &CAMPAIGNS_RANGE),
            monthly_content_pieces: snapped.min(*CONTENT_PIECES_RANGE.end()),
        }
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    pub fn monthly_campaigns(&self) -> u32 {
        self.monthly_campaigns
    }

    pub fn monthly_content_pieces(&self) -> u32 {
        self.monthly_content_pieces
    }
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            team_size: FREE_TEAM_MEMBERS,
            monthly_campaigns: FREE_CAMPAIGNS,
            monthly_content_pieces: FREE_CONTENT_PIECES,
        }
    }
}

/// Wire shape of [`PricingInput`]; deserialization goes through [`PricingInput::new`].
#[derive(Deserialize)]
struct RawPricingInput {
    team_size: u32,
    monthly_campaigns: u32,
    monthly_content_pieces: u32,
}

impl TryFrom<RawPricingInput> for PricingInput {
    type Error = PricingError;

    fn try_from(raw: RawPricingInput) -> Result<Self, Self::Error> {
        Self::new(
            raw.team_size,
            raw.monthly_campaigns,
            raw.monthly_content_pieces,
        )
    }
}

fn check_range(
    field: PricingField,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), PricingError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PricingError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn clamp_to(value: i64, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub price: u32,
    pub recommended_tier: Tier,
    pub traditional_cost: u32,
    pub monthly_savings: u32,
    pub cost_reduction_percent: u32,
}

pub fn estimate(input: &PricingInput) -> PricingResult {
    let price = price(input);
    let traditional_cost = traditional_cost(input);
    let monthly_savings = savings(price, traditional_cost);

    PricingResult {
        price,
        recommended_tier: recommended_tier(price),
        traditional_cost,
        monthly_savings,
        cost_reduction_percent: cost_reduction_percent(monthly_savings, price),
    }
}

pub fn price(input: &PricingInput) -> u32 {
    let team = input.team_size.saturating_sub(FREE_TEAM_MEMBERS) * TEAM_MEMBER_SURCHARGE;
    let campaign = input.monthly_campaigns.saturating_sub(FREE_CAMPAIGNS) * CAMPAIGN_SURCHARGE;
    let content = input
        .monthly_content_pieces
        .saturating_sub(FREE_CONTENT_PIECES)
        .div_ceil(CONTENT_BLOCK)
        * CONTENT_BLOCK_SURCHARGE;

    (BASE_PRICE + team + campaign + content).min(PRICE_CEILING)
}

pub fn recommended_tier(price: u32) -> Tier {
    if price <= STARTER_MAX_PRICE {
        Tier::Starter
    } else if price <= PROFESSIONAL_MAX_PRICE {
        Tier::Professional
    } else {
        Tier::Enterprise
    }
}

pub fn traditional_cost(input: &PricingInput) -> u32 {
    input.team_size * TRADITIONAL_PER_MEMBER
        + input.monthly_campaigns * TRADITIONAL_PER_CAMPAIGN
        + input.monthly_content_pieces.div_ceil(TRADITIONAL_CONTENT_BATCH)
            * TRADITIONAL_PER_CONTENT_BATCH
}

pub fn savings(price: u32, traditional_cost: u32) -> u32 {
    traditional_cost.saturating_sub(price)
}

/// `round(savings / (savings + price) * 100)`, rounding halves up. Zero when both are zero.
pub fn cost_reduction_percent(savings: u32, price: u32) -> u32 {
    let total = u64::from(savings) + u64::from(price);
    if total == 0 {
        return 0;
    }
    ((200 * u64::from(savings) + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_of(team: u32, campaigns: u32, content: u32) -> u32 {
        price(&PricingInput::new(team, campaigns, content).unwrap())
    }

    fn all_inputs() -> impl Iterator<Item = (u32, u32, u32)> {
        TEAM_SIZE_RANGE.flat_map(|team| {
            CAMPAIGNS_RANGE.flat_map(move |campaigns| {
                CONTENT_PIECES_RANGE
                    .step_by(CONTENT_PIECES_STEP as usize)
                    .map(move |content| (team, campaigns, content))
            })
        })
    }

    #[test]
    fn free_thresholds_cost_the_base_price() {
        assert_eq!(price_of(5, 10, 100), 29);
        assert_eq!(price_of(1, 1, 10), 29);
        assert_eq!(recommended_tier(price_of(5, 10, 100)), Tier::Starter);
    }

    #[test]
    fn one_extra_member_moves_to_professional() {
        assert_eq!(price_of(6, 10, 100), 44);
        assert_eq!(recommended_tier(44), Tier::Professional);
    }

    #[test]
    fn content_surcharge_rounds_up_per_block() {
        assert_eq!(price_of(5, 10, 110), 49);
        assert_eq!(price_of(5, 10, 150), 49);
        assert_eq!(price_of(5, 10, 160), 69);
    }

    #[test]
    fn tier_boundaries_belong_to_lower_tier() {
        assert_eq!(price_of(7, 10, 150), 79);
        assert_eq!(recommended_tier(79), Tier::Professional);
        assert_eq!(price_of(6, 12, 150), 80);
        assert_eq!(recommended_tier(80), Tier::Enterprise);
        assert_eq!(recommended_tier(29), Tier::Starter);
        assert_eq!(recommended_tier(30), Tier::Professional);
    }

    #[test]
    fn price_is_capped() {
        assert_eq!(price_of(50, 100, 1000), 199);
        assert_eq!(recommended_tier(199), Tier::Enterprise);
    }

    #[test]
    fn price_stays_within_bounds_for_whole_domain() {
        for (team, campaigns, content) in all_inputs() {
            let value = price_of(team, campaigns, content);
            assert!((29..=199).contains(&value), "{team}/{campaigns}/{content} -> {value}");
        }
    }

    #[test]
    fn price_is_monotonic_in_each_input() {
        for campaigns in [1, 10, 11, 55, 100] {
            for content in [10, 100, 110, 500, 1000] {
                let mut last = 0;
                for team in TEAM_SIZE_RANGE {
                    let value = price_of(team, campaigns, content);
                    assert!(value >= last);
                    last = value;
                }
            }
        }
        for team in [1, 5, 6, 25, 50] {
            for content in [10, 100, 110, 500, 1000] {
                let mut last = 0;
                for campaigns in CAMPAIGNS_RANGE {
                    let value = price_of(team, campaigns, content);
                    assert!(value >= last);
                    last = value;
                }
            }
        }
        for team in [1, 5, 6, 25, 50] {
            for campaigns in [1, 10, 11, 55, 100] {
                let mut last = 0;
                for content in CONTENT_PIECES_RANGE.step_by(CONTENT_PIECES_STEP as usize) {
                    let value = price_of(team, campaigns, content);
                    assert!(value >= last);
                    last = value;
                }
            }
        }
    }

    #[test]
    fn estimate_matches_worked_example() {
        let input = PricingInput::new(5, 10, 100).unwrap();
        let result = estimate(&input);
        assert_eq!(
            result,
            PricingResult {
                price: 29,
                recommended_tier: Tier::Starter,
                traditional_cost: 1500,
                monthly_savings: 1471,
                cost_reduction_percent: 98,
            }
        );
    }

    #[test]
    fn savings_and_percent_stay_in_range() {
        for (team, campaigns, content) in all_inputs() {
            let input = PricingInput::new(team, campaigns, content).unwrap();
            let result = estimate(&input);
            assert!(result.cost_reduction_percent <= 100);
            assert_eq!(
                result.monthly_savings,
                result.traditional_cost.saturating_sub(result.price)
            );
        }
    }

    #[test]
    fn savings_never_negative() {
        assert_eq!(savings(199, 100), 0);
        assert_eq!(savings(29, 1500), 1471);
    }

    #[test]
    fn cost_reduction_guards_zero_denominator() {
        assert_eq!(cost_reduction_percent(0, 0), 0);
        assert_eq!(cost_reduction_percent(0, 29), 0);
        assert_eq!(cost_reduction_percent(10, 0), 100);
    }

    #[test]
    fn cost_reduction_rounds_half_up() {
        // 1 / 8 = 12.5%
        assert_eq!(cost_reduction_percent(1, 7), 13);
        // 1 / 3 = 33.33%
        assert_eq!(cost_reduction_percent(1, 2), 33);
        // 2 / 3 = 66.67%
        assert_eq!(cost_reduction_percent(2, 1), 67);
    }

    #[test]
    fn estimate_is_deterministic() {
        let input = PricingInput::new(17, 42, 370).unwrap();
        assert_eq!(estimate(&input), estimate(&input));
        assert_eq!(
            serde_json::to_string(&estimate(&input)).unwrap(),
            serde_json::to_string(&estimate(&input)).unwrap()
        );
    }

    #[test]
    fn new_rejects_out_of_domain_values() {
        assert_eq!(
            PricingInput::new(0, 10, 100),
            Err(PricingError::OutOfRange {
                field: PricingField::TeamSize,
                value: 0,
                min: 1,
                max: 50,
            })
        );
        assert!(matches!(
            PricingInput::new(5, 101, 100),
            Err(PricingError::OutOfRange {
                field: PricingField::MonthlyCampaigns,
                ..
            })
        ));
        assert!(matches!(
            PricingInput::new(5, 10, 1010),
            Err(PricingError::OutOfRange {
                field: PricingField::MonthlyContentPieces,
                ..
            })
        ));
        assert_eq!(
            PricingInput::new(5, 10, 105),
            Err(PricingError::OffStep {
                field: PricingField::MonthlyContentPieces,
                value: 105,
                step: 10,
            })
        );
    }

    #[test]
    fn traditional_cost_counts_content_in_batches_of_ten() {
        let input = PricingInput::new(5, 10, 100).unwrap();
        assert_eq!(traditional_cost(&input), 5 * 150 + 10 * 50 + 10 * 25);
        let input = PricingInput::new(50, 100, 1000).unwrap();
        assert_eq!(traditional_cost(&input), 7500 + 5000 + 2500);
    }

    #[test]
    fn deserialization_validates_the_domain() {
        let ok: PricingInput = serde_json::from_str(
            r#"{"team_size":6,"monthly_campaigns":12,"monthly_content_pieces":150}"#,
        )
        .unwrap();
        assert_eq!(ok, PricingInput::new(6, 12, 150).unwrap());

        let out_of_range = serde_json::from_str::<PricingInput>(
            r#"{"team_size":0,"monthly_campaigns":5000,"monthly_content_pieces":7}"#,
        );
        assert!(out_of_range.is_err());

        let off_step = serde_json::from_str::<PricingInput>(
            r#"{"team_size":5,"monthly_campaigns":10,"monthly_content_pieces":105}"#,
        )
        .unwrap_err();
        assert!(off_step.to_string().contains("multiple of 10"));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = PricingInput::new(51, 10, 100).unwrap_err();
        assert_eq!(err.to_string(), "team size must be between 1 and 50, got 51");
    }

    #[test]
    fn clamped_forces_values_into_domain() {
        let low = PricingInput::clamped(-4, 0, -100);
        assert_eq!(low, PricingInput::new(1, 1, 10).unwrap());

        let high = PricingInput::clamped(900, 900, 9_999);
        assert_eq!(high, PricingInput::new(50, 100, 1000).unwrap());

        let snapped = PricingInput::clamped(5, 10, 104);
        assert_eq!(snapped.monthly_content_pieces(), 100);
        let snapped = PricingInput::clamped(5, 10, 105);
        assert_eq!(snapped.monthly_content_pieces(), 110);
    }

    #[test]
    fn default_input_sits_on_free_thresholds() {
        assert_eq!(PricingInput::default(), PricingInput::new(5, 10, 100).unwrap());
    }

    #[test]
    fn trial_cta_uses_tier_name() {
        assert_eq!(Tier::Professional.trial_cta(), "Start Professional Plan Free Trial");
    }
}
