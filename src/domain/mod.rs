//! Pricing logic, plan catalog and page state live here.

pub mod app_state;
pub mod content;
pub mod plans;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::{
    AccordionState, CalculatorState, CarouselState, ContactField, ContactForm, DemoState,
    LandingState, NavState, SubmissionStatus,
};
#[allow(unused_imports)]
pub use plans::{plan_for_tier, BillingPeriod, Plan, PLANS};
#[allow(unused_imports)]
pub use pricing::{
    estimate, PricingError, PricingField, PricingInput, PricingResult, Tier,
};
