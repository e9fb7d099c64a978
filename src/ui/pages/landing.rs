use dioxus::prelude::*;

use crate::ui::sections::{
    ContactSection, DemoSection, FaqSection, FeaturesSection, HeroSection, PricingCalculator,
    PricingSection, TestimonialsSection,
};

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        HeroSection {}
        FeaturesSection {}
        PricingSection {}
        PricingCalculator {}
        DemoSection {}
        TestimonialsSection {}
        FaqSection {}
        ContactSection {}
    }
}
