pub mod calculator;
pub mod contact;
pub mod demo;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod pricing;
pub mod testimonials;

pub use calculator::PricingCalculator;
pub use contact::ContactSection;
pub use demo::DemoSection;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navigation::Navigation;
pub use pricing::PricingSection;
pub use testimonials::TestimonialsSection;
