#![allow(dead_code)]

//! Explicit state holders for every interactive control on the page.
//!
//! Each holder owns its own invariants; the pricing estimator never reads any
//! of this directly and is called with a fresh [`PricingInput`] instead.

use super::{
    content::{FAQS, TESTIMONIALS},
    plans::BillingPeriod,
    pricing::{estimate, PricingInput, PricingResult},
};

/// Scroll offset (px) past which the navigation bar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub calculator: CalculatorState,
    pub billing: BillingPeriod,
    pub testimonials: CarouselState,
    pub faq: AccordionState,
    pub demo: DemoState,
    pub nav: NavState,
    pub contact: ContactForm,
    pub submission: SubmissionStatus,
}

impl LandingState {
    pub fn new() -> Self {
        Self {
            testimonials: CarouselState::new(TESTIMONIALS.len()),
            faq: AccordionState::new(FAQS.len()),
            ..Self::default()
        }
    }
}

/// Slider positions for the pricing calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalculatorState {
    input: PricingInput,
}

impl CalculatorState {
    pub fn set_team_size(&mut self, raw: i64) {
        self.input = PricingInput::clamped(
            raw,
            self.input.monthly_campaigns().into(),
            self.input.monthly_content_pieces().into(),
        );
    }

    pub fn set_campaigns(&mut self, raw: i64) {
        self.input = PricingInput::clamped(
            self.input.team_size().into(),
            raw,
            self.input.monthly_content_pieces().into(),
        );
    }

    pub fn set_content_pieces(&mut self, raw: i64) {
        self.input = PricingInput::clamped(
            self.input.team_size().into(),
            self.input.monthly_campaigns().into(),
            raw,
        );
    }

    pub fn input(&self) -> PricingInput {
        self.input
    }

    pub fn estimate(&self) -> PricingResult {
        estimate(&self.input)
    }
}

/// Index into a fixed-length carousel. Navigation wraps in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    /// Autoplay tick.
    pub fn advance(&mut self) {
        self.next();
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Single-open accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
    len: usize,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoState {
    pub playing: bool,
}

impl DemoState {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > NAV_SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Company => "Company",
            ContactField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Company)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Company,
            ContactField::Message,
        ]
        .into_iter()
        .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::Tier;

    #[test]
    fn calculator_starts_at_free_thresholds() {
        let calculator = CalculatorState::default();
        let result = calculator.estimate();
        assert_eq!(result.price, 29);
        assert_eq!(result.recommended_tier, Tier::Starter);
    }

    #[test]
    fn calculator_setters_clamp_raw_slider_values() {
        let mut calculator = CalculatorState::default();
        calculator.set_team_size(80);
        calculator.set_campaigns(-3);
        calculator.set_content_pieces(1234);

        let input = calculator.input();
        assert_eq!(input.team_size(), 50);
        assert_eq!(input.monthly_campaigns(), 1);
        assert_eq!(input.monthly_content_pieces(), 1000);
    }

    #[test]
    fn calculator_setters_keep_other_sliders() {
        let mut calculator = CalculatorState::default();
        calculator.set_team_size(6);
        assert_eq!(calculator.input(), PricingInput::new(6, 10, 100).unwrap());
        assert_eq!(calculator.estimate().price, 44);
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let mut carousel = CarouselState::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.advance();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn carousel_ignores_out_of_range_jumps() {
        let mut carousel = CarouselState::new(5);
        carousel.go_to(3);
        assert_eq!(carousel.index(), 3);
        carousel.go_to(5);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = CarouselState::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn accordion_keeps_one_item_open() {
        let mut faq = AccordionState::new(4);
        faq.toggle(1);
        assert!(faq.is_open(1));
        faq.toggle(2);
        assert!(faq.is_open(2));
        assert!(!faq.is_open(1));
        faq.toggle(2);
        assert_eq!(faq.open_item(), None);
        faq.toggle(9);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn nav_compacts_past_threshold() {
        let mut nav = NavState::default();
        nav.on_scroll(50.0);
        assert!(!nav.scrolled);
        nav.on_scroll(51.0);
        assert!(nav.scrolled);
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn contact_form_reports_missing_required_fields() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.missing_fields(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );

        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "   ");
        assert_eq!(form.missing_fields(), vec![ContactField::Message]);

        form.set(ContactField::Message, "Hello");
        assert!(form.is_complete());

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn landing_state_sizes_widgets_from_content() {
        let state = LandingState::new();
        assert_eq!(state.testimonials.len(), TESTIMONIALS.len());
        assert_eq!(state.billing, BillingPeriod::Monthly);
        assert!(!state.submission.is_submitting());
    }
}
