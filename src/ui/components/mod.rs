pub mod range_slider;
pub mod section_heading;
pub mod stat_card;
pub mod tier_badge;
pub mod toast;
