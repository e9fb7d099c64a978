use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod config;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Whole-dollar amount with thousands separators, e.g. `$1,221`.
pub fn format_dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_prefix() {
        let first = generate_id("toast");
        let second = generate_id("toast");
        assert_ne!(first, second);
        assert!(first.starts_with("toast-"));
    }

    #[test]
    fn dollars_are_grouped() {
        assert_eq!(format_dollars(29), "$29");
        assert_eq!(format_dollars(1221), "$1,221");
        assert_eq!(format_dollars(1_234_567), "$1,234,567");
        assert_eq!(format_dollars(0), "$0");
    }
}
