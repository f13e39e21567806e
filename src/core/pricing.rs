/// Rounds to two decimal places, sending exact halves to the even cent.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Price after applying a percentage discount, rounded to cents.
///
/// `discount` is expected within `0..=100`; callers validate it beforehand.
#[must_use]
pub fn discounted_price(price: f64, discount: i32) -> f64 {
    round_to_cents(price * (f64::from(100 - discount) / 100.0))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(3.14159), 3.14);
        assert_eq!(round_to_cents(10.456), 10.46);
        assert_eq!(round_to_cents(7.0), 7.0);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_discounted_price() {
        assert_eq!(discounted_price(100.0, 10), 90.0);
        assert_eq!(discounted_price(100.0, 20), 80.0);
        assert_eq!(discounted_price(19.99, 15), 16.99);
    }

    #[test]
    fn test_discount_bounds() {
        assert_eq!(discounted_price(42.5, 0), 42.5);
        assert_eq!(discounted_price(42.5, 100), 0.0);
    }
}
