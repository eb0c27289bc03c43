/// `part / whole`, or 0 when `whole` is 0.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ratio(part: u32, whole: u32) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    part as f32 / whole as f32
}

/// `part / whole × 100`, or 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: u32, whole: u32) -> f32 {
    ratio(part, whole) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_is_zero() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(percentage(7, 0), 0.0);
    }

    #[test]
    fn test_percentage_values() {
        assert_eq!(percentage(1, 2), 50.0);
        assert_eq!(percentage(3, 3), 100.0);
        assert!((percentage(1, 3) - 33.333).abs() < 1e-3);
    }
}
