//! Rounding and conversion helpers shared by the scorers.

/// Round to the nearest integer with halves rounded towards positive
/// infinity, so `2.5` becomes `3.0` and `-2.5` becomes `-2.0`.
#[expect(clippy::float_arithmetic, reason = "half-up rounding offsets by 0.5")]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round `value` half-up and clamp it into `0..=100`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped into 0..=100 before the cast"
)]
pub(crate) fn to_score(value: f64) -> u8 {
    round_half_up(value).clamp(0.0, 100.0) as u8
}

/// Round `value` half-up, then raise it to at least `floor`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "series values are small and floored at a positive minimum"
)]
pub(crate) fn to_count(value: f64, floor: u32) -> u32 {
    let rounded = round_half_up(value).clamp(0.0, f64::from(u32::MAX));
    (rounded as u32).max(floor)
}

/// Lossless conversion for the small counts seen in POI lists.
pub(crate) fn count_to_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.5, 3.0)]
    #[case(2.499, 2.0)]
    #[case(-2.5, -2.0)]
    #[case(-2.51, -3.0)]
    fn rounds_halves_up(#[case] value: f64, #[case] expected: f64) {
        assert!((round_half_up(value) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(48.86, 49)]
    #[case(-4.0, 0)]
    #[case(140.0, 100)]
    #[case(94.5, 95)]
    fn scores_are_rounded_and_clamped(#[case] value: f64, #[case] expected: u8) {
        assert_eq!(to_score(value), expected);
    }

    #[rstest]
    #[case(-3.2, 5, 5)]
    #[case(11.5, 5, 12)]
    fn counts_respect_floor(#[case] value: f64, #[case] floor: u32, #[case] expected: u32) {
        assert_eq!(to_count(value, floor), expected);
    }
}
