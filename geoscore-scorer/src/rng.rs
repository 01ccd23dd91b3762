//! Reproducible pseudo-random streams seeded from coordinates.
//!
//! A stream is identified by a location and a purpose tag. The seed string
//! `"{lat:.6}_{lng:.6}_{tag}"` is folded into a 32-bit polynomial hash that
//! initialises a linear congruential generator. The same location and tag
//! always replay the same sequence; different tags give unrelated streams.
//!
//! The generator only produces cosmetic jitter. It is not suitable for
//! anything security-sensitive.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Seeded linear congruential generator yielding values in `0.0..1.0`.
///
/// # Examples
/// ```
/// use geoscore_scorer::StableRng;
///
/// let mut first = StableRng::new(40.0, -74.0, "traffic");
/// let mut second = StableRng::new(40.0, -74.0, "traffic");
/// assert_eq!(first.next_f64(), second.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableRng {
    state: u32,
}

impl StableRng {
    /// Seed a stream for the given location and purpose tag.
    #[must_use]
    pub fn new(lat: f64, lng: f64, tag: &str) -> Self {
        let seed = format!("{}_{}_{tag}", fixed6(lat), fixed6(lng));
        Self {
            state: seed_hash(&seed),
        }
    }

    /// Advance the generator and return the next value in `0.0..1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "state is scaled into the unit interval"
    )]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }

    /// Next value mapped to `-amplitude / 2 .. amplitude / 2`.
    #[expect(clippy::float_arithmetic, reason = "jitter is centred on zero")]
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() - 0.5) * amplitude
    }
}

/// Polynomial string hash (`h = h * 31 + unit`) over UTF-16 code units with
/// 32-bit signed wrap-around, returned as its absolute value.
pub(crate) fn seed_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Format with six decimal places. Ties round away from zero and negative
/// zero prints unsigned.
#[expect(
    clippy::float_arithmetic,
    reason = "tie handling nudges the magnitude before formatting"
)]
pub(crate) fn fixed6(value: f64) -> String {
    let magnitude = value.abs();
    let digits = if is_sixth_place_tie(magnitude) {
        format!("{:.6}", magnitude + 5e-7)
    } else {
        format!("{magnitude:.6}")
    };
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Whether the exact decimal expansion of `magnitude` ends in a `5` at the
/// seventh fractional place.
fn is_sixth_place_tie(magnitude: f64) -> bool {
    // Exact ties are multiples of 2^-7, so 80 digits always expose them.
    let exact = format!("{magnitude:.80}");
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let mut digits = fraction.chars();
    let seventh = digits.nth(6);
    seventh == Some('5') && digits.all(|digit| digit == '0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(40.0, "40.000000")]
    #[case(-74.0, "-74.000000")]
    #[case(-0.0, "0.000000")]
    #[case(0.123_456_4, "0.123456")]
    #[case(0.123_456_6, "0.123457")]
    // 1/128 sits exactly halfway between two sixth-place values.
    #[case(0.007_812_5, "0.007813")]
    #[case(-0.007_812_5, "-0.007813")]
    #[case(-0.000_000_1, "-0.000000")]
    fn fixed6_formats_like_seed_strings(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(fixed6(value), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("a", 97)]
    #[case("ab", 97 * 31 + 98)]
    fn seed_hash_matches_polynomial(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(seed_hash(input), expected);
    }

    #[rstest]
    #[case("40.712800_-74.006000_competition", 1_216_858_219)]
    #[case("40.712800_-74.006000_traffic", 114_462_377)]
    // Wraps to -1_703_056_218 as a signed 32-bit value.
    #[case("40.712800_-74.006000_safety", 1_703_056_218)]
    fn seed_hash_wraps_and_takes_magnitude(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(seed_hash(input), expected);
    }

    #[rstest]
    fn first_value_follows_lcg_step() {
        // hash("1.000000_1.000000_a") = 656_371_167, stepped once.
        let expected = 2_039_833_010.0 / 4_294_967_296.0;
        let mut rng = StableRng::new(1.0, 1.0, "a");
        assert!((rng.next_f64() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn replays_identical_sequence() {
        let mut first = StableRng::new(1.0, 1.0, "a");
        let mut second = StableRng::new(1.0, 1.0, "a");
        let a: Vec<f64> = (0..16).map(|_| first.next_f64()).collect();
        let b: Vec<f64> = (0..16).map(|_| second.next_f64()).collect();
        assert_eq!(a, b);
    }

    #[rstest]
    fn tags_give_independent_streams() {
        let mut first = StableRng::new(1.0, 1.0, "a");
        let mut second = StableRng::new(1.0, 1.0, "b");
        let a: Vec<f64> = (0..8).map(|_| first.next_f64()).collect();
        let b: Vec<f64> = (0..8).map(|_| second.next_f64()).collect();
        assert_ne!(a, b);
    }

    #[rstest]
    fn values_stay_in_unit_interval() {
        let mut rng = StableRng::new(-33.8688, 151.2093, "hourly");
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value), "{value} escaped [0, 1)");
        }
    }

    #[rstest]
    fn jitter_is_bounded_by_half_amplitude() {
        let mut rng = StableRng::new(51.5, -0.12, "safety");
        for _ in 0..1_000 {
            let value = rng.jitter(6.0);
            assert!((-3.0..3.0).contains(&value));
        }
    }
}
