//! Fixed-point `10000^-x` lookup table for the recharge-rate target.
//!
//! All computation uses integer arithmetic only. The curve is evaluated via
//! a precomputed table with linear interpolation.
//!
//! The table covers `10000^(-k/64)` for `k = 0, 1, ..., 64` (65 entries).
//! Entries at `k = 0, 16, 32, 48, 64` are exact powers of ten, so fullness
//! 0, 1/4, 1/2, 3/4 and 1 map exactly. In between, linear interpolation
//! overestimates the convex curve by at most ~0.26%.

/// Precision of table values: `1.0 == POWER_PRECISION`.
pub const POWER_PRECISION: u64 = 1_000_000_000_000;

/// Number of table intervals over the input range `[0, 1]`.
const TABLE_STEPS: u64 = 64;

/// Resolution of the interpolation fraction inside one table interval.
const STEP_SCALE: u64 = 1_000_000_000;

/// Precomputed `10000^(-k/64) * POWER_PRECISION`, rounded to nearest integer.
const DECAY_TABLE: [u64; 65] = [
    1_000_000_000_000, // 10000^(-0/64)
    865_964_323_360,   // 10000^(-1/64)
    749_894_209_332,   // 10000^(-2/64)
    649_381_631_576,   // 10000^(-3/64)
    562_341_325_190,   // 10000^(-4/64)
    486_967_525_166,   // 10000^(-5/64)
    421_696_503_429,   // 10000^(-6/64)
    365_174_127_255,   // 10000^(-7/64)
    316_227_766_017,   // 10000^(-8/64)
    273_841_963_426,   // 10000^(-9/64)
    237_137_370_566,   // 10000^(-10/64)
    205_352_502_646,   // 10000^(-11/64)
    177_827_941_004,   // 10000^(-12/64)
    153_992_652_606,   // 10000^(-13/64)
    133_352_143_216,   // 10000^(-14/64)
    115_478_198_469,   // 10000^(-15/64)
    100_000_000_000,   // 10000^(-16/64)
    86_596_432_336,    // 10000^(-17/64)
    74_989_420_933,    // 10000^(-18/64)
    64_938_163_158,    // 10000^(-19/64)
    56_234_132_519,    // 10000^(-20/64)
    48_696_752_517,    // 10000^(-21/64)
    42_169_650_343,    // 10000^(-22/64)
    36_517_412_725,    // 10000^(-23/64)
    31_622_776_602,    // 10000^(-24/64)
    27_384_196_343,    // 10000^(-25/64)
    23_713_737_057,    // 10000^(-26/64)
    20_535_250_265,    // 10000^(-27/64)
    17_782_794_100,    // 10000^(-28/64)
    15_399_265_261,    // 10000^(-29/64)
    13_335_214_322,    // 10000^(-30/64)
    11_547_819_847,    // 10000^(-31/64)
    10_000_000_000,    // 10000^(-32/64)
    8_659_643_234,     // 10000^(-33/64)
    7_498_942_093,     // 10000^(-34/64)
    6_493_816_316,     // 10000^(-35/64)
    5_623_413_252,     // 10000^(-36/64)
    4_869_675_252,     // 10000^(-37/64)
    4_216_965_034,     // 10000^(-38/64)
    3_651_741_273,     // 10000^(-39/64)
    3_162_277_660,     // 10000^(-40/64)
    2_738_419_634,     // 10000^(-41/64)
    2_371_373_706,     // 10000^(-42/64)
    2_053_525_026,     // 10000^(-43/64)
    1_778_279_410,     // 10000^(-44/64)
    1_539_926_526,     // 10000^(-45/64)
    1_333_521_432,     // 10000^(-46/64)
    1_154_781_985,     // 10000^(-47/64)
    1_000_000_000,     // 10000^(-48/64)
    865_964_323,       // 10000^(-49/64)
    749_894_209,       // 10000^(-50/64)
    649_381_632,       // 10000^(-51/64)
    562_341_325,       // 10000^(-52/64)
    486_967_525,       // 10000^(-53/64)
    421_696_503,       // 10000^(-54/64)
    365_174_127,       // 10000^(-55/64)
    316_227_766,       // 10000^(-56/64)
    273_841_963,       // 10000^(-57/64)
    237_137_371,       // 10000^(-58/64)
    205_352_503,       // 10000^(-59/64)
    177_827_941,       // 10000^(-60/64)
    153_992_653,       // 10000^(-61/64)
    133_352_143,       // 10000^(-62/64)
    115_478_198,       // 10000^(-63/64)
    100_000_000,       // 10000^(-64/64)
];

/// Compute `10000^(-numerator/denominator) * POWER_PRECISION`.
///
/// The exponent is a fullness ratio. Ratios at or above 1, and a zero
/// denominator, saturate at the table minimum (`10000^-1`).
///
/// Returns a value in `[DECAY_TABLE[64], POWER_PRECISION]`.
pub fn decay_factor(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 || numerator >= denominator {
        return DECAY_TABLE[DECAY_TABLE.len() - 1];
    }

    // position = ratio * TABLE_STEPS * STEP_SCALE; numerator < denominator keeps
    // index below TABLE_STEPS. Max product ≈ 1.2e30, fits u128.
    let scale = STEP_SCALE as u128;
    let position = numerator as u128 * (TABLE_STEPS as u128 * scale) / denominator as u128;
    let index = (position / scale) as usize;
    let frac = position % scale;

    let hi = DECAY_TABLE[index];
    let lo = DECAY_TABLE[index + 1];
    let diff = hi - lo;

    // Linear interpolation on a decreasing table: hi - diff * frac / STEP_SCALE
    hi - (diff as u128 * frac / scale) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_is_one() {
        assert_eq!(decay_factor(0, 4_200_000), POWER_PRECISION);
    }

    #[test]
    fn quarter_full_is_one_tenth() {
        assert_eq!(decay_factor(1_050_000, 4_200_000), POWER_PRECISION / 10);
    }

    #[test]
    fn half_full_is_one_hundredth() {
        assert_eq!(decay_factor(2_100_000, 4_200_000), POWER_PRECISION / 100);
    }

    #[test]
    fn three_quarters_full_is_one_thousandth() {
        assert_eq!(decay_factor(3_150_000, 4_200_000), POWER_PRECISION / 1000);
    }

    #[test]
    fn full_is_one_ten_thousandth() {
        assert_eq!(decay_factor(4_200_000, 4_200_000), POWER_PRECISION / 10_000);
    }

    #[test]
    fn overfull_saturates() {
        assert_eq!(decay_factor(u64::MAX, 4_200_000), POWER_PRECISION / 10_000);
    }

    #[test]
    fn zero_denominator_saturates() {
        assert_eq!(decay_factor(0, 0), POWER_PRECISION / 10_000);
    }

    #[test]
    fn table_strictly_decreasing() {
        for i in 1..DECAY_TABLE.len() {
            assert!(
                DECAY_TABLE[i] < DECAY_TABLE[i - 1],
                "table not decreasing at index {i}"
            );
        }
    }

    #[test]
    fn all_table_entries_exact() {
        for (k, &expected) in DECAY_TABLE.iter().enumerate() {
            assert_eq!(decay_factor(k as u64, TABLE_STEPS), expected, "mismatch at k={k}");
        }
    }

    #[test]
    fn interpolation_midpoint() {
        // Halfway between k=0 and k=1.
        let val = decay_factor(1, 2 * TABLE_STEPS);
        let expected = DECAY_TABLE[0] - (DECAY_TABLE[0] - DECAY_TABLE[1]) / 2;
        assert_eq!(val, expected);
    }

    #[test]
    fn close_to_real_curve() {
        // 10000^-0.1 = 0.39810717...; interpolation error below 0.3%.
        let val = decay_factor(1, 10) as f64 / POWER_PRECISION as f64;
        let real = 10_000f64.powf(-0.1);
        assert!((val - real).abs() / real < 0.003, "{val} vs {real}");
    }

    #[test]
    fn tiny_fullness_below_one() {
        // One plasma of consumption already lowers the factor.
        assert!(decay_factor(1, 4_200_000) < POWER_PRECISION);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn factor_always_in_bounds(n in any::<u64>(), d in any::<u64>()) {
            let f = decay_factor(n, d);
            prop_assert!(f >= DECAY_TABLE[64]);
            prop_assert!(f <= POWER_PRECISION);
        }

        #[test]
        fn factor_monotonic_in_fullness(
            a in 0u64..5_000_000u64,
            b in 0u64..5_000_000u64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(decay_factor(lo, 4_200_000) >= decay_factor(hi, 4_200_000));
        }

        #[test]
        fn factor_tracks_real_curve(n in 0u64..=4_200_000u64) {
            let val = decay_factor(n, 4_200_000) as f64 / POWER_PRECISION as f64;
            let real = 10_000f64.powf(-(n as f64) / 4_200_000.0);
            prop_assert!(val >= real * 0.999_999);
            prop_assert!((val - real) / real < 0.003);
        }
    }
}
