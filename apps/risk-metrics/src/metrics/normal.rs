//! Normal distribution helpers.
//!
//! The quantile function starts from Acklam's rational approximation
//! (relative error about 1.15e-9) and applies one Halley step against the
//! exact CDF, which brings it to near machine precision.

use std::f64::consts::{PI, SQRT_2};

// Coefficients for the central region.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

// Coefficients for the tails.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

const P_LOW: f64 = 0.024_25;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Standard normal CDF (cumulative distribution function).
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Standard normal quantile (percent-point function).
///
/// Returns `-inf` at `p = 0`, `+inf` at `p = 1` and NaN outside `[0, 1]`.
pub fn norm_ppf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let x = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_ratio(q)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_ratio(q)
    };

    // Halley refinement
    let e = norm_cdf(x) - p;
    let u = e * (2.0 * PI).sqrt() * (x * x / 2.0).exp();
    x - u / (1.0 + x * u / 2.0)
}

fn tail_ratio(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

/// Quantile of `Normal(mean, std_dev)` at probability `p`.
///
/// A zero standard deviation is a point mass at `mean`.
pub fn normal_quantile(p: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return mean;
    }
    mean + std_dev * norm_ppf(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.5, 0.0 ; "median")]
    #[test_case(0.01, -2.326_347_874_040_841 ; "one percent")]
    #[test_case(0.05, -1.644_853_626_951_472 ; "five percent")]
    #[test_case(0.975, 1.959_963_984_540_054 ; "two sided ninety five")]
    #[test_case(0.001, -3.090_232_306_167_813 ; "lower tail")]
    #[test_case(0.999_9, 3.719_016_485_455_68 ; "upper tail")]
    fn test_norm_ppf_known_values(p: f64, expected: f64) {
        assert!(
            (norm_ppf(p) - expected).abs() < 1e-9,
            "ppf({p}) = {}, expected {expected}",
            norm_ppf(p)
        );
    }

    #[test]
    fn test_norm_ppf_bounds() {
        assert_eq!(norm_ppf(0.0), f64::NEG_INFINITY);
        assert_eq!(norm_ppf(1.0), f64::INFINITY);
        assert!(norm_ppf(-0.1).is_nan());
        assert!(norm_ppf(1.1).is_nan());
        assert!(norm_ppf(f64::NAN).is_nan());
    }

    #[test]
    fn test_norm_ppf_symmetry() {
        for p in [0.001, 0.01, 0.1, 0.3, 0.45] {
            assert!((norm_ppf(p) + norm_ppf(1.0 - p)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cdf_inverts_ppf() {
        for p in [1e-6, 0.02, 0.024_25, 0.2, 0.5, 0.8, 0.975_75, 0.99] {
            assert!((norm_cdf(norm_ppf(p)) - p).abs() < 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_known_values() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-12);
    }

    #[test]
    fn test_normal_quantile_scales() {
        let q = normal_quantile(0.01, 0.0, 1.0);
        assert!((q + 2.326).abs() < 1e-3);

        let q = normal_quantile(0.01, 5.0, 2.0);
        assert!((q - (5.0 - 2.0 * 2.326_347_874_040_841)).abs() < 1e-9);
    }

    #[test]
    fn test_normal_quantile_point_mass() {
        assert_eq!(normal_quantile(0.01, 4.5, 0.0), 4.5);
    }
}
