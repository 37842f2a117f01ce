//! Range-mapping helpers for randomize actions.
//!
//! Randomize actions draw `[0, 1)` values from [`Pcg32::number`] and shape
//! them onto parameter ranges with these maps. Keeping the maps pure
//! functions of the draw keeps the whole randomize path deterministic.
//!
//! [`Pcg32::number`]: crate::Pcg32::number

use core::f64::consts::TAU;

/// Map `value` in `[0, 1)` linearly onto `[low, high)`.
#[inline]
pub fn uniform_map(value: f64, low: f64, high: f64) -> f64 {
    low + value * (high - low)
}

/// Map `value` in `[0, 1)` onto the integers `low..=high`, uniformly.
///
/// `low` and `high` are expected to be integer-valued.
#[inline]
pub fn uniform_int_map(value: f64, low: f64, high: f64) -> f64 {
    libm::floor(low + value * (high + 1.0 - low))
}

/// Map `value` in `[0, 1)` onto `[low, high)` with log2-domain
/// interpolation.
///
/// Suits frequency-like parameters where equal steps should sound like
/// equal intervals. `low` and `high` must be positive.
#[inline]
pub fn exponential_map(value: f64, low: f64, high: f64) -> f64 {
    let log_l = libm::log2(low);
    let log_h = libm::log2(high);
    libm::exp2(log_l + value * (log_h - log_l))
}

/// Map two independent `[0, 1)` values onto a normal distribution with mean
/// `mu` and standard deviation `sigma`, using the Box-Muller transform.
#[inline]
pub fn normal_map(v1: f64, v2: f64, mu: f64, sigma: f64) -> f64 {
    sigma * libm::sqrt(-2.0 * libm::log(1.0 - v1)) * libm::cos(TAU * v2) + mu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pcg32;

    #[test]
    fn uniform_map_endpoints() {
        assert_eq!(uniform_map(0.0, -3.0, 5.0), -3.0);
        assert_eq!(uniform_map(0.5, -3.0, 5.0), 1.0);
        let near_high = uniform_map(0.999_999, -3.0, 5.0);
        assert!(near_high < 5.0);
    }

    #[test]
    fn uniform_int_map_covers_closed_interval() {
        let mut rng = Pcg32::new(7);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = uniform_int_map(rng.number(), 2.0, 6.0);
            assert!((2.0..=6.0).contains(&v));
            assert_eq!(v, libm::floor(v));
            seen[(v - 2.0) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn exponential_map_endpoints() {
        let low = exponential_map(0.0, 20.0, 20000.0);
        assert!((low - 20.0).abs() < 1e-9);
        let mid = exponential_map(0.5, 100.0, 10000.0);
        assert!((mid - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn normal_map_is_finite_and_centered() {
        let mut rng = Pcg32::new(11);
        let mut sum = 0.0;
        let n = 10_000;
        for _ in 0..n {
            let v = normal_map(rng.number(), rng.number(), 5.0, 2.0);
            assert!(v.is_finite());
            sum += v;
        }
        let mean = sum / n as f64;
        assert!((mean - 5.0).abs() < 0.1, "sample mean {} far from mu", mean);
    }
}
