//! Property tests for the radix-2 FFT

use num_complex::Complex64;
use proptest::prelude::*;
use radix2_fft::{fft_radix2, Direction};
use std::f64::consts::PI;

fn sample() -> impl Strategy<Value = Complex64> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(re, im)| Complex64::new(re, im))
}

/// Sequence with a length of 2^ld_n for ld_n in `0..=max_ld_n`
fn sequence(max_ld_n: u32) -> impl Strategy<Value = Vec<Complex64>> {
    (0..=max_ld_n).prop_flat_map(|ld_n| prop::collection::vec(sample(), 1usize << ld_n))
}

fn max_norm(values: &[Complex64]) -> f64 {
    values.iter().map(|s| s.norm()).fold(0.0, f64::max)
}

proptest! {
    #[test]
    fn length_is_preserved(x in sequence(10), inverse in any::<bool>()) {
        let dir = if inverse { Direction::Inverse } else { Direction::Forward };
        prop_assert_eq!(fft_radix2(&x, dir).unwrap().len(), x.len());
    }

    #[test]
    fn singleton_is_identity(v in sample()) {
        prop_assert_eq!(fft_radix2(&[v], Direction::Forward).unwrap(), vec![v]);
    }

    #[test]
    fn round_trip_restores_input(x in sequence(10)) {
        let spectrum = fft_radix2(&x, Direction::Forward).unwrap();
        let restored = fft_radix2(&spectrum, Direction::Inverse).unwrap();
        let tol = 1e-9 * max_norm(&x).max(1.0);
        for (a, b) in x.iter().zip(restored.iter()) {
            prop_assert!((a - b).norm() <= tol, "{} != {}", a, b);
        }
    }

    #[test]
    fn transform_is_linear(
        (x, y) in (0..=8u32).prop_flat_map(|ld_n| {
            let n = 1usize << ld_n;
            (prop::collection::vec(sample(), n), prop::collection::vec(sample(), n))
        }),
        a in sample(),
        b in sample(),
    ) {
        let mixed: Vec<Complex64> = x.iter().zip(y.iter()).map(|(p, q)| a * p + b * q).collect();
        let lhs = fft_radix2(&mixed, Direction::Forward).unwrap();
        let fx = fft_radix2(&x, Direction::Forward).unwrap();
        let fy = fft_radix2(&y, Direction::Forward).unwrap();
        let rhs: Vec<Complex64> = fx.iter().zip(fy.iter()).map(|(p, q)| a * p + b * q).collect();
        let tol = 1e-9 * max_norm(&rhs).max(1.0);
        for (l, r) in lhs.iter().zip(rhs.iter()) {
            prop_assert!((l - r).norm() <= tol, "{} != {}", l, r);
        }
    }

    #[test]
    fn matches_direct_dft(x in sequence(4)) {
        let n = x.len();
        let result = fft_radix2(&x, Direction::Forward).unwrap();
        let tol = 1e-9 * max_norm(&x).max(1.0) * n as f64;
        for (k, s) in result.iter().enumerate() {
            let expected: Complex64 = x
                .iter()
                .enumerate()
                .map(|(t, v)| {
                    let phi = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
                    v * Complex64::new(phi.cos(), phi.sin())
                })
                .sum();
            prop_assert!((s - expected).norm() <= tol, "k = {}: {} != {}", k, s, expected);
        }
    }

    #[test]
    fn invalid_lengths_are_rejected(len in 0usize..2048) {
        prop_assume!(!len.is_power_of_two());
        let x = vec![Complex64::new(1.0, 0.0); len];
        prop_assert!(fft_radix2(&x, Direction::Forward).is_err());
        prop_assert!(fft_radix2(&x, Direction::Inverse).is_err());
    }
}
