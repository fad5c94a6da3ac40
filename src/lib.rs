//! Radix-2 Fast Fourier Transform
//!
//! This crate computes the discrete Fourier transform of complex sequences
//! whose length is a power of two. It uses an iterative radix-2 Cooley-Tukey
//! algorithm with two ping-pong buffers, which yields the spectrum directly
//! in natural order without a bit-reversal pass.
//!
//! The forward transform uses the twiddle factors `exp(-2πi·k/n)`, the
//! inverse transform `exp(+2πi·k/n)`. By default only the inverse transform
//! is scaled by `1/n`, so that an inverse transform undoes a forward one.
//! Other conventions can be chosen per plan with [`Normalization`].
//!
//! # Examples
//!
//! ## FFT with complex input data
//!
//! ```
//! use radix2_fft::{fft_radix2, Direction};
//! use num_complex::Complex64;
//!
//! let samples = [Complex64::new(1.0, 0.0); 4];
//! let spectrum = fft_radix2(&samples, Direction::Forward).unwrap();
//! assert_eq!(spectrum[0], Complex64::new(4.0, 0.0));
//! assert_eq!(spectrum[1], Complex64::new(0.0, 0.0));
//! assert_eq!(spectrum[2], Complex64::new(0.0, 0.0));
//! assert_eq!(spectrum[3], Complex64::new(0.0, 0.0));
//! ```
//!
//! ## Reusing a plan
//!
//! ```
//! use radix2_fft::{Direction, Normalization, Radix2Fft};
//! use num_complex::Complex64;
//!
//! let forward = Radix2Fft::new(8, Direction::Forward).unwrap();
//! let inverse = Radix2Fft::new(8, Direction::Inverse).unwrap();
//! assert_eq!(inverse.normalization(), Normalization::Backward);
//!
//! let samples: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let restored = inverse.process(&forward.process(&samples).unwrap()).unwrap();
//! for (a, b) in samples.iter().zip(restored.iter()) {
//!     assert!((a - b).norm() < 1e-12);
//! }
//! ```
//!

pub mod dump;
mod error;
mod radix2;
pub mod twiddle;

use num_complex::Complex64;

pub use error::{FftError, Result};
pub use radix2::Radix2Fft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward FFT, twiddle factors `exp(-2πi·k/n)`
    Forward,

    /// Inverse FFT, twiddle factors `exp(+2πi·k/n)`
    Inverse,
}

/// Where the `1/n` scaling of a forward/inverse pair is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// Inverse transform is scaled by 1/N
    #[default]
    Backward,

    /// Forward transform is scaled by 1/N
    ///
    /// Keeps spectra of long sequences in the range of the input.
    Forward,

    /// Both directions are scaled by 1/sqrt(N)
    Ortho,
}

/// Checks that `size` is a non-zero power of two
pub fn check_size(size: usize) -> Result<()> {
    if !size.is_power_of_two() {
        return Err(FftError::InvalidInputLength { len: size });
    }
    Ok(())
}

/// Radix-2 FFT
///
/// Perform forward/inverse fast Fourier transform using the radix-2 algorithm.
/// The length of `input` corresponds to the FFT size and must be a power of 2.
/// The inverse transform is scaled by 1/N. `input` is not modified.
///
/// Returns `FftError::InvalidInputLength` if the requested FFT size is not supported.
pub fn fft_radix2(input: &[Complex64], dir: Direction) -> Result<Vec<Complex64>> {
    Radix2Fft::new(input.len(), dir)?.process(input)
}

/// Radix-2 FFT on split real and imaginary parts
///
/// Returns the real and imaginary parts of the result. Both input slices must
/// have the same length, which must be a power of 2.
pub fn fft_radix2_parts(re: &[f64], im: &[f64], dir: Direction) -> Result<(Vec<f64>, Vec<f64>)> {
    if re.len() != im.len() {
        return Err(FftError::MismatchedParts {
            re: re.len(),
            im: im.len(),
        });
    }
    let input: Vec<Complex64> = re
        .iter()
        .zip(im.iter())
        .map(|(&r, &i)| Complex64::new(r, i))
        .collect();
    let output = fft_radix2(&input, dir)?;
    Ok(output.iter().map(|s| (s.re, s.im)).unzip())
}

/// Radix-2 FFT of purely real samples
///
/// The samples are treated as complex values with zero imaginary part and
/// the full complex result of length N is returned.
pub fn fft_radix2_real_input(input: &[f64], dir: Direction) -> Result<Vec<Complex64>> {
    let samples: Vec<Complex64> = input.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft_radix2(&samples, dir)
}
