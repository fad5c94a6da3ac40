//! Radix-2 transform plans
//!
//! The stage loop reads from one buffer and writes to the other, swapping
//! roles after every stage. Writing the low butterfly output to `k/2 + i` and
//! the high output half a sequence further on leaves the final stage in
//! natural order, so there is no bit-reversal pass.

use std::mem;
use std::sync::Arc;

use num_complex::Complex64;

use crate::error::{FftError, Result};
use crate::twiddle::shared_twiddles;
use crate::{check_size, Direction, Normalization};

/// Reusable transform plan for one length and direction
///
/// Plans are immutable and can be shared between threads; every call to
/// [`Radix2Fft::process`] works on its own buffers.
#[derive(Debug, Clone)]
pub struct Radix2Fft {
    len: usize,
    direction: Direction,
    normalization: Normalization,
    twiddles: Arc<[Complex64]>,
}

impl Radix2Fft {
    /// Creates a plan using [`Normalization::Backward`]
    ///
    /// Returns `FftError::InvalidInputLength` if `len` is zero or not a power
    /// of two.
    pub fn new(len: usize, direction: Direction) -> Result<Self> {
        check_size(len)?;
        Ok(Self {
            len,
            direction,
            normalization: Normalization::default(),
            twiddles: shared_twiddles(len),
        })
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Number of butterfly stages, `log2(len)`
    pub fn stages(&self) -> u32 {
        self.len.trailing_zeros()
    }

    /// Transforms `input` into a newly allocated sequence
    ///
    /// `input` is left untouched. Its length must equal the plan length.
    pub fn process(&self, input: &[Complex64]) -> Result<Vec<Complex64>> {
        self.check_len(input.len())?;
        let mut output = vec![Complex64::new(0.0, 0.0); self.len];
        let mut scratch = vec![Complex64::new(0.0, 0.0); self.len];
        self.process_into(input, &mut output, &mut scratch)?;
        Ok(output)
    }

    /// Transforms `input` into `output` using `scratch` as the second
    /// ping-pong buffer
    ///
    /// All three slices must have the plan length. Nothing is written if a
    /// length check fails.
    pub fn process_into(
        &self,
        input: &[Complex64],
        output: &mut [Complex64],
        scratch: &mut [Complex64],
    ) -> Result<()> {
        self.check_len(input.len())?;
        self.check_len(output.len())?;
        self.check_len(scratch.len())?;

        tracing::trace!(
            len = self.len,
            direction = ?self.direction,
            stages = self.stages(),
            "radix-2 transform"
        );

        // the final stage must land in `output`, so start in whichever buffer
        // an even or odd number of swaps brings back there
        let (mut src, mut dst) = if self.stages() % 2 == 0 {
            (&mut *output, &mut *scratch)
        } else {
            (&mut *scratch, &mut *output)
        };
        src.copy_from_slice(input);

        let n = self.len;
        let half = n >> 1;
        let inverse = self.direction == Direction::Inverse;
        let mut stride = n;
        // loop over stages
        while stride > 1 {
            stride >>= 1;
            // loop over blocks, each with a single twiddle factor
            for k in (0..n).step_by(stride << 1) {
                let base = k >> 1;
                let w = if inverse {
                    self.twiddles[base].conj()
                } else {
                    self.twiddles[base]
                };
                // butterfly operations
                for i in 0..stride {
                    let even = src[k + i];
                    let odd = w * src[k + i + stride];
                    dst[base + i] = even + odd;
                    dst[base + i + half] = even - odd;
                }
            }
            mem::swap(&mut src, &mut dst);
        }

        if let Some(scale) = self.scale() {
            for s in output.iter_mut() {
                *s *= scale;
            }
        }
        Ok(())
    }

    fn scale(&self) -> Option<f64> {
        let n = self.len as f64;
        match (self.normalization, self.direction) {
            (Normalization::Backward, Direction::Inverse)
            | (Normalization::Forward, Direction::Forward) => Some(1.0 / n),
            (Normalization::Ortho, _) if self.len > 1 => Some(1.0 / n.sqrt()),
            _ => None,
        }
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.len {
            return Err(FftError::LengthMismatch {
                expected: self.len,
                len,
            });
        }
        Ok(())
    }
}
