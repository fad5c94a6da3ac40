//! Complex FFT Example

use num_complex::Complex64;
use radix2_fft::dump::format_sequence;
use radix2_fft::{fft_radix2, Direction};

fn main() {
    let samples: Vec<Complex64> = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        .iter()
        .map(|&x| Complex64::new(x, 0.0))
        .collect();

    println!("Data: {}", format_sequence(&samples));
    let spectrum = fft_radix2(&samples, Direction::Forward).unwrap();
    println!("FFT : {}", format_sequence(&spectrum));
    let restored = fft_radix2(&spectrum, Direction::Inverse).unwrap();
    println!("IFFT: {}", format_sequence(&restored));
}
