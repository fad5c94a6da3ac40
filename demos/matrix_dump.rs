//! Matrix Dump Example

use radix2_fft::dump::{format_matrix, format_sub_matrix, Block};

fn main() {
    // 9x8 matrix stored row by row
    let m: Vec<u32> = (1..=9)
        .flat_map(|r| (1..=8).map(move |c| r * 10 + c))
        .collect();

    print!("{}", format_matrix(&m, 9, 8).unwrap());
    print!("{}", format_sub_matrix(&m, 9, 8, Block::new(1, 2, 3, 2)).unwrap());
}
