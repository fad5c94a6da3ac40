//! Text dumps of sample buffers and matrices
//!
//! These helpers only read the data they are given. They are meant for
//! inspecting transform inputs and outputs while debugging.

use std::fmt::Display;

use num_complex::Complex64;

use crate::error::{FftError, Result};

/// Rectangular region of a row-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Block {
    pub fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }
}

fn check_dimensions(len: usize, height: usize, width: usize) -> Result<()> {
    if height.checked_mul(width) != Some(len) {
        return Err(FftError::DimensionMismatch { len, height, width });
    }
    Ok(())
}

fn write_rows<T: Display>(out: &mut String, data: &[T], width: usize, block: Block) {
    for row in data.chunks(width).skip(block.row).take(block.height) {
        for value in &row[block.col..block.col + block.width] {
            out.push_str(&format!("{}\t", value));
        }
        out.push('\n');
    }
}

/// Renders a row-major `height` x `width` matrix, one line per row
pub fn format_matrix<T: Display>(data: &[T], height: usize, width: usize) -> Result<String> {
    check_dimensions(data.len(), height, width)?;
    let mut out = format!("matrix is a {}x{}\n", height, width);
    if width > 0 {
        write_rows(&mut out, data, width, Block::new(0, 0, height, width));
    }
    Ok(out)
}

/// Renders the `block` region of a row-major `height` x `width` matrix
pub fn format_sub_matrix<T: Display>(
    data: &[T],
    height: usize,
    width: usize,
    block: Block,
) -> Result<String> {
    check_dimensions(data.len(), height, width)?;
    let fits = |start: usize, extent: usize, bound: usize| {
        start.checked_add(extent).map_or(false, |end| end <= bound)
    };
    if !fits(block.row, block.height, height) || !fits(block.col, block.width, width) {
        return Err(FftError::BlockOutOfBounds {
            row: block.row,
            col: block.col,
            block_height: block.height,
            block_width: block.width,
            height,
            width,
        });
    }
    let mut out = format!(
        "sub matrix is a {}x{}, line {} column {}\n",
        block.height, block.width, block.row, block.col
    );
    if width > 0 {
        write_rows(&mut out, data, width, block);
    }
    Ok(out)
}

/// Renders samples separated by spaces
///
/// Samples without an imaginary part are shown as a plain real number,
/// all others as `(re, im)`. Numbers use six significant digits.
pub fn format_sequence(samples: &[Complex64]) -> String {
    samples
        .iter()
        .map(|s| {
            if s.im == 0.0 {
                format_general(s.re)
            } else {
                format!("({}, {})", format_general(s.re), format_general(s.im))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest form with six significant digits, switching to exponent
/// notation for very large or small magnitudes
fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:.5e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs());
    }
    let decimals = (5 - exp) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
