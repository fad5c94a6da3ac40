//! Twiddle factor generation and the process-wide twiddle cache
//!
//! A table for length `n` holds the `n / 2` forward roots of unity
//! `exp(-2πi·j/n)`. Inverse transforms use the conjugates, so one table
//! serves both directions.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use num_complex::Complex64;

type TwiddleMap = HashMap<usize, Arc<[Complex64]>>;

static TWIDDLE_CACHE: OnceLock<RwLock<TwiddleMap>> = OnceLock::new();

fn cache() -> &'static RwLock<TwiddleMap> {
    TWIDDLE_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Forward twiddle factors `exp(-2πi·j/n)` for `j` in `0..n/2`
pub fn twiddle_table(n: usize) -> Vec<Complex64> {
    (0..n / 2)
        .map(|j| {
            let phi = -2.0 * PI * (j as f64) / (n as f64);
            Complex64::new(phi.cos(), phi.sin())
        })
        .collect()
}

/// Twiddle table for length `n`, generated on first use and shared afterwards
///
/// Readers never block each other. The tables are immutable once inserted,
/// so a poisoned lock still guards consistent data and is simply entered.
pub fn shared_twiddles(n: usize) -> Arc<[Complex64]> {
    if let Some(table) = cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&n)
    {
        return Arc::clone(table);
    }

    let mut guard = cache().write().unwrap_or_else(PoisonError::into_inner);
    let table = guard.entry(n).or_insert_with(|| {
        tracing::debug!(len = n, "generating twiddle table");
        Arc::from(twiddle_table(n))
    });
    Arc::clone(table)
}

/// Lengths currently held in the shared cache, in ascending order
pub fn cached_twiddle_lengths() -> Vec<usize> {
    let mut lengths: Vec<usize> = cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .copied()
        .collect();
    lengths.sort_unstable();
    lengths
}

pub fn clear_twiddle_cache() {
    cache()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}
