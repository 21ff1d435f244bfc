//! Even sampling of ordered sequences.
//!
//! Picks `n` roughly evenly spaced elements of a sequence by index. The first
//! and last elements are always included.
//!
//! Interior positions advance by repeated addition of the real-valued step
//! `(len - 1) / (n - 1)` and are rounded half-to-even. Termination is driven
//! by the result length, so exactly `n` elements come back for every valid
//! `n`, whatever drift the accumulation picks up.

use dropline_core::{DropLineError, Result};
use tracing::trace;

/// Indices of `n` roughly evenly spaced elements of a sequence of length `len`.
///
/// # Errors
/// [`DropLineError::InvalidArgument`] when `n < 2` or `n > len`.
pub fn sample_indices(len: usize, n: i64) -> Result<Vec<usize>> {
    let count = match usize::try_from(n) {
        Ok(count) if (2..=len).contains(&count) => count,
        _ => {
            return Err(DropLineError::invalid_argument(format!(
                "n must be >= 2 and <= the length of the input sequence (n = {n}, length = {len})"
            )))
        }
    };

    let last = len - 1;
    let mut indices = Vec::with_capacity(count);
    indices.push(0);
    if count == 2 {
        indices.push(last);
        return Ok(indices);
    }

    let interval = last as f64 / (count - 1) as f64;
    let mut position = interval;
    while indices.len() < count - 1 {
        // Clamp so accumulated drift never reaches past the end.
        indices.push((position.round_ties_even() as usize).min(last));
        position += interval;
    }
    indices.push(last);

    trace!(len, n = count, interval, "sampled indices");
    Ok(indices)
}

/// `n` roughly evenly spaced elements of `sequence`, first and last included.
///
/// Repeated elements are possible and are kept as is.
///
/// # Errors
/// [`DropLineError::InvalidArgument`] when `n < 2` or `n > sequence.len()`.
pub fn sample<T: Clone>(sequence: &[T], n: i64) -> Result<Vec<T>> {
    let indices = sample_indices(sequence.len(), n)?;
    Ok(indices.into_iter().map(|i| sequence[i].clone()).collect())
}
