//! In-place sequence operations: uniform shuffling, windowed random
//! selection, and single-step rotation.
//!
//! Every randomized helper takes its random source as an argument instead
//! of reaching for a process-global generator, so callers can pass
//! `rand::thread_rng()` in production and a seeded `StdRng` under test for
//! reproducible behavior.

use std::ops::{Bound, RangeBounds};

use rand::Rng;

/// Shuffle `seq` in place with the Fisher-Yates walk.
///
/// With an unbiased `rng`, every permutation of the input is equally
/// likely. Empty and single-element sequences are left untouched.
pub fn shuffle<T, R>(seq: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..seq.len()).rev() {
        let j = rng.gen_range(0..=i);
        seq.swap(i, j);
    }
}

/// Pick a uniformly random element from the given window of `seq`.
///
/// Pass `..` for the whole sequence. The window's end is clamped to the
/// sequence length; a window that covers no elements yields `None`.
pub fn random_item<'a, T, W, R>(seq: &'a [T], window: W, rng: &mut R) -> Option<&'a T>
where
    W: RangeBounds<usize>,
    R: Rng + ?Sized,
{
    let (start, end) = resolve_window(window, seq.len())?;
    Some(&seq[rng.gen_range(start..end)])
}

/// Remove and return a uniformly random element from the given window of
/// `seq`, shifting the elements after it down by one.
///
/// Window semantics match [`random_item`].
pub fn remove_random_item<T, W, R>(seq: &mut Vec<T>, window: W, rng: &mut R) -> Option<T>
where
    W: RangeBounds<usize>,
    R: Rng + ?Sized,
{
    let (start, end) = resolve_window(window, seq.len())?;
    Some(seq.remove(rng.gen_range(start..end)))
}

/// Move the first element of `seq` to its back and return a reference to
/// it, or `None` when `seq` is empty.
pub fn rotate_left_once<T>(seq: &mut Vec<T>) -> Option<&T> {
    if seq.is_empty() {
        return None;
    }
    let front = seq.remove(0);
    seq.push(front);
    seq.last()
}

/// Resolve a window request against a sequence of length `len`.
///
/// The end bound is clamped to `len`; a window covering no elements
/// resolves to `None`.
fn resolve_window<W>(window: W, len: usize) -> Option<(usize, usize)>
where
    W: RangeBounds<usize>,
{
    let start = match window.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
    };

    let end = match window.end_bound() {
        Bound::Unbounded => len,
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
    };
    let end = end.min(len);

    if start < end {
        Some((start, end))
    } else {
        None
    }
}
