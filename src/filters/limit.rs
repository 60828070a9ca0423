//! Bounded prefix of a result stream

use std::iter::Take;

/// Limits a stream to its first `n` items.
///
/// `None` and `Some(0)` leave the stream unlimited. The returned iterator
/// never pulls more than `n` items from the source.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> Take<I> {
    let n = match n {
        Some(n) if n > 0 => n,
        _ => usize::MAX,
    };
    iter.take(n)
}
