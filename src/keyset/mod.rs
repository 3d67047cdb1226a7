//! Key-set reconciliation utilities.
//!
//! A schema-agnostic primitive: given two sequences, report whether they are
//! element-wise equal and which elements of the first occur nowhere in the
//! second. The schema validator uses this to find schema fields absent from
//! a document, but nothing here knows about schemas.

/// Outcome of comparing two key sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiff<T> {
    /// True when both sequences have the same length and identical elements
    /// at every position.
    pub equal: bool,
    /// Elements of the first sequence that do not occur anywhere in the
    /// second. Ordering follows the first sequence; callers treat this as a
    /// membership set.
    pub only_in_first: Vec<T>,
}

/// Compares two sequences of comparable values.
///
/// `equal` is positional (same length, same element at every index);
/// `only_in_first` is membership-based and ignores positions entirely.
pub fn diff<T: PartialEq + Clone>(first: &[T], second: &[T]) -> KeyDiff<T> {
    let only_in_first: Vec<T> = first
        .iter()
        .filter(|item| !second.contains(item))
        .cloned()
        .collect();

    let equal = first.len() == second.len()
        && first.iter().zip(second.iter()).all(|(a, b)| a == b);

    KeyDiff {
        equal,
        only_in_first,
    }
}
