//! Majority vote over the k nearest labels.

use crate::instance::Label;

/// Returns the most frequent label and its count.
///
/// `labels` must be ordered by ascending neighbour distance. When several
/// labels share the highest count, the one whose first occurrence comes
/// earliest wins, i.e. the label of the nearest neighbour among the tied
/// labels.
///
/// `tally` is a scratch buffer of (label, count) in first-seen order.
///
/// # Panics
///
/// Debug-asserts that `labels` is non-empty.
pub(crate) fn majority_vote(labels: &[Label], tally: &mut Vec<(Label, usize)>) -> (Label, usize) {
    debug_assert!(!labels.is_empty());

    tally.clear();
    for &label in labels {
        match tally.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    // Strictly-greater keeps the earliest entry on ties
    let mut best = tally[0];
    for &(label, count) in &tally[1..] {
        if count > best.1 {
            best = (label, count);
        }
    }
    best
}
