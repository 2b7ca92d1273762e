//! Small generic helpers shared by the initialiser and the genetic
//! operators.
//!
//! Drops the teacher's `argsort`, `ordered_crossover`, `change_order`, and
//! `remove_elem`, which were written against the teacher's flat
//! `Vec<usize>` tour and are superseded by `crate::operators::crossover`
//! and `crate::operators::mutation` operating on multi-part chromosomes.

use rand::Rng;

/// Chooses `num_splits` positions dividing a sequence of length `len` into
/// `num_splits + 1` contiguous parts. Positions are drawn without
/// replacement, sorted ascending, from `[lower_bound, len)` when there is
/// room; otherwise (too few candidate positions for the requested split
/// count) positions are drawn *with* replacement, which is what makes some
/// resulting parts empty.
///
/// Shared by the population initialiser's random split (§4.4) and every
/// crossover's repartition step (§4.5), which both need "K-1 split points"
/// over a flat customer sequence.
pub fn choose_split_points<R: Rng + ?Sized>(
    len: usize,
    num_splits: usize,
    lower_bound: usize,
    rng: &mut R,
) -> Vec<usize> {
    if num_splits == 0 {
        return vec![];
    }
    let candidates = len.saturating_sub(lower_bound);
    if candidates >= num_splits {
        let mut idx = rand::seq::index::sample(rng, candidates, num_splits).into_vec();
        idx.sort_unstable();
        idx.into_iter().map(|i| i + lower_bound).collect()
    } else {
        let lo = lower_bound.min(len);
        let mut points: Vec<usize> = (0..num_splits).map(|_| rng.gen_range(lo..=len)).collect();
        points.sort_unstable();
        points
    }
}

/// Splits `sequence` into `k` contiguous parts using `k - 1` split points
/// chosen from `[lower_bound, len)`.
pub fn partition_into_k<R: Rng + ?Sized>(
    sequence: Vec<usize>,
    k: usize,
    lower_bound: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    if k <= 1 {
        return vec![sequence];
    }
    let len = sequence.len();
    let mut splits = choose_split_points(len, k - 1, lower_bound, rng);
    splits.push(len);

    let mut parts = Vec::with_capacity(k);
    let mut start = 0;
    for end in splits {
        let end = end.min(len).max(start);
        parts.push(sequence[start..end].to_vec());
        start = end;
    }
    parts
}
