//! Balanced, alphabet-covering shelf assignment.

use spicerack_core::{BucketCounts, Letter, ALPHABET_LEN};

use crate::count::ShelfCount;
use crate::partition::{linear_partition, max_load};
use crate::shelf::{LetterRange, Shelf};

/// Assign letters to `shelves` shelves.
///
/// Only letters with jars take part in balancing: they are split into
/// contiguous runs minimizing the fullest shelf (see [`linear_partition`]).
/// Labels then stretch over the empty letters so that, read in order, the
/// shelves cover `A` through `Z` exactly once:
///
/// - empty letters between two shelves belong to the later shelf
/// - empty letters after the last populated letter belong to the last shelf
/// - with more shelves than populated letters, the extra (empty) shelves take
///   over the widest gaps, splitting them evenly
///
/// An inventory with no jars yields `shelves` empty shelves that divide the
/// alphabet evenly, so a single shelf is always `"A-Z"`.
pub fn distribute(counts: &BucketCounts, shelves: ShelfCount) -> Vec<Shelf> {
    let k = shelves.get();
    let populated: Vec<(Letter, u32)> = counts.populated().collect();

    if populated.is_empty() {
        return split_evenly(0, ALPHABET_LEN - 1, k)
            .into_iter()
            .map(|range| Shelf::new(Vec::new(), range))
            .collect();
    }

    let weights: Vec<u64> = populated.iter().map(|&(_, n)| u64::from(n)).collect();
    let runs = linear_partition(&weights, k);
    let groups: Vec<Vec<Letter>> = runs
        .iter()
        .map(|run| populated[run.clone()].iter().map(|&(l, _)| l).collect())
        .collect();

    let gaps = gap_sizes(&groups);
    let assigned = assign_extra_shelves(&gaps, k - groups.len());

    let result = label(groups, &assigned);

    tracing::debug!(
        shelves = result.len(),
        populated = populated.len(),
        heaviest = max_load(&weights, &runs),
        "distributed letters"
    );
    result
}

// Empty letters before the first group, between consecutive groups, and after
// the last group (`groups.len() + 1` entries).
fn gap_sizes(groups: &[Vec<Letter>]) -> Vec<usize> {
    let mut gaps = Vec::with_capacity(groups.len() + 1);
    let mut next_free = 0;
    for group in groups {
        let first = group[0].index();
        gaps.push(first - next_free);
        next_free = group[group.len() - 1].index() + 1;
    }
    gaps.push(ALPHABET_LEN - next_free);
    gaps
}

// Hand out `extra` empty shelves one at a time to the gap whose letters would
// be spread widest per shelf. A gap never gets more shelves than letters.
fn assign_extra_shelves(gaps: &[usize], extra: usize) -> Vec<usize> {
    let mut assigned = vec![0usize; gaps.len()];
    for _ in 0..extra {
        let mut best: Option<usize> = None;
        for (i, &size) in gaps.iter().enumerate() {
            if assigned[i] >= size {
                continue;
            }
            let wider = match best {
                None => true,
                // size / (assigned + 1) > best_size / (best_assigned + 1)
                Some(b) => size * (assigned[b] + 1) > gaps[b] * (assigned[i] + 1),
            };
            if wider {
                best = Some(i);
            }
        }
        match best {
            Some(i) => assigned[i] += 1,
            // Unreachable with at most one shelf per letter.
            None => break,
        }
    }
    assigned
}

fn label(groups: Vec<Vec<Letter>>, assigned: &[usize]) -> Vec<Shelf> {
    let last_group = groups.len() - 1;
    let mut shelves = Vec::with_capacity(groups.len() + assigned.iter().sum::<usize>());
    let mut cursor = 0;

    for (g, letters) in groups.into_iter().enumerate() {
        let first = letters[0].index();
        if assigned[g] > 0 {
            push_empty(&mut shelves, cursor, first - 1, assigned[g]);
            cursor = first;
        }

        let mut end = letters[letters.len() - 1].index();
        if g == last_group && assigned[g + 1] == 0 {
            end = ALPHABET_LEN - 1;
        }
        shelves.push(Shelf::new(letters, range(cursor, end)));
        cursor = end + 1;
    }

    let trailing = assigned[assigned.len() - 1];
    if trailing > 0 {
        push_empty(&mut shelves, cursor, ALPHABET_LEN - 1, trailing);
    }
    shelves
}

fn push_empty(shelves: &mut Vec<Shelf>, start: usize, end: usize, parts: usize) {
    shelves.extend(
        split_evenly(start, end, parts)
            .into_iter()
            .map(|r| Shelf::new(Vec::new(), r)),
    );
}

// Split `start..=end` into `parts` runs; earlier runs get the remainder.
fn split_evenly(start: usize, end: usize, parts: usize) -> Vec<LetterRange> {
    let len = end + 1 - start;
    let parts = parts.clamp(1, len);
    let (base, extra) = (len / parts, len % parts);

    let mut ranges = Vec::with_capacity(parts);
    let mut from = start;
    for i in 0..parts {
        let size = base + usize::from(i < extra);
        ranges.push(range(from, from + size - 1));
        from += size;
    }
    ranges
}

fn range(start: usize, end: usize) -> LetterRange {
    let letter = |i: usize| Letter::from_index(i).unwrap_or(Letter::Z);
    LetterRange::new(letter(start), letter(end)).unwrap_or_else(LetterRange::full)
}
