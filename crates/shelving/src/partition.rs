//! Linear partition: split an ordered sequence of weights into contiguous
//! runs so that the heaviest run is as light as possible.

use std::ops::Range;

/// Split `weights` into `groups` contiguous, non-empty runs minimizing the
/// largest run sum.
///
/// `groups` is clamped to `1..=weights.len()`. Returns the runs as index
/// ranges, in order, jointly covering `0..weights.len()`; an empty input
/// yields no runs.
///
/// Ties between equally balanced splits are broken the same way every time:
/// for each prefix, the last run starts at the smallest index that achieves
/// the optimum, so earlier split points win.
pub fn linear_partition(weights: &[u64], groups: usize) -> Vec<Range<usize>> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }
    let k = groups.clamp(1, n);

    let mut prefix = vec![0u64; n + 1];
    for (i, w) in weights.iter().enumerate() {
        prefix[i + 1] = prefix[i] + w;
    }

    // cost[i][j]: best heaviest run for the first `i` weights in `j` runs.
    // split[i][j]: where the last of those `j` runs starts.
    let mut cost = vec![vec![u64::MAX; k + 1]; n + 1];
    let mut split = vec![vec![0usize; k + 1]; n + 1];

    for i in 1..=n {
        cost[i][1] = prefix[i];
    }

    for j in 2..=k {
        for i in j..=n {
            for x in (j - 1)..i {
                let candidate = cost[x][j - 1].max(prefix[i] - prefix[x]);
                if candidate < cost[i][j] {
                    cost[i][j] = candidate;
                    split[i][j] = x;
                }
            }
        }
    }

    let mut runs = Vec::with_capacity(k);
    let mut end = n;
    for j in (2..=k).rev() {
        let start = split[end][j];
        runs.push(start..end);
        end = start;
    }
    runs.push(0..end);
    runs.reverse();
    runs
}

/// Heaviest run of a partition.
pub fn max_load(weights: &[u64], runs: &[Range<usize>]) -> u64 {
    runs.iter()
        .map(|r| weights[r.clone()].iter().sum::<u64>())
        .max()
        .unwrap_or(0)
}
