/// Group projected pairs by key, average, sort, and rank.
use crate::types::RankedRow;

/// Round to exactly 2 fractional digits, half away from zero.
///
/// Sorting and tie-breaking happen on this rounded value, not the raw mean.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Running sum/count accumulator for one group key.
struct GroupAcc {
    key: String,
    sum: f64,
    count: usize,
}

/// Compute per-key means from `pairs` and return them ranked.
///
/// Keys accumulate in first-appearance order; the result is a stable sort
/// of that order by rounded mean descending, so equal means keep their
/// first-appearance relative order. Ranks are the dense sequence 1..=N.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(pairs: &[(String, f64)]) -> Vec<RankedRow> {
    let mut groups: Vec<GroupAcc> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|g| &g.key == key) {
            Some(acc) => {
                acc.sum += value;
                acc.count += 1;
            }
            None => groups.push(GroupAcc {
                key: key.clone(),
                sum: *value,
                count: 1,
            }),
        }
    }

    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .map(|g| {
            let count = g.count as f64;
            (g.key, round2(g.sum / count))
        })
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));

    means
        .into_iter()
        .enumerate()
        .map(|(i, (key, mean))| RankedRow {
            rank: i + 1,
            key,
            mean,
        })
        .collect()
}
