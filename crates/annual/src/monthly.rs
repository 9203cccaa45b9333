//! Monthly bucketing, forward filling, and consistent/raw merging.

use std::collections::BTreeMap;

use crate::observation::Observation;

/// A calendar month key: (year, month).
pub(crate) type MonthKey = (i32, u32);

pub(crate) fn next_month(key: MonthKey) -> MonthKey {
    let (year, month) = key;
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Buckets observations into one value per calendar month (the last
/// observation wins within a month), then forward-fills interior gaps
/// from the first to the last observed month.
///
/// Mirrors a month-start resample with forward fill. Returns an empty
/// map for empty input.
pub(crate) fn monthly_series(obs: &[&Observation]) -> BTreeMap<MonthKey, f64> {
    use chrono::Datelike;

    let mut buckets: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for o in obs {
        buckets.insert((o.date.year(), o.date.month()), o.depth);
    }

    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return buckets,
    };

    let mut filled = BTreeMap::new();
    let mut key = first;
    let mut carry = 0.0;
    loop {
        if let Some(&v) = buckets.get(&key) {
            carry = v;
        }
        filled.insert(key, carry);
        if key == last {
            break;
        }
        key = next_month(key);
    }
    filled
}

/// Merges the consistent-level series with the raw-level series.
///
/// The result keeps the consistent series' dates, truncated to the
/// earlier of the two last dates. Where the consistent value is exactly
/// zero, the raw value substitutes; a missing raw value becomes zero.
pub(crate) fn merge_series(
    consistent: &BTreeMap<MonthKey, f64>,
    raw: &BTreeMap<MonthKey, f64>,
) -> Vec<(MonthKey, f64)> {
    let cutoff = match (consistent.keys().next_back(), raw.keys().next_back()) {
        (Some(&c), Some(&r)) => c.min(r),
        _ => return Vec::new(),
    };

    consistent
        .iter()
        .take_while(|(&k, _)| k <= cutoff)
        .map(|(&k, &v)| {
            let merged = if v == 0.0 {
                raw.get(&k).copied().unwrap_or(0.0)
            } else {
                v
            };
            (k, merged)
        })
        .collect()
}
