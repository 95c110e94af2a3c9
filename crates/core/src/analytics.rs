//! Read-only aggregations over the full registration set.
//!
//! Every function here is a pure function of the records passed in and is
//! recomputed on each call; nothing is cached or maintained incrementally.
//! The HTTP layer fetches the full set and projects each row into a
//! [`RecordView`] before aggregating.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

/// Age group labels, in bucket order.
pub const AGE_GROUP_LABELS: [&str; 5] = ["Under 18", "18-25", "26-35", "36-50", "Over 50"];

/// How many pincodes the top-pincodes aggregation returns.
pub const TOP_PINCODE_LIMIT: usize = 5;

/// The fields of a registration that the aggregations care about.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub state: &'a str,
    pub pincode: &'a str,
    pub age: i32,
}

/// Count of registrations sharing an exact state string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub count: u64,
}

/// Count of registrations falling into one fixed age group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeGroupCount {
    pub range: &'static str,
    pub count: u64,
}

/// Count of registrations sharing an exact pincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PincodeCount {
    pub pincode: String,
    pub count: u64,
}

/// Headline numbers for the analytics view.
///
/// `average_age` is `None` when there are no registrations; callers must
/// handle the empty case explicitly rather than receive a NaN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_registrations: u64,
    pub distinct_states: u64,
    pub average_age: Option<i64>,
    pub distinct_pincodes: u64,
}

/// Which age group an age falls into. Every age lands in exactly one group.
pub fn age_group_label(age: i32) -> &'static str {
    if age < 18 {
        "Under 18"
    } else if age <= 25 {
        "18-25"
    } else if age <= 35 {
        "26-35"
    } else if age <= 50 {
        "36-50"
    } else {
        "Over 50"
    }
}

/// Count registrations grouped by exact state string, in first-seen order.
pub fn count_by_state(records: &[RecordView<'_>]) -> Vec<StateCount> {
    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for record in records {
        *counts.entry(record.state).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(state, count)| StateCount {
            state: state.to_string(),
            count,
        })
        .collect()
}

/// Count registrations per age group. All five groups are always present,
/// zero counts included.
pub fn count_by_age_group(records: &[RecordView<'_>]) -> Vec<AgeGroupCount> {
    let mut counts = [0u64; AGE_GROUP_LABELS.len()];
    for record in records {
        let label = age_group_label(record.age);
        let idx = AGE_GROUP_LABELS
            .iter()
            .position(|l| *l == label)
            .unwrap_or(0);
        counts[idx] += 1;
    }
    AGE_GROUP_LABELS
        .into_iter()
        .zip(counts)
        .map(|(range, count)| AgeGroupCount { range, count })
        .collect()
}

/// The `limit` most common pincodes, sorted by count descending.
///
/// The sort is stable over first-seen order, so ties resolve
/// deterministically.
pub fn top_pincodes(records: &[RecordView<'_>], limit: usize) -> Vec<PincodeCount> {
    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for record in records {
        *counts.entry(record.pincode).or_insert(0) += 1;
    }
    let mut ranked: Vec<PincodeCount> = counts
        .into_iter()
        .map(|(pincode, count)| PincodeCount {
            pincode: pincode.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Headline statistics over the full record set.
pub fn summarize(records: &[RecordView<'_>]) -> Summary {
    let total = records.len() as u64;

    let states: HashSet<&str> = records.iter().map(|r| r.state).collect();
    let pincodes: HashSet<&str> = records.iter().map(|r| r.pincode).collect();

    let average_age = if records.is_empty() {
        None
    } else {
        let sum: i64 = records.iter().map(|r| i64::from(r.age)).sum();
        Some((sum as f64 / records.len() as f64).round() as i64)
    };

    Summary {
        total_registrations: total,
        distinct_states: states.len() as u64,
        average_age,
        distinct_pincodes: pincodes.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &'static str, pincode: &'static str, age: i32) -> RecordView<'static> {
        RecordView {
            state,
            pincode,
            age,
        }
    }

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(age_group_label(0), "Under 18");
        assert_eq!(age_group_label(17), "Under 18");
        assert_eq!(age_group_label(18), "18-25");
        assert_eq!(age_group_label(25), "18-25");
        assert_eq!(age_group_label(26), "26-35");
        assert_eq!(age_group_label(35), "26-35");
        assert_eq!(age_group_label(36), "36-50");
        assert_eq!(age_group_label(50), "36-50");
        assert_eq!(age_group_label(51), "Over 50");
        assert_eq!(age_group_label(120), "Over 50");
    }

    #[test]
    fn test_one_record_per_age_group() {
        let records: Vec<_> = [10, 20, 30, 45, 60]
            .into_iter()
            .map(|age| record("Delhi", "110001", age))
            .collect();

        let groups = count_by_age_group(&records);
        assert_eq!(groups.len(), 5);
        for group in &groups {
            assert_eq!(group.count, 1, "group {} should have one record", group.range);
        }
    }

    #[test]
    fn test_empty_set_emits_all_zero_groups() {
        let groups = count_by_age_group(&[]);
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|g| g.count == 0));
        let labels: Vec<_> = groups.iter().map(|g| g.range).collect();
        assert_eq!(labels, AGE_GROUP_LABELS);
    }

    #[test]
    fn test_count_by_state_first_seen_order() {
        let records = [
            record("Karnataka", "560001", 30),
            record("Delhi", "110001", 25),
            record("Karnataka", "560002", 40),
        ];

        let counts = count_by_state(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].state, "Karnataka");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].state, "Delhi");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_top_pincodes_sorted_and_truncated() {
        let mut records = Vec::new();
        for _ in 0..5 {
            records.push(record("Delhi", "110001", 30));
        }
        for _ in 0..2 {
            records.push(record("Karnataka", "560001", 30));
        }
        for pincode in ["400001", "600001", "700001", "800001"] {
            records.push(record("Other", pincode, 30));
        }

        let top = top_pincodes(&records, TOP_PINCODE_LIMIT);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].pincode, "110001");
        assert_eq!(top[0].count, 5);
        assert_eq!(top[1].pincode, "560001");
        assert_eq!(top[1].count, 2);
        // Singleton pincodes tie; stable sort keeps first-seen order.
        assert_eq!(top[2].pincode, "400001");
        assert_eq!(top[3].pincode, "600001");
        assert_eq!(top[4].pincode, "700001");
    }

    #[test]
    fn test_summary() {
        let records = [
            record("Karnataka", "560001", 20),
            record("Karnataka", "560001", 30),
            record("Delhi", "110001", 41),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total_registrations, 3);
        assert_eq!(summary.distinct_states, 2);
        assert_eq!(summary.distinct_pincodes, 2);
        // (20 + 30 + 41) / 3 = 30.33 rounds to 30.
        assert_eq!(summary.average_age, Some(30));
    }

    #[test]
    fn test_summary_empty_set_has_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_registrations, 0);
        assert_eq!(summary.distinct_states, 0);
        assert_eq!(summary.distinct_pincodes, 0);
        assert_eq!(summary.average_age, None);
    }
}
