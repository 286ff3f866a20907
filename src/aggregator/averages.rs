//! Per-benchmark and overall averages across repeated runs.
//!
//! Records are grouped by exact name. Each group's `run_count` is the number
//! of records in it, while the synthetic `OVERALL_AVERAGE` entry is computed
//! over every record and carries the number of input files as its
//! `run_count`. Downstream consumers rely on this asymmetry.

use crate::parser::schema::BenchmarkRecord;
use crate::utils::config::OVERALL_AVERAGE_NAME;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the averages file
///
/// **Public** - serialized by the output writer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    /// Benchmark name, or `OVERALL_AVERAGE`
    pub name: String,

    /// Mean real time
    pub real_time: f64,

    /// Mean CPU time
    pub cpu_time: f64,

    /// Mean iteration count, truncated
    pub iterations: i64,

    /// Contributing records (per name) or input files (overall)
    pub run_count: usize,
}

impl AggregatedEntry {
    /// Average a non-empty group of records
    fn from_records(name: &str, records: &[&BenchmarkRecord], run_count: usize) -> Self {
        let count = records.len().max(1);

        let real_time = mean(records.iter().map(|r| r.real_time));
        let cpu_time = mean(records.iter().map(|r| r.cpu_time));

        // Exact integer mean; i128 division truncates toward zero like int()
        let iterations_sum: i128 = records.iter().map(|r| r.iterations as i128).sum();
        let iterations = (iterations_sum / count as i128) as i64;

        Self {
            name: name.to_string(),
            real_time,
            cpu_time,
            iterations,
            run_count,
        }
    }

    pub fn is_overall(&self) -> bool {
        self.name == OVERALL_AVERAGE_NAME
    }
}

/// Arithmetic mean that rounds once
///
/// The sum is carried as a compensated (Neumaier) pair and the quotient is
/// corrected with the exact division remainder. Inputs large enough to
/// overflow the sum are scaled down by a power of two first.
fn mean<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let count = values.clone().count();
    if count == 0 {
        return 0.0;
    }
    let n = count as f64;

    let largest = values.clone().fold(0.0_f64, |m, v| m.max(v.abs()));
    let exponent = if largest.is_finite() && largest > f64::MAX / n {
        n.log2().ceil() as i32 + 1
    } else {
        0
    };
    let down = 2.0_f64.powi(-exponent);
    let up = 2.0_f64.powi(exponent);

    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for value in values {
        let x = value * down;
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }

    if !sum.is_finite() {
        return sum / n * up;
    }

    let hi = sum + compensation;
    let lo = compensation - (hi - sum);

    let quotient = hi / n;
    let remainder = (-quotient).mul_add(n, hi) + lo;
    (quotient + remainder / n) * up
}

/// Compute averages for all records of one results directory
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Every accepted record, from every file
/// * `file_count` - Number of input files considered (becomes the overall run_count)
///
/// # Returns
/// One entry per distinct name plus `OVERALL_AVERAGE`, sorted by name.
/// Empty when there are no records.
pub fn aggregate(records: &[BenchmarkRecord], file_count: usize) -> Vec<AggregatedEntry> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut groups: BTreeMap<&str, Vec<&BenchmarkRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.name.as_str()).or_default().push(record);
    }

    debug!(
        "Aggregating {} records into {} benchmarks",
        records.len(),
        groups.len()
    );

    let mut entries: Vec<AggregatedEntry> = groups
        .iter()
        .map(|(name, group)| AggregatedEntry::from_records(name, group, group.len()))
        .collect();

    let all: Vec<&BenchmarkRecord> = records.iter().collect();
    entries.push(AggregatedEntry::from_records(
        OVERALL_AVERAGE_NAME,
        &all,
        file_count,
    ));

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Counts describing one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub file_count: usize,
    pub record_count: usize,
    pub benchmark_count: usize,
}

impl AggregateStats {
    pub fn new(file_count: usize, records: &[BenchmarkRecord], entries: &[AggregatedEntry]) -> Self {
        Self {
            file_count,
            record_count: records.len(),
            benchmark_count: entries.iter().filter(|e| !e.is_overall()).count(),
        }
    }

    /// Human-readable one-liner for logging
    pub fn summary(&self) -> String {
        format!(
            "Files: {} | Records: {} | Benchmarks: {}",
            self.file_count, self.record_count, self.benchmark_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(name: &str, real_time: f64, cpu_time: f64, iterations: i64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.to_string(),
            real_time,
            cpu_time,
            iterations,
        }
    }

    #[test]
    fn test_aggregate_groups_by_name() {
        let records = vec![
            rec("Foo", 100.0, 100.0, 1000),
            rec("Foo", 300.0, 300.0, 1000),
            rec("Bar", 10.0, 8.0, 50),
        ];

        let entries = aggregate(&records, 2);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bar", "Foo", "OVERALL_AVERAGE"]);

        let foo = &entries[1];
        assert_eq!(foo.real_time, 200.0);
        assert_eq!(foo.cpu_time, 200.0);
        assert_eq!(foo.iterations, 1000);
        assert_eq!(foo.run_count, 2);

        let bar = &entries[0];
        assert_eq!(bar.run_count, 1);
    }

    #[test]
    fn test_overall_is_not_mean_of_means() {
        let records = vec![
            rec("A", 1.0, 1.0, 1),
            rec("A", 1.0, 1.0, 1),
            rec("A", 1.0, 1.0, 1),
            rec("B", 9.0, 9.0, 9),
        ];

        let entries = aggregate(&records, 1);
        let overall = entries.iter().find(|e| e.is_overall()).unwrap();

        // Mean of means would be 5.0
        assert_eq!(overall.real_time, 3.0);
        assert_eq!(overall.iterations, 3);
    }

    #[test]
    fn test_overall_run_count_is_file_count() {
        let records = vec![rec("A", 1.0, 1.0, 1), rec("B", 2.0, 2.0, 2)];
        let entries = aggregate(&records, 7);
        let overall = entries.iter().find(|e| e.is_overall()).unwrap();
        assert_eq!(overall.run_count, 7);
    }

    #[test]
    fn test_iterations_mean_truncates() {
        let records = vec![rec("A", 1.0, 1.0, 1), rec("A", 1.0, 1.0, 2)];
        let entries = aggregate(&records, 1);
        assert_eq!(entries[0].iterations, 1);
    }

    #[test]
    fn test_names_match_exactly() {
        let records = vec![rec("foo", 1.0, 1.0, 1), rec("Foo", 3.0, 3.0, 3)];
        let entries = aggregate(&records, 1);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_sort_places_overall_lexicographically() {
        let records = vec![rec("zeta", 1.0, 1.0, 1), rec("BM_Get", 1.0, 1.0, 1)];
        let entries = aggregate(&records, 1);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["BM_Get", "OVERALL_AVERAGE", "zeta"]);
    }

    #[test]
    fn test_mean_is_correctly_rounded() {
        let records = vec![
            rec("A", 0.1, 0.1, 1),
            rec("A", 0.2, 0.2, 1),
            rec("A", 0.3, 0.3, 1),
        ];
        let entries = aggregate(&records, 1);
        assert_eq!(entries[0].real_time, 0.2);
        assert_eq!(entries[0].cpu_time, 0.2);
    }

    #[test]
    fn test_mean_of_huge_values_does_not_overflow() {
        let records = vec![rec("A", 1e308, 1e308, 1), rec("A", 1e308, 1e308, 1)];
        let entries = aggregate(&records, 1);
        assert_eq!(entries[0].real_time, 1e308);
        assert_eq!(entries[1].real_time, 1e308);
    }

    #[test]
    fn test_mean_cancellation() {
        assert_eq!(mean([1e16, 1.0, -1e16, 1.0].into_iter()), 0.5);
        assert_eq!(mean(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[], 3).is_empty());
    }

    #[test]
    fn test_stats_summary() {
        let records = vec![rec("A", 1.0, 1.0, 1), rec("B", 2.0, 2.0, 2)];
        let entries = aggregate(&records, 2);
        let stats = AggregateStats::new(2, &records, &entries);

        assert_eq!(stats.benchmark_count, 2);
        assert_eq!(stats.summary(), "Files: 2 | Records: 2 | Benchmarks: 2");
    }
}
