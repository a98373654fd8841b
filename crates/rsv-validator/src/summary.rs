//! Safety summary over a batch of reports.
//!
//! Produces, in input order:
//! - total / plain-safe / dampened-safe / unsafe counts
//! - how many reports were trivially safe (length <= 1)
//! - every dampener removal (which report, which index, which level)
//!
//! This module does **not** parse input or print anything; the CLI renders
//! the summary through `Display` or `serde`.

use std::fmt;

use serde::Serialize;

use crate::{evaluate_dampened, Report, ToleranceBand};

/// A single-level removal that turned an unsafe report into a safe one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    /// 0-based position of the report in the input batch.
    pub report_index: usize,
    /// 0-based position of the dropped level within that report.
    pub removed_index: usize,
    /// The dropped level itself.
    pub removed_value: i64,
}

/// Counts and removal list produced by [`build_safety_summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetySummary {
    pub band: ToleranceBand,
    pub total_reports: usize,
    /// Safe without any removal.
    pub safe_plain: usize,
    /// Safe with at most one removal (always >= `safe_plain`).
    pub safe_dampened: usize,
    /// Unsafe even with the dampener.
    pub unsafe_reports: usize,
    /// Reports of length 0 or 1 (vacuously safe).
    pub empty_or_singleton: usize,
    /// Removals in input order.
    pub dampened_removals: Vec<Removal>,
}

impl fmt::Display for SafetySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SafetySummary {{")?;
        writeln!(f, "  band: {}", self.band)?;
        writeln!(f, "  total_reports: {}", self.total_reports)?;
        writeln!(f, "  safe_plain: {}", self.safe_plain)?;
        writeln!(f, "  safe_dampened: {}", self.safe_dampened)?;
        writeln!(f, "  unsafe_reports: {}", self.unsafe_reports)?;
        writeln!(f, "  empty_or_singleton: {}", self.empty_or_singleton)?;
        writeln!(f, "  dampened_removals: {}", self.dampened_removals.len())?;
        for r in &self.dampened_removals {
            writeln!(
                f,
                "    report={} removed_index={} removed_value={}",
                r.report_index, r.removed_index, r.removed_value
            )?;
        }
        write!(f, "}}")
    }
}

/// Build a [`SafetySummary`] for `reports` under `band`.
///
/// Deterministic and sequential: removals come out in input order. No
/// mutation of the caller's reports occurs.
pub fn build_safety_summary(band: &ToleranceBand, reports: &[Report]) -> SafetySummary {
    let mut summary = SafetySummary {
        band: *band,
        total_reports: reports.len(),
        safe_plain: 0,
        safe_dampened: 0,
        unsafe_reports: 0,
        empty_or_singleton: 0,
        dampened_removals: Vec::new(),
    };

    for (report_index, report) in reports.iter().enumerate() {
        if report.len() <= 1 {
            summary.empty_or_singleton += 1;
        }

        let verdict = evaluate_dampened(band, report);
        if !verdict.safe {
            summary.unsafe_reports += 1;
            continue;
        }

        summary.safe_dampened += 1;
        match verdict.removed_index {
            None => summary.safe_plain += 1,
            Some(removed_index) => summary.dampened_removals.push(Removal {
                report_index,
                removed_index,
                removed_value: report.levels()[removed_index],
            }),
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Report> {
        vec![
            Report::from([7, 6, 4, 2, 1]),
            Report::from([1, 2, 7, 8, 9]),
            Report::from([9, 7, 6, 2, 1]),
            Report::from([1, 3, 2, 4, 5]),
            Report::from([8, 6, 4, 4, 1]),
            Report::from([1, 3, 6, 7, 9]),
        ]
    }

    #[test]
    fn empty_input_produces_zero_counts() {
        let s = build_safety_summary(&ToleranceBand::STANDARD, &[]);
        assert_eq!(s.total_reports, 0);
        assert_eq!(s.safe_plain, 0);
        assert_eq!(s.safe_dampened, 0);
        assert!(s.dampened_removals.is_empty());
    }

    #[test]
    fn sample_counts_and_removals() {
        let s = build_safety_summary(&ToleranceBand::STANDARD, &sample());
        assert_eq!(s.total_reports, 6);
        assert_eq!(s.safe_plain, 2);
        assert_eq!(s.safe_dampened, 4);
        assert_eq!(s.unsafe_reports, 2);
        assert_eq!(
            s.dampened_removals,
            vec![
                Removal {
                    report_index: 3,
                    removed_index: 1,
                    removed_value: 3
                },
                Removal {
                    report_index: 4,
                    removed_index: 2,
                    removed_value: 4
                },
            ]
        );
    }

    #[test]
    fn trivial_reports_counted() {
        let reports = vec![Report::default(), Report::from([1]), Report::from([1, 2])];
        let s = build_safety_summary(&ToleranceBand::STANDARD, &reports);
        assert_eq!(s.empty_or_singleton, 2);
        assert_eq!(s.safe_plain, 3);
    }

    #[test]
    fn display_does_not_panic() {
        let s = build_safety_summary(&ToleranceBand::STANDARD, &sample());
        let text = s.to_string();
        assert!(text.contains("SafetySummary"));
        assert!(text.contains("band: [1, 3]"));
        assert!(text.contains("report=3 removed_index=1 removed_value=3"));
    }
}
