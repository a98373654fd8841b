use rayon::prelude::*;

use crate::{
    DampenedVerdict, Direction, Mode, Parallelism, Report, ToleranceBand, ValidatorConfig,
    Verdict, Violation, ViolationKind,
};

/// First failing adjacent pair under `band`, or `None` when the levels are safe.
///
/// Direction is fixed once from the first pair and every later pair is held to
/// it. Checking each pair against its predecessor's direction is NOT equivalent.
fn first_violation(band: &ToleranceBand, levels: &[i64]) -> Option<Violation> {
    if levels.len() < 2 {
        return None;
    }

    let direction = match Direction::of_step(levels[0], levels[1]) {
        Some(d) => d,
        None => {
            return Some(Violation {
                index: 0,
                kind: ViolationKind::Duplicate,
            })
        }
    };

    for (index, pair) in levels.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);

        let kind = match Direction::of_step(prev, next) {
            None => Some(ViolationKind::Duplicate),
            Some(step) if step != direction => Some(ViolationKind::DirectionChange {
                expected: direction,
            }),
            Some(_) => {
                // abs_diff: no overflow at the i64 extremes.
                let gap = prev.abs_diff(next);
                (!band.contains(gap)).then_some(ViolationKind::GapOutOfBand { gap })
            }
        };

        if let Some(kind) = kind {
            return Some(Violation { index, kind });
        }
    }

    None
}

/// Plain check under `band`, reporting the first violation.
pub fn evaluate(band: &ToleranceBand, report: &Report) -> Verdict {
    match first_violation(band, report.levels()) {
        None => Verdict::safe(),
        Some(v) => Verdict::unsafe_at(v),
    }
}

/// Dampened check under `band`.
///
/// Already-safe reports return without any removal. Otherwise each index is
/// tried in ascending order against an independent copy; the first copy that
/// passes wins. At most one level is ever dropped.
pub fn evaluate_dampened(band: &ToleranceBand, report: &Report) -> DampenedVerdict {
    let plain = evaluate(band, report);
    if plain.safe {
        return DampenedVerdict {
            safe: true,
            removed_index: None,
            violation: None,
        };
    }

    let removed_index = (0..report.len())
        .find(|&i| first_violation(band, report.without(i).levels()).is_none());

    DampenedVerdict {
        safe: removed_index.is_some(),
        removed_index,
        violation: plain.violation,
    }
}

/// Plain check under the standard band [1, 3].
pub fn is_safe(report: &Report) -> bool {
    evaluate(&ToleranceBand::STANDARD, report).safe
}

/// Dampened check under the standard band [1, 3].
pub fn is_safe_with_dampener(report: &Report) -> bool {
    evaluate_dampened(&ToleranceBand::STANDARD, report).safe
}

/// Count safe reports under the standard band, evaluated in parallel.
pub fn count_safe(reports: &[Report], dampened: bool) -> usize {
    count_safe_with(
        &ValidatorConfig::standard().with_mode(Mode::from_dampened(dampened)),
        reports,
    )
}

/// Count safe reports under an explicit policy.
///
/// Reports share nothing, so the parallel path sums the same booleans as the
/// sequential one.
pub fn count_safe_with(cfg: &ValidatorConfig, reports: &[Report]) -> usize {
    match cfg.parallelism {
        Parallelism::Sequential => reports.iter().filter(|r| passes(cfg, r)).count(),
        Parallelism::Parallel => reports.par_iter().filter(|r| passes(cfg, r)).count(),
    }
}

fn passes(cfg: &ValidatorConfig, report: &Report) -> bool {
    match cfg.mode {
        Mode::Plain => evaluate(&cfg.band, report).safe,
        Mode::Dampened => evaluate_dampened(&cfg.band, report).safe,
    }
}
