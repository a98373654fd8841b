use rsv_validator::*;

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
fn scenario_sample_plain_verdicts() {
    let got: Vec<bool> = sample().iter().map(is_safe).collect();
    assert_eq!(got, vec![true, false, false, false, false, true]);
}

#[test]
fn scenario_sample_dampened_verdicts() {
    let got: Vec<bool> = sample().iter().map(is_safe_with_dampener).collect();
    assert_eq!(got, vec![true, false, false, true, true, true]);
}

#[test]
fn scenario_sample_counts() {
    let reports = sample();
    assert_eq!(count_safe(&reports, false), 2);
    assert_eq!(count_safe(&reports, true), 4);
}

#[test]
fn scenario_gap_four_between_six_and_two() {
    let v = evaluate(&ToleranceBand::STANDARD, &Report::from([9, 7, 6, 2, 1]));
    assert!(!v.safe);
    assert_eq!(
        v.violation,
        Some(Violation {
            index: 2,
            kind: ViolationKind::GapOutOfBand { gap: 4 },
        })
    );
}

#[test]
fn scenario_sequential_and_parallel_agree_on_large_batch() {
    let mut reports = Vec::new();
    for _ in 0..500 {
        reports.extend(sample());
    }
    let seq = ValidatorConfig {
        parallelism: Parallelism::Sequential,
        ..ValidatorConfig::standard()
    };
    let par = ValidatorConfig::standard();

    assert_eq!(count_safe_with(&seq, &reports), 1000);
    assert_eq!(count_safe_with(&par, &reports), 1000);
    assert_eq!(count_safe_with(&seq.with_mode(Mode::Dampened), &reports), 2000);
    assert_eq!(count_safe_with(&par.with_mode(Mode::Dampened), &reports), 2000);
}
