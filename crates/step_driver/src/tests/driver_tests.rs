use super::*;

fn bubble(values: &[i64]) -> Driver {
    Driver::new(AlgorithmKind::BubbleSort, values, 300)
}

#[test]
fn bubble_sort_completes_with_six_comparisons() {
    let mut driver = bubble(&[5, 3, 8, 1]);
    let outcome = driver.run_to_completion().expect("run");

    assert_eq!(
        outcome,
        RunOutcome::Sorted {
            values: vec![1, 3, 5, 8]
        }
    );
    assert_eq!(driver.stats().comparisons, 6);
    assert_eq!(driver.phase(), RunPhase::Completed);
    assert!(driver
        .bars()
        .elements()
        .iter()
        .all(|bar| bar.state == VisualState::Sorted));
    assert!(!driver.flags().is_running);
}

#[test]
fn binary_search_sorts_input_and_reports_found_index() {
    let mut driver = Driver::new(AlgorithmKind::BinarySearch, &[30, 10, 50, 20, 40], 300);
    assert_eq!(driver.bars().values(), vec![10, 20, 30, 40, 50]);
    assert!(driver.set_target(Some(40)));
    assert_eq!(driver.message(), Some("Ready to search for 40"));

    driver.run_to_completion().expect("run");

    assert_eq!(driver.message(), Some("Target 40 Found!"));
    assert_eq!(driver.bars().state(3), VisualState::Found);
    let snapshot = driver.snapshot();
    assert_eq!(snapshot.last_step, Some(StepKind::Found));
    assert_eq!(snapshot.highlight_line, Some(6));
}

#[test]
fn binary_search_reports_absent_target() {
    let mut driver = Driver::new(AlgorithmKind::BinarySearch, &[1, 3, 5], 300);
    driver.set_target(Some(4));
    let outcome = driver.run_to_completion().expect("run");
    assert_eq!(outcome, RunOutcome::Search(SearchOutcome::NotFound { target: 4 }));
    assert_eq!(driver.message(), Some("Target 4 Not Found."));
}

#[test]
fn search_without_target_is_rejected() {
    let mut driver = Driver::new(AlgorithmKind::BinarySearch, &[1, 2, 3], 300);
    assert_eq!(driver.start(), Err(VisualizerError::MissingTarget));
    assert_eq!(driver.phase(), RunPhase::Idle);
}

#[test]
fn empty_array_cannot_start() {
    let mut driver = bubble(&[]);
    assert_eq!(driver.start(), Err(VisualizerError::EmptyArray));
    assert_eq!(driver.enter_step_mode(), Err(VisualizerError::EmptyArray));
    assert_eq!(driver.phase(), RunPhase::Idle);
}

#[test]
fn start_is_a_no_op_while_running() {
    let mut driver = bubble(&[3, 2, 1]);
    assert_eq!(driver.start(), Ok(true));
    driver.tick();
    assert_eq!(driver.start(), Ok(false));
    assert_eq!(driver.units(), 1);
}

#[test]
fn paused_driver_does_not_mutate() {
    let mut driver = bubble(&[4, 3, 2, 1]);
    driver.start().expect("start");
    driver.tick();
    driver.tick();
    assert!(driver.pause_or_resume());
    assert_eq!(driver.phase(), RunPhase::Paused);

    let frozen = driver.snapshot();
    for _ in 0..10 {
        assert_eq!(driver.tick(), None);
    }
    assert_eq!(driver.snapshot(), frozen);

    assert!(driver.pause_or_resume());
    assert!(driver.tick().is_some());
}

#[test]
fn each_step_signal_admits_exactly_one_unit() {
    let mut driver = bubble(&[5, 3, 8, 1]);
    assert_eq!(driver.enter_step_mode(), Ok(true));
    assert_eq!(driver.phase(), RunPhase::Stepping);
    assert!(!driver.flags().timer_enabled());

    assert_eq!(driver.tick(), None);
    assert_eq!(driver.units(), 0);

    for expected in 1..=3 {
        assert!(driver.step().is_some());
        assert_eq!(driver.units(), expected);
        assert_eq!(driver.flags().step_signal, expected);
    }
    // compare (5, 3), swap, compare (5, 8)
    assert_eq!(driver.bars().values(), vec![3, 5, 8, 1]);
    assert_eq!(driver.stats().comparisons, 2);
    assert_eq!(driver.stats().swaps, 1);
}

#[test]
fn step_outside_step_mode_is_ignored() {
    let mut driver = bubble(&[2, 1]);
    assert_eq!(driver.step(), None);
    driver.start().expect("start");
    assert_eq!(driver.step(), None);
    assert_eq!(driver.units(), 0);
    assert_eq!(driver.flags().step_signal, 0);
}

#[test]
fn running_run_can_switch_to_step_mode_and_back() {
    let mut driver = bubble(&[3, 1, 2]);
    driver.start().expect("start");
    driver.tick();
    assert_eq!(driver.enter_step_mode(), Ok(true));
    assert_eq!(driver.tick(), None);
    driver.step();
    assert_eq!(driver.units(), 2);

    assert!(driver.pause_or_resume());
    assert_eq!(driver.phase(), RunPhase::Running);
    assert!(driver.flags().timer_enabled());
}

#[test]
fn stepping_to_the_end_completes_the_run() {
    let mut driver = bubble(&[2, 1]);
    driver.enter_step_mode().expect("step mode");
    let mut last = None;
    while driver.phase() == RunPhase::Stepping {
        last = driver.step();
    }
    assert!(matches!(last, Some(Tick::Finished(RunOutcome::Sorted { .. }))));
    assert_eq!(driver.step(), None);
}

#[test]
fn reset_cancels_run_and_clears_counters() {
    let mut driver = bubble(&[4, 3, 2, 1]);
    driver.start().expect("start");
    driver.tick();
    driver.tick();

    driver.reset(&[9, 7]);

    assert_eq!(driver.phase(), RunPhase::Idle);
    assert_eq!(driver.stats(), Stats::default());
    assert_eq!(driver.units(), 0);
    assert_eq!(driver.flags().step_signal, 0);
    assert_eq!(driver.bars().values(), vec![9, 7]);
    assert_eq!(driver.tick(), None);
    assert_eq!(driver.snapshot().last_step, None);
}

#[test]
fn completed_run_restarts_on_current_values() {
    let mut driver = bubble(&[2, 1, 3]);
    driver.run_to_completion().expect("run");
    assert_eq!(driver.start(), Ok(true));

    assert_eq!(driver.phase(), RunPhase::Running);
    assert_eq!(driver.stats(), Stats::default());
    assert_eq!(driver.bars().values(), vec![1, 2, 3]);
    assert_eq!(driver.bars().state(2), VisualState::Default);
}

#[test]
fn target_is_locked_during_a_run() {
    let mut driver = Driver::new(AlgorithmKind::BinarySearch, &[1, 2, 3], 300);
    driver.set_target(Some(2));
    driver.start().expect("start");
    assert!(!driver.set_target(Some(3)));
    assert_eq!(driver.target(), Some(2));
}

#[test]
fn speed_is_clamped() {
    let mut driver = bubble(&[1]);
    assert_eq!(driver.set_speed(5), 50);
    assert_eq!(driver.set_speed(5_000), 1000);
    assert_eq!(driver.flags().speed_ms, 1000);
}

#[test]
fn snapshot_highlights_last_unit_line() {
    let mut driver = bubble(&[2, 1]);
    driver.start().expect("start");
    driver.tick();
    assert_eq!(driver.snapshot().highlight_line, Some(5));
    driver.tick();
    assert_eq!(driver.snapshot().last_step, Some(StepKind::Swap));
    assert_eq!(driver.snapshot().highlight_line, Some(6));
}
