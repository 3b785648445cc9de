use super::*;
use step_driver::Driver;

fn snapshot_of(driver: &Driver) -> DriverEvent {
    DriverEvent::Snapshot(driver.snapshot())
}

#[test]
fn heading_uses_upper_case_label() {
    let page = PageState::new(SessionId(1), AlgorithmKind::BubbleSort);
    assert_eq!(page.heading(), "BUBBLE SORT Visualization");
}

#[test]
fn stale_session_events_are_ignored() {
    let mut page = PageState::new(SessionId(2), AlgorithmKind::MergeSort);
    let driver = Driver::new(AlgorithmKind::MergeSort, &[3, 1], 300);
    assert!(!page.apply(SessionId(1), snapshot_of(&driver)));
    assert!(page.snapshot().is_none());
    assert!(page.apply(SessionId(2), snapshot_of(&driver)));
    assert_eq!(page.snapshot().map(|s| s.values()), Some(vec![3, 1]));
}

#[test]
fn invalid_target_sets_inline_message_only() {
    let mut page = PageState::new(SessionId(1), AlgorithmKind::BinarySearch);
    page.target_input = "forty".to_string();
    assert!(page.submit_target().is_err());
    assert_eq!(page.search_message(), Some("Please enter a valid number"));
    assert_eq!(page.phase(), RunPhase::Idle);
}

#[test]
fn valid_target_sets_then_starts() {
    let mut page = PageState::new(SessionId(1), AlgorithmKind::BinarySearch);
    page.target_input = " 40 ".to_string();
    let commands = page.submit_target().expect("valid target");
    assert_eq!(
        commands,
        [
            DriverCommand::SetTarget { target: Some(40) },
            DriverCommand::Start
        ]
    );

    let mut driver = Driver::new(AlgorithmKind::BinarySearch, &[30, 10, 50, 20, 40], 300);
    driver.set_target(Some(40));
    page.apply(SessionId(1), snapshot_of(&driver));
    assert_eq!(page.search_message(), Some("Ready to search for 40"));
}

#[test]
fn finished_event_records_outcome_message() {
    let mut page = PageState::new(SessionId(1), AlgorithmKind::BinarySearch);
    let mut driver = Driver::new(AlgorithmKind::BinarySearch, &[30, 10, 50, 20, 40], 300);
    driver.set_target(Some(40));
    let outcome = driver.run_to_completion().expect("run");

    page.apply(
        SessionId(1),
        DriverEvent::Finished {
            snapshot: driver.snapshot(),
            outcome,
        },
    );
    assert_eq!(page.search_message(), Some("Target 40 Found!"));
    assert!(page.outcome().is_some());
    assert!(page.controls().play);
}

#[test]
fn controls_follow_phase() {
    let mut page = PageState::new(SessionId(1), AlgorithmKind::BubbleSort);
    let mut driver = Driver::new(AlgorithmKind::BubbleSort, &[2, 1], 300);

    let idle = page.controls();
    assert!(idle.play && !idle.pause && !idle.step);

    driver.start().expect("start");
    page.apply(SessionId(1), snapshot_of(&driver));
    let running = page.controls();
    assert!(!running.play && running.pause && !running.step);
    assert_eq!(running.pause_label, "Pause");

    driver.enter_step_mode().expect("step mode");
    page.apply(SessionId(1), snapshot_of(&driver));
    let stepping = page.controls();
    assert!(stepping.step && !stepping.step_mode);
    assert_eq!(stepping.pause_label, "Resume");
}

#[test]
fn rejected_empty_array_is_a_page_error() {
    let mut page = PageState::new(SessionId(1), AlgorithmKind::QuickSort);
    page.apply(
        SessionId(1),
        DriverEvent::Rejected(VisualizerError::EmptyArray),
    );
    assert!(page.error().is_some());
    assert_eq!(page.search_message(), None);
}
