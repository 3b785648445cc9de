use proptest::prelude::*;
use shared::{
    domain::{AlgorithmKind, RunPhase, SearchOutcome, VisualState},
    protocol::RunOutcome,
};
use step_driver::{reference, Driver};

const SORTS: [AlgorithmKind; 5] = [
    AlgorithmKind::BubbleSort,
    AlgorithmKind::SelectionSort,
    AlgorithmKind::InsertionSort,
    AlgorithmKind::MergeSort,
    AlgorithmKind::QuickSort,
];

fn values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 1..40)
}

proptest! {
    #[test]
    fn prop_sorts_end_non_decreasing_and_match_reference(
        input in values(),
        which in 0usize..SORTS.len(),
    ) {
        let kind = SORTS[which];
        let mut driver = Driver::new(kind, &input, 300);
        let outcome = driver.run_to_completion().expect("run");

        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(outcome, RunOutcome::Sorted { values: expected.clone() });

        let reference = reference::run(kind, &input, None).expect("reference");
        prop_assert_eq!(reference.values, expected);
        prop_assert_eq!(driver.stats(), reference.stats);
        prop_assert_eq!(driver.phase(), RunPhase::Completed);
        prop_assert!(driver
            .bars()
            .elements()
            .iter()
            .all(|bar| bar.state == VisualState::Sorted));
    }

    #[test]
    fn prop_binary_search_finds_present_targets(input in values(), pick in any::<prop::sample::Index>()) {
        let target = input[pick.index(input.len())];
        let mut driver = Driver::new(AlgorithmKind::BinarySearch, &input, 300);
        driver.set_target(Some(target));
        let outcome = driver.run_to_completion().expect("run");

        let RunOutcome::Search(SearchOutcome::Found { index, .. }) = outcome else {
            return Err(TestCaseError::fail(format!("{target} not found in {input:?}")));
        };
        prop_assert_eq!(driver.bars().value(index), target);
        prop_assert_eq!(driver.bars().state(index), VisualState::Found);

        let reference = reference::run(AlgorithmKind::BinarySearch, &input, Some(target))
            .expect("reference");
        prop_assert_eq!(driver.stats(), reference.stats);
    }

    #[test]
    fn prop_binary_search_rejects_absent_targets(input in values(), target in 100i64..200) {
        let mut driver = Driver::new(AlgorithmKind::BinarySearch, &input, 300);
        driver.set_target(Some(target));
        let outcome = driver.run_to_completion().expect("run");
        prop_assert_eq!(
            outcome,
            RunOutcome::Search(SearchOutcome::NotFound { target })
        );
        let expected = format!("Target {target} Not Found.");
        prop_assert_eq!(driver.message(), Some(expected.as_str()));
    }

    #[test]
    fn prop_steps_admit_one_unit_each(input in values(), which in 0usize..SORTS.len(), steps in 1u64..30) {
        let mut driver = Driver::new(SORTS[which], &input, 300);
        driver.enter_step_mode().expect("step mode");
        let mut taken = 0;
        while taken < steps && driver.phase() == RunPhase::Stepping {
            driver.step();
            taken += 1;
        }
        prop_assert_eq!(driver.units(), taken);
        prop_assert_eq!(driver.flags().step_signal, taken);
    }
}

#[test]
fn quick_sort_example_matches_reference() {
    let input = [38, 27, 43, 3, 9, 82, 10];
    let mut driver = Driver::new(AlgorithmKind::QuickSort, &input, 300);
    driver.run_to_completion().expect("run");
    let reference = reference::run(AlgorithmKind::QuickSort, &input, None).expect("reference");
    assert_eq!(driver.bars().values(), vec![3, 9, 10, 27, 38, 43, 82]);
    assert_eq!(driver.stats(), reference.stats);
}
