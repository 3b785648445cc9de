use shared::{
    domain::{AlgorithmKind, Stats, VisualState},
    protocol::StepKind,
};

use crate::{Bars, Completion, Step, StepSource};

/// Pending work for quick sort. Ranges are inclusive and never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickTask {
    SortRange { start: usize, end: usize },
    PartitionRange { start: usize, end: usize },
}

/// Lomuto partition in progress; the pivot sits at `end`.
#[derive(Debug)]
struct Partition {
    start: usize,
    end: usize,
    pivot: i64,
    store: usize,
    scan: usize,
    swap_pending: bool,
}

#[derive(Debug)]
pub struct QuickSort {
    stack: Vec<QuickTask>,
    active: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let stack = if len > 0 {
            vec![QuickTask::SortRange {
                start: 0,
                end: len - 1,
            }]
        } else {
            Vec::new()
        };
        Self {
            stack,
            active: None,
        }
    }

    pub fn pending(&self) -> &[QuickTask] {
        &self.stack
    }
}

impl StepSource for QuickSort {
    fn algorithm(&self) -> AlgorithmKind {
        AlgorithmKind::QuickSort
    }

    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step {
        bars.clear_transient();

        loop {
            if let Some(p) = self.active.as_mut() {
                bars.set_state(p.end, VisualState::Pivot);

                if p.swap_pending {
                    bars.swap(p.scan, p.store);
                    bars.set_state(p.scan, VisualState::Swapping);
                    bars.set_state(p.store, VisualState::Swapping);
                    stats.swaps += 1;
                    p.store += 1;
                    p.scan += 1;
                    p.swap_pending = false;
                    return Step::Unit(StepKind::Swap);
                }

                if p.scan < p.end {
                    bars.set_state(p.scan, VisualState::Comparing);
                    stats.comparisons += 1;
                    if bars.value(p.scan) < p.pivot {
                        p.swap_pending = true;
                    } else {
                        p.scan += 1;
                    }
                    return Step::Unit(StepKind::Compare);
                }

                let (start, end, store) = (p.start, p.end, p.store);
                bars.swap(store, end);
                bars.set_state(end, VisualState::Default);
                bars.set_state(store, VisualState::Sorted);
                if store + 1 <= end {
                    self.stack.push(QuickTask::SortRange {
                        start: store + 1,
                        end,
                    });
                }
                if store > start {
                    self.stack.push(QuickTask::SortRange {
                        start,
                        end: store - 1,
                    });
                }
                self.active = None;
                return Step::Unit(StepKind::PivotPlaced);
            }

            match self.stack.pop() {
                None => return Step::Finished(Completion::Sorted),
                Some(QuickTask::SortRange { start, end }) => {
                    if start < end {
                        self.stack.push(QuickTask::PartitionRange { start, end });
                    } else {
                        bars.set_state(start, VisualState::Sorted);
                    }
                }
                Some(QuickTask::PartitionRange { start, end }) => {
                    self.active = Some(Partition {
                        start,
                        end,
                        pivot: bars.value(end),
                        store: start,
                        scan: start,
                        swap_pending: false,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::run_to_end;

    #[test]
    fn partitions_around_last_element() {
        let mut source = QuickSort::new(4);
        let mut bars = Bars::from_values(&[5, 3, 8, 4]);
        let mut stats = Stats::default();

        // 5 vs 4, 3 vs 4 (then exchange), 8 vs 4, pivot placement
        let mut kinds = Vec::new();
        loop {
            match source.advance(&mut bars, &mut stats) {
                Step::Unit(StepKind::PivotPlaced) => {
                    kinds.push(StepKind::PivotPlaced);
                    break;
                }
                Step::Unit(kind) => kinds.push(kind),
                Step::Finished(_) => panic!("finished before first pivot"),
            }
        }
        assert_eq!(
            kinds,
            vec![
                StepKind::Compare,
                StepKind::Compare,
                StepKind::Swap,
                StepKind::Compare,
                StepKind::PivotPlaced
            ]
        );
        assert_eq!(bars.values(), vec![3, 4, 8, 5]);
        assert_eq!(bars.state(1), VisualState::Sorted);
        // left side is on top of the stack
        assert_eq!(
            source.pending(),
            &[
                QuickTask::SortRange { start: 2, end: 3 },
                QuickTask::SortRange { start: 0, end: 0 }
            ]
        );
    }

    #[test]
    fn sorts_and_counts_self_exchanges() {
        let (bars, stats, _, _) = run_to_end(&mut QuickSort::new(4), &[1, 2, 3, 4]);
        assert_eq!(bars.values(), vec![1, 2, 3, 4]);
        // sorted input: every scanned element is smaller than the pivot
        assert_eq!(stats.comparisons, 6);
        assert_eq!(stats.swaps, 6);
    }

    #[test]
    fn duplicates_terminate() {
        let (bars, _, _, _) = run_to_end(&mut QuickSort::new(5), &[3, 3, 3, 3, 3]);
        assert_eq!(bars.values(), vec![3; 5]);
    }
}
