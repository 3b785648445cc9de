use shared::{
    domain::{AlgorithmKind, Stats, VisualState},
    protocol::StepKind,
};

use crate::{Bars, Completion, Step, StepSource};

/// Naive bubble sort: every pass compares every adjacent pair of the unsorted
/// prefix, with no early exit.
#[derive(Debug, Default)]
pub struct BubbleSort {
    pass: usize,
    index: usize,
    swap_pending: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSource for BubbleSort {
    fn algorithm(&self) -> AlgorithmKind {
        AlgorithmKind::BubbleSort
    }

    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step {
        let n = bars.len();
        bars.clear_transient();

        if self.pass >= n {
            return Step::Finished(Completion::Sorted);
        }

        let j = self.index;
        if self.swap_pending {
            bars.swap(j, j + 1);
            bars.set_state(j, VisualState::Swapping);
            bars.set_state(j + 1, VisualState::Swapping);
            stats.swaps += 1;
            self.swap_pending = false;
            self.index += 1;
            return Step::Unit(StepKind::Swap);
        }

        if j + 1 < n - self.pass {
            bars.set_state(j, VisualState::Comparing);
            bars.set_state(j + 1, VisualState::Comparing);
            stats.comparisons += 1;
            if bars.value(j) > bars.value(j + 1) {
                self.swap_pending = true;
            } else {
                self.index += 1;
            }
            return Step::Unit(StepKind::Compare);
        }

        bars.set_state(n - 1 - self.pass, VisualState::Sorted);
        stats.passes += 1;
        self.pass += 1;
        self.index = 0;
        Step::Unit(StepKind::PassComplete)
    }
}
