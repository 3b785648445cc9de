use shared::{
    domain::{AlgorithmKind, Stats, VisualState},
    protocol::StepKind,
};

use crate::{Bars, Completion, Step, StepSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scan,
    Swap,
    Complete,
}

#[derive(Debug)]
pub struct SelectionSort {
    pass: usize,
    scan: usize,
    min: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self {
            pass: 0,
            scan: 1,
            min: 0,
            phase: Phase::Scan,
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSource for SelectionSort {
    fn algorithm(&self) -> AlgorithmKind {
        AlgorithmKind::SelectionSort
    }

    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step {
        let n = bars.len();
        bars.clear_transient();

        loop {
            if self.pass >= n {
                return Step::Finished(Completion::Sorted);
            }

            match self.phase {
                Phase::Scan if self.scan < n => {
                    bars.set_state(self.scan, VisualState::Comparing);
                    bars.set_state(self.min, VisualState::HighlightedMin);
                    stats.comparisons += 1;
                    if bars.value(self.scan) < bars.value(self.min) {
                        self.min = self.scan;
                    }
                    self.scan += 1;
                    return Step::Unit(StepKind::Compare);
                }
                Phase::Scan => {
                    self.phase = if self.min != self.pass {
                        Phase::Swap
                    } else {
                        Phase::Complete
                    };
                }
                Phase::Swap => {
                    bars.swap(self.pass, self.min);
                    bars.set_state(self.pass, VisualState::Swapping);
                    bars.set_state(self.min, VisualState::Swapping);
                    stats.swaps += 1;
                    self.phase = Phase::Complete;
                    return Step::Unit(StepKind::Swap);
                }
                Phase::Complete => {
                    bars.set_state(self.pass, VisualState::Sorted);
                    stats.passes += 1;
                    self.pass += 1;
                    self.scan = self.pass + 1;
                    self.min = self.pass;
                    self.phase = Phase::Scan;
                    return Step::Unit(StepKind::PassComplete);
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
    fn sorts_and_counts_one_swap_per_misplaced_pass() {
        let (bars, stats, _, _) = run_to_end(&mut SelectionSort::new(), &[29, 10, 14, 37, 13]);
        assert_eq!(bars.values(), vec![10, 13, 14, 29, 37]);
        assert_eq!(stats.comparisons, 10);
        assert_eq!(stats.swaps, 3);
        assert_eq!(stats.passes, 5);
    }

    #[test]
    fn already_sorted_input_never_swaps() {
        let (_, stats, units, _) = run_to_end(&mut SelectionSort::new(), &[1, 2, 3]);
        assert_eq!(stats.swaps, 0);
        // three comparisons, three pass completions, one finish
        assert_eq!(units, 7);
    }

    #[test]
    fn scan_highlights_current_minimum() {
        let mut source = SelectionSort::new();
        let mut bars = Bars::from_values(&[4, 9, 1]);
        let mut stats = Stats::default();

        source.advance(&mut bars, &mut stats);
        assert_eq!(bars.state(0), VisualState::HighlightedMin);
        assert_eq!(bars.state(1), VisualState::Comparing);

        source.advance(&mut bars, &mut stats);
        assert_eq!(bars.state(1), VisualState::Default);
        assert_eq!(bars.state(2), VisualState::Comparing);

        assert_eq!(source.advance(&mut bars, &mut stats), Step::Unit(StepKind::Swap));
        assert_eq!(bars.values(), vec![1, 9, 4]);
    }
}
