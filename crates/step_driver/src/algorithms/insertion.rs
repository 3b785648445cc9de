use shared::{
    domain::{AlgorithmKind, Stats, VisualState},
    protocol::StepKind,
};

use crate::{Bars, Completion, Step, StepSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Compare,
    Shift,
    Insert,
}

/// The element being inserted and the hole it will eventually fill.
#[derive(Debug, Clone, Copy)]
struct Insertion {
    held: i64,
    hole: usize,
    phase: Phase,
}

#[derive(Debug)]
pub struct InsertionSort {
    next: usize,
    current: Option<Insertion>,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self {
            next: 1,
            current: None,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSource for InsertionSort {
    fn algorithm(&self) -> AlgorithmKind {
        AlgorithmKind::InsertionSort
    }

    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step {
        bars.clear_transient();

        let Some(mut insertion) = self.current else {
            if self.next >= bars.len() {
                return Step::Finished(Completion::Sorted);
            }
            bars.set_state(self.next, VisualState::HighlightedCurrent);
            self.current = Some(Insertion {
                held: bars.value(self.next),
                hole: self.next,
                phase: Phase::Compare,
            });
            return Step::Unit(StepKind::Select);
        };

        if insertion.phase == Phase::Compare && insertion.hole == 0 {
            insertion.phase = Phase::Insert;
        }

        let step = match insertion.phase {
            Phase::Compare => {
                let left = insertion.hole - 1;
                bars.set_state(left, VisualState::Comparing);
                bars.set_state(insertion.hole, VisualState::HighlightedCurrent);
                stats.comparisons += 1;
                insertion.phase = if bars.value(left) > insertion.held {
                    Phase::Shift
                } else {
                    Phase::Insert
                };
                StepKind::Compare
            }
            Phase::Shift => {
                let left = insertion.hole - 1;
                bars.set_value(insertion.hole, bars.value(left));
                bars.set_state(insertion.hole, VisualState::Overwriting);
                bars.set_state(left, VisualState::Comparing);
                stats.shifts += 1;
                insertion.hole = left;
                insertion.phase = Phase::Compare;
                StepKind::Shift
            }
            Phase::Insert => {
                bars.set_value(insertion.hole, insertion.held);
                bars.set_state(insertion.hole, VisualState::HighlightedCurrent);
                stats.passes += 1;
                self.next += 1;
                self.current = None;
                return Step::Unit(StepKind::Insert);
            }
        };

        self.current = Some(insertion);
        Step::Unit(step)
    }
}
