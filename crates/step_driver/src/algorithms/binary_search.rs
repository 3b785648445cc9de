use std::cmp::Ordering;

use shared::{
    domain::{AlgorithmKind, SearchOutcome, Stats, VisualState},
    protocol::StepKind,
};

use crate::{Bars, Completion, Step, StepSource};

/// Binary search over an ascending array. Each probe is two units: the
/// comparison at `mid`, then either discarding one half or the terminal
/// result.
#[derive(Debug)]
pub struct BinarySearch {
    target: i64,
    /// Inclusive bounds of the live range, `None` once it is empty.
    range: Option<(usize, usize)>,
    probe: Option<(usize, Ordering)>,
}

impl BinarySearch {
    pub fn new(len: usize, target: i64) -> Self {
        Self {
            target,
            range: len.checked_sub(1).map(|hi| (0, hi)),
            probe: None,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl StepSource for BinarySearch {
    fn algorithm(&self) -> AlgorithmKind {
        AlgorithmKind::BinarySearch
    }

    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step {
        bars.clear_transient();

        let Some((lo, hi)) = self.range else {
            return Step::Finished(Completion::Search(SearchOutcome::NotFound {
                target: self.target,
            }));
        };

        match self.probe.take() {
            None => {
                let mid = lo + (hi - lo) / 2;
                bars.set_state(mid, VisualState::Comparing);
                stats.comparisons += 1;
                self.probe = Some((mid, bars.value(mid).cmp(&self.target)));
                Step::Unit(StepKind::Compare)
            }
            Some((mid, Ordering::Equal)) => {
                bars.set_state(mid, VisualState::Found);
                Step::Finished(Completion::Search(SearchOutcome::Found {
                    target: self.target,
                    index: mid,
                }))
            }
            Some((mid, Ordering::Less)) => {
                bars.set_range_state(lo, mid, VisualState::Discarded);
                self.range = (mid < hi).then_some((mid + 1, hi));
                Step::Unit(StepKind::DiscardLower)
            }
            Some((mid, Ordering::Greater)) => {
                bars.set_range_state(mid, hi, VisualState::Discarded);
                self.range = (mid > lo).then(|| (lo, mid - 1));
                Step::Unit(StepKind::DiscardUpper)
            }
        }
    }
}
