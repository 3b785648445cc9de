use shared::{
    domain::{AlgorithmKind, Stats, VisualState},
    protocol::StepKind,
};

use crate::{Bars, Completion, Step, StepSource};

/// Pending work for the top-down merge sort. Ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTask {
    SortRange { start: usize, end: usize },
    MergeRanges { start: usize, mid: usize, end: usize },
}

/// A merge in progress: copies of both runs and the write cursor.
#[derive(Debug)]
struct ActiveMerge {
    end: usize,
    left: Vec<i64>,
    right: Vec<i64>,
    i: usize,
    j: usize,
    k: usize,
}

impl ActiveMerge {
    fn new(bars: &Bars, start: usize, mid: usize, end: usize) -> Self {
        let (left, right) = bars.elements()[start..=end].split_at(mid + 1 - start);
        Self {
            end,
            left: left.iter().map(|element| element.value).collect(),
            right: right.iter().map(|element| element.value).collect(),
            i: 0,
            j: 0,
            k: start,
        }
    }

    /// Next value to write and whether a comparison decided it.
    fn take_next(&mut self) -> (i64, bool) {
        match (self.left.get(self.i), self.right.get(self.j)) {
            (Some(&l), Some(&r)) if l <= r => {
                self.i += 1;
                (l, true)
            }
            (Some(_), Some(&r)) => {
                self.j += 1;
                (r, true)
            }
            (Some(&l), None) => {
                self.i += 1;
                (l, false)
            }
            (None, Some(&r)) => {
                self.j += 1;
                (r, false)
            }
            (None, None) => unreachable!("merge cursor ran past both runs"),
        }
    }
}

#[derive(Debug)]
pub struct MergeSort {
    stack: Vec<MergeTask>,
    active: Option<ActiveMerge>,
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        let stack = if len > 0 {
            vec![MergeTask::SortRange {
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

    /// Pending tasks, next task last.
    pub fn pending(&self) -> &[MergeTask] {
        &self.stack
    }
}

impl StepSource for MergeSort {
    fn algorithm(&self) -> AlgorithmKind {
        AlgorithmKind::MergeSort
    }

    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step {
        bars.clear_transient();

        loop {
            if let Some(active) = self.active.as_mut() {
                let (value, compared) = active.take_next();
                if compared {
                    stats.comparisons += 1;
                }
                bars.set_value(active.k, value);
                bars.set_state(active.k, VisualState::Overwriting);
                stats.overwrites += 1;
                active.k += 1;
                if active.k > active.end {
                    self.active = None;
                }
                return Step::Unit(StepKind::Overwrite);
            }

            match self.stack.pop() {
                None => return Step::Finished(Completion::Sorted),
                Some(MergeTask::SortRange { start, end }) => {
                    if start < end {
                        let mid = start + (end - start) / 2;
                        self.stack.push(MergeTask::MergeRanges { start, mid, end });
                        self.stack.push(MergeTask::SortRange {
                            start: mid + 1,
                            end,
                        });
                        self.stack.push(MergeTask::SortRange { start, end: mid });
                    }
                }
                Some(MergeTask::MergeRanges { start, mid, end }) => {
                    self.active = Some(ActiveMerge::new(bars, start, mid, end));
                }
            }
        }
    }
}
