//! Step-by-step drivers for the sorting and searching visualizer.
//!
//! Every algorithm is a [`StepSource`]: a resumable state machine that performs
//! exactly one unit of visible work per call. [`Driver`] wraps a source with the
//! run phase state machine (play, pause, step mode, reset) and [`runtime`]
//! drives a `Driver` from a timer and a command channel.

use shared::domain::{AlgorithmKind, Element, SearchOutcome, Stats, VisualState};
use shared::protocol::StepKind;

pub mod algorithms;
pub mod array;
mod driver;
pub mod listing;
pub mod reference;
pub mod runtime;

pub use array::{ArrayGenerator, ArraySpec};
pub use driver::{Driver, Tick};
pub use runtime::{spawn_driver, DriverHandle};

/// How a source finished its work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Sorted,
    Search(SearchOutcome),
}

/// Result of one [`StepSource::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Unit(StepKind),
    Finished(Completion),
}

pub trait StepSource: Send {
    fn algorithm(&self) -> AlgorithmKind;

    /// Performs one unit of visible work. Bookkeeping that has no visible
    /// effect (such as consuming a single-element range) is folded into the
    /// next visible unit.
    fn advance(&mut self, bars: &mut Bars, stats: &mut Stats) -> Step;
}

/// The on-screen array: values plus their per-element visual state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bars {
    elements: Vec<Element>,
}

impl Bars {
    pub fn from_values(values: &[i64]) -> Self {
        Self {
            elements: values.iter().copied().map(Element::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn value(&self, index: usize) -> i64 {
        self.elements[index].value
    }

    pub fn state(&self, index: usize) -> VisualState {
        self.elements[index].state
    }

    pub fn set_value(&mut self, index: usize, value: i64) {
        self.elements[index].value = value;
    }

    pub fn set_state(&mut self, index: usize, state: VisualState) {
        self.elements[index].state = state;
    }

    pub fn set_range_state(&mut self, start: usize, end: usize, state: VisualState) {
        for element in &mut self.elements[start..=end] {
            element.state = state;
        }
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }

    pub fn clear_transient(&mut self) {
        for element in &mut self.elements {
            if element.state.is_transient() {
                element.state = VisualState::Default;
            }
        }
    }

    pub fn mark_all(&mut self, state: VisualState) {
        for element in &mut self.elements {
            element.state = state;
        }
    }

    pub fn values(&self) -> Vec<i64> {
        self.elements.iter().map(|element| element.value).collect()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
