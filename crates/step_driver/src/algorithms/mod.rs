//! Per-algorithm step sources.

use shared::{domain::AlgorithmKind, error::VisualizerError};

use crate::StepSource;

mod binary_search;
mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use binary_search::BinarySearch;
pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::{MergeSort, MergeTask};
pub use quick::{QuickSort, QuickTask};
pub use selection::SelectionSort;

/// Builds the step source for `kind` over an array of `len` elements.
pub fn source_for(
    kind: AlgorithmKind,
    len: usize,
    target: Option<i64>,
) -> Result<Box<dyn StepSource>, VisualizerError> {
    let source: Box<dyn StepSource> = match kind {
        AlgorithmKind::BubbleSort => Box::new(BubbleSort::new()),
        AlgorithmKind::SelectionSort => Box::new(SelectionSort::new()),
        AlgorithmKind::InsertionSort => Box::new(InsertionSort::new()),
        AlgorithmKind::MergeSort => Box::new(MergeSort::new(len)),
        AlgorithmKind::QuickSort => Box::new(QuickSort::new(len)),
        AlgorithmKind::BinarySearch => {
            let target = target.ok_or(VisualizerError::MissingTarget)?;
            Box::new(BinarySearch::new(len, target))
        }
    };
    Ok(source)
}
