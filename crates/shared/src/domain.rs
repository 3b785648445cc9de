use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(SessionId);

impl SessionId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

pub const MIN_SPEED_MS: u64 = 50;
pub const MAX_SPEED_MS: u64 = 1000;
pub const DEFAULT_SPEED_MS: u64 = 300;

pub fn clamp_speed_ms(speed_ms: u64) -> u64 {
    speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    BinarySearch,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::BubbleSort,
        AlgorithmKind::SelectionSort,
        AlgorithmKind::InsertionSort,
        AlgorithmKind::MergeSort,
        AlgorithmKind::QuickSort,
        AlgorithmKind::BinarySearch,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::BubbleSort => "bubble-sort",
            Self::SelectionSort => "selection-sort",
            Self::InsertionSort => "insertion-sort",
            Self::MergeSort => "merge-sort",
            Self::QuickSort => "quick-sort",
            Self::BinarySearch => "binary-search",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::SelectionSort => "Selection Sort",
            Self::InsertionSort => "Insertion Sort",
            Self::MergeSort => "Merge Sort",
            Self::QuickSort => "Quick Sort",
            Self::BinarySearch => "Binary Search",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BubbleSort => "Repeatedly swap adjacent elements if they are in the wrong order.",
            Self::SelectionSort => "Select the minimum element and place it at the beginning.",
            Self::InsertionSort => {
                "Insert each element into its correct position in the sorted part."
            }
            Self::MergeSort => "Divide the array into halves, sort them, and merge back together.",
            Self::QuickSort => {
                "Partition the array around a pivot and recursively sort subarrays."
            }
            Self::BinarySearch => "Efficiently search by repeatedly dividing the array in half.",
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, Self::BinarySearch)
    }

    /// Counters surfaced for this algorithm, in display order.
    pub fn stat_columns(self) -> &'static [StatKind] {
        match self {
            Self::BubbleSort | Self::SelectionSort => {
                &[StatKind::Comparisons, StatKind::Swaps, StatKind::Passes]
            }
            Self::InsertionSort => &[StatKind::Comparisons, StatKind::Shifts, StatKind::Passes],
            Self::MergeSort => &[StatKind::Comparisons, StatKind::Overwrites],
            Self::QuickSort => &[StatKind::Comparisons, StatKind::Swaps],
            Self::BinarySearch => &[StatKind::Comparisons],
        }
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Overwriting,
    Pivot,
    HighlightedMin,
    HighlightedCurrent,
    Sorted,
    Found,
    Discarded,
}

impl VisualState {
    /// Transient states are cleared at the start of every unit of work.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            Self::Comparing
                | Self::Swapping
                | Self::Overwriting
                | Self::Pivot
                | Self::HighlightedMin
                | Self::HighlightedCurrent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub value: i64,
    pub state: VisualState,
}

impl Element {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            state: VisualState::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Comparisons,
    Swaps,
    Shifts,
    Overwrites,
    Passes,
}

impl StatKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Comparisons => "Comparisons",
            Self::Swaps => "Swaps",
            Self::Shifts => "Shifts",
            Self::Overwrites => "Overwrites",
            Self::Passes => "Passes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub shifts: u64,
    pub overwrites: u64,
    pub passes: u64,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::Comparisons => self.comparisons,
            StatKind::Swaps => self.swaps,
            StatKind::Shifts => self.shifts,
            StatKind::Overwrites => self.overwrites,
            StatKind::Passes => self.passes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Stepping,
    Completed,
    Cancelled,
}

impl RunPhase {
    /// A run exists and has not reached a terminal phase.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused | Self::Stepping)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Stepping => "Step mode",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Flag view of a driver, derived from its [`RunPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFlags {
    pub is_running: bool,
    pub is_paused: bool,
    pub is_step_mode: bool,
    pub step_signal: u64,
    pub speed_ms: u64,
}

impl ControlFlags {
    pub fn project(phase: RunPhase, step_signal: u64, speed_ms: u64) -> Self {
        Self {
            is_running: phase.is_active(),
            is_paused: matches!(phase, RunPhase::Paused | RunPhase::Stepping),
            is_step_mode: phase == RunPhase::Stepping,
            step_signal,
            speed_ms,
        }
    }

    /// True when the interval timer is allowed to drive ticks.
    pub fn timer_enabled(&self) -> bool {
        self.is_running && !self.is_paused && !self.is_step_mode
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { target: i64, index: usize },
    NotFound { target: i64 },
}

impl SearchOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Found { target, .. } => format!("Target {target} Found!"),
            Self::NotFound { target } => format!("Target {target} Not Found."),
        }
    }
}
