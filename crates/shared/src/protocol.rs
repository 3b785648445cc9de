use serde::{Deserialize, Serialize};

use crate::{
    domain::{AlgorithmKind, ControlFlags, Element, RunPhase, SearchOutcome, Stats},
    error::VisualizerError,
};

/// The kind of visible work a single tick performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compare,
    Swap,
    Shift,
    Overwrite,
    Select,
    Insert,
    PassComplete,
    PivotPlaced,
    DiscardLower,
    DiscardUpper,
    Found,
    NotFound,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RunOutcome {
    Sorted { values: Vec<i64> },
    Search(SearchOutcome),
}

impl RunOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Sorted { .. } => None,
            Self::Search(outcome) => Some(outcome.message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverSnapshot {
    pub algorithm: AlgorithmKind,
    pub bars: Vec<Element>,
    pub stats: Stats,
    pub phase: RunPhase,
    pub flags: ControlFlags,
    /// Units of work performed since the last reset.
    pub units: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_step: Option<StepKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DriverSnapshot {
    pub fn values(&self) -> Vec<i64> {
        self.bars.iter().map(|bar| bar.value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DriverCommand {
    Start,
    PauseOrResume,
    EnterStepMode,
    Step,
    Reset { values: Vec<i64> },
    SetSpeed { speed_ms: u64 },
    SetTarget { target: Option<i64> },
    Shutdown,
}

impl DriverCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::PauseOrResume => "pause_or_resume",
            Self::EnterStepMode => "enter_step_mode",
            Self::Step => "step",
            Self::Reset { .. } => "reset",
            Self::SetSpeed { .. } => "set_speed",
            Self::SetTarget { .. } => "set_target",
            Self::Shutdown => "shutdown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DriverEvent {
    Snapshot(DriverSnapshot),
    Finished {
        snapshot: DriverSnapshot,
        outcome: RunOutcome,
    },
    Rejected(VisualizerError),
}

impl DriverEvent {
    pub fn snapshot(&self) -> Option<&DriverSnapshot> {
        match self {
            Self::Snapshot(snapshot) | Self::Finished { snapshot, .. } => Some(snapshot),
            Self::Rejected(_) => None,
        }
    }
}
