//! Per-page view state folded from driver events.

use shared::{
    domain::{AlgorithmKind, ControlFlags, RunPhase, SessionId, DEFAULT_SPEED_MS},
    error::{parse_target, VisualizerError},
    protocol::{DriverCommand, DriverEvent, DriverSnapshot, RunOutcome},
};

use crate::controller::events::UiError;

/// Which control buttons are clickable, and what the pause button says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAvailability {
    pub play: bool,
    pub pause: bool,
    pub pause_label: &'static str,
    pub step_mode: bool,
    pub step: bool,
}

#[derive(Debug, Clone)]
pub struct PageState {
    session: SessionId,
    algorithm: AlgorithmKind,
    snapshot: Option<DriverSnapshot>,
    outcome: Option<RunOutcome>,
    pub target_input: String,
    inline_message: Option<String>,
    error: Option<UiError>,
}

impl PageState {
    pub fn new(session: SessionId, algorithm: AlgorithmKind) -> Self {
        Self {
            session,
            algorithm,
            snapshot: None,
            outcome: None,
            target_input: String::new(),
            inline_message: None,
            error: None,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn snapshot(&self) -> Option<&DriverSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&UiError> {
        self.error.as_ref()
    }

    pub fn heading(&self) -> String {
        format!("{} Visualization", self.algorithm.label().to_uppercase())
    }

    pub fn flags(&self) -> ControlFlags {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.flags)
            .unwrap_or_else(|| ControlFlags::project(RunPhase::Idle, 0, DEFAULT_SPEED_MS))
    }

    pub fn phase(&self) -> RunPhase {
        self.snapshot
            .as_ref()
            .map_or(RunPhase::Idle, |snapshot| snapshot.phase)
    }

    /// Message under the search box: input problems first, then the driver's own.
    pub fn search_message(&self) -> Option<&str> {
        self.inline_message.as_deref().or_else(|| {
            self.snapshot
                .as_ref()
                .and_then(|snapshot| snapshot.message.as_deref())
        })
    }

    pub fn controls(&self) -> ControlAvailability {
        let flags = self.flags();
        let phase = self.phase();
        ControlAvailability {
            play: !flags.is_running,
            pause: flags.is_running,
            pause_label: if flags.is_paused { "Resume" } else { "Pause" },
            step_mode: !flags.is_step_mode,
            step: phase == RunPhase::Stepping,
        }
    }

    /// Folds one driver event in. Events from other sessions are ignored.
    pub fn apply(&mut self, session: SessionId, event: DriverEvent) -> bool {
        if session != self.session {
            tracing::debug!(session = session.0, current = self.session.0, "ignoring stale driver event");
            return false;
        }
        match event {
            DriverEvent::Snapshot(snapshot) => {
                if snapshot.phase == RunPhase::Idle && snapshot.units == 0 {
                    self.outcome = None;
                }
                self.snapshot = Some(snapshot);
                self.error = None;
            }
            DriverEvent::Finished { snapshot, outcome } => {
                self.snapshot = Some(snapshot);
                self.outcome = Some(outcome);
                self.error = None;
            }
            DriverEvent::Rejected(err) => {
                let err = UiError::from_visualizer(&err);
                if err.is_inline() {
                    self.inline_message = Some(err.message().to_string());
                } else {
                    self.error = Some(err);
                }
            }
        }
        true
    }

    /// Validates the target box. On success returns the commands that set the
    /// target and start the search.
    pub fn submit_target(&mut self) -> Result<[DriverCommand; 2], VisualizerError> {
        match parse_target(&self.target_input) {
            Ok(target) => {
                self.inline_message = None;
                Ok([
                    DriverCommand::SetTarget {
                        target: Some(target),
                    },
                    DriverCommand::Start,
                ])
            }
            Err(err) => {
                self.inline_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Clears per-run state before a reset is sent.
    pub fn prepare_reset(&mut self) {
        self.outcome = None;
        self.inline_message = None;
        self.error = None;
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
