use std::fmt;

use shared::{
    domain::{
        clamp_speed_ms, AlgorithmKind, ControlFlags, RunPhase, SearchOutcome, Stats, VisualState,
    },
    error::VisualizerError,
    protocol::{DriverSnapshot, RunOutcome, StepKind},
};

use crate::{algorithms::source_for, listing, Bars, Completion, Step, StepSource};

/// What a single admitted tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Unit(StepKind),
    Finished(RunOutcome),
}

/// One algorithm page's run state: the bars, the active step source, and the
/// play/pause/step state machine gating it.
///
/// The driver never sleeps. Timed running is the caller's job: call
/// [`Driver::tick`] every `speed_ms` while [`Driver::flags`] reports the timer
/// as enabled, and forward user clicks to the control methods.
pub struct Driver {
    algorithm: AlgorithmKind,
    bars: Bars,
    source: Option<Box<dyn StepSource>>,
    stats: Stats,
    phase: RunPhase,
    step_signal: u64,
    admitted: u64,
    speed_ms: u64,
    units: u64,
    last_step: Option<StepKind>,
    target: Option<i64>,
    message: Option<String>,
    outcome: Option<RunOutcome>,
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("algorithm", &self.algorithm)
            .field("phase", &self.phase)
            .field("len", &self.bars.len())
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

fn prepare_values(algorithm: AlgorithmKind, values: &[i64]) -> Bars {
    if algorithm.is_search() {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        Bars::from_values(&sorted)
    } else {
        Bars::from_values(values)
    }
}

fn ready_message(target: i64) -> String {
    format!("Ready to search for {target}")
}

impl Driver {
    pub fn new(algorithm: AlgorithmKind, values: &[i64], speed_ms: u64) -> Self {
        Self {
            algorithm,
            bars: prepare_values(algorithm, values),
            source: None,
            stats: Stats::default(),
            phase: RunPhase::Idle,
            step_signal: 0,
            admitted: 0,
            speed_ms: clamp_speed_ms(speed_ms),
            units: 0,
            last_step: None,
            target: None,
            message: None,
            outcome: None,
        }
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn bars(&self) -> &Bars {
        &self.bars
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn units(&self) -> u64 {
        self.units
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    pub fn flags(&self) -> ControlFlags {
        ControlFlags::project(self.phase, self.step_signal, self.speed_ms)
    }

    /// Begins a fresh run in `Running`. A no-op while a run is active.
    /// Returns whether a run was started.
    pub fn start(&mut self) -> Result<bool, VisualizerError> {
        if self.phase.is_active() {
            return Ok(false);
        }
        self.begin_run(RunPhase::Running)?;
        Ok(true)
    }

    pub fn pause_or_resume(&mut self) -> bool {
        let next = match self.phase {
            RunPhase::Running => RunPhase::Paused,
            RunPhase::Paused | RunPhase::Stepping => RunPhase::Running,
            _ => return false,
        };
        tracing::debug!(algorithm = %self.algorithm, from = ?self.phase, to = ?next, "pause toggled");
        self.phase = next;
        true
    }

    /// Freezes the active run for step-wise advance, or starts a new run that
    /// is already frozen.
    pub fn enter_step_mode(&mut self) -> Result<bool, VisualizerError> {
        match self.phase {
            RunPhase::Stepping => Ok(false),
            RunPhase::Running | RunPhase::Paused => {
                self.phase = RunPhase::Stepping;
                Ok(true)
            }
            RunPhase::Idle | RunPhase::Completed | RunPhase::Cancelled => {
                self.begin_run(RunPhase::Stepping)?;
                Ok(true)
            }
        }
    }

    /// Admits one unit of work. Ignored unless in step mode.
    pub fn step(&mut self) -> Option<Tick> {
        if self.phase != RunPhase::Stepping {
            return None;
        }
        self.step_signal += 1;
        let mut last = None;
        while self.admitted < self.step_signal && self.phase == RunPhase::Stepping {
            self.admitted += 1;
            last = self.perform_unit();
        }
        last
    }

    /// Timer tick. Performs one unit only while timed running.
    pub fn tick(&mut self) -> Option<Tick> {
        if self.phase != RunPhase::Running {
            return None;
        }
        self.perform_unit()
    }

    /// Cancels any active run and loads `values` as the new input.
    pub fn reset(&mut self, values: &[i64]) {
        if self.cancel() {
            tracing::info!(algorithm = %self.algorithm, units = self.units, "run cancelled by reset");
        }
        self.bars = prepare_values(self.algorithm, values);
        self.source = None;
        self.stats = Stats::default();
        self.phase = RunPhase::Idle;
        self.step_signal = 0;
        self.admitted = 0;
        self.units = 0;
        self.last_step = None;
        self.target = None;
        self.message = None;
        self.outcome = None;
        tracing::debug!(algorithm = %self.algorithm, len = values.len(), "array loaded");
    }

    /// Stops the active run where it stands. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.phase = RunPhase::Cancelled;
        self.source = None;
        true
    }

    pub fn set_speed(&mut self, speed_ms: u64) -> u64 {
        self.speed_ms = clamp_speed_ms(speed_ms);
        self.speed_ms
    }

    /// Sets the search target. Ignored while a run is active.
    pub fn set_target(&mut self, target: Option<i64>) -> bool {
        if self.phase.is_active() {
            tracing::debug!(algorithm = %self.algorithm, "target change ignored during run");
            return false;
        }
        self.target = target;
        self.message = target.map(ready_message);
        true
    }

    pub fn snapshot(&self) -> DriverSnapshot {
        DriverSnapshot {
            algorithm: self.algorithm,
            bars: self.bars.elements().to_vec(),
            stats: self.stats,
            phase: self.phase,
            flags: self.flags(),
            units: self.units,
            last_step: self.last_step,
            highlight_line: self
                .last_step
                .and_then(|step| listing::highlight_line(self.algorithm, step)),
            target: self.target,
            message: self.message.clone(),
        }
    }

    /// Drives the run to its end without any gating, starting one if needed.
    pub fn run_to_completion(&mut self) -> Result<RunOutcome, VisualizerError> {
        if !self.phase.is_active() {
            self.begin_run(RunPhase::Running)?;
        }
        loop {
            match self.perform_unit() {
                Some(Tick::Finished(outcome)) => return Ok(outcome),
                Some(Tick::Unit(_)) => {}
                None => return Err(VisualizerError::EmptyArray),
            }
        }
    }

    fn begin_run(&mut self, phase: RunPhase) -> Result<(), VisualizerError> {
        if self.bars.is_empty() {
            return Err(VisualizerError::EmptyArray);
        }
        let source = source_for(self.algorithm, self.bars.len(), self.target)?;

        self.bars.mark_all(VisualState::Default);
        self.source = Some(source);
        self.stats = Stats::default();
        self.step_signal = 0;
        self.admitted = 0;
        self.units = 0;
        self.last_step = None;
        self.outcome = None;
        self.message = self.target.map(ready_message);
        self.phase = phase;

        tracing::info!(
            algorithm = %self.algorithm,
            len = self.bars.len(),
            phase = ?phase,
            "run started"
        );
        Ok(())
    }

    fn perform_unit(&mut self) -> Option<Tick> {
        let source = self.source.as_mut()?;
        let step = source.advance(&mut self.bars, &mut self.stats);
        self.units += 1;

        let tick = match step {
            Step::Unit(kind) => {
                self.last_step = Some(kind);
                return Some(Tick::Unit(kind));
            }
            Step::Finished(Completion::Sorted) => {
                self.bars.mark_all(VisualState::Sorted);
                self.last_step = Some(StepKind::Finish);
                RunOutcome::Sorted {
                    values: self.bars.values(),
                }
            }
            Step::Finished(Completion::Search(outcome)) => {
                self.last_step = Some(match outcome {
                    SearchOutcome::Found { .. } => StepKind::Found,
                    SearchOutcome::NotFound { .. } => StepKind::NotFound,
                });
                self.message = Some(outcome.message());
                RunOutcome::Search(outcome)
            }
        };

        self.source = None;
        self.phase = RunPhase::Completed;
        self.outcome = Some(tick.clone());
        tracing::info!(
            algorithm = %self.algorithm,
            units = self.units,
            comparisons = self.stats.comparisons,
            "run completed"
        );
        Some(Tick::Finished(tick))
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
