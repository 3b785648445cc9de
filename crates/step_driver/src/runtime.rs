//! Async driver loop: one task per open algorithm page.
//!
//! The task waits on its command channel and an interval timer. The timer
//! branch is only polled while the run is timed (`Running`), so paused and
//! step-mode runs sleep until the next command arrives.

use std::time::Duration;

use shared::protocol::{DriverCommand, DriverEvent};
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, Interval, MissedTickBehavior},
};

use crate::{Driver, Tick};

const COMMAND_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct DriverHandle {
    commands: mpsc::Sender<DriverCommand>,
    task: JoinHandle<Driver>,
}

impl DriverHandle {
    pub fn try_send(
        &self,
        command: DriverCommand,
    ) -> Result<(), mpsc::error::TrySendError<DriverCommand>> {
        self.commands.try_send(command)
    }

    pub async fn send(
        &self,
        command: DriverCommand,
    ) -> Result<(), mpsc::error::SendError<DriverCommand>> {
        self.commands.send(command).await
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the loop and hands back the driver in its final state.
    pub async fn shutdown(self) -> Option<Driver> {
        let _ = self.commands.send(DriverCommand::Shutdown).await;
        self.task.await.ok()
    }
}

/// Spawns [`drive`] on the current runtime.
pub fn spawn_driver(driver: Driver) -> (DriverHandle, mpsc::UnboundedReceiver<DriverEvent>) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CAPACITY);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(drive(driver, command_rx, event_tx));
    (
        DriverHandle {
            commands: command_tx,
            task,
        },
        event_rx,
    )
}

fn ticker(speed_ms: u64) -> Interval {
    let period = Duration::from_millis(speed_ms);
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Runs until `Shutdown`, until the command sender is dropped, or until
/// nobody listens for events. Emits a snapshot on entry and after every
/// command and unit of work.
pub async fn drive(
    mut driver: Driver,
    mut commands: mpsc::Receiver<DriverCommand>,
    events: mpsc::UnboundedSender<DriverEvent>,
) -> Driver {
    let algorithm = driver.algorithm();
    let mut interval = ticker(driver.speed_ms());

    if events.send(DriverEvent::Snapshot(driver.snapshot())).is_err() {
        return driver;
    }

    loop {
        let timed = driver.flags().timer_enabled();

        let event = tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    tracing::debug!(%algorithm, "command channel closed");
                    break;
                };
                if command == DriverCommand::Shutdown {
                    break;
                }
                tracing::debug!(%algorithm, command = command.name(), "driver command");

                let speed_before = driver.speed_ms();
                let event = apply(&mut driver, command);
                if (!timed && driver.flags().timer_enabled()) || driver.speed_ms() != speed_before {
                    interval = ticker(driver.speed_ms());
                }
                event
            }
            _ = interval.tick(), if timed => match driver.tick() {
                Some(tick) => tick_event(&driver, tick),
                None => continue,
            },
        };

        if events.send(event).is_err() {
            tracing::debug!(%algorithm, "event receiver dropped");
            break;
        }
    }

    driver.cancel();
    driver
}

fn apply(driver: &mut Driver, command: DriverCommand) -> DriverEvent {
    let result = match command {
        DriverCommand::Start => driver.start().map(|_| ()),
        DriverCommand::PauseOrResume => {
            driver.pause_or_resume();
            Ok(())
        }
        DriverCommand::EnterStepMode => driver.enter_step_mode().map(|_| ()),
        DriverCommand::Step => {
            if let Some(tick) = driver.step() {
                return tick_event(driver, tick);
            }
            Ok(())
        }
        DriverCommand::Reset { values } => {
            driver.reset(&values);
            Ok(())
        }
        DriverCommand::SetSpeed { speed_ms } => {
            driver.set_speed(speed_ms);
            Ok(())
        }
        DriverCommand::SetTarget { target } => {
            driver.set_target(target);
            Ok(())
        }
        DriverCommand::Shutdown => Ok(()),
    };

    match result {
        Ok(()) => DriverEvent::Snapshot(driver.snapshot()),
        Err(err) => {
            tracing::warn!(algorithm = %driver.algorithm(), error = %err, "driver command rejected");
            DriverEvent::Rejected(err)
        }
    }
}

fn tick_event(driver: &Driver, tick: Tick) -> DriverEvent {
    match tick {
        Tick::Unit(_) => DriverEvent::Snapshot(driver.snapshot()),
        Tick::Finished(outcome) => DriverEvent::Finished {
            snapshot: driver.snapshot(),
            outcome,
        },
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
