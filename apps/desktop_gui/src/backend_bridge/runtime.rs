//! Runtime bridge between UI command queue and backend event intake.
//!
//! A dedicated thread owns a tokio runtime and at most one driver task. Driver
//! events are tagged with the session that produced them and forwarded to the
//! UI queue.

use std::{thread, time::Duration};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::{domain::SessionId, protocol::DriverEvent};
use step_driver::{spawn_driver, Driver, DriverHandle};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

const FULL_QUEUE_RETRY: Duration = Duration::from_millis(16);

struct ActiveSession {
    session: SessionId,
    handle: DriverHandle,
    forwarder: JoinHandle<()>,
}

impl ActiveSession {
    async fn close(self) {
        let session = self.session;
        if let Some(driver) = self.handle.shutdown().await {
            tracing::debug!(session = session.0, units = driver.units(), "driver closed");
        }
        self.forwarder.abort();
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("failed to build visualizer runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Visualizer worker ready".to_string()));

            let mut active: Option<ActiveSession> = None;
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Open {
                        session,
                        algorithm,
                        values,
                        speed_ms,
                    } => {
                        if let Some(previous) = active.take() {
                            previous.close().await;
                        }
                        let driver = Driver::new(algorithm, &values, speed_ms);
                        let (handle, events) = spawn_driver(driver);
                        let forwarder = tokio::spawn(forward_events(session, events, ui_tx.clone()));
                        tracing::info!(session = session.0, %algorithm, len = values.len(), "driver opened");
                        active = Some(ActiveSession {
                            session,
                            handle,
                            forwarder,
                        });
                    }
                    BackendCommand::Control { session, command } => {
                        let Some(current) = active.as_ref().filter(|a| a.session == session) else {
                            tracing::debug!(session = session.0, command = command.name(), "dropping command for stale session");
                            continue;
                        };
                        if current.handle.send(command).await.is_err() {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                                UiErrorContext::Driver,
                                "driver task stopped unexpectedly; reopen the page",
                            )));
                        }
                    }
                    BackendCommand::Close { session } => {
                        if active.as_ref().is_some_and(|a| a.session == session) {
                            if let Some(current) = active.take() {
                                current.close().await;
                            }
                        }
                    }
                }
            }

            if let Some(current) = active.take() {
                current.close().await;
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

async fn forward_events(
    session: SessionId,
    mut events: mpsc::UnboundedReceiver<DriverEvent>,
    ui_tx: Sender<UiEvent>,
) {
    while let Some(event) = events.recv().await {
        if !deliver(&ui_tx, session, event).await {
            break;
        }
    }
}

/// Queues one driver event for the UI. Returns false once the UI is gone.
///
/// A full queue drops intermediate snapshots, but `Finished` and `Rejected`
/// wait for room so the page never misses the end of a run.
async fn deliver(ui_tx: &Sender<UiEvent>, session: SessionId, event: DriverEvent) -> bool {
    let terminal = !matches!(event, DriverEvent::Snapshot(_));
    let mut pending = UiEvent::Driver { session, event };
    loop {
        match ui_tx.try_send(pending) {
            Ok(()) => return true,
            Err(TrySendError::Disconnected(_)) => return false,
            Err(TrySendError::Full(returned)) => {
                if !terminal {
                    tracing::warn!(session = session.0, "ui event queue full; dropping snapshot");
                    return true;
                }
                pending = returned;
                tokio::time::sleep(FULL_QUEUE_RETRY).await;
            }
        }
    }
}
