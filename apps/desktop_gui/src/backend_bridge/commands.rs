//! Backend commands queued from UI to backend worker.

use shared::{
    domain::{AlgorithmKind, SessionId},
    protocol::DriverCommand,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Replaces the active driver with a fresh one for `algorithm`.
    Open {
        session: SessionId,
        algorithm: AlgorithmKind,
        values: Vec<i64>,
        speed_ms: u64,
    },
    Control {
        session: SessionId,
        command: DriverCommand,
    },
    Close {
        session: SessionId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Control { command, .. } => command.name(),
            Self::Close { .. } => "close",
        }
    }
}
