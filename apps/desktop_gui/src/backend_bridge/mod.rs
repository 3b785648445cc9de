//! Backend bridge: UI command types and the worker thread that owns the drivers.

pub mod commands;
pub mod runtime;
