//! Data model, errors, and the UI/driver protocol shared by every crate in the workspace.

pub mod domain;
pub mod error;
pub mod protocol;
