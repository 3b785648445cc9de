//! UI/backend events and error modeling for desktop GUI controller.

use shared::{domain::SessionId, error::VisualizerError, protocol::DriverEvent};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    Driver {
        session: SessionId,
        event: DriverEvent,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    /// Bad user input; shown next to the control that caused it.
    Validation,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Driver,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Runtime,
            context,
            message: message.into(),
        }
    }

    pub fn from_visualizer(err: &VisualizerError) -> Self {
        let category = if err.is_inline() {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Runtime
        };
        Self {
            category,
            context: UiErrorContext::Driver,
            message: err.to_string(),
        }
    }

    pub fn is_inline(&self) -> bool {
        self.category == UiErrorCategory::Validation
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_inline() {
        let err = UiError::from_visualizer(&VisualizerError::InvalidTarget("x".into()));
        assert!(err.is_inline());
        assert_eq!(err.message(), "Please enter a valid number");
        assert_eq!(err.context(), UiErrorContext::Driver);
    }

    #[test]
    fn empty_array_is_a_banner_error() {
        let err = UiError::from_visualizer(&VisualizerError::EmptyArray);
        assert_eq!(err.category(), UiErrorCategory::Runtime);
    }
}
