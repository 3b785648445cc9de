use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
pub enum VisualizerError {
    #[error("array is empty; generate a new array first")]
    EmptyArray,
    #[error("enter a search target before starting")]
    MissingTarget,
    #[error("Please enter a valid number")]
    InvalidTarget(String),
    #[error("Algorithm not found: {0}")]
    UnknownAlgorithm(String),
    #[error("invalid value list: {0}")]
    InvalidValues(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl VisualizerError {
    /// Errors caused by user input that should be shown inline rather than as a banner.
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::InvalidTarget(_) | Self::MissingTarget)
    }
}

/// Parses a search target the way the target text box accepts it.
pub fn parse_target(input: &str) -> Result<i64, VisualizerError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| VisualizerError::InvalidTarget(trimmed.to_string()))
}

/// Parses a comma or whitespace separated list of integers.
pub fn parse_values(input: &str) -> Result<Vec<i64>, VisualizerError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| VisualizerError::InvalidValues(format!("'{part}' is not an integer")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_input_is_trimmed_before_parsing() {
        assert_eq!(parse_target(" 40 "), Ok(40));
        assert_eq!(parse_target("-7"), Ok(-7));
    }

    #[test]
    fn non_numeric_target_reports_inline_message() {
        let err = parse_target("abc").expect_err("abc is not a number");
        assert!(err.is_inline());
        assert_eq!(err.to_string(), "Please enter a valid number");
    }

    #[test]
    fn value_lists_accept_commas_and_spaces() {
        assert_eq!(parse_values("5,3, 8 1"), Ok(vec![5, 3, 8, 1]));
        assert_eq!(parse_values(""), Ok(vec![]));
    }

    #[test]
    fn value_list_rejects_garbage_entries() {
        let err = parse_values("1,two,3").expect_err("two is not an integer");
        assert_eq!(
            err,
            VisualizerError::InvalidValues("'two' is not an integer".to_string())
        );
    }

    #[test]
    fn errors_serialize_with_code_tag() {
        let json = serde_json::to_value(VisualizerError::UnknownAlgorithm("bogo".into()))
            .expect("serialize");
        assert_eq!(json["code"], "unknown_algorithm");
        assert_eq!(json["detail"], "bogo");
    }
}
