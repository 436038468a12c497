// SPDX-License-Identifier: MIT

//! Typed error handling for varcheck-rs
//!
//! Evaluation failures are reported, non-fatal conditions: the evaluator
//! returns them to the caller and never aborts. Unrecognized kind/operator
//! combinations are deliberately NOT errors; they evaluate to `false`.

use crate::variable::VariableKind;
use thiserror::Error;

/// A failed condition evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The caller could not resolve the subject variable
    #[error("Subject variable not found")]
    SubjectNotFound,

    /// The spec references a second live variable the caller did not supply
    #[error("Compare variable '{name}' not found")]
    ComparandNotFound { name: String },

    /// Operand kind is incompatible with the subject kind
    #[error("Type mismatch: expected {expected} operand, found {found}")]
    TypeMismatch {
        expected: VariableKind,
        found: VariableKind,
    },
}

impl EvalError {
    /// Create a comparand-not-found error.
    pub fn comparand_not_found(name: impl Into<String>) -> Self {
        Self::ComparandNotFound { name: name.into() }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: VariableKind, found: VariableKind) -> Self {
        Self::TypeMismatch { expected, found }
    }
}

/// A failed condition parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// No comparison operator found in the input
    #[error("Could not parse condition: {0}")]
    InvalidCondition(String),

    /// Right-hand side is not a recognizable literal or identifier
    #[error("Could not parse operand: {0}")]
    InvalidOperand(String),

    /// Subject name is missing or not an identifier
    #[error("Invalid subject name: {0}")]
    InvalidSubject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_error_messages() {
        assert_eq!(
            EvalError::SubjectNotFound.to_string(),
            "Subject variable not found"
        );

        let err = EvalError::comparand_not_found("coins");
        assert!(err.to_string().contains("coins"));

        let err = EvalError::type_mismatch(VariableKind::Integer, VariableKind::String);
        assert!(err.to_string().contains("Integer"));
        assert!(err.to_string().contains("String"));
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::InvalidCondition("this is not valid".to_string());
        assert!(err.to_string().contains("this is not valid"));
    }
}
