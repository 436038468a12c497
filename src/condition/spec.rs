// SPDX-License-Identifier: MIT

//! Comparison specification types

use crate::variable::{Variable, VariableKind};
use serde::{Deserialize, Serialize};

/// Comparison operators
///
/// Each variable kind supports a subset; see [`CompareOp::is_valid_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// ==
    EqualTo,
    /// !=
    NotEqualTo,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// magnitude > (Vector3 length against a float operand)
    MagnitudeGreaterThan,
}

impl CompareOp {
    /// Whether this operator is part of the legal subset for a kind.
    ///
    /// Evaluating an operator outside the legal subset is not an error; it
    /// yields `false`. This predicate exists so authoring layers can reject
    /// such conditions up front.
    pub fn is_valid_for(&self, kind: VariableKind) -> bool {
        match kind {
            VariableKind::Boolean | VariableKind::String => {
                matches!(self, CompareOp::EqualTo | CompareOp::NotEqualTo)
            }
            VariableKind::Integer | VariableKind::PopUp | VariableKind::Float => matches!(
                self,
                CompareOp::EqualTo
                    | CompareOp::NotEqualTo
                    | CompareOp::LessThan
                    | CompareOp::GreaterThan
            ),
            VariableKind::Vector3 => {
                matches!(self, CompareOp::EqualTo | CompareOp::MagnitudeGreaterThan)
            }
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::EqualTo => write!(f, "=="),
            CompareOp::NotEqualTo => write!(f, "!="),
            CompareOp::LessThan => write!(f, "<"),
            CompareOp::GreaterThan => write!(f, ">"),
            CompareOp::MagnitudeGreaterThan => write!(f, "magnitude >"),
        }
    }
}

/// What to compare the subject variable against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A literal value configured on the spec. Its kind is fixed by the
    /// subject at evaluation time; integer literals widen to Float or PopUp
    /// subjects.
    Literal(Variable),
    /// The name of a second live variable. Resolution happens in the caller;
    /// the evaluator only sees the resolved value.
    Reference(String),
}

/// A configured condition to test a variable against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSpec {
    pub operand: Operand,
    pub op: CompareOp,
    /// Meaningful only for String comparisons.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn default_case_sensitive() -> bool {
    true
}

impl ComparisonSpec {
    /// Spec comparing against a literal value, case-sensitive.
    pub fn literal(op: CompareOp, value: impl Into<Variable>) -> Self {
        Self {
            operand: Operand::Literal(value.into()),
            op,
            case_sensitive: true,
        }
    }

    /// Spec comparing against a second live variable by name.
    pub fn reference(op: CompareOp, name: impl Into<String>) -> Self {
        Self {
            operand: Operand::Reference(name.into()),
            op,
            case_sensitive: true,
        }
    }

    /// Set case sensitivity for String comparisons.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// A parsed condition: a subject variable name plus the spec to test it with.
///
/// The caller resolves `subject` (and any [`Operand::Reference`]) in its own
/// variable store, then hands the resolved values to
/// [`evaluate`](crate::condition::evaluate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub subject: String,
    #[serde(flatten)]
    pub spec: ComparisonSpec,
}
