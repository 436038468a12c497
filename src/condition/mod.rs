// SPDX-License-Identifier: MIT

//! Condition specification and evaluation
//!
//! This module provides parsing and evaluation of variable conditions.
//! Conditions are simple comparisons like:
//! - `door_state == 'open'`
//! - `health > 50`
//! - `offset magnitude > 2.5`

mod evaluator;
mod parser;
mod spec;

pub use evaluator::{check, evaluate};
pub use parser::parse;
pub use spec::{CompareOp, ComparisonSpec, Condition, Operand};
