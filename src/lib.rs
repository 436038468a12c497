// SPDX-License-Identifier: MIT

//! Typed variable condition evaluation for branching game workflows.
//!
//! Game scripting systems track named, typed variables (booleans, counters,
//! floats, text, vectors, pop-up selections) and branch on conditions such as
//! `health > 50` or `door_state == 'open'`. This crate provides the
//! evaluation core: a [`Variable`] sum type, a [`ComparisonSpec`] describing
//! what to test a variable against, and a pure [`evaluate`] function that
//! maps the pair to a boolean.
//!
//! Variable resolution is deliberately not part of this crate: callers look
//! up variables in their own state store and hand the evaluator
//! already-resolved values. String comparison runs operand text through a
//! caller-supplied [`TokenExpander`] first, so in-game `{tag}` tokens expand
//! the same way they do when text is rendered.

pub mod condition;
pub mod error;
pub mod tokens;
pub mod variable;

pub use condition::{check, evaluate, parse, CompareOp, ComparisonSpec, Condition, Operand};
pub use error::{EvalError, ParseError};
pub use tokens::{MapExpander, NoopExpander, TokenExpander};
pub use variable::{Variable, VariableKind, Vec3};
