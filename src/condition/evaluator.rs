//! Condition evaluator
//!
//! Pure comparison of an already-resolved subject variable against a
//! [`ComparisonSpec`]. Resolution failures and kind mismatches come back as
//! [`EvalError`]; operator/kind combinations outside the legal subset are not
//! errors and evaluate to `false`, so callers always get a usable branch
//! decision.

use super::spec::{CompareOp, ComparisonSpec, Operand};
use crate::error::EvalError;
use crate::tokens::TokenExpander;
use crate::variable::{Variable, VariableKind};

/// Relative tolerance for Float equality.
///
/// EqualTo/NotEqualTo on floats compare within
/// `max(FLOAT_RELATIVE_TOLERANCE * max(|a|, |b|), 8 * f32::EPSILON)`,
/// so accumulated single-precision rounding noise (`0.1 + 0.2` vs `0.3`)
/// still compares equal while `1.0` vs `1.00001` does not.
pub const FLOAT_RELATIVE_TOLERANCE: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    let tolerance = f32::max(
        FLOAT_RELATIVE_TOLERANCE * f32::max(a.abs(), b.abs()),
        f32::EPSILON * 8.0,
    );
    (b - a).abs() < tolerance
}

/// Evaluate a condition against a resolved subject variable.
///
/// `compare_to` is the resolved second live variable, when the caller has
/// one; it takes precedence over the spec's literal operand and must have the
/// same kind as the subject. A [`Operand::Reference`] spec with no
/// `compare_to` fails with [`EvalError::ComparandNotFound`].
///
/// Literal String operands run through `expander` before the compare, so
/// configured text with `{tag}` tokens matches the rendered form. Live
/// compare variables are used as-is.
pub fn evaluate(
    subject: Option<&Variable>,
    compare_to: Option<&Variable>,
    spec: &ComparisonSpec,
    expander: &dyn TokenExpander,
) -> Result<bool, EvalError> {
    let subject = subject.ok_or(EvalError::SubjectNotFound)?;

    let (compare, from_literal) = match (compare_to, &spec.operand) {
        (Some(live), _) => {
            if live.kind() != subject.kind() {
                return Err(EvalError::type_mismatch(subject.kind(), live.kind()));
            }
            (live.clone(), false)
        }
        (None, Operand::Literal(literal)) => {
            (resolve_literal(literal, subject.kind(), spec.op)?, true)
        }
        (None, Operand::Reference(name)) => {
            return Err(EvalError::comparand_not_found(name.clone()));
        }
    };

    Ok(compare_values(subject, &compare, spec, from_literal, expander))
}

/// Fix a literal operand's kind against the subject's kind.
///
/// Integer literals widen to Float and PopUp subjects (and PopUp narrows back
/// to Integer), since authored text cannot distinguish those. Under
/// `MagnitudeGreaterThan` a Vector3 subject takes a float operand instead of
/// a vector.
fn resolve_literal(
    literal: &Variable,
    subject_kind: VariableKind,
    op: CompareOp,
) -> Result<Variable, EvalError> {
    if subject_kind == VariableKind::Vector3 && op == CompareOp::MagnitudeGreaterThan {
        return match literal {
            Variable::Float(f) => Ok(Variable::Float(*f)),
            Variable::Integer(i) => Ok(Variable::Float(*i as f32)),
            other => Err(EvalError::type_mismatch(VariableKind::Float, other.kind())),
        };
    }

    match (literal, subject_kind) {
        (lit, kind) if lit.kind() == kind => Ok(lit.clone()),
        (Variable::Integer(i), VariableKind::Float) => Ok(Variable::Float(*i as f32)),
        (Variable::Integer(i), VariableKind::PopUp) => Ok(Variable::PopUp(*i)),
        (Variable::PopUp(i), VariableKind::Integer) => Ok(Variable::Integer(*i)),
        (lit, kind) => Err(EvalError::type_mismatch(kind, lit.kind())),
    }
}

fn compare_values(
    subject: &Variable,
    compare: &Variable,
    spec: &ComparisonSpec,
    from_literal: bool,
    expander: &dyn TokenExpander,
) -> bool {
    match (subject, compare) {
        (Variable::Boolean(a), Variable::Boolean(b)) => {
            // Historical integer encoding: false=0, true=1
            compare_ints(*a as i32, *b as i32, spec.op)
        }
        (Variable::Integer(a), Variable::Integer(b)) => compare_ints(*a, *b, spec.op),
        (Variable::PopUp(a), Variable::PopUp(b)) => compare_ints(*a, *b, spec.op),
        (Variable::Float(a), Variable::Float(b)) => compare_floats(*a, *b, spec.op),
        (Variable::String(a), Variable::String(b)) => {
            let b = if from_literal {
                expander.expand(b)
            } else {
                b.clone()
            };
            compare_strings(a, &b, spec)
        }
        (Variable::Vector3(v), Variable::Vector3(w)) => match spec.op {
            CompareOp::EqualTo => v == w,
            _ => false,
        },
        (Variable::Vector3(v), Variable::Float(f)) => match spec.op {
            CompareOp::MagnitudeGreaterThan => v.magnitude() > *f,
            _ => false,
        },
        // Remaining combinations are outside the legal subset
        _ => false,
    }
}

fn compare_ints(a: i32, b: i32, op: CompareOp) -> bool {
    match op {
        CompareOp::EqualTo => a == b,
        CompareOp::NotEqualTo => a != b,
        CompareOp::LessThan => a < b,
        CompareOp::GreaterThan => a > b,
        CompareOp::MagnitudeGreaterThan => false,
    }
}

fn compare_floats(a: f32, b: f32, op: CompareOp) -> bool {
    match op {
        CompareOp::EqualTo => approx_eq(a, b),
        CompareOp::NotEqualTo => !approx_eq(a, b),
        CompareOp::LessThan => a < b,
        CompareOp::GreaterThan => a > b,
        CompareOp::MagnitudeGreaterThan => false,
    }
}

fn compare_strings(a: &str, b: &str, spec: &ComparisonSpec) -> bool {
    let (a, b) = if spec.case_sensitive {
        (a.to_string(), b.to_string())
    } else {
        (a.to_lowercase(), b.to_lowercase())
    };
    match spec.op {
        CompareOp::EqualTo => a == b,
        CompareOp::NotEqualTo => a != b,
        _ => false,
    }
}

/// Evaluate a condition, applying the default failure policy.
///
/// Logs a warning through the `log` facade on a failed evaluation and falls
/// through to `false`, so workflow callers that only branch on the final
/// boolean can use this directly. [`evaluate`] itself never logs.
pub fn check(
    subject: Option<&Variable>,
    compare_to: Option<&Variable>,
    spec: &ComparisonSpec,
    expander: &dyn TokenExpander,
) -> bool {
    match evaluate(subject, compare_to, spec, expander) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Condition evaluation failed: {}", e);
            false
        }
    }
}
