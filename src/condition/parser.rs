//! Condition expression parser
//!
//! Parses conditions like:
//! - `door_state == 'open'`
//! - `health > 50`
//! - `offset magnitude > 2.5`
//! - `coins == bank_coins` (right side names a second live variable)

use super::spec::{CompareOp, ComparisonSpec, Condition, Operand};
use crate::error::ParseError;
use crate::variable::{Variable, Vec3};

/// Parse a condition string into a [`Condition`].
///
/// The right-hand side is a literal (`true`, `42`, `1.5`, `'text'`,
/// `(x, y, z)`) or a bare identifier naming a second live variable. Parsed
/// conditions default to case-sensitive string comparison.
pub fn parse(input: &str) -> Result<Condition, ParseError> {
    let input = input.trim();

    // Try operators in order of length (longest first)
    let operators = [
        (" magnitude > ", CompareOp::MagnitudeGreaterThan),
        ("!=", CompareOp::NotEqualTo),
        ("==", CompareOp::EqualTo),
        (">", CompareOp::GreaterThan),
        ("<", CompareOp::LessThan),
    ];

    for (op_str, op) in operators {
        if let Some(pos) = find_operator(input, op_str) {
            let subject = parse_subject(&input[..pos])?;
            let operand = parse_operand(input[pos + op_str.len()..].trim())?;
            return Ok(Condition {
                subject,
                spec: ComparisonSpec {
                    operand,
                    op,
                    case_sensitive: true,
                },
            });
        }
    }

    Err(ParseError::InvalidCondition(input.to_string()))
}

fn find_operator(input: &str, op: &str) -> Option<usize> {
    let mut in_string = false;
    for (i, c) in input.char_indices() {
        if c == '\'' || c == '"' {
            in_string = !in_string;
        } else if !in_string && input[i..].starts_with(op) {
            return Some(i);
        }
    }
    None
}

fn parse_subject(input: &str) -> Result<String, ParseError> {
    let input = input.trim();
    let valid = !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(input.to_string())
    } else {
        Err(ParseError::InvalidSubject(input.to_string()))
    }
}

fn parse_operand(input: &str) -> Result<Operand, ParseError> {
    // Boolean
    if input == "true" {
        return Ok(Operand::Literal(Variable::Boolean(true)));
    }
    if input == "false" {
        return Ok(Operand::Literal(Variable::Boolean(false)));
    }

    // String (single or double quotes)
    if input.len() >= 2
        && ((input.starts_with('\'') && input.ends_with('\''))
            || (input.starts_with('"') && input.ends_with('"')))
    {
        let s = &input[1..input.len() - 1];
        return Ok(Operand::Literal(Variable::String(s.to_string())));
    }

    // Vector3: (x, y, z)
    if input.starts_with('(') && input.ends_with(')') {
        return parse_vector(&input[1..input.len() - 1])
            .map(|v| Operand::Literal(Variable::Vector3(v)))
            .ok_or_else(|| ParseError::InvalidOperand(input.to_string()));
    }

    // Integer before float, so "50" stays an Integer literal
    if let Ok(i) = input.parse::<i32>() {
        return Ok(Operand::Literal(Variable::Integer(i)));
    }
    if let Ok(f) = input.parse::<f32>() {
        return Ok(Operand::Literal(Variable::Float(f)));
    }

    // Bare identifier: reference to a second live variable
    if !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
    {
        return Ok(Operand::Reference(input.to_string()));
    }

    Err(ParseError::InvalidOperand(input.to_string()))
}

fn parse_vector(inner: &str) -> Option<Vec3> {
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let x = parts[0].trim().parse::<f32>().ok()?;
    let y = parts[1].trim().parse::<f32>().ok()?;
    let z = parts[2].trim().parse::<f32>().ok()?;
    Some(Vec3::new(x, y, z))
}
