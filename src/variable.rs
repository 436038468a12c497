// SPDX-License-Identifier: MIT

//! Typed variable values
//!
//! A [`Variable`] is a tagged value: the discriminant carries the kind, the
//! payload carries the data, so a kind/payload mismatch is unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind discriminant of a [`Variable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    Boolean,
    Integer,
    Float,
    String,
    Vector3,
    /// Integer index into an external pop-up label table.
    PopUp,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Boolean => write!(f, "Boolean"),
            VariableKind::Integer => write!(f, "Integer"),
            VariableKind::Float => write!(f, "Float"),
            VariableKind::String => write!(f, "String"),
            VariableKind::Vector3 => write!(f, "Vector3"),
            VariableKind::PopUp => write!(f, "PopUp"),
        }
    }
}

/// A three-component float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A typed variable value.
///
/// Serializes adjacently tagged (`kind` / `value`) so variables embed
/// naturally in YAML/JSON definition files:
///
/// ```yaml
/// kind: Integer
/// value: 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Variable {
    Boolean(bool),
    Integer(i32),
    Float(f32),
    String(String),
    Vector3(Vec3),
    /// Selected index of a pop-up list; the labels live elsewhere.
    PopUp(i32),
}

impl Variable {
    /// The kind discriminant of this value.
    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Boolean(_) => VariableKind::Boolean,
            Variable::Integer(_) => VariableKind::Integer,
            Variable::Float(_) => VariableKind::Float,
            Variable::String(_) => VariableKind::String,
            Variable::Vector3(_) => VariableKind::Vector3,
            Variable::PopUp(_) => VariableKind::PopUp,
        }
    }

    /// Create a Vector3 variable from components.
    pub fn vector3(x: f32, y: f32, z: f32) -> Self {
        Variable::Vector3(Vec3::new(x, y, z))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Boolean(b) => write!(f, "{}", b),
            Variable::Integer(i) => write!(f, "{}", i),
            Variable::Float(x) => write!(f, "{}", x),
            Variable::String(s) => write!(f, "{}", s),
            Variable::Vector3(v) => write!(f, "{}", v),
            Variable::PopUp(i) => write!(f, "{}", i),
        }
    }
}

impl From<bool> for Variable {
    fn from(b: bool) -> Self {
        Variable::Boolean(b)
    }
}

impl From<i32> for Variable {
    fn from(i: i32) -> Self {
        Variable::Integer(i)
    }
}

impl From<f32> for Variable {
    fn from(x: f32) -> Self {
        Variable::Float(x)
    }
}

impl From<&str> for Variable {
    fn from(s: &str) -> Self {
        Variable::String(s.to_string())
    }
}

impl From<String> for Variable {
    fn from(s: String) -> Self {
        Variable::String(s)
    }
}

impl From<Vec3> for Variable {
    fn from(v: Vec3) -> Self {
        Variable::Vector3(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_payload() {
        assert_eq!(Variable::Boolean(true).kind(), VariableKind::Boolean);
        assert_eq!(Variable::Integer(3).kind(), VariableKind::Integer);
        assert_eq!(Variable::Float(0.5).kind(), VariableKind::Float);
        assert_eq!(Variable::from("hi").kind(), VariableKind::String);
        assert_eq!(Variable::vector3(1.0, 2.0, 3.0).kind(), VariableKind::Vector3);
        assert_eq!(Variable::PopUp(2).kind(), VariableKind::PopUp);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vec3::new(0.0, 0.0, 3.0).magnitude(), 3.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vec3::default().magnitude(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Variable::Boolean(true).to_string(), "true");
        assert_eq!(Variable::Integer(-4).to_string(), "-4");
        assert_eq!(Variable::vector3(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_serde_round_trip() {
        let vars = vec![
            Variable::Boolean(true),
            Variable::Integer(-7),
            Variable::Float(2.5),
            Variable::from("door {state}"),
            Variable::vector3(0.0, 1.0, -1.0),
            Variable::PopUp(2),
        ];
        for var in vars {
            let json = serde_json::to_string(&var).unwrap();
            let back: Variable = serde_json::from_str(&json).unwrap();
            assert_eq!(back, var);
        }
    }

    #[test]
    fn test_serde_tagged_shape() {
        let json = serde_json::to_value(&Variable::Integer(42)).unwrap();
        assert_eq!(json["kind"], "Integer");
        assert_eq!(json["value"], 42);
    }
}
