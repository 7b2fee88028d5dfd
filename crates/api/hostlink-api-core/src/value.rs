//! Value: runtime attribute values exchanged with host applications.
//! Scalars use f32/i32, matching the numeric types hosts expose.

use serde::{Deserialize, Serialize};

/// Column-major 4x4 identity, the neutral transform matrix.
pub const IDENTITY_MATRIX: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Lightweight kind enum for pattern-matching and quick dispatch without
/// touching the payload. The full typing information lives on [`Value`]
/// itself; this helper mirrors the variant set one-to-one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    ColorRgba,
    Matrix,
    Text,
    Enum,
    StringArray,
    FloatArray,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Value {
    /// Boolean attribute (visibility flags, lock states)
    Bool(bool),

    /// 32-bit integer attribute
    Int(i32),

    /// Scalar float attribute
    Float(f32),

    /// 2D vector (UV coordinates)
    Vec2([f32; 2]),

    /// 3D vector (translation, rotation in degrees, scale)
    Vec3([f32; 3]),

    /// 4D vector (quaternions, tangents)
    Vec4([f32; 4]),

    /// RGBA color (linear by convention)
    ColorRgba([f32; 4]),

    /// 4x4 transform matrix, column-major
    Matrix([f32; 16]),

    /// Text / string; node names, file paths
    Text(String),

    /// Enum attribute: selected index plus its label
    Enum { index: u32, label: String },

    /// String array attribute
    StringArray(Vec<String>),

    /// Variable-length numeric array (weights, curve knots)
    FloatArray(Vec<f32>),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::ColorRgba(_) => ValueKind::ColorRgba,
            Value::Matrix(_) => ValueKind::Matrix,
            Value::Text(_) => ValueKind::Text,
            Value::Enum { .. } => ValueKind::Enum,
            Value::StringArray(_) => ValueKind::StringArray,
            Value::FloatArray(_) => ValueKind::FloatArray,
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    pub fn int(v: i32) -> Self {
        Value::Int(v)
    }

    pub fn vec3(x: f32, y: f32, z: f32) -> Self {
        Value::Vec3([x, y, z])
    }

    pub fn color(r: f32, g: f32, b: f32, a: f32) -> Self {
        Value::ColorRgba([r, g, b, a])
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn identity_matrix() -> Self {
        Value::Matrix(IDENTITY_MATRIX)
    }

    /// Scalar accessor; `Int` widens to float so numeric attribute reads
    /// do not need to branch on the host's storage type.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
