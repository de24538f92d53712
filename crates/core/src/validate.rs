//! Presence checks for request fields.
//!
//! [`validate_non_empty`] only understands text and integers. Any other
//! kind is rejected outright rather than checked for its zero value.

use std::borrow::Cow;
use std::fmt;

use crate::error::ValidationError;

/// The kind of a [`FieldValue`], as reported in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int,
    Float,
    Bool,
    Other(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => f.write_str("string"),
            FieldKind::Int => f.write_str("int"),
            FieldKind::Float => f.write_str("float"),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Other(name) => f.write_str(name),
        }
    }
}

/// A value handed to [`validate_non_empty`]. Text may be borrowed or owned.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Integer(i128),
    Float(f64),
    Bool(bool),
    /// Anything else, named by its kind.
    Other(&'static str),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::String,
            FieldValue::Integer(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Other(name) => FieldKind::Other(*name),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(value: String) -> Self {
        FieldValue::Text(Cow::Owned(value))
    }
}

macro_rules! integer_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue<'_> {
                fn from(value: $ty) -> Self {
                    FieldValue::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_field!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<isize> for FieldValue<'_> {
    fn from(value: isize) -> Self {
        FieldValue::Integer(value as i128)
    }
}

impl From<usize> for FieldValue<'_> {
    fn from(value: usize) -> Self {
        FieldValue::Integer(value as i128)
    }
}

impl From<f32> for FieldValue<'_> {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Check that every value is non-empty, in order, stopping at the first
/// failure.
///
/// - text must contain something other than whitespace
/// - integers must be non-zero
/// - every other kind fails with [`ValidationError::UnsupportedKind`]
pub fn validate_non_empty(values: &[FieldValue<'_>]) -> Result<(), ValidationError> {
    for value in values {
        match value {
            FieldValue::Text(text) if text.trim().is_empty() => {
                return Err(ValidationError::EmptyField)
            }
            FieldValue::Integer(0) => return Err(ValidationError::ZeroField),
            FieldValue::Text(_) | FieldValue::Integer(_) => {}
            other => return Err(ValidationError::UnsupportedKind(other.kind())),
        }
    }
    Ok(())
}

/// Variadic form of [`validate_non_empty`].
///
/// ```
/// use respond_core::validate_non_empty;
///
/// let name = String::from("Ana");
/// assert!(validate_non_empty!(&name, 30).is_ok());
/// assert!(validate_non_empty!("  ").is_err());
/// ```
#[macro_export]
macro_rules! validate_non_empty {
    ($($value:expr),* $(,)?) => {
        $crate::validate::validate_non_empty(&[
            $($crate::validate::FieldValue::from($value)),*
        ])
    };
}
