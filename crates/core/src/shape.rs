//! Static shape descriptions and the helpers built on them.
//!
//! Rust has no runtime field reflection, so a type opts in by implementing
//! [`Shape`], normally through [`impl_shape!`](crate::impl_shape). The
//! descriptor lists each field's declared name, optional serialization tag
//! and declared type name; [`describe_field_types`] works from it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ReflectError;

/// Tag value that marks a field as skipped by serialization.
pub const SKIP_TAG: &str = "-";

/// One field of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared in source.
    pub name: &'static str,
    /// Serialization tag, e.g. `"user_name"` or `"user_name,omitempty"`.
    pub tag: Option<&'static str>,
    /// Declared type, as written in source.
    pub type_name: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            type_name,
        }
    }

    pub const fn tagged(name: &'static str, tag: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            tag: Some(tag),
            type_name,
        }
    }

    /// Name the field is keyed by on the wire.
    ///
    /// The first `,`-separated segment of the tag, or the declared name when
    /// there is no tag, the tag is [`SKIP_TAG`], or its first segment is empty.
    ///
    /// An options-only tag such as `",omitempty"` therefore keeps the declared
    /// name, where a literal split on `,` would key the field as `""`. An
    /// empty key is never useful in a field-type map.
    pub fn serialized_name(&self) -> &'static str {
        match self.tag {
            Some(tag) if tag != SKIP_TAG => tag
                .split(',')
                .next()
                .filter(|segment| !segment.is_empty())
                .unwrap_or(self.name),
            _ => self.name,
        }
    }
}

/// Static layout of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeDescriptor {
    /// A record with named fields, in declaration order.
    Struct(Vec<FieldDescriptor>),
    /// A value with no inspectable fields, carrying its type name.
    Scalar(&'static str),
}

impl ShapeDescriptor {
    /// Declared fields, or `None` for scalars.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match self {
            ShapeDescriptor::Struct(fields) => Some(fields),
            ShapeDescriptor::Scalar(_) => None,
        }
    }
}

/// Types that can describe their own field layout.
pub trait Shape {
    fn shape() -> ShapeDescriptor;
}

impl<T: Shape + ?Sized> Shape for &T {
    fn shape() -> ShapeDescriptor {
        T::shape()
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn shape() -> ShapeDescriptor {
        T::shape()
    }
}

macro_rules! scalar_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shape for $ty {
                fn shape() -> ShapeDescriptor {
                    ShapeDescriptor::Scalar(stringify!($ty))
                }
            }
        )*
    };
}

scalar_shape!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl Shape for serde_json::Value {
    fn shape() -> ShapeDescriptor {
        ShapeDescriptor::Scalar("Value")
    }
}

/// Implement [`Shape`] for a record type.
///
/// Fields are listed in declaration order. `as "tag"` gives the
/// serialization tag when it differs from the field name.
///
/// ```
/// use respond_core::impl_shape;
/// use respond_core::shape::describe_field_types;
///
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// impl_shape!(Account {
///     owner as "ownerName": String,
///     balance: i64,
/// });
///
/// let account = Account { owner: "ana".into(), balance: 3 };
/// let text = describe_field_types(&account).unwrap();
/// assert!(text.contains("\"ownerName\": \"String\""));
/// ```
#[macro_export]
macro_rules! impl_shape {
    (@tag) => {
        ::core::option::Option::None
    };
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
    ($ty:ty { $( $field:ident $( as $tag:literal )? : $fty:ty ),* $(,)? }) => {
        impl $crate::shape::Shape for $ty {
            fn shape() -> $crate::shape::ShapeDescriptor {
                $crate::shape::ShapeDescriptor::Struct(::std::vec![
                    $(
                        $crate::shape::FieldDescriptor {
                            name: ::core::stringify!($field),
                            tag: $crate::impl_shape!(@tag $($tag)?),
                            type_name: ::core::stringify!($fty),
                        }
                    ),*
                ])
            }
        }
    };
}

/// Map each serialized field name of `T` to its declared type name.
///
/// When two fields share a serialized name the later one wins.
pub fn field_types<T: Shape + ?Sized>() -> Result<BTreeMap<String, String>, ReflectError> {
    match T::shape() {
        ShapeDescriptor::Struct(fields) => Ok(fields
            .iter()
            .map(|f| (f.serialized_name().to_string(), f.type_name.to_string()))
            .collect()),
        ShapeDescriptor::Scalar(type_name) => Err(ReflectError::UnsupportedShape(type_name)),
    }
}

/// Pretty-printed JSON object of `{serialized name: type name}` for the
/// shape of `example`. Only the type of `example` is inspected.
pub fn describe_field_types<T: Shape + ?Sized>(_example: &T) -> Result<String, ReflectError> {
    let map = field_types::<T>()?;
    Ok(serde_json::to_string_pretty(&map)?)
}

/// Serialize any value to compact JSON text.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String, ReflectError> {
    Ok(serde_json::to_string(value)?)
}
