//! Strict JSON request decoding.
//!
//! Unlike plain `serde_json::from_slice`, which silently drops keys the
//! target does not declare, [`decode_strict`] rejects them at any depth.
//! Strictness comes from the target's own `Deserialize` impl: every key it
//! skips (undeclared, or `#[serde(skip)]`) is an unknown field. No
//! `#[serde(deny_unknown_fields)]` is needed; types that carry it fail
//! inside serde instead and are reported as malformed.
//!
//! The body must be exactly one JSON value. Trailing data after it is
//! rejected as malformed rather than left unread.

use serde::de::DeserializeOwned;
use serde_ignored::Path;

use crate::error::DecodeError;

/// Decode `body` into a `T`, rejecting fields `T` does not declare.
///
/// `None` means the request carried no body at all and fails before any
/// parsing. A present but empty body is malformed JSON. The first unknown
/// field is reported by its dotted path, e.g. `address.zip` or `items.2.sku`.
pub fn decode_strict<T>(body: Option<&[u8]>) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    let bytes = body.ok_or(DecodeError::EmptyBody)?;

    let mut unknown: Option<String> = None;
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde_ignored::deserialize(&mut de, |path| {
        if unknown.is_none() {
            unknown = Some(dotted(&path));
        }
    })
    .map_err(DecodeError::MalformedJson)?;
    de.end().map_err(DecodeError::MalformedJson)?;

    match unknown {
        Some(field) => Err(DecodeError::UnknownField(field)),
        None => Ok(value),
    }
}

/// Like [`decode_strict`], but writes into an existing value.
///
/// `target` is only assigned on success.
pub fn decode_strict_into<T>(body: Option<&[u8]>, target: &mut T) -> Result<(), DecodeError>
where
    T: DeserializeOwned,
{
    *target = decode_strict(body)?;
    Ok(())
}

/// Render an ignored path as dot-separated keys and indices, dropping the
/// `Option`/newtype wrappers that carry no name.
fn dotted(path: &Path<'_>) -> String {
    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => join(parent, &index.to_string()),
        Path::Map { parent, key } => join(parent, key),
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => dotted(parent),
    }
}

fn join(parent: &Path<'_>, segment: &str) -> String {
    let prefix = dotted(parent);
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
