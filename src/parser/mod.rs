//! Reads Tiled `.tmx` documents into the raw structures the processor
//! consumes. Only the handful of elements the converter needs are looked at;
//! everything else in the document is skipped.

pub mod definitions;
pub mod level;

pub use definitions::{load_definitions, parse_definitions};
pub use level::{load_level, parse_level};

use std::str::FromStr;

use xml::attribute::OwnedAttribute;

use crate::error::{ConvertError, Result};

fn attr<'a>(attributes: &'a [OwnedAttribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.local_name == key)
        .map(|a| a.value.as_str())
}

/// Value of `key` on `<element>`, failing when it is absent.
fn required_attr<'a>(
    file: &str,
    element: &str,
    attributes: &'a [OwnedAttribute],
    key: &str,
) -> Result<&'a str> {
    attr(attributes, key)
        .ok_or_else(|| ConvertError::malformed(file, format!("<{element}> missing `{key}`")))
}

/// Like [`required_attr`] but also parses the value.
fn parse_attr<T: FromStr>(
    file: &str,
    element: &str,
    attributes: &[OwnedAttribute],
    key: &str,
) -> Result<T> {
    let raw = required_attr(file, element, attributes, key)?;
    raw.trim().parse().map_err(|_| {
        ConvertError::malformed(file, format!("<{element}> has invalid `{key}`: {raw:?}"))
    })
}
