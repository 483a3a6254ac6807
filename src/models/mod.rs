/// Autocomplete suggestions and their parser.
pub mod autocomplete;
/// Post comments.
pub mod comment;
/// File references and downloads.
pub mod file;
/// Posts.
pub mod post;
/// Tags and tag categories.
pub mod tag;

use std::{fmt, str::FromStr};

use roxmltree::Node;
use serde::{de, Deserialize, Deserializer};

use crate::{error::Error, result::Result};

/// Splits a space-delimited tag string into an ordered list of tag names.
///
/// Splitting is idempotent: joining the result with spaces and splitting again
/// yields the same list.
///
/// ```rust
/// use rule34::split_tags;
///
/// let tags = split_tags("  blue_eyes  solo 1girl ");
/// assert_eq!(tags, ["blue_eyes", "solo", "1girl"]);
/// assert_eq!(split_tags(&tags.join(" ")), tags);
/// ```
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split_whitespace().map(ToString::to_string).collect()
}

/// Accepts either a space-delimited string or an already split sequence.
pub(crate) fn de_tags<'de, D>(d: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        Joined(String),
        Split(Vec<String>),
    }

    Ok(match <Option<Tags>>::deserialize(d)? {
        Some(Tags::Joined(s)) => split_tags(&s),
        Some(Tags::Split(v)) => v,
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Bool(bool),
    Int(u64),
    Neg(i64),
    Float(f64),
    Str(String),
}

/// Numbers may arrive as JSON numbers or numeric strings; empty strings are absent.
pub(crate) fn maybe_de_num<'de, D, T>(d: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + TryFrom<i64> + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    let value = <Option<Lenient> as Deserialize>::deserialize(d)?;
    let out_of_range =
        |n: &dyn fmt::Display| -> D::Error { de::Error::custom(format!("{n} is out of range")) };
    match value {
        None => Ok(None),
        Some(Lenient::Int(n)) => <T as TryFrom<u64>>::try_from(n)
            .map(Some)
            .map_err(|_| out_of_range(&n)),
        Some(Lenient::Neg(n)) => <T as TryFrom<i64>>::try_from(n)
            .map(Some)
            .map_err(|_| out_of_range(&n)),
        Some(Lenient::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Lenient::Str(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        Some(Lenient::Bool(b)) => Err(de::Error::custom(format!("expected a number, got {b}"))),
        Some(Lenient::Float(f)) => Err(de::Error::custom(format!("expected an integer, got {f}"))),
    }
}

/// Like [`maybe_de_num`] but the value must be present.
pub(crate) fn de_num<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + TryFrom<i64> + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    maybe_de_num(d)?.ok_or_else(|| de::Error::custom("expected a number"))
}

/// Booleans may arrive as `true`/`false`, `1`/`0`, or either as a string.
pub(crate) fn maybe_de_bool<'de, D>(d: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Option<Lenient> as Deserialize>::deserialize(d)?;
    match value {
        None => Ok(None),
        Some(Lenient::Bool(b)) => Ok(Some(b)),
        Some(Lenient::Int(n)) => Ok(Some(n != 0)),
        Some(Lenient::Neg(n)) => Ok(Some(n != 0)),
        Some(Lenient::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Lenient::Str(s)) => parse_bool(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected a boolean, got `{s}`"))),
        Some(Lenient::Float(f)) => Err(de::Error::custom(format!("expected a boolean, got {f}"))),
    }
}

/// Strings that are empty are treated as absent.
pub(crate) fn maybe_de_str<'de, D>(d: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Option<String> as Deserialize>::deserialize(d)?;
    Ok(value.filter(|s| !s.is_empty()))
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Typed access to the attributes of an XML element.
pub(crate) struct Attributes<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Attributes<'a, 'input> {
    pub(crate) fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    pub(crate) fn optional(&self, name: &'static str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    pub(crate) fn required(&self, name: &'static str) -> Result<&'a str> {
        self.optional(name).ok_or(Error::MissingField(name))
    }

    pub(crate) fn parse<T: FromStr>(&self, name: &'static str) -> Result<T> {
        let raw = self.required(name)?;
        raw.trim().parse().map_err(|_| Error::InvalidField {
            field: name,
            value: raw.to_string(),
        })
    }

    /// Absent and empty attributes both yield `None`.
    pub(crate) fn parse_optional<T: FromStr>(&self, name: &'static str) -> Result<Option<T>> {
        match self.optional(name).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| Error::InvalidField {
                field: name,
                value: raw.to_string(),
            }),
        }
    }

    pub(crate) fn boolean(&self, name: &'static str) -> Result<bool> {
        let raw = self.required(name)?;
        parse_bool(raw).ok_or_else(|| Error::InvalidField {
            field: name,
            value: raw.to_string(),
        })
    }
}

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    pub(crate) use str_opt_ref;
}
