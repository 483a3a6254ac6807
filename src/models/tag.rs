use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use roxmltree::Node;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    models::Attributes,
    result::Result,
};

/// Category of a tag, backed by the numeric code the API uses.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagType {
    /// Code `0`.
    General = 0,
    /// Code `1`.
    Artist = 1,
    /// Code `2`.
    Unknown = 2,
    /// Code `3`.
    Copyright = 3,
    /// Code `4`.
    Character = 4,
    /// Code `5`.
    Meta = 5,
}

impl TagType {
    /// Returns the numeric code of the category.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a numeric code onto its category.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::General),
            1 => Some(Self::Artist),
            2 => Some(Self::Unknown),
            3 => Some(Self::Copyright),
            4 => Some(Self::Character),
            5 => Some(Self::Meta),
            _ => None,
        }
    }
}

impl FromStr for TagType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| Error::InvalidField {
                field: "type",
                value: s.to_string(),
            })
    }
}

impl Display for TagType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Artist => write!(f, "artist"),
            Self::Unknown => write!(f, "unknown"),
            Self::Copyright => write!(f, "copyright"),
            Self::Character => write!(f, "character"),
            Self::Meta => write!(f, "meta"),
        }
    }
}

/// A tag and how often it is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: u64,
    #[serde(rename = "type")]
    tag_type: TagType,
    name: String,
    #[serde(default)]
    count: u64,
    ambiguous: bool,
}

impl Tag {
    /// Builds a tag from the attributes of a `<tag>` element.
    ///
    /// A missing or empty `count` becomes zero.
    pub(crate) fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let attrs = Attributes::new(node);
        Ok(Self {
            id: attrs.parse("id")?,
            tag_type: attrs.parse("type")?,
            name: attrs.required("name")?.to_string(),
            count: attrs.parse_optional("count")?.unwrap_or_default(),
            ambiguous: attrs.boolean("ambiguous")?,
        })
    }

    /// Returns the tag ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the category of the tag.
    pub const fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Returns the tag as used in searches.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of posts carrying the tag.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns whether the tag is flagged as ambiguous.
    pub fn ambiguous(&self) -> bool {
        self.ambiguous
    }
}
