use roxmltree::Node;
use serde::{Deserialize, Serialize};

use crate::{
    models::{macros::str_opt_ref, Attributes},
    result::Result,
};

/// A comment left on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: u64,
    post_id: u64,
    /// Sent by the API as `body`.
    #[serde(alias = "body")]
    message: String,
    creator: String,
    creator_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl Comment {
    /// Builds a comment from the attributes of a `<comment>` element.
    pub(crate) fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let attrs = Attributes::new(node);
        Ok(Self {
            id: attrs.parse("id")?,
            post_id: attrs.parse("post_id")?,
            message: attrs.required("body")?.to_string(),
            creator: attrs.required("creator")?.to_string(),
            creator_id: attrs.parse("creator_id")?,
            created_at: attrs
                .optional("created_at")
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
        })
    }

    /// Returns the comment ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the ID of the post the comment belongs to.
    pub fn post_id(&self) -> u64 {
        self.post_id
    }

    /// Returns the comment text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the author's name.
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Returns the author's user ID.
    pub fn creator_id(&self) -> u64 {
        self.creator_id
    }

    /// Returns the creation time as formatted by the API, e.g. `2024-01-31 12:00`.
    pub fn created_at(&self) -> Option<&str> {
        str_opt_ref!(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn maps_attributes() {
        let xml = r#"<comment created_at="2024-01-31 12:00" post_id="42" body="nice &amp; clean" creator="bob" id="7" creator_id="99"/>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let comment = Comment::from_node(doc.root_element()).unwrap();

        assert_eq!(comment.id(), 7);
        assert_eq!(comment.post_id(), 42);
        assert_eq!(comment.message(), "nice & clean");
        assert_eq!(comment.creator(), "bob");
        assert_eq!(comment.creator_id(), 99);
        assert_eq!(comment.created_at(), Some("2024-01-31 12:00"));
    }

    #[test]
    fn body_is_required() {
        let xml = r#"<comment post_id="42" creator="bob" id="7" creator_id="99"/>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        assert!(matches!(
            Comment::from_node(doc.root_element()),
            Err(Error::MissingField("body"))
        ));
    }
}
