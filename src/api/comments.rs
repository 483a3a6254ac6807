use crate::{
    api::{parse_xml, BaseApi},
    client::Credentials,
    config::Config,
    models::comment::Comment,
    result::Result,
};

/// Client for the `comment` section.
#[derive(Debug, Clone)]
pub struct CommentsApi {
    base: BaseApi,
}

impl CommentsApi {
    pub(crate) fn new(credentials: &Credentials, config: &Config) -> Self {
        Self {
            base: BaseApi::index(credentials, config, "comment"),
        }
    }

    /// Fetches the comments of a post, in the order the API lists them.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the body is not valid XML,
    /// or a comment lacks a required attribute.
    pub async fn get(&self, post_id: u64) -> Result<Vec<Comment>> {
        let Some(xml) = self.base.get_text(&[("post_id", post_id.to_string())]).await? else {
            return Ok(Vec::new());
        };
        let Some(doc) = parse_xml(&xml)? else {
            return Ok(Vec::new());
        };

        let comments = doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("comment"))
            .map(Comment::from_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(comments)
    }
}
