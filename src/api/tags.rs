use crate::{
    api::{parse_xml, BaseApi},
    client::Credentials,
    config::Config,
    models::tag::Tag,
    result::Result,
};

/// Client for the `tag` section.
#[derive(Debug, Clone)]
pub struct TagsApi {
    base: BaseApi,
}

impl TagsApi {
    /// Page size used when callers have no preference.
    pub const DEFAULT_LIMIT: usize = 100;

    pub(crate) fn new(credentials: &Credentials, config: &Config) -> Self {
        Self {
            base: BaseApi::index(credentials, config, "tag"),
        }
    }

    /// Fetches a single tag by its ID.
    ///
    /// Returns `None` when no tag has that ID.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the body is not valid XML,
    /// or the tag lacks a required attribute.
    pub async fn get(&self, id: u64) -> Result<Option<Tag>> {
        let Some(xml) = self.base.get_text(&[("id", id.to_string())]).await? else {
            return Ok(None);
        };
        let Some(doc) = parse_xml(&xml)? else {
            return Ok(None);
        };

        let tag = doc
            .root_element()
            .children()
            .find(|n| n.has_tag_name("tag"))
            .map(Tag::from_node)
            .transpose()?;
        Ok(tag)
    }

    /// Fetches `amount` tags from page `page`, in the order the API lists them.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn get_list(&self, amount: usize, page: usize) -> Result<Vec<Tag>> {
        let params = [("limit", amount.to_string()), ("pid", page.to_string())];
        let Some(xml) = self.base.get_text(&params).await? else {
            return Ok(Vec::new());
        };
        let Some(doc) = parse_xml(&xml)? else {
            return Ok(Vec::new());
        };

        let tags = doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("tag"))
            .map(Tag::from_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(tags)
    }
}
