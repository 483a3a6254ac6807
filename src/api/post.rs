use crate::{
    api::{parse_xml, BaseApi},
    client::Credentials,
    config::Config,
    error::Error,
    models::post::Post,
    result::Result,
};

/// Client for the `post` section.
#[derive(Debug, Clone)]
pub struct PostApi {
    base: BaseApi,
}

impl PostApi {
    /// Largest amount of posts the API returns per request.
    pub const MAX_LIMIT: usize = 1000;

    pub(crate) fn new(credentials: &Credentials, config: &Config) -> Self {
        Self {
            base: BaseApi::index(credentials, config, "post"),
        }
    }

    /// Fetches a single post by its ID.
    ///
    /// Returns `None` when no post has that ID.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the API answers with an error,
    /// or the post does not hold the required fields.
    pub async fn get(&self, id: u64) -> Result<Option<Post>> {
        let posts: Option<Vec<Post>> = self.base.get_json(&[("id", id.to_string())]).await?;
        Ok(posts.and_then(|p| p.into_iter().next()))
    }

    /// Returns the number of posts matching all of `tags`.
    ///
    /// The count includes deleted posts, so fewer posts may actually be retrievable.
    ///
    /// # Errors
    ///
    /// Fails if the request fails or the body has no valid `count` attribute.
    pub async fn get_count(&self, tags: &[&str]) -> Result<u64> {
        let Some(xml) = self.base.get_text(&[("tags", tags.join(" "))]).await? else {
            return Ok(0);
        };
        let Some(doc) = parse_xml(&xml)? else {
            return Ok(0);
        };

        let raw = doc
            .root_element()
            .attribute("count")
            .ok_or(Error::MissingField("count"))?;
        let count = raw.trim().parse().map_err(|_| Error::InvalidField {
            field: "count",
            value: raw.to_string(),
        })?;
        Ok(count)
    }

    /// Fetches up to `amount` posts matching all of `tags`, from page `page`.
    ///
    /// Posts carrying any of `forbidden_tags` are removed after the posts are
    /// fetched, so fewer than `amount` posts may be returned.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::LimitExceeded`] without sending anything if `amount`
    /// is above [`Self::MAX_LIMIT`], and otherwise like [`Self::get`].
    pub async fn get_list(
        &self,
        amount: usize,
        page: usize,
        tags: &[&str],
        forbidden_tags: &[&str],
    ) -> Result<Vec<Post>> {
        if amount > Self::MAX_LIMIT {
            return Err(Error::LimitExceeded {
                requested: amount,
                max: Self::MAX_LIMIT,
            });
        }

        let params = [
            ("limit", amount.to_string()),
            ("pid", page.to_string()),
            ("tags", tags.join(" ")),
        ];
        let posts: Vec<Post> = self.base.get_json(&params).await?.unwrap_or_default();

        if forbidden_tags.is_empty() {
            return Ok(posts);
        }

        let before = posts.len();
        let posts: Vec<Post> = posts
            .into_iter()
            .filter(|post| !post.has_any_tag(forbidden_tags))
            .collect();
        log::debug!("filtered out {} posts with forbidden tags", before - posts.len());
        Ok(posts)
    }
}
