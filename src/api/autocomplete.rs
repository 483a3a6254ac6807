use crate::{
    api::BaseApi,
    config::Config,
    models::autocomplete::{parse_suggestions, Suggestion},
    result::Result,
};

/// Client for the autocomplete endpoint.
///
/// Unlike the other sections it sends no credentials.
#[derive(Debug, Clone)]
pub struct AutocompleteApi {
    base: BaseApi,
}

impl AutocompleteApi {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            base: BaseApi::bare(config.autocomplete_url(), config),
        }
    }

    /// Suggests tags starting with `text`.
    ///
    /// # Errors
    ///
    /// Fails if the request fails or the body is not a well-formed suggestion list.
    pub async fn search(&self, text: &str) -> Result<Vec<Suggestion>> {
        match self.base.get_plain(&[("q", text.to_string())]).await? {
            Some(body) => parse_suggestions(&body),
            None => Ok(Vec::new()),
        }
    }
}
