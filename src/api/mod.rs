//! Section clients, one per API resource.
//!
//! All of them share one request executor, which merges persistent parameters with the
//! per-call ones and maps the HTTP status onto the library's outcomes:
//!
//! - `404` means "no data" and yields `Ok(None)`,
//! - any other non-success status is an [`Error::Api`] carrying the body,
//! - in JSON mode, an undecodable body is an [`Error::Api`] as well.

/// The autocomplete endpoint.
pub mod autocomplete;
/// The `comment` section.
pub mod comments;
/// The `post` section.
pub mod post;
/// The `tag` section.
pub mod tags;

use std::fmt;

use reqwest::{header::USER_AGENT, StatusCode};
use serde::de::DeserializeOwned;

use crate::{client::Credentials, config::Config, error::Error, result::Result};

pub(crate) type Params = Vec<(String, String)>;

/// The low-level request executor shared by every section client.
#[derive(Clone)]
pub(crate) struct BaseApi {
    url: String,
    user_agent: String,
    params: Params,
}

impl fmt::Debug for BaseApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // values carry the api key
        let keys: Vec<&str> = self.params.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("BaseApi")
            .field("url", &self.url)
            .field("user_agent", &self.user_agent)
            .field("params", &keys)
            .finish()
    }
}

impl BaseApi {
    /// An executor for the index endpoint, scoped to section `s`.
    pub(crate) fn index(credentials: &Credentials, config: &Config, section: &str) -> Self {
        let mut params: Params = vec![
            ("user_id".to_string(), credentials.user_id().to_string()),
            ("api_key".to_string(), credentials.api_key().to_string()),
            ("page".to_string(), "dapi".to_string()),
            ("q".to_string(), "index".to_string()),
        ];
        params.extend(config.params().iter().cloned());
        params.push(("s".to_string(), section.to_string()));

        Self {
            url: config.api_url().to_string(),
            user_agent: config.user_agent().to_string(),
            params,
        }
    }

    /// An executor without persistent parameters.
    pub(crate) fn bare(url: &str, config: &Config) -> Self {
        Self {
            url: url.to_string(),
            user_agent: config.user_agent().to_string(),
            params: Vec::new(),
        }
    }

    /// Per-call parameters replace persistent ones of the same name.
    fn merge(&self, overrides: &[(&str, String)], json: Option<bool>) -> Params {
        let mut merged = self.params.clone();
        let json = json.map(|j| ("json", if j { "1" } else { "0" }.to_string()));
        for (key, value) in overrides.iter().cloned().chain(json) {
            match merged.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = value,
                None => merged.push((key.to_string(), value)),
            }
        }
        merged
    }

    async fn send(&self, params: &Params) -> Result<Option<(StatusCode, String)>> {
        // one session per call, dropped with the response
        let http = reqwest::Client::new();
        log::debug!("request for {} dispatched", self.url);
        let response = http
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        log::debug!("response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(Some((status, body)))
    }

    /// Issues a raw-text request (`json=0`) and returns the body unparsed.
    pub(crate) async fn get_text(&self, params: &[(&str, String)]) -> Result<Option<String>> {
        let merged = self.merge(params, Some(false));
        Ok(self.send(&merged).await?.map(|(_, body)| body))
    }

    /// Issues a request without the `json` flag and returns the body unparsed.
    pub(crate) async fn get_plain(&self, params: &[(&str, String)]) -> Result<Option<String>> {
        let merged = self.merge(params, None);
        Ok(self.send(&merged).await?.map(|(_, body)| body))
    }

    /// Issues a JSON request (`json=1`) and decodes the body into `T`.
    ///
    /// An empty body is treated like a `404`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
    ) -> Result<Option<T>> {
        let merged = self.merge(params, Some(true));
        let Some((status, body)) = self.send(&merged).await? else {
            return Ok(None);
        };
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::debug!("could not decode response: {}", e);
                Err(Error::Api {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

/// Parses an XML body, tolerating an empty one as "no data".
pub(crate) fn parse_xml(body: &str) -> Result<Option<roxmltree::Document<'_>>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(roxmltree::Document::parse(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseApi {
        let credentials = Credentials::new(12, "secret");
        let config = Config::default().with_param("deleted", "show");
        BaseApi::index(&credentials, &config, "post")
    }

    fn get<'a>(params: &'a Params, key: &str) -> Vec<&'a str> {
        params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn persistent_params_are_sent() {
        let merged = base().merge(&[("id", "5".to_string())], Some(true));

        assert_eq!(get(&merged, "user_id"), ["12"]);
        assert_eq!(get(&merged, "api_key"), ["secret"]);
        assert_eq!(get(&merged, "page"), ["dapi"]);
        assert_eq!(get(&merged, "q"), ["index"]);
        assert_eq!(get(&merged, "s"), ["post"]);
        assert_eq!(get(&merged, "deleted"), ["show"]);
        assert_eq!(get(&merged, "id"), ["5"]);
        assert_eq!(get(&merged, "json"), ["1"]);
    }

    #[test]
    fn overrides_replace_instead_of_duplicating() {
        let merged = base().merge(&[("deleted", "hide".to_string())], Some(false));
        assert_eq!(get(&merged, "deleted"), ["hide"]);
        assert_eq!(get(&merged, "json"), ["0"]);
    }

    #[test]
    fn bare_has_no_persistent_params() {
        let merged = BaseApi::bare("https://x.test/", &Config::default())
            .merge(&[("q", "blue".to_string())], None);
        assert_eq!(merged, [("q".to_string(), "blue".to_string())]);
    }
}
