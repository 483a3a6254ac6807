/// Default endpoint for posts, comments and tags.
pub const API_URL: &str = "https://api.rule34.xxx/index.php";

/// Default endpoint for tag autocompletion.
pub const AUTOCOMPLETE_URL: &str = "https://api.rule34.xxx/autocomplete.php";

/// User agent sent with every request unless overridden.
pub const USER_AGENT: &str = "rule34-simple-api (Request)";

/// Endpoint and transport settings shared by every section client.
///
/// ```rust
/// use rule34::Config;
///
/// let config = Config::default()
///     .with_user_agent("my-bot/1.0")
///     .with_param("deleted", "show");
///
/// assert_eq!(config.user_agent(), "my-bot/1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: String,
    autocomplete_url: String,
    user_agent: String,
    params: Vec<(String, String)>,
}

impl Config {
    /// Points posts, comments and tags requests at `url`.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Points autocomplete requests at `url`.
    #[must_use]
    pub fn with_autocomplete_url(mut self, url: impl Into<String>) -> Self {
        self.autocomplete_url = url.into();
        self
    }

    /// Replaces the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Adds a parameter sent with every index request.
    ///
    /// Per-call parameters of the same name take precedence.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns the index endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the autocomplete endpoint.
    pub fn autocomplete_url(&self) -> &str {
        &self.autocomplete_url
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the extra global parameters.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            autocomplete_url: AUTOCOMPLETE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            params: Vec::new(),
        }
    }
}
