use std::fmt;

use crate::{
    api::{autocomplete::AutocompleteApi, comments::CommentsApi, post::PostApi, tags::TagsApi},
    config::Config,
};

/// The user ID and API key every index request is signed with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user_id: u64,
    api_key: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    pub fn new(user_id: u64, api_key: impl Into<String>) -> Self {
        Self {
            user_id,
            api_key: api_key.into(),
        }
    }

    /// Returns the user ID.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Entry point of the library.
///
/// Each accessor hands out a fresh section client built from the shared
/// credentials and [`Config`]; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Client {
    credentials: Credentials,
    config: Config,
}

impl Client {
    /// Creates a client for the public API.
    pub fn new(user_id: u64, api_key: impl Into<String>) -> Client {
        Self::with_config(Credentials::new(user_id, api_key), Config::default())
    }

    /// Creates a client with explicit endpoint settings.
    pub fn with_config(credentials: Credentials, config: Config) -> Client {
        Client {
            credentials,
            config,
        }
    }

    /// Returns the credentials requests are signed with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the endpoint settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Posts section.
    pub fn post(&self) -> PostApi {
        PostApi::new(&self.credentials, &self.config)
    }

    /// Comments section.
    pub fn comments(&self) -> CommentsApi {
        CommentsApi::new(&self.credentials, &self.config)
    }

    /// Tags section.
    pub fn tags(&self) -> TagsApi {
        TagsApi::new(&self.credentials, &self.config)
    }

    /// Autocomplete section.
    pub fn autocomplete(&self) -> AutocompleteApi {
        AutocompleteApi::new(&self.config)
    }
}
