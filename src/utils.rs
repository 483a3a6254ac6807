use std::fmt::{Display, Formatter};

use reqwest::{header::CONTENT_LENGTH, Url};
use serde::{Deserialize, Serialize};

use crate::{config::USER_AGENT, result::Result};

/// Coarse media category of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// `jpg`, `jpeg` and `png` files.
    Photo,
    /// `mp4`, `avi`, `mov` and `webm` files.
    Video,
    /// `gif` files.
    Animation,
}

impl FileType {
    /// Maps an extension (without the dot, any case) onto its category.
    ///
    /// ```rust
    /// use rule34::FileType;
    ///
    /// assert_eq!(FileType::from_extension("JPEG"), Some(FileType::Photo));
    /// assert_eq!(FileType::from_extension("xyz"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" => Some(Self::Photo),
            "mp4" | "avi" | "mov" | "webm" => Some(Self::Video),
            "gif" => Some(Self::Animation),
            _ => None,
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Photo => write!(f, "photo"),
            Self::Video => write!(f, "video"),
            Self::Animation => write!(f, "animation"),
        }
    }
}

/// Returns the extension of the last path segment of `url`, if it has one.
///
/// Query strings and fragments never take part in the result.
pub fn extension(url: &Url) -> Option<&str> {
    let name = url.path_segments()?.next_back()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Derives the [`FileType`] of the file `url` points to.
///
/// Unparsable URLs and unknown extensions yield `None`.
pub fn file_type(url: &str) -> Option<FileType> {
    Url::parse(url)
        .ok()
        .as_ref()
        .and_then(extension)
        .and_then(FileType::from_extension)
}

/// Fetches the size in bytes of the remote file with a header-only request.
///
/// Redirects are followed. Returns `None` when the server does not send `Content-Length`.
///
/// # Errors
///
/// Fails if the request cannot be sent.
pub async fn file_size(url: &Url) -> Result<Option<u64>> {
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = http.head(url.clone()).send().await?;
    log::debug!("HEAD {} -> {}", url, response.status());

    let size = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| x.trim().parse::<u64>().ok());
    Ok(size)
}
