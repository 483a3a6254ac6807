use std::path::{Path, PathBuf};

use reqwest::{StatusCode, Url};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use tokio::{fs, io::AsyncWriteExt};

use crate::{
    config::USER_AGENT,
    error::Error,
    result::Result,
    utils::{self, FileType},
};

/// Directory used by [`File::download`] callers that do not care where files go.
pub const DEFAULT_DOWNLOAD_DIR: &str = "./rule34_downloads";

/// A downloadable file referenced by a post.
///
/// The [`FileType`] is derived from the URL's extension when the reference is built.
/// A bare URL string deserializes into a `File`, and so does an already built
/// `{ "url": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFile")]
pub struct File {
    url: Url,
    file_type: Option<FileType>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFile {
    Bare(String),
    Wrapped { url: String },
}

impl TryFrom<RawFile> for File {
    type Error = Error;

    fn try_from(raw: RawFile) -> Result<Self> {
        match raw {
            RawFile::Bare(url) | RawFile::Wrapped { url } => File::parse(&url),
        }
    }
}

impl From<Url> for File {
    fn from(url: Url) -> Self {
        let file_type = utils::extension(&url).and_then(FileType::from_extension);
        Self { url, file_type }
    }
}

impl Serialize for File {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("File", 2)?;
        state.serialize_field("url", self.url.as_str())?;
        state.serialize_field("type", &self.file_type)?;
        state.end()
    }
}

impl File {
    /// Builds a file reference from a URL string.
    ///
    /// # Errors
    ///
    /// Fails if `url` is not a valid absolute URL.
    pub fn parse(url: &str) -> Result<Self> {
        Url::parse(url.trim())
            .map(Self::from)
            .map_err(|e| Error::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the URL of the file.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the media category, if the extension is a known one.
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type
    }

    /// Returns the last path segment of the URL.
    pub fn file_name(&self) -> Option<&str> {
        self.url
            .path_segments()
            .and_then(Iterator::last)
            .filter(|s| !s.is_empty())
    }

    /// Returns the extension of the URL's file name.
    pub fn extension(&self) -> Option<&str> {
        utils::extension(&self.url)
    }

    /// Fetches the size of the remote file in bytes without downloading it.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent.
    pub async fn size(&self) -> Result<Option<u64>> {
        utils::file_size(&self.url).await
    }

    /// Downloads the file into `dir`, creating the directory if needed.
    ///
    /// The file is saved as `file_name`, or under its original name when `None`.
    /// A `file_name` whose extension differs from the original one is still used,
    /// but a warning is logged since the saved file may be misleadingly named.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Fails if the server does not answer with `200 OK`, or if writing to disk fails.
    pub async fn download(&self, dir: impl AsRef<Path>, file_name: Option<&str>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).await?;

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        log::debug!("download of {} dispatched", self.url);
        let mut response = http.get(self.url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let original = self.file_name().unwrap_or("file");
        let name = match file_name {
            Some(name) => {
                if Path::new(name).extension() != Path::new(original).extension() {
                    log::warn!(
                        "file name `{name}` does not match the extension of `{original}`, the saved file may be corrupted"
                    );
                }
                name
            }
            None => original,
        };

        let path = dir.join(name);
        let mut file = fs::File::create(&path).await?;
        let mut written = 0_usize;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len();
        }
        file.flush().await?;

        log::info!("saved {} bytes to {}", written, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_wrapped_urls_deserialize() {
        let bare: File = serde_json::from_str(r#""https://x.test/images/1/a.webm""#).unwrap();
        let wrapped: File = serde_json::from_str(r#"{"url":"https://x.test/images/1/a.webm"}"#).unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.file_type(), Some(FileType::Video));
        assert_eq!(bare.file_name(), Some("a.webm"));
        assert_eq!(bare.extension(), Some("webm"));
    }

    #[test]
    fn unknown_extension_has_no_type() {
        let file = File::parse("https://x.test/images/1/a.xyz").unwrap();
        assert_eq!(file.file_type(), None);
    }

    #[test]
    fn rejects_relative_url() {
        assert!(matches!(File::parse("/images/1/a.jpg"), Err(Error::InvalidUrl { .. })));
        assert!(serde_json::from_str::<File>(r#""""#).is_err());
    }

    #[test]
    fn serializes_with_type() {
        let file = File::parse("https://x.test/a.gif").unwrap();
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["url"], "https://x.test/a.gif");
        assert_eq!(value["type"], "animation");
    }
}
