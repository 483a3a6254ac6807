#![deny(clippy::all, clippy::pedantic)]
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # rule34
//!
//! rule34 is a convenient async wrapper library around the rule34.xxx API.
//!
//! Since July 2025 the API requires a user ID and an API key for every request,
//! both of which are found in the account settings of the site.
//!
//! This library can fetch:
//! - [`Post`]s, single or by tag search, and post counts
//! - [`Comment`]s of a post
//! - [`Tag`]s
//! - autocomplete [`Suggestion`]s
//!
//! and download the [`File`]s posts reference.
//!
//! Rate limiting, retries and pagination are left to the caller.
//!
//! ## Example: Downloading the newest posts of a tag.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use rule34::{Client, DEFAULT_DOWNLOAD_DIR};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(123_456, "api-key");
//!
//!     // ten posts tagged `landscape`, skipping any tagged `sketch`
//!     let posts = client.post().get_list(10, 0, &["landscape"], &["sketch"]).await?;
//!
//!     for post in &posts {
//!         let path = post.file().download(DEFAULT_DOWNLOAD_DIR, None).await?;
//!         println!("{} -> {}", post.id(), path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Post`]: crate::models::post::Post
//! [`Comment`]: crate::models::comment::Comment
//! [`Tag`]: crate::models::tag::Tag
//! [`Suggestion`]: crate::models::autocomplete::Suggestion
//! [`File`]: crate::models::file::File

/// Section clients handed out by [`Client`].
pub mod api;

/// Client module contains [`Client`], the entry point of the library.
pub mod client;

/// Endpoint and transport settings.
pub mod config;

/// Contains [`Error`]s that can be thrown by the libary.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Typed records built from API responses.
pub mod models;

/// Helpers for classifying and sizing remote files.
pub mod utils;

pub(crate) mod result;

pub use client::{Client, Credentials};
pub use config::Config;
pub use error::Error;
pub use models::{
    autocomplete::{parse_suggestions, Suggestion},
    comment::Comment,
    file::{File, DEFAULT_DOWNLOAD_DIR},
    post::Post,
    split_tags,
    tag::{Tag, TagType},
};
pub use result::Result;
pub use utils::FileType;
