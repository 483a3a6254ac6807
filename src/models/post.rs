use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    de_num, de_tags, file::File, macros::str_opt_ref, maybe_de_bool, maybe_de_num, maybe_de_str,
};

/// A single post as returned by the posts index.
///
/// Both the API's field names (`preview_url`, `sample_url`, `file_url`) and the
/// model's own names (`preview_file`, `sample_file`, `file`) are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// The numeric post ID.
    #[serde(deserialize_with = "de_num")]
    id: u64,

    /// Name of the uploader.
    #[serde(default, deserialize_with = "maybe_de_str")]
    owner: Option<String>,

    /// Moderation status, e.g. `active`, `flagged`, `deleted`.
    #[serde(default, deserialize_with = "maybe_de_str")]
    status: Option<String>,

    /// Content rating, e.g. `safe`, `questionable`, `explicit`.
    #[serde(default, deserialize_with = "maybe_de_str")]
    rating: Option<String>,

    #[serde(default, deserialize_with = "maybe_de_num")]
    score: Option<i64>,

    /// Thumbnail.
    #[serde(rename = "preview_url", alias = "preview_file")]
    preview_file: File,

    /// Downscaled version, identical to `file` for small uploads.
    #[serde(rename = "sample_url", alias = "sample_file")]
    sample_file: File,

    /// Original upload.
    #[serde(rename = "file_url", alias = "file")]
    file: File,

    #[serde(default, deserialize_with = "maybe_de_str")]
    source: Option<String>,

    #[serde(default, deserialize_with = "maybe_de_num")]
    width: Option<u32>,

    #[serde(default, deserialize_with = "maybe_de_num")]
    height: Option<u32>,

    /// MD5 of the original file.
    #[serde(default, deserialize_with = "maybe_de_str")]
    hash: Option<String>,

    /// File name of the original upload on the image servers.
    #[serde(default, deserialize_with = "maybe_de_str")]
    image: Option<String>,

    /// Storage directory index on the image servers.
    #[serde(default, deserialize_with = "maybe_de_num")]
    directory: Option<u64>,

    /// UNIX timestamp of the last change.
    #[serde(default, deserialize_with = "maybe_de_num")]
    change: Option<i64>,

    /// `0` when the post has no parent.
    #[serde(default, deserialize_with = "maybe_de_num")]
    parent_id: Option<u64>,

    #[serde(default, deserialize_with = "maybe_de_bool")]
    has_notes: Option<bool>,

    #[serde(default, deserialize_with = "maybe_de_num")]
    comment_count: Option<u32>,

    /// Whether a downscaled sample exists.
    #[serde(default, deserialize_with = "maybe_de_bool")]
    sample: Option<bool>,

    #[serde(default, deserialize_with = "maybe_de_num")]
    sample_height: Option<u32>,

    #[serde(default, deserialize_with = "maybe_de_num")]
    sample_width: Option<u32>,

    /// Tags in the order the API lists them.
    #[serde(default, deserialize_with = "de_tags")]
    tags: Vec<String>,
}

impl Post {
    /// Returns the numeric post ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the uploader's name.
    pub fn owner(&self) -> Option<&str> {
        str_opt_ref!(self.owner)
    }

    /// Returns the moderation status.
    pub fn status(&self) -> Option<&str> {
        str_opt_ref!(self.status)
    }

    /// Returns the content rating.
    pub fn rating(&self) -> Option<&str> {
        str_opt_ref!(self.rating)
    }

    /// Returns the post score.
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Returns the thumbnail.
    pub fn preview_file(&self) -> &File {
        &self.preview_file
    }

    /// Returns the downscaled sample.
    pub fn sample_file(&self) -> &File {
        &self.sample_file
    }

    /// Returns the original upload.
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Returns the source given by the uploader.
    pub fn source(&self) -> Option<&str> {
        str_opt_ref!(self.source)
    }

    /// Returns the dimensions of the original in a tuple: (WIDTH, HEIGHT)
    pub fn dimensions(&self) -> (Option<u32>, Option<u32>) {
        (self.width, self.height)
    }

    /// Returns the MD5 hash of the original.
    pub fn hash(&self) -> Option<&str> {
        str_opt_ref!(self.hash)
    }

    /// Returns the server-side file name of the original.
    pub fn image(&self) -> Option<&str> {
        str_opt_ref!(self.image)
    }

    /// Returns the storage directory index.
    pub fn directory(&self) -> Option<u64> {
        self.directory
    }

    /// Returns the raw UNIX timestamp of the last change.
    pub fn change(&self) -> Option<i64> {
        self.change
    }

    /// Returns the time of the last change.
    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.change.and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// Returns the parent post ID, with `0` standing for no parent.
    pub fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }

    /// Returns whether the post has translation notes.
    pub fn has_notes(&self) -> Option<bool> {
        self.has_notes
    }

    /// Returns the number of comments.
    pub fn comment_count(&self) -> Option<u32> {
        self.comment_count
    }

    /// Returns whether a downscaled sample exists.
    pub fn sample(&self) -> Option<bool> {
        self.sample
    }

    /// Returns the dimensions of the sample in a tuple: (WIDTH, HEIGHT)
    pub fn sample_dimensions(&self) -> (Option<u32>, Option<u32>) {
        (self.sample_width, self.sample_height)
    }

    /// Returns the tags of the post.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` if the post is tagged with `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns `true` if the post carries at least one of `tags`.
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| self.has_tag(t.as_ref()))
    }
}
