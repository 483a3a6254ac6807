#![allow(dead_code)]

use rule34::{Client, Config, Credentials};
use serde_json::{json, Value};
use simple_logger::SimpleLogger;
use wiremock::MockServer;

pub const USER_ID: u64 = 4242;
pub const API_KEY: &str = "test-key";

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, Client) {
    // a second init in the same test binary fails, which is fine
    let _ = SimpleLogger::new().with_level(log::LevelFilter::Debug).init();

    let server = MockServer::start().await;
    let config = Config::default()
        .with_api_url(format!("{}/index.php", server.uri()))
        .with_autocomplete_url(format!("{}/autocomplete.php", server.uri()));
    let client = Client::with_config(Credentials::new(USER_ID, API_KEY), config);
    (server, client)
}

/// A post as the posts index serializes it.
pub fn post_json(id: u64, tags: &str) -> Value {
    json!({
        "preview_url": format!("https://api-cdn.rule34.xxx/thumbnails/1/thumbnail_{id}.jpg"),
        "sample_url": format!("https://api-cdn.rule34.xxx/samples/1/sample_{id}.jpg?{id}"),
        "file_url": format!("https://api-cdn.rule34.xxx/images/1/{id}.png"),
        "directory": 1,
        "hash": format!("hash{id}"),
        "width": 800,
        "height": 600,
        "id": id,
        "image": format!("{id}.png"),
        "change": 1_700_000_000,
        "owner": "uploader",
        "parent_id": 0,
        "rating": "questionable",
        "sample": false,
        "sample_height": 0,
        "sample_width": 0,
        "score": 7,
        "tags": tags,
        "source": "",
        "status": "active",
        "has_notes": false,
        "comment_count": 0
    })
}
