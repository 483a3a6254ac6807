//! Example demonstrating how to download the file of a post using rule34
//!
//! Run with `RULE34_USER_ID=... RULE34_API_KEY=... cargo run --example download -- <post id>`.

use rule34::{Client, DEFAULT_DOWNLOAD_DIR};
use simple_logger::SimpleLogger;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let user_id = std::env::var("RULE34_USER_ID")?.parse()?;
    let api_key = std::env::var("RULE34_API_KEY")?;
    let id: u64 = std::env::args().nth(1).ok_or("missing post id")?.parse()?;

    let client = Client::new(user_id, api_key);
    let Some(post) = client.post().get(id).await? else {
        println!("no post with id {id}");
        return Ok(());
    };

    let file = post.file();
    if let Some(size) = file.size().await? {
        println!("downloading {size} bytes");
    }

    // Naming the file after the post keeps the original extension.
    let name = match file.extension() {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    };
    let path = file.download(DEFAULT_DOWNLOAD_DIR, Some(&name)).await?;
    println!("saved to {}", path.display());

    Ok(())
}
