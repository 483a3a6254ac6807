//! Example demonstrating how to search posts and inspect them using rule34
//!
//! This example shows:
//! - Creating a client from credentials in the environment
//! - Counting and listing posts for a tag, skipping unwanted tags
//! - Reading the comments and tag suggestions for a search
//!
//! Run with `RULE34_USER_ID=... RULE34_API_KEY=... cargo run --example posts`.

use rule34::Client;
use simple_logger::SimpleLogger;

/// Type alias for simplifying error handling
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    // This is just for seeing the logs, you may remove it if you wish.
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let user_id = std::env::var("RULE34_USER_ID")?.parse()?;
    let api_key = std::env::var("RULE34_API_KEY")?;
    let client = Client::new(user_id, api_key);

    // The count includes deleted posts, so it may be higher than what you can fetch.
    let count = client.post().get_count(&["landscape"]).await?;
    println!("about {count} posts are tagged `landscape`");

    // Fewer than 5 posts may come back, since posts tagged `sketch` are dropped afterwards.
    let posts = client.post().get_list(5, 0, &["landscape"], &["sketch"]).await?;
    for post in &posts {
        println!(
            "#{} score {:?}, {} tags, {:?}",
            post.id(),
            post.score(),
            post.tags().len(),
            post.file().file_type()
        );

        for comment in client.comments().get(post.id()).await? {
            println!("  {}: {}", comment.creator(), comment.message());
        }
    }

    for suggestion in client.autocomplete().search("landsc").await? {
        println!("{} -> {:?}", suggestion.value(), suggestion.count().ok());
    }

    Ok(())
}
