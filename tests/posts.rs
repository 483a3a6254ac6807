mod common;

use common::{post_json, setup, API_KEY, USER_ID};
use rule34::{Error, FileType};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn get_returns_the_post() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .and(query_param("page", "dapi"))
        .and(query_param("q", "index"))
        .and(query_param("s", "post"))
        .and(query_param("json", "1"))
        .and(query_param("id", "17"))
        .and(query_param("user_id", USER_ID.to_string()))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(17, "a b")])))
        .expect(1)
        .mount(&server)
        .await;

    let post = client.post().get(17).await?.expect("post should exist");

    assert_eq!(post.id(), 17);
    assert_eq!(post.tags(), ["a", "b"]);
    assert_eq!(post.file().file_type(), Some(FileType::Photo));
    assert_eq!(post.preview_file().file_name(), Some("thumbnail_17.jpg"));
    Ok(())
}

#[tokio::test]
async fn get_not_found_is_none() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.post().get(1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn get_empty_list_is_none() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(client.post().get(1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn server_error_carries_the_body() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database on fire"))
        .mount(&server)
        .await;

    match client.post().get(1).await {
        Err(Error::Api { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database on fire");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_json_is_an_api_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Missing authentication"))
        .mount(&server)
        .await;

    match client.post().get_list(10, 0, &[], &[]).await {
        Err(Error::Api { status, body }) => {
            assert_eq!(status, 200);
            assert_eq!(body, "Missing authentication");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[tokio::test]
async fn count_reads_root_attribute() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(query_param("s", "post"))
        .and(query_param("json", "0"))
        .and(query_param("tags", "blue_eyes solo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<posts count="42"/>"#))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.post().get_count(&["blue_eyes", "solo"]).await?, 42);
    Ok(())
}

#[tokio::test]
async fn count_not_found_is_zero() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert_eq!(client.post().get_count(&[]).await?, 0);
    Ok(())
}

#[tokio::test]
async fn count_without_attribute_fails() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<posts/>"))
        .mount(&server)
        .await;

    assert!(matches!(
        client.post().get_count(&["x"]).await,
        Err(Error::MissingField("count"))
    ));
}

#[tokio::test]
async fn list_over_the_cap_never_hits_the_network() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.post().get_list(1001, 0, &["a"], &[]).await;

    assert!(matches!(
        result,
        Err(Error::LimitExceeded {
            requested: 1001,
            max: 1000
        })
    ));
}

#[tokio::test]
async fn list_sends_paging_and_tags() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(query_param("s", "post"))
        .and(query_param("json", "1"))
        .and(query_param("limit", "1000"))
        .and(query_param("pid", "3"))
        .and(query_param("tags", "a b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([post_json(1, "a b"), post_json(2, "a b c")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let posts = client.post().get_list(1000, 3, &["a", "b"], &[]).await?;

    let ids: Vec<u64> = posts.iter().map(|p| p.id()).collect();
    assert_eq!(ids, [1, 2]);
    Ok(())
}

#[tokio::test]
async fn forbidden_tags_are_filtered_client_side() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(query_param("tags", ""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([post_json(1, "a b"), post_json(2, "c")])),
        )
        .mount(&server)
        .await;

    let posts = client.post().get_list(2, 0, &[], &["a"]).await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id(), 2);
    assert_eq!(posts[0].tags(), ["c"]);
    Ok(())
}

#[tokio::test]
async fn list_not_found_or_empty_is_empty() -> anyhow::Result<()> {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(query_param("pid", "0"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("pid", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    assert!(client.post().get_list(10, 0, &[], &[]).await?.is_empty());
    assert!(client.post().get_list(10, 1, &[], &[]).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn extra_config_params_are_sent() -> anyhow::Result<()> {
    let server = wiremock::MockServer::start().await;
    let config = rule34::Config::default()
        .with_api_url(format!("{}/index.php", server.uri()))
        .with_param("deleted", "show");
    let client = rule34::Client::with_config(rule34::Credentials::new(1, "k"), config);

    Mock::given(method("GET"))
        .and(query_param("deleted", "show"))
        .and(query_param("s", "post"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<posts count="3"/>"#))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.post().get_count(&[]).await?, 3);
    Ok(())
}
