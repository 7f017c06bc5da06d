// Live API suite against jsonplaceholder.typicode.com
//
// Happy and negative paths for the posts and comments resources.
// Each test issues a single request and asserts on the observed
// status code and body; failures are terminal, with no retries.
//
// The whole suite needs network access to the public service, so it
// is ignored by default. Run with: cargo test --test jsonplaceholder_api -- --ignored

use anyhow::Result;
use serde_json::json;

use agdata_e2e::{ApiClient, HarnessConfig, NewComment, NewPost, StatusCode, UpdatedPost};

fn client() -> Result<ApiClient> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let config = HarnessConfig::load()?;
    Ok(ApiClient::new(&config.api.base_url)?)
}

// ============================================================================
// Posts - reads
// ============================================================================

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_get_posts_returns_success() -> Result<()> {
    client()?
        .get("posts")
        .await?
        .expect_status(StatusCode::OK)?
        .expect_body_not_empty()?;
    println!("✓ GET posts returned a non-empty collection");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_get_post_with_unknown_id_returns_not_found() -> Result<()> {
    client()?
        .get("posts/101")
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;
    println!("✓ GET posts/101 returned 404");
    Ok(())
}

// ============================================================================
// Posts - create / update / delete
// ============================================================================

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_create_post_returns_created() -> Result<()> {
    client()?
        .post("posts", &NewPost::new("foo", "bar", 1))
        .await?
        .expect_status(StatusCode::CREATED)?
        .expect_body_contains("foo")?;
    println!("✓ POST posts echoed the submitted title");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_create_post_missing_title_returns_bad_request() -> Result<()> {
    client()?
        .post("posts", &json!({"body": "bar", "userId": 1}))
        .await?
        .expect_status(StatusCode::BAD_REQUEST)?;
    println!("✓ POST posts without a title was rejected");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_update_post_returns_success() -> Result<()> {
    client()?
        .put(
            "posts/1",
            &UpdatedPost::new(1, "updated title", "updated body", 1),
        )
        .await?
        .expect_status(StatusCode::OK)?
        .expect_body_contains("updated title")?;
    println!("✓ PUT posts/1 echoed the updated title");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_update_post_with_unknown_id_returns_not_found() -> Result<()> {
    client()?
        .put(
            "posts/101",
            &UpdatedPost::new(102, "updated title", "updated body", 1),
        )
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;
    println!("✓ PUT posts/101 returned 404");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_delete_post_returns_success() -> Result<()> {
    client()?
        .delete("posts/1")
        .await?
        .expect_status(StatusCode::OK)?;
    println!("✓ DELETE posts/1 returned 200");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_delete_post_with_unknown_id_returns_not_found() -> Result<()> {
    client()?
        .delete("posts/102")
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;
    println!("✓ DELETE posts/102 returned 404");
    Ok(())
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_create_comment_returns_created() -> Result<()> {
    client()?
        .post(
            "posts/1/comments",
            &NewComment::new("foo", "bar", "foo@bar.com", 1),
        )
        .await?
        .expect_status(StatusCode::CREATED)?
        .expect_body_contains("foo")?;
    println!("✓ POST posts/1/comments echoed the submitted name");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_create_comment_missing_email_returns_bad_request() -> Result<()> {
    client()?
        .post(
            "posts/1/comments",
            &json!({"name": "foo", "body": "bar", "postId": 1}),
        )
        .await?
        .expect_status(StatusCode::BAD_REQUEST)?;
    println!("✓ POST posts/1/comments without an email was rejected");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_get_comments_for_post_returns_success() -> Result<()> {
    client()?
        .get("comments?postId=1")
        .await?
        .expect_status(StatusCode::OK)?
        .expect_body_not_empty()?;
    println!("✓ GET comments?postId=1 returned a non-empty collection");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access to jsonplaceholder.typicode.com
async fn test_get_comments_for_unknown_post_returns_empty_collection() -> Result<()> {
    client()?
        .get("comments?postId=102")
        .await?
        .expect_status(StatusCode::OK)?
        .expect_body("[]")?;
    println!("✓ GET comments?postId=102 returned the empty collection");
    Ok(())
}
