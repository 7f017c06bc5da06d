// ApiClient - HTTP calls against a fixed base endpoint

use serde::Serialize;
use url::Url;

use crate::api::response::ApiResponse;
use crate::error::{Error, Result};

/// Issues requests against one REST base URL and returns assertable
/// responses.
///
/// # Example
///
/// ```ignore
/// use agdata_e2e::{ApiClient, NewPost, StatusCode};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new("https://jsonplaceholder.typicode.com/")?;
///
///     let payload = NewPost::new("foo", "bar", 1);
///     client
///         .post("posts", &payload)
///         .await?
///         .expect_status(StatusCode::CREATED)?
///         .expect_body_contains("foo")?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        // Relative joins drop the last path segment without this.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        ApiResponse::read("GET", url, response).await
    }

    /// POST `payload` to `path` as JSON.
    pub async fn post<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);
        let response = self.http.post(url.clone()).json(payload).send().await?;
        ApiResponse::read("POST", url, response).await
    }

    /// PUT `payload` to `path` as JSON.
    pub async fn put<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;
        tracing::debug!("PUT {}", url);
        let response = self.http.put(url.clone()).json(payload).send().await?;
        ApiResponse::read("PUT", url, response).await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(url.clone()).send().await?;
        ApiResponse::read("DELETE", url, response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|source| Error::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_relative_paths() {
        let client = ApiClient::new("https://jsonplaceholder.typicode.com/").unwrap();
        assert_eq!(
            client.endpoint("posts/1/comments").unwrap().as_str(),
            "https://jsonplaceholder.typicode.com/posts/1/comments"
        );
        assert_eq!(
            client.endpoint("comments?postId=102").unwrap().as_str(),
            "https://jsonplaceholder.typicode.com/comments?postId=102"
        );
    }

    #[test]
    fn test_new_normalizes_missing_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            client.endpoint("posts").unwrap().as_str(),
            "http://localhost:8080/api/posts"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base() {
        let err = ApiClient::new("not a url").expect_err("Base must parse");
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
