//! HTTP implementation of the article service over reqwest.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use tokio::time::timeout;
use url::Url;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::model::{Article, ArticleId, UserId, Viewer};

use super::error::ServiceError;
use super::ArticleService;

/// Article service backed by a conventional REST API.
///
/// - `GET /api/articles/{slug}` (optional `viewer` query)
/// - `POST|DELETE /api/articles/{id}/like`
/// - `POST|DELETE /api/articles/{id}/bookmark`
pub struct HttpArticleService {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl HttpArticleService {
    /// Build a service client from configuration.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|source| ServiceError::Connection { source })?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one interaction call (like/unlike/bookmark/unbookmark).
    async fn interaction(
        &self,
        method: Method,
        article: &ArticleId,
        viewer: &UserId,
        verb: &str,
    ) -> Result<(), ServiceError> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(&["api", "articles", article.as_str(), verb])?;

        tracing::debug!(
            request_id = %request_id,
            article_id = %article,
            verb,
            "Sending interaction request"
        );

        let send = self
            .client
            .request(method, url)
            .query(&[("viewer", viewer.as_str())])
            .send();

        let response = timeout(self.request_timeout, send)
            .await
            .map_err(|_| ServiceError::Timeout {
                duration: self.request_timeout.as_secs(),
            })?
            .map_err(|source| ServiceError::Connection { source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(
            request_id = %request_id,
            article_id = %article,
            status = status.as_u16(),
            "Interaction request rejected"
        );
        Err(ServiceError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl ArticleService for HttpArticleService {
    async fn fetch_by_slug(
        &self,
        slug: &str,
        viewer: &Viewer,
    ) -> Result<Option<Article>, ServiceError> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(&["api", "articles", slug])?;

        let mut request = self.client.get(url);
        if let Some(id) = viewer.user_id() {
            request = request.query(&[("viewer", id.as_str())]);
        }

        tracing::debug!(request_id = %request_id, slug, "Fetching article");

        let response = timeout(self.request_timeout, request.send())
            .await
            .map_err(|_| ServiceError::Timeout {
                duration: self.request_timeout.as_secs(),
            })?
            .map_err(|source| ServiceError::Connection { source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let article = response
            .json::<Article>()
            .await
            .map_err(|e| ServiceError::Decode {
                message: e.to_string(),
            })?;

        tracing::debug!(request_id = %request_id, article_id = %article.id, "Article fetched");
        Ok(Some(article))
    }

    async fn like(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction(Method::POST, article, viewer, "like").await
    }

    async fn unlike(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction(Method::DELETE, article, viewer, "like").await
    }

    async fn bookmark(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction(Method::POST, article, viewer, "bookmark").await
    }

    async fn unbookmark(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction(Method::DELETE, article, viewer, "bookmark").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> HttpArticleService {
        HttpArticleService::new(&ServiceConfig {
            base_url: "https://api.example.com".to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        })
        .unwrap()
    }

    #[test]
    fn endpoint_percent_encodes_segments() {
        let url = service().endpoint(&["api", "articles", "a b"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/articles/a%20b");
    }

    #[test]
    fn new_rejects_unparseable_base_url() {
        let result = HttpArticleService::new(&ServiceConfig {
            base_url: "not a url".to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        });
        assert!(matches!(result, Err(ServiceError::InvalidUrl(_))));
    }
}
