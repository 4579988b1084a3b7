//! Share link derivation.
//!
//! Pure construction of the canonical article URL and percent-encoded
//! share targets. Opening the links is the embedder's concern.

use thiserror::Error;
use url::Url;

/// Errors building share links.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid share origin '{origin}': {message}")]
    InvalidOrigin { origin: String, message: String },
}

/// Canonical article URL plus share targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// `{origin}/article/{slug}`
    pub article: Url,
    pub linkedin: Url,
    pub twitter: Url,
    pub facebook: Url,
}

impl ShareLinks {
    /// Build share links for an article from the configured site origin.
    pub fn build(origin: &str, slug: &str, title: &str) -> Result<Self, ShareError> {
        let base = Url::parse(origin).map_err(|e| ShareError::InvalidOrigin {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let mut article = base.clone();
        article
            .path_segments_mut()
            .map_err(|()| ShareError::InvalidOrigin {
                origin: origin.to_string(),
                message: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(["article", slug]);

        let mut linkedin =
            Url::parse("https://www.linkedin.com/sharing/share-offsite/").expect("static URL");
        linkedin
            .query_pairs_mut()
            .append_pair("url", article.as_str());

        let mut twitter = Url::parse("https://twitter.com/intent/tweet").expect("static URL");
        twitter
            .query_pairs_mut()
            .append_pair("url", article.as_str())
            .append_pair("text", title);

        let mut facebook =
            Url::parse("https://www.facebook.com/sharer/sharer.php").expect("static URL");
        facebook
            .query_pairs_mut()
            .append_pair("u", article.as_str());

        Ok(Self {
            article,
            linkedin,
            twitter,
            facebook,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_url_joins_origin_and_slug() {
        let links = ShareLinks::build("https://ink.example", "hello-world", "Hello").unwrap();
        assert_eq!(links.article.as_str(), "https://ink.example/article/hello-world");
    }

    #[test]
    fn origin_with_trailing_slash_is_normalized() {
        let links = ShareLinks::build("https://ink.example/", "hello", "Hello").unwrap();
        assert_eq!(links.article.as_str(), "https://ink.example/article/hello");
    }

    #[test]
    fn targets_percent_encode_url_and_title() {
        let links = ShareLinks::build("https://ink.example", "a-b", "Spaces & ampersands").unwrap();
        let twitter = links.twitter.as_str();
        assert!(twitter.starts_with("https://twitter.com/intent/tweet?url="));
        assert!(twitter.contains("https%3A%2F%2Fink.example%2Farticle%2Fa-b"));
        assert!(twitter.contains("text=Spaces+%26+ampersands"));

        assert!(links
            .linkedin
            .as_str()
            .starts_with("https://www.linkedin.com/sharing/share-offsite/?url="));
        assert!(links
            .facebook
            .as_str()
            .starts_with("https://www.facebook.com/sharer/sharer.php?u="));
    }

    #[test]
    fn invalid_origin_is_rejected() {
        assert!(matches!(
            ShareLinks::build("not a url", "s", "t"),
            Err(ShareError::InvalidOrigin { .. })
        ));
    }
}
