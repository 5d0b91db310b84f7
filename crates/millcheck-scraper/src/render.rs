//! Page loading behind the [`PageRenderer`] capability.
//!
//! Discovery and inspection only ever see a `&impl PageRenderer`; the driver
//! owns the concrete renderer for the length of the run.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Loads a page and returns its final markup.
///
/// Each call is an independent page context: implementations must not let
/// one slow or failing call affect another running concurrently.
pub trait PageRenderer {
    /// Loads `url`, giving up once `timeout` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Timeout`] when the bound is exceeded, and any
    /// other [`ScraperError`] the load itself produces.
    fn render(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// Renderer backed by a plain HTTP GET.
///
/// The store serves its catalog and product pages fully server-side, so the
/// response body is already the markup a browser would end up with.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    /// Creates an `HttpRenderer` sending `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &str, timeout: Duration) -> Result<String, ScraperError> {
        tracing::debug!(url, timeout_secs = timeout.as_secs(), "loading page");
        tokio::time::timeout(timeout, self.fetch(url))
            .await
            .map_err(|_| ScraperError::Timeout {
                url: url.to_owned(),
                timeout_secs: timeout.as_secs(),
            })?
    }
}
