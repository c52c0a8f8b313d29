use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use crate::config::FeedConfig;
use crate::error::SignalError;
use crate::session::Session;

/// Source of raw feed text.
///
/// The refresh service only sees this trait, so tests can swap the network
/// out for scripted feeds.
#[async_trait]
pub trait SignalFeed: Send + Sync {
    async fn fetch_raw(&self) -> Result<String, SignalError>;
}

/// HTTP GET against the configured feed URL.
pub struct HttpFeed {
    client: Client,
    url: Url,
    session: Session,
}

impl HttpFeed {
    pub fn new(config: &FeedConfig, session: Session) -> Result<Self, SignalError> {
        let url = config.feed_url()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url,
            session,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SignalFeed for HttpFeed {
    async fn fetch_raw(&self) -> Result<String, SignalError> {
        let mut request = self.client.get(self.url.clone()).header(ACCEPT, "text/csv");
        if let Some(token) = self.session.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SignalError::Http {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
