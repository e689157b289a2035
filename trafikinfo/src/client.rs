//! The query client.

use std::path::Path;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::decoder::DecoderCache;
use crate::error::Error;
use crate::query::{self, Query};
use crate::schema::ResultSchema;

/// Default endpoint of the traffic-information service.
pub const DEFAULT_BASE_URL: &str = "https://api.trafikinfo.trafikverket.se/v2/data.xml";

/// Default request timeout, covering connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Authentication key sent in every request's `<LOGIN>` element.
    pub api_key: String,
    /// Endpoint URL requests are posted to.
    pub base_url: String,
    /// Timeout for the whole request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the given API key and defaults for the rest.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the traffic-information query service.
///
/// The configuration is fixed at construction; to talk to another
/// endpoint or with another key, build another client. Cheap to clone,
/// and clones share the HTTP connection pool and the decoder caches.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    /// Decoders for responses read back from disk.
    local_decoders: DecoderCache,
    /// Decoders for responses fetched over HTTP.
    remote_decoders: DecoderCache,
}

impl Client {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            local_decoders: DecoderCache::new(),
            remote_decoders: DecoderCache::new(),
        })
    }

    /// Query the service and decode the response.
    ///
    /// Builds the request document for `R`'s category from `query`,
    /// posts it as `text/xml`, and decodes the returned `<RESULT>`
    /// blocks. With `save_to`, the raw response body is written to that
    /// path before decoding, so an undecodable response is still
    /// captured on disk.
    ///
    /// The HTTP status is not inspected: the service reports failures
    /// inside the response document, as an `<ERROR>` block in a result,
    /// and those pass through to the caller as data.
    pub async fn fetch<R: ResultSchema>(
        &self,
        query: &Query,
        save_to: Option<&Path>,
    ) -> Result<Vec<R>, Error> {
        let request = query::build_request(&self.api_key, query, R::OBJECT_TYPE, R::SCHEMA_VERSION);

        debug!(
            object_type = R::OBJECT_TYPE,
            schema_version = R::SCHEMA_VERSION,
            url = %self.base_url,
            "posting query"
        );
        let response = self
            .http
            .post(&self.base_url)
            .header(CONTENT_TYPE, "text/xml")
            .body(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );

        if let Some(path) = save_to {
            std::fs::write(path, &body).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "saved raw response");
        }

        self.remote_decoders.get::<R>().decode(&body)
    }

    /// Decode a previously saved response file.
    ///
    /// The file is read before anything else happens, so a missing or
    /// unreadable file is an [`Error::Io`] and leaves the decoder
    /// caches untouched.
    pub fn load<R: ResultSchema>(&self, path: &Path) -> Result<Vec<R>, Error> {
        let body = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = body.len(), "loaded saved response");

        self.local_decoders.get::<R>().decode(&body)
    }

    /// Decoder counts for the (local, remote) caches.
    #[cfg(test)]
    fn decoder_entry_counts(&self) -> (u64, u64) {
        (
            self.local_decoders.entry_count(),
            self.remote_decoders.entry_count(),
        )
    }
}
