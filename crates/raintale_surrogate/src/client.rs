//! Surrogate data client over a MementoEmbed service.

use crate::{ResponseCache, SurrogateConfig};
use raintale_core::MementoData;
use raintale_error::HttpError;
use serde_json::Value as JsonValue;
use std::sync::Mutex;
use tracing::instrument;

/// The MementoEmbed service endpoints that supply surrogate fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SurrogateEndpoint {
    /// Page content: title, snippet, memento-datetime
    Contentdata,
    /// Ranked sentences for the capture
    Sentencerank,
    /// Ranked images for the capture
    Imagedata,
    /// Data about the original (live-web) resource
    Originalresourcedata,
    /// Data about the holding archive
    Archivedata,
}

impl SurrogateEndpoint {
    /// The endpoint responsible for a given surrogate field name.
    ///
    /// Fields with no dedicated endpoint fall back to content data, where
    /// they are simply absent if the service does not supply them.
    pub fn for_field(field: &str) -> Self {
        match field {
            "best-sentence" => Self::Sentencerank,
            "best-image-uri" => Self::Imagedata,
            f if f.starts_with("original-") => Self::Originalresourcedata,
            f if f.starts_with("archive-") => Self::Archivedata,
            _ => Self::Contentdata,
        }
    }

    /// Service URI for this endpoint and a memento URI.
    pub fn uri(&self, api: &str, urim: &str) -> String {
        format!("{}/services/memento/{}/{}", api, self, urim)
    }

    /// Pull one field's value out of this endpoint's response body.
    fn extract(&self, field: &str, body: &JsonValue) -> Option<JsonValue> {
        match self {
            Self::Sentencerank => {
                let text = body.get("scored sentences")?.get(0)?.get("text")?.as_str()?;
                Some(JsonValue::String(
                    text.replace('\t', " ").replace('\n', " "),
                ))
            }
            Self::Imagedata => body.get("ranked images")?.get(0).cloned(),
            _ => body.get(field).cloned(),
        }
    }
}

/// Fetches surrogate data for archived resources.
///
/// Non-success responses and timeouts mean "field absent", never a fatal
/// error; rendering proceeds with blanks for whatever is missing.
#[async_trait::async_trait]
pub trait SurrogateClient: Send + Sync {
    /// Fetch the requested fields for one memento URI.
    async fn memento_data(&self, urim: &str, fields: &[String]) -> MementoData;
}

/// Surrogate data client backed by a MementoEmbed service.
///
/// Requested fields are grouped by service endpoint, so a field set spanning
/// content and archive data costs two requests, not one per field. Responses
/// are cached per request URI in an injected, per-run cache.
pub struct MementoEmbedClient {
    config: SurrogateConfig,
    client: reqwest::Client,
    cache: Mutex<ResponseCache>,
}

impl MementoEmbedClient {
    /// Create a client for the configured service, with its own per-run
    /// response cache.
    #[instrument(skip(config), fields(endpoint = %config.endpoint))]
    pub fn new(config: SurrogateConfig) -> Result<Self, HttpError> {
        tracing::debug!("Creating surrogate data client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        let cache = Mutex::new(ResponseCache::new(config.cache.clone()));

        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// The client configuration.
    pub fn config(&self) -> &SurrogateConfig {
        &self.config
    }

    /// Fetch one endpoint's JSON body for a memento, through the cache.
    ///
    /// Returns None for non-success responses, timeouts, and bodies that are
    /// not JSON.
    #[instrument(skip(self))]
    pub async fn endpoint_data(
        &self,
        endpoint: SurrogateEndpoint,
        urim: &str,
    ) -> Option<JsonValue> {
        let uri = endpoint.uri(&self.config.endpoint, urim);

        if let Ok(mut cache) = self.cache.lock()
            && let Some(cached) = cache.get(&uri)
        {
            return Some(cached);
        }

        let response = match self.client.get(&uri).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(uri, "request failed, treating fields as absent: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                uri,
                status = %response.status(),
                "non-success response, treating fields as absent"
            );
            return None;
        }

        let body: JsonValue = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(uri, "failed to parse response body: {}", e);
                return None;
            }
        };

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(&uri, body.clone());
        }

        Some(body)
    }

    /// Fetch raw bytes for a media URI (an image referenced by a surrogate).
    ///
    /// Returns None on any failure; a missing image degrades output, it does
    /// not abort the story.
    #[instrument(skip(self))]
    pub async fn fetch_media(&self, uri: &str) -> Option<Vec<u8>> {
        let response = match self.client.get(uri).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(uri, "media request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(uri, status = %response.status(), "media fetch non-success");
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                tracing::warn!(uri, "failed to read media body: {}", e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl SurrogateClient for MementoEmbedClient {
    #[instrument(skip(self, fields), fields(field_count = fields.len()))]
    async fn memento_data(&self, urim: &str, fields: &[String]) -> MementoData {
        let mut data = MementoData::default();

        let mut endpoints: Vec<SurrogateEndpoint> = Vec::new();
        for field in fields {
            let endpoint = SurrogateEndpoint::for_field(field);
            if !endpoints.contains(&endpoint) {
                endpoints.push(endpoint);
            }
        }

        for endpoint in endpoints {
            let Some(body) = self.endpoint_data(endpoint, urim).await else {
                continue;
            };

            for field in fields {
                if SurrogateEndpoint::for_field(field) != endpoint {
                    continue;
                }
                match endpoint.extract(field, &body) {
                    Some(value) => data.insert(field.clone(), value),
                    None => tracing::debug!(field, urim, "field absent from response"),
                }
            }
        }

        tracing::debug!(urim, supplied = data.len(), "memento data assembled");
        data
    }
}
