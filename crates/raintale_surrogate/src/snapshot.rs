//! Pre-resolved memento snapshots for the video pipeline.

use crate::{MementoEmbedClient, SurrogateEndpoint};
use tracing::instrument;

/// Everything the video compositor wants to know about one memento, resolved
/// up front by querying all five surrogate endpoints.
///
/// Any endpoint returning a non-success status simply leaves its fields
/// unset; a snapshot with nothing set still renders (as blank slides are
/// skipped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MementoSnapshot {
    /// Page title from content data
    pub title: Option<String>,
    /// Capture datetime from content data
    pub memento_datetime: Option<String>,
    /// Highest-ranked sentence, tabs and newlines flattened to spaces
    pub top_sentence: Option<String>,
    /// Highest-ranked image URI
    pub top_image_uri: Option<String>,
    /// Domain of the original resource
    pub original_domain: Option<String>,
    /// Favicon URI of the original resource
    pub original_favicon: Option<String>,
    /// Name of the holding archive
    pub archive_name: Option<String>,
    /// Favicon URI of the holding archive
    pub archive_favicon: Option<String>,
}

impl MementoSnapshot {
    /// Slide text for this snapshot: title and top sentence, when present.
    pub fn slide_text(&self) -> Option<String> {
        match (&self.title, &self.top_sentence) {
            (Some(title), Some(sentence)) => Some(format!("{}\n\n{}", title, sentence)),
            (Some(title), None) => Some(title.clone()),
            (None, Some(sentence)) => Some(sentence.clone()),
            (None, None) => None,
        }
    }
}

/// Resolves story links into snapshots and fetches their media.
///
/// The video storyteller depends on this seam rather than on a concrete
/// client, so tests can substitute canned snapshots.
#[async_trait::async_trait]
pub trait MementoGatherer: Send + Sync {
    /// Gather a snapshot for one memento URI.
    async fn snapshot(&self, urim: &str) -> MementoSnapshot;

    /// Fetch raw bytes for a media URI, None on any failure.
    async fn fetch_media(&self, uri: &str) -> Option<Vec<u8>>;
}

#[async_trait::async_trait]
impl MementoGatherer for MementoEmbedClient {
    #[instrument(skip(self))]
    async fn snapshot(&self, urim: &str) -> MementoSnapshot {
        let mut snapshot = MementoSnapshot::default();

        if let Some(body) = self
            .endpoint_data(SurrogateEndpoint::Contentdata, urim)
            .await
        {
            snapshot.title = string_field(&body, "title");
            snapshot.memento_datetime = string_field(&body, "memento-datetime");
        }

        if let Some(body) = self
            .endpoint_data(SurrogateEndpoint::Sentencerank, urim)
            .await
        {
            snapshot.top_sentence = body
                .get("scored sentences")
                .and_then(|s| s.get(0))
                .and_then(|s| s.get("text"))
                .and_then(|t| t.as_str())
                .map(|t| t.replace('\t', " ").replace('\n', " "));
        }

        if let Some(body) = self.endpoint_data(SurrogateEndpoint::Imagedata, urim).await {
            snapshot.top_image_uri = body
                .get("ranked images")
                .and_then(|i| i.get(0))
                .and_then(|i| i.as_str())
                .map(str::to_string);
        }

        if let Some(body) = self
            .endpoint_data(SurrogateEndpoint::Originalresourcedata, urim)
            .await
        {
            snapshot.original_domain = string_field(&body, "original-domain");
            snapshot.original_favicon = string_field(&body, "original-favicon");
        }

        if let Some(body) = self
            .endpoint_data(SurrogateEndpoint::Archivedata, urim)
            .await
        {
            snapshot.archive_name = string_field(&body, "archive-name");
            snapshot.archive_favicon = string_field(&body, "archive-favicon");
        }

        tracing::debug!(urim, ?snapshot, "gathered memento snapshot");
        snapshot
    }

    async fn fetch_media(&self, uri: &str) -> Option<Vec<u8>> {
        MementoEmbedClient::fetch_media(self, uri).await
    }
}

fn string_field(body: &serde_json::Value, field: &str) -> Option<String> {
    body.get(field).and_then(|v| v.as_str()).map(str::to_string)
}
