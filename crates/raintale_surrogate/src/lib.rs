//! MementoEmbed surrogate data client for Raintale.
//!
//! A surrogate is the set of metadata attributes a template can request
//! about an archived web resource: its title, a ranked sentence, a favicon
//! URI, and so on. This crate fetches those attributes from a MementoEmbed
//! service, grouping requested fields by service endpoint and treating any
//! non-success or timed-out response as "field absent" rather than fatal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod client;
mod config;
mod snapshot;

pub use cache::{ResponseCache, ResponseCacheConfig};
pub use client::{MementoEmbedClient, SurrogateClient, SurrogateEndpoint};
pub use config::SurrogateConfig;
pub use snapshot::{MementoGatherer, MementoSnapshot};
