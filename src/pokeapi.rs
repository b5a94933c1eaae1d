//! PokéAPI client and data models
//!
//! Thin HTTP wrapper around the public PokéAPI. It translates paginated list
//! requests and per-Pokémon detail requests into typed results and exposes the
//! pure helpers for id extraction and artwork URIs. No retries happen here;
//! callers decide what to do with a [`FetchError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE;

/// Errors produced by catalog fetches.
///
/// All variants are surfaced to the user as inline messages, never as process
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error("fetch interrupted")]
    Interrupted,
}

/// One entry of the paginated Pokémon list.
///
/// Identity is the id embedded in `url`, not the position in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    results: Vec<PokemonListItem>,
}

/// Full detail record for one Pokémon. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonDetails {
    pub id: i64,
    pub name: String,
    /// Height in decimetres
    pub height: i64,
    /// Weight in hectograms
    pub weight: i64,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Catalog data source seam.
///
/// The real implementation is [`PokeApi`]; tests drive the controller through
/// mock implementations of this trait.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of the Pokémon list starting at `offset`.
    async fn list_page(&self, offset: u32) -> Result<Vec<PokemonListItem>, FetchError>;

    /// Fetch the detail record for a single Pokémon.
    async fn fetch_details(&self, id: i64) -> Result<PokemonDetails, FetchError>;
}

/// Extract the numeric id from a list-entry URL.
///
/// Recognizes exactly the `…/pokemon/{id}/` shape, trailing slash included,
/// and returns 0 for anything else. Note the defensive zero default: two
/// malformed refs collapse onto id 0, which the list deduplicates.
pub fn extract_id(source_ref: &str) -> i64 {
    let mut segments = source_ref.split('/').rev();
    match (segments.next(), segments.next(), segments.next()) {
        (Some(""), Some(id), Some("pokemon")) => id.parse().unwrap_or(0),
        _ => 0,
    }
}

/// Build the official-artwork URI for a Pokémon id.
///
/// Pure string construction; nothing checks that the image exists.
pub fn artwork_uri(artwork_base: &str, id: i64) -> String {
    format!("{}/{}.png", artwork_base.trim_end_matches('/'), id)
}

/// HTTP client for the PokéAPI.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApi {
    /// Create a client with a bounded request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for PokeApi {
    async fn list_page(&self, offset: u32) -> Result<Vec<PokemonListItem>, FetchError> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, PAGE_SIZE, offset);
        let page: PageResponse = self.get_json(url).await?;
        Ok(page.results)
    }

    async fn fetch_details(&self, id: i64) -> Result<PokemonDetails, FetchError> {
        let url = format!("{}/pokemon/{}", self.base_url, id);
        self.get_json(url).await
    }
}
