//! Catalog browsing state machine
//!
//! [`CatalogBrowser`] owns the accumulated item collection, the pagination
//! cursor, the loading status, and the search query. Page fetches go through
//! an explicit request-ticket machine: `begin_*` hands out a [`PageRequest`]
//! (or refuses while one is outstanding), the fetch runs wherever the caller
//! likes, and [`CatalogBrowser::apply_page`] applies the result only if the
//! ticket is still valid. A refresh bumps the generation, so a page fetch
//! that was in flight when the user refreshed is discarded instead of racing
//! the new collection.

use std::collections::HashSet;
use std::sync::Arc;

use crate::constants::PAGE_SIZE;
use crate::pokeapi::{extract_id, CatalogApi, FetchError, PokemonListItem};

/// Loading status of the catalog list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Error(String),
}

/// Ticket for one page fetch.
///
/// Carries the offset to request and the generation it was issued under;
/// results from a stale generation are discarded on application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    generation: u64,
    replace: bool,
}

/// Pagination/filter controller over a [`CatalogApi`].
pub struct CatalogBrowser {
    api: Arc<dyn CatalogApi>,
    items: Vec<PokemonListItem>,
    offset: u32,
    status: LoadStatus,
    query: String,
    exhausted: bool,
    generation: u64,
}

impl CatalogBrowser {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            offset: 0,
            status: LoadStatus::Idle,
            query: String::new(),
            exhausted: false,
            generation: 0,
        }
    }

    /// Handle on the underlying API client, for callers that run fetches on
    /// background tasks.
    pub fn api(&self) -> Arc<dyn CatalogApi> {
        self.api.clone()
    }

    /// Start a full refresh.
    ///
    /// Always succeeds: bumping the generation invalidates whatever fetch may
    /// still be in flight, so the refresh supersedes it rather than racing it.
    pub fn begin_reset(&mut self) -> PageRequest {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.exhausted = false;
        PageRequest {
            offset: 0,
            generation: self.generation,
            replace: true,
        }
    }

    /// Start fetching the next page, if allowed.
    ///
    /// Refuses while a fetch is outstanding, while a filter is active
    /// (filtered and unfiltered pages must not be merged), and after the
    /// catalog reported a short page.
    pub fn begin_load_next(&mut self) -> Option<PageRequest> {
        if self.status == LoadStatus::Loading || !self.query.trim().is_empty() || self.exhausted {
            return None;
        }

        self.status = LoadStatus::Loading;
        Some(PageRequest {
            offset: self.offset,
            generation: self.generation,
            replace: false,
        })
    }

    /// Apply the outcome of a page fetch.
    ///
    /// Returns false when the ticket is stale (a reset happened since it was
    /// issued) and the result was discarded.
    pub fn apply_page(
        &mut self,
        request: PageRequest,
        result: Result<Vec<PokemonListItem>, FetchError>,
    ) -> bool {
        if request.generation != self.generation {
            return false;
        }

        match result {
            Ok(page) => {
                if request.replace {
                    self.items.clear();
                }
                // A short page means we ran off the end of the catalog.
                self.exhausted = page.len() < PAGE_SIZE as usize;

                let mut seen: HashSet<i64> =
                    self.items.iter().map(|item| extract_id(&item.url)).collect();
                for item in page {
                    if seen.insert(extract_id(&item.url)) {
                        self.items.push(item);
                    }
                }

                self.offset = request.offset + PAGE_SIZE;
                self.status = LoadStatus::Idle;
            }
            Err(e) => {
                self.status = LoadStatus::Error(e.to_string());
            }
        }
        true
    }

    /// Refresh the collection from offset 0, replacing everything.
    pub async fn reset(&mut self) {
        let request = self.begin_reset();
        let result = self.api.list_page(request.offset).await;
        self.apply_page(request, result);
    }

    /// Fetch and append the next page. Returns whether a fetch was issued.
    pub async fn load_next(&mut self) -> bool {
        let Some(request) = self.begin_load_next() else {
            return false;
        };
        let result = self.api.list_page(request.offset).await;
        self.apply_page(request, result);
        true
    }

    /// Update the search query. Pure state update, never triggers a fetch.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The items currently visible under the active query.
    ///
    /// Identity over the accumulated items when the trimmed query is empty,
    /// otherwise a case-insensitive substring filter over the name. Pure
    /// projection in arrival order; restartable.
    pub fn visible_items(&self) -> impl Iterator<Item = &PokemonListItem> {
        let needle = self.query.trim().to_lowercase();
        self.items
            .iter()
            .filter(move |item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
    }

    /// Number of items the active query lets through.
    pub fn visible_len(&self) -> usize {
        self.visible_items().count()
    }

    /// All accumulated items, unfiltered.
    pub fn items(&self) -> &[PokemonListItem] {
        &self.items
    }

    /// Current pagination offset (count of items already requested).
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Whether a short page marked the catalog as fully fetched.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
