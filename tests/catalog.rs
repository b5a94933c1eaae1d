use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use termidex::catalog::{CatalogBrowser, LoadStatus};
use termidex::constants::PAGE_SIZE;
use termidex::pokeapi::{extract_id, CatalogApi, FetchError, PokemonDetails, PokemonListItem};

fn entry(id: i64, name: &str) -> PokemonListItem {
    PokemonListItem {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
    }
}

fn page(start: i64, count: usize) -> Vec<PokemonListItem> {
    (start..start + count as i64)
        .map(|id| entry(id, &format!("pokemon-{id}")))
        .collect()
}

/// Serves fixed pages by offset and counts how many list fetches happen.
struct FakeCatalog {
    pages: Vec<Vec<PokemonListItem>>,
    calls: AtomicUsize,
    fail: bool,
}

impl FakeCatalog {
    fn new(pages: Vec<Vec<PokemonListItem>>) -> Self {
        Self {
            pages,
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            pages: Vec::new(),
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_page(&self, offset: u32) -> Result<Vec<PokemonListItem>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        let index = (offset / PAGE_SIZE) as usize;
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    async fn fetch_details(&self, _id: i64) -> Result<PokemonDetails, FetchError> {
        Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND))
    }
}

fn assert_unique_ids(items: &[PokemonListItem]) {
    let mut ids: Vec<i64> = items.iter().map(|item| extract_id(&item.url)).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before, "duplicate ids in accumulated items");
}

#[tokio::test]
async fn test_reset_then_load_next_accumulates_two_pages() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(41, 40), page(81, 40)]));
    let mut browser = CatalogBrowser::new(api);

    browser.reset().await;
    assert_eq!(browser.items().len(), 40);
    assert_eq!(browser.offset(), 40);
    assert_eq!(*browser.status(), LoadStatus::Idle);

    assert!(browser.load_next().await);
    assert_eq!(browser.items().len(), 80);
    assert_eq!(browser.offset(), 80);
    assert_unique_ids(browser.items());
    assert_eq!(browser.items()[0].name, "pokemon-1");
    assert_eq!(browser.items()[79].name, "pokemon-80");
}

#[tokio::test]
async fn test_reset_replaces_collection_wholesale() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(41, 40)]));
    let mut browser = CatalogBrowser::new(api);

    browser.reset().await;
    browser.load_next().await;
    assert_eq!(browser.items().len(), 80);

    browser.reset().await;
    assert_eq!(browser.items().len(), 40);
    assert_eq!(browser.offset(), 40);
}

#[tokio::test]
async fn test_load_next_refused_while_fetch_outstanding() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(41, 40)]));
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;

    let first = browser.begin_load_next();
    assert!(first.is_some());
    // The single-flight gate refuses a second ticket while one is out
    assert!(browser.begin_load_next().is_none());
}

#[tokio::test]
async fn test_load_next_is_noop_while_filter_active() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(41, 40)]));
    let mut browser = CatalogBrowser::new(api.clone());
    browser.reset().await;
    let calls_after_reset = api.call_count();

    browser.set_query("pika");
    assert!(!browser.load_next().await);
    assert!(browser.begin_load_next().is_none());
    // No fetch was issued
    assert_eq!(api.call_count(), calls_after_reset);

    // A whitespace-only query does not count as a filter
    browser.set_query("   ");
    assert!(browser.load_next().await);
    assert_eq!(browser.items().len(), 80);
}

#[tokio::test]
async fn test_query_filters_case_insensitive_substring() {
    let roster = vec![entry(1, "bulbasaur"), entry(4, "charmander"), entry(6, "charizard"), entry(25, "pikachu")];
    let api = Arc::new(FakeCatalog::new(vec![roster]));
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;

    browser.set_query("char");
    let names: Vec<&str> = browser.visible_items().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "charizard"]);

    browser.set_query("CHAR");
    let names: Vec<&str> = browser.visible_items().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "charizard"]);

    browser.set_query("bulbasaur is not matched by this");
    assert_eq!(browser.visible_len(), 0);
}

#[tokio::test]
async fn test_visible_items_is_a_pure_projection() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40)]));
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;
    browser.set_query("pokemon-1");

    let first: Vec<PokemonListItem> = browser.visible_items().cloned().collect();
    let second: Vec<PokemonListItem> = browser.visible_items().cloned().collect();
    assert_eq!(first, second);
    // The underlying collection is untouched and keeps arrival order
    assert_eq!(browser.items().len(), 40);
    assert_eq!(browser.items()[0].name, "pokemon-1");
    assert_eq!(browser.items()[39].name, "pokemon-40");
}

#[tokio::test]
async fn test_stale_page_discarded_after_refresh() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(41, 40)]));
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;

    // A page fetch goes out, then the user refreshes before it lands
    let stale = browser.begin_load_next().unwrap();
    let refresh = browser.begin_reset();

    // The late page result resolves against a stale generation
    assert!(!browser.apply_page(stale, Ok(page(41, 40))));
    assert_eq!(browser.items().len(), 40, "stale append must not be applied");

    // The refresh result still applies normally
    assert!(browser.apply_page(refresh, Ok(page(1, 40))));
    assert_eq!(browser.items().len(), 40);
    assert_eq!(browser.offset(), 40);
    assert_eq!(*browser.status(), LoadStatus::Idle);
}

#[tokio::test]
async fn test_short_page_marks_catalog_exhausted() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(41, 10)]));
    let mut browser = CatalogBrowser::new(api.clone());
    browser.reset().await;
    assert!(!browser.is_exhausted());

    assert!(browser.load_next().await);
    assert_eq!(browser.items().len(), 50);
    assert!(browser.is_exhausted());

    // No more fetches go out past the end
    let calls = api.call_count();
    assert!(!browser.load_next().await);
    assert_eq!(api.call_count(), calls);

    // A refresh clears the terminal signal
    browser.reset().await;
    assert!(!browser.is_exhausted());
}

#[tokio::test]
async fn test_empty_page_marks_catalog_exhausted() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40)]));
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;

    // The fake returns an empty page past its roster
    assert!(browser.load_next().await);
    assert_eq!(browser.items().len(), 40);
    assert!(browser.is_exhausted());
}

#[tokio::test]
async fn test_fetch_error_sets_error_status() {
    let api = Arc::new(FakeCatalog::failing());
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;

    match browser.status() {
        LoadStatus::Error(message) => assert!(message.contains("500")),
        other => panic!("expected error status, got {other:?}"),
    }
    assert!(browser.items().is_empty());

    // The error state does not wedge the gate: a retry ticket is available
    assert!(browser.begin_load_next().is_some());
}

#[tokio::test]
async fn test_overlapping_pages_are_deduplicated() {
    let api = Arc::new(FakeCatalog::new(vec![page(1, 40), page(21, 40)]));
    let mut browser = CatalogBrowser::new(api);
    browser.reset().await;
    browser.load_next().await;

    // 40 + 40 with 20 shared ids
    assert_eq!(browser.items().len(), 60);
    assert_unique_ids(browser.items());
}
