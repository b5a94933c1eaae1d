use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use termidex::catalog::CatalogBrowser;
use termidex::config::Config;
use termidex::i18n::Language;
use termidex::pokeapi::{CatalogApi, FetchError, PokemonDetails, PokemonListItem};
use termidex::prefs::PreferenceStore;
use termidex::theme::Scheme;
use termidex::ui::app::{App, View};

/// Catalog whose detail fetches block until the test releases them, so the
/// test controls exactly when a result arrives relative to user actions.
struct GatedCatalog {
    roster: Vec<PokemonListItem>,
    gate: Notify,
}

impl GatedCatalog {
    fn new(roster: Vec<PokemonListItem>) -> Self {
        Self {
            roster,
            gate: Notify::new(),
        }
    }
}

#[async_trait]
impl CatalogApi for GatedCatalog {
    async fn list_page(&self, _offset: u32) -> Result<Vec<PokemonListItem>, FetchError> {
        Ok(self.roster.clone())
    }

    async fn fetch_details(&self, id: i64) -> Result<PokemonDetails, FetchError> {
        self.gate.notified().await;
        Ok(PokemonDetails {
            id,
            name: format!("pokemon-{id}"),
            height: 4,
            weight: 60,
            types: vec![],
            stats: vec![],
        })
    }
}

fn entry(id: i64, name: &str) -> PokemonListItem {
    PokemonListItem {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
    }
}

fn app_with(api: Arc<GatedCatalog>, prefs_dir: std::path::PathBuf) -> App {
    let browser = CatalogBrowser::new(api as Arc<dyn CatalogApi>);
    let prefs = PreferenceStore::load(prefs_dir, Scheme::Dark, Language::En);
    App::new(Config::default(), browser, prefs, Scheme::Dark)
}

async fn settle(app: &mut App) {
    for _ in 0..50 {
        app.poll_background_tasks().await;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn test_closing_detail_discards_in_flight_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(GatedCatalog::new(vec![entry(1, "bulbasaur"), entry(2, "ivysaur")]));
    let mut app = app_with(api.clone(), dir.path().to_path_buf());

    app.start_reset();
    settle(&mut app).await;
    assert!(app.browser.visible_len() >= 2);

    app.open_selected_detail();
    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.id, 1);
    assert!(detail.record.is_none());

    // Leave the view while the fetch is still blocked, then release it. The
    // late result must not resurrect the closed view.
    app.close_detail();
    api.gate.notify_one();
    settle(&mut app).await;

    assert!(app.detail.is_none());
    assert_eq!(app.view, View::List);
}

#[tokio::test]
async fn test_reopened_detail_ignores_result_for_previous_pokemon() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(GatedCatalog::new(vec![entry(1, "bulbasaur"), entry(2, "ivysaur")]));
    let mut app = app_with(api.clone(), dir.path().to_path_buf());

    app.start_reset();
    settle(&mut app).await;

    // Open the first entry, abandon it mid-fetch, and open the second one.
    app.open_selected_detail();
    assert_eq!(app.detail.as_ref().unwrap().id, 1);
    app.close_detail();
    app.select_next();
    app.open_selected_detail();
    assert_eq!(app.detail.as_ref().unwrap().id, 2);

    api.gate.notify_one();
    settle(&mut app).await;

    // Only the second fetch may land, and only on the second view.
    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.id, 2);
    let record = detail.record.as_ref().unwrap();
    assert_eq!(record.id, 2);
    assert_eq!(record.name, "pokemon-2");
}
