//! Application state and business logic

use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogBrowser, LoadStatus, PageRequest};
use crate::config::Config;
use crate::constants::LIST_LOAD_THRESHOLD;
use crate::i18n::Language;
use crate::pokeapi::{artwork_uri, extract_id, FetchError, PokemonDetails, PokemonListItem};
use crate::prefs::PreferenceStore;
use crate::theme::{self, Palette, Scheme};

/// Which screen currently owns the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

/// State of the detail screen for one Pokémon.
///
/// Each detail view reports its own fetch error; a failure here never touches
/// the list screen's state.
pub struct DetailView {
    pub id: i64,
    pub name: String,
    pub record: Option<PokemonDetails>,
    pub error: Option<String>,
}

type PageTask = (PageRequest, JoinHandle<Result<Vec<PokemonListItem>, FetchError>>);
type DetailTask = (u64, JoinHandle<Result<PokemonDetails, FetchError>>);

/// Application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub browser: CatalogBrowser,
    pub list_state: ListState,
    pub view: View,
    pub search_active: bool,
    pub show_settings: bool,
    pub show_help: bool,
    pub prefs: PreferenceStore,
    pub system_scheme: Scheme,
    pub detail: Option<DetailView>,
    // Ticket of the detail view currently allowed to receive results.
    // Bumped on open and close, so a fetch started for a view the user
    // already left resolves against a stale ticket and is discarded.
    detail_ticket: u64,
    page_task: Option<PageTask>,
    detail_task: Option<DetailTask>,
}

impl App {
    #[must_use]
    pub fn new(config: Config, browser: CatalogBrowser, prefs: PreferenceStore, system_scheme: Scheme) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            config,
            browser,
            list_state,
            view: View::List,
            search_active: false,
            show_settings: false,
            show_help: false,
            prefs,
            system_scheme,
            detail: None,
            detail_ticket: 0,
            page_task: None,
            detail_task: None,
        }
    }

    /// Palette for the currently effective scheme.
    #[must_use]
    pub fn palette(&self) -> Palette {
        theme::palette(self.prefs.effective_scheme(self.system_scheme))
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    /// Artwork URL for a Pokémon id, from the configured sprite base.
    #[must_use]
    pub fn artwork_url(&self, id: i64) -> String {
        artwork_uri(&self.config.api.artwork_base_url, id)
    }

    // --- list fetching -----------------------------------------------------

    /// Start a full refresh in the background, superseding any page fetch
    /// that is still in flight.
    pub fn start_reset(&mut self) {
        let request = self.browser.begin_reset();
        if let Some((_, old)) = self.page_task.take() {
            old.abort();
        }
        let api = self.browser.api();
        self.page_task = Some((
            request,
            tokio::spawn(async move { api.list_page(request.offset).await }),
        ));
    }

    /// Ask for the next page if the controller allows one right now.
    pub fn maybe_load_next(&mut self) {
        if self.page_task.is_some() {
            return;
        }
        if let Some(request) = self.browser.begin_load_next() {
            let api = self.browser.api();
            self.page_task = Some((
                request,
                tokio::spawn(async move { api.list_page(request.offset).await }),
            ));
        }
    }

    /// Issue the next page once the selection scrolls close to the end of
    /// the unfiltered list.
    fn request_more_if_near_end(&mut self) {
        if !self.browser.query().trim().is_empty() {
            return;
        }
        let selected = self.selected_index();
        if selected + LIST_LOAD_THRESHOLD >= self.browser.visible_len() {
            self.maybe_load_next();
        }
    }

    /// Collect results of finished background fetches.
    ///
    /// Called from the event loop on every tick, mirroring the poll-based
    /// background task handling of the main loop.
    pub async fn poll_background_tasks(&mut self) {
        if self.page_task.as_ref().is_some_and(|(_, h)| h.is_finished()) {
            if let Some((request, handle)) = self.page_task.take() {
                let result = match handle.await {
                    Ok(result) => result,
                    Err(e) => {
                        log::warn!("page fetch task failed: {e}");
                        Err(FetchError::Interrupted)
                    }
                };
                let applied = self.browser.apply_page(request, result);
                if applied {
                    self.clamp_selection();
                }
            }
        }

        if self.detail_task.as_ref().is_some_and(|(_, h)| h.is_finished()) {
            if let Some((ticket, handle)) = self.detail_task.take() {
                let result = match handle.await {
                    Ok(result) => result,
                    Err(e) => {
                        log::warn!("detail fetch task failed: {e}");
                        Err(FetchError::Interrupted)
                    }
                };
                // Stale ticket means the user already left that view.
                if ticket == self.detail_ticket {
                    if let Some(detail) = self.detail.as_mut() {
                        match result {
                            Ok(record) => detail.record = Some(record),
                            Err(e) => detail.error = Some(e.to_string()),
                        }
                    }
                }
            }
        }
    }

    // --- selection ---------------------------------------------------------

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        let visible = self.browser.visible_len();
        if visible == 0 {
            return;
        }
        let next = (self.selected_index() + 1).min(visible - 1);
        self.list_state.select(Some(next));
        self.request_more_if_near_end();
    }

    pub fn select_previous(&mut self) {
        let current = self.selected_index();
        self.list_state.select(Some(current.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self) {
        let visible = self.browser.visible_len();
        if visible > 0 {
            self.list_state.select(Some(visible - 1));
        }
        self.request_more_if_near_end();
    }

    /// Keep the selection inside the visible range after the collection or
    /// the query changed under it.
    pub fn clamp_selection(&mut self) {
        let visible = self.browser.visible_len();
        let selected = self.selected_index();
        if visible == 0 {
            self.list_state.select(Some(0));
        } else if selected >= visible {
            self.list_state.select(Some(visible - 1));
        }
    }

    // --- search ------------------------------------------------------------

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.browser.query().to_string();
        query.push(c);
        self.browser.set_query(query);
        self.clamp_selection();
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.browser.query().to_string();
        query.pop();
        self.browser.set_query(query);
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.browser.set_query("");
        self.clamp_selection();
    }

    // --- detail view -------------------------------------------------------

    /// Open the detail view for the currently selected item and start its
    /// fetch in the background.
    pub fn open_selected_detail(&mut self) {
        let Some(item) = self.browser.visible_items().nth(self.selected_index()).cloned() else {
            return;
        };
        let id = extract_id(&item.url);
        self.view = View::Detail;
        self.detail = Some(DetailView {
            id,
            name: item.name,
            record: None,
            error: None,
        });
        self.spawn_detail_fetch(id);
    }

    /// Retry the fetch for the current detail view.
    pub fn retry_detail(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.error = None;
            detail.record = None;
            let id = detail.id;
            self.spawn_detail_fetch(id);
        }
    }

    /// Leave the detail view. A fetch still in flight is cancelled and its
    /// result discarded.
    pub fn close_detail(&mut self) {
        self.detail_ticket += 1;
        if let Some((_, handle)) = self.detail_task.take() {
            handle.abort();
        }
        self.detail = None;
        self.view = View::List;
    }

    fn spawn_detail_fetch(&mut self, id: i64) {
        self.detail_ticket += 1;
        let ticket = self.detail_ticket;
        if let Some((_, old)) = self.detail_task.take() {
            old.abort();
        }
        let api = self.browser.api();
        self.detail_task = Some((ticket, tokio::spawn(async move { api.fetch_details(id).await })));
    }

    // --- settings ----------------------------------------------------------

    pub fn toggle_use_system_theme(&mut self) {
        let follow = !self.prefs.appearance().use_system;
        self.prefs.set_use_system(follow);
    }

    /// Flip the explicit dark-mode switch. Inert while following the system
    /// scheme, matching the disabled switch in the settings screen.
    pub fn toggle_dark_mode(&mut self) {
        if self.prefs.appearance().use_system {
            return;
        }
        let next = self.prefs.appearance().scheme.toggled();
        self.prefs.set_scheme(next);
    }

    pub fn cycle_language(&mut self) {
        self.prefs.set_language(self.prefs.language().cycled());
    }

    /// Whether the list screen currently shows an inline fetch error.
    #[must_use]
    pub fn list_has_error(&self) -> bool {
        matches!(self.browser.status(), LoadStatus::Error(_))
    }
}
