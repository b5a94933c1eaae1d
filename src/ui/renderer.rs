//! Main UI rendering and coordination

use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::{App, View};
use super::components::{DetailPanel, HelpPanel, PokemonList, SearchBar, SettingsPanel, StatusBar};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::catalog::CatalogBrowser;
use crate::config::Config;
use crate::i18n;
use crate::pokeapi::PokeApi;
use crate::prefs::PreferenceStore;
use crate::theme;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire up the catalog client and preference store
    let api = Arc::new(PokeApi::new(&config.api.base_url, config.api.timeout_secs)?);
    let browser = CatalogBrowser::new(api);
    let system_scheme = theme::detect_system_scheme();
    let prefs_dir = PreferenceStore::default_dir()?;
    let prefs = PreferenceStore::load(prefs_dir, system_scheme, i18n::device_language());

    let mut app = App::new(config, browser, prefs, system_scheme);

    // Kick off the initial page fetch in the background
    app.start_reset();

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout to allow for async operations
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let _handled = handle_events(Event::Key(key), app).await?;
                    }
                }
                Event::Mouse(mouse) => {
                    let _handled = handle_events(Event::Mouse(mouse), app).await?;
                }
                Event::Resize(_, _) => {
                    // Redrawn on the next loop iteration
                }
                _ => {}
            }
        }

        // Collect finished background fetches and fold them into the state
        app.poll_background_tasks().await;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let palette = app.palette();

    // Paint the themed background before anything else
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let chunks = LayoutManager::main_layout(f.area());

    match app.view {
        View::List => {
            let rows = LayoutManager::list_layout(chunks[0]);
            SearchBar::render(f, rows[0], app);
            PokemonList::render(f, rows[1], app);
        }
        View::Detail => {
            DetailPanel::render(f, chunks[0], app);
        }
    }

    StatusBar::render(f, chunks[1], app);

    if app.show_settings {
        SettingsPanel::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
