//! Reusable UI components

pub mod detail_panel;
pub mod help_panel;
pub mod pokemon_list;
pub mod search_bar;
pub mod settings_panel;
pub mod status_bar;

pub use detail_panel::DetailPanel;
pub use help_panel::HelpPanel;
pub use pokemon_list::PokemonList;
pub use search_bar::SearchBar;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;

/// Uppercase the first character, the way the API's lowercase names are shown.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
