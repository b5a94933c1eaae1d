//! Language tags and translation lookup
//!
//! Three supported languages with a static string table per message. Unknown
//! device locales fall back to English.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Id,
}

impl Language {
    /// BCP 47 style language tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Id => "id",
        }
    }

    /// Parse a supported tag; anything else is unsupported.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            "id" => Some(Language::Id),
            _ => None,
        }
    }

    /// Human readable name, in that language.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Id => "Bahasa Indonesia",
        }
    }

    /// Next language in the settings cycle: en -> de -> id -> en.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::Id,
            Language::Id => Language::En,
        }
    }
}

/// Best-effort match of the device locale to a supported language.
///
/// Reads `LC_ALL`, `LC_MESSAGES`, then `LANG` (e.g. `de_DE.UTF-8`) and maps
/// the language code; anything unsupported falls back to English.
#[must_use]
pub fn device_language() -> Language {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| {
            let code = value
                .split(['_', '-', '.', '@'])
                .next()
                .unwrap_or("")
                .to_lowercase();
            Language::from_tag(&code)
        })
        .unwrap_or_default()
}

/// User-facing interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    AppTitle,
    SearchPlaceholder,
    SearchTitle,
    EmptyList,
    Loading,
    FetchFailed,
    RetryHint,
    Settings,
    Appearance,
    UseSystemTheme,
    DarkMode,
    PersistHint,
    LanguageLabel,
    Info,
    Height,
    Weight,
    BaseStats,
    Artwork,
    Help,
    HelpMoveDown,
    HelpMoveUp,
    HelpJump,
    HelpOpenDetails,
    HelpBack,
    HelpSearch,
    HelpRefresh,
    HelpSettings,
    HelpToggle,
    HelpQuit,
    StatusHints,
}

/// Look up one interface string for a language.
#[must_use]
pub fn tr(lang: Language, msg: Msg) -> &'static str {
    match lang {
        Language::En => match msg {
            Msg::AppTitle => "Pokédex",
            Msg::SearchPlaceholder => "Search Pokémon…",
            Msg::SearchTitle => "Search",
            Msg::EmptyList => "No Pokémon found",
            Msg::Loading => "Loading…",
            Msg::FetchFailed => "Failed to load",
            Msg::RetryHint => "Press r to retry",
            Msg::Settings => "Settings",
            Msg::Appearance => "Appearance",
            Msg::UseSystemTheme => "Use system theme",
            Msg::DarkMode => "Dark mode",
            Msg::PersistHint => "Toggles are persisted for the next launch.",
            Msg::LanguageLabel => "Language",
            Msg::Info => "Info",
            Msg::Height => "Height",
            Msg::Weight => "Weight",
            Msg::BaseStats => "Base Stats",
            Msg::Artwork => "Artwork",
            Msg::Help => "Help",
            Msg::HelpMoveDown => "Move down",
            Msg::HelpMoveUp => "Move up",
            Msg::HelpJump => "Jump to top / bottom",
            Msg::HelpOpenDetails => "Open details",
            Msg::HelpBack => "Back / clear search",
            Msg::HelpSearch => "Search",
            Msg::HelpRefresh => "Refresh",
            Msg::HelpSettings => "Settings",
            Msg::HelpToggle => "Toggle this help",
            Msg::HelpQuit => "Quit",
            Msg::StatusHints => "/: search • Enter: details • r: refresh • s: settings • ?: help • q: quit",
        },
        Language::De => match msg {
            Msg::AppTitle => "Pokédex",
            Msg::SearchPlaceholder => "Pokémon suchen…",
            Msg::SearchTitle => "Suche",
            Msg::EmptyList => "Keine Pokémon gefunden",
            Msg::Loading => "Lädt…",
            Msg::FetchFailed => "Laden fehlgeschlagen",
            Msg::RetryHint => "r drücken zum Wiederholen",
            Msg::Settings => "Einstellungen",
            Msg::Appearance => "Darstellung",
            Msg::UseSystemTheme => "Systemthema verwenden",
            Msg::DarkMode => "Dunkelmodus",
            Msg::PersistHint => "Schalter werden für den nächsten Start gespeichert.",
            Msg::LanguageLabel => "Sprache",
            Msg::Info => "Info",
            Msg::Height => "Größe",
            Msg::Weight => "Gewicht",
            Msg::BaseStats => "Basiswerte",
            Msg::Artwork => "Artwork",
            Msg::Help => "Hilfe",
            Msg::HelpMoveDown => "Nach unten",
            Msg::HelpMoveUp => "Nach oben",
            Msg::HelpJump => "Zum Anfang / Ende springen",
            Msg::HelpOpenDetails => "Details öffnen",
            Msg::HelpBack => "Zurück / Suche leeren",
            Msg::HelpSearch => "Suchen",
            Msg::HelpRefresh => "Aktualisieren",
            Msg::HelpSettings => "Einstellungen",
            Msg::HelpToggle => "Diese Hilfe umschalten",
            Msg::HelpQuit => "Beenden",
            Msg::StatusHints => "/: Suche • Enter: Details • r: Aktualisieren • s: Einstellungen • ?: Hilfe • q: Beenden",
        },
        Language::Id => match msg {
            Msg::AppTitle => "Pokédex",
            Msg::SearchPlaceholder => "Cari Pokémon…",
            Msg::SearchTitle => "Pencarian",
            Msg::EmptyList => "Pokémon tidak ditemukan",
            Msg::Loading => "Memuat…",
            Msg::FetchFailed => "Gagal memuat",
            Msg::RetryHint => "Tekan r untuk mencoba lagi",
            Msg::Settings => "Pengaturan",
            Msg::Appearance => "Tampilan",
            Msg::UseSystemTheme => "Gunakan tema sistem",
            Msg::DarkMode => "Mode gelap",
            Msg::PersistHint => "Pengaturan disimpan untuk peluncuran berikutnya.",
            Msg::LanguageLabel => "Bahasa",
            Msg::Info => "Info",
            Msg::Height => "Tinggi",
            Msg::Weight => "Berat",
            Msg::BaseStats => "Statistik Dasar",
            Msg::Artwork => "Gambar",
            Msg::Help => "Bantuan",
            Msg::HelpMoveDown => "Turun",
            Msg::HelpMoveUp => "Naik",
            Msg::HelpJump => "Lompat ke awal / akhir",
            Msg::HelpOpenDetails => "Buka detail",
            Msg::HelpBack => "Kembali / hapus pencarian",
            Msg::HelpSearch => "Cari",
            Msg::HelpRefresh => "Segarkan",
            Msg::HelpSettings => "Pengaturan",
            Msg::HelpToggle => "Tampilkan/sembunyikan bantuan",
            Msg::HelpQuit => "Keluar",
            Msg::StatusHints => "/: cari • Enter: detail • r: segarkan • s: pengaturan • ?: bantuan • q: keluar",
        },
    }
}
