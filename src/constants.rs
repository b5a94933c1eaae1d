//! Constants used throughout the application
//!
//! This module centralizes magic numbers, endpoint defaults, and other
//! constant values to improve maintainability and consistency.

// Pagination
/// Number of list entries requested per page
pub const PAGE_SIZE: u32 = 40;
/// How close to the end of the unfiltered list the selection may get before
/// the next page is requested
pub const LIST_LOAD_THRESHOLD: usize = 8;

// Remote endpoints
/// Default PokéAPI base URL
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Default base URL for official artwork sprites
pub const DEFAULT_ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";
/// Default network timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Preference records
/// File name of the persisted appearance record
pub const APPEARANCE_PREFS_FILE: &str = "appearance.json";
/// File name of the persisted language record
pub const LANGUAGE_PREFS_FILE: &str = "language.json";

// UI Layout Constants
/// Height of the search bar row in lines (content + borders)
pub const SEARCH_BAR_HEIGHT: u16 = 3;
/// Maximum base stat value used to scale stat bars
pub const STAT_BAR_MAX: i64 = 255;
/// Width of a full stat bar in characters
pub const STAT_BAR_WIDTH: usize = 30;
