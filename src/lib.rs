//! Termidex - A Terminal User Interface (TUI) Pokédex
//!
//! This library provides a terminal-based browser for the public PokéAPI:
//! a paginated, searchable Pokémon list, a per-Pokémon detail view, and
//! persisted user preferences (appearance and language). Rendering is built
//! with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`pokeapi`] - PokéAPI client and data models
//! * [`catalog`] - Pagination and search over the fetched catalog
//! * [`prefs`] - Persisted appearance and language preferences
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Pagination/filter state machine over the catalog
pub mod catalog;

/// Language tags and translation lookup
pub mod i18n;

/// Logging setup for debugging and error tracking
pub mod logger;

/// PokéAPI client and data models
pub mod pokeapi;

/// Persisted user preferences (appearance, language)
pub mod prefs;

/// Color schemes and palettes
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core data models for convenient access
pub use pokeapi::{PokemonDetails, PokemonListItem};
