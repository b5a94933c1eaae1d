//! Persisted user preferences
//!
//! Two independent records, loaded once at startup and cached in memory:
//! the appearance record (follow-system flag plus the last explicit scheme)
//! and the language tag. Each record is one JSON file written atomically;
//! read and write failures are logged and otherwise ignored, falling back to
//! in-memory defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APPEARANCE_PREFS_FILE, LANGUAGE_PREFS_FILE};
use crate::i18n::Language;
use crate::theme::Scheme;

/// Persisted appearance record.
///
/// `scheme` is the last explicit choice and is retained even while
/// `use_system` is set, so switching follow-system back off restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearancePrefs {
    #[serde(rename = "useSystem")]
    pub use_system: bool,
    pub scheme: Scheme,
}

/// Owning store for both preference axes.
///
/// Mutations persist immediately; resolution against the system scheme is a
/// pure read so a system appearance change never touches the stored record.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
    appearance: AppearancePrefs,
    language: Language,
}

impl PreferenceStore {
    /// Default directory for preference records (shared with the config file).
    pub fn default_dir() -> anyhow::Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("termidex"))
    }

    /// Load both records from `dir`.
    ///
    /// A missing or unreadable appearance record falls back to following the
    /// current system scheme; a missing language record falls back to the
    /// device locale mapped to a supported tag, else English.
    pub fn load(dir: PathBuf, system_scheme: Scheme, device_language: Language) -> Self {
        let appearance = read_record::<AppearancePrefs>(&dir.join(APPEARANCE_PREFS_FILE))
            .unwrap_or(AppearancePrefs {
                use_system: true,
                scheme: system_scheme,
            });
        let language =
            read_record::<Language>(&dir.join(LANGUAGE_PREFS_FILE)).unwrap_or(device_language);

        Self {
            dir,
            appearance,
            language,
        }
    }

    pub fn appearance(&self) -> AppearancePrefs {
        self.appearance
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The scheme actually applied: the system scheme while following it,
    /// otherwise the explicit choice.
    #[must_use]
    pub fn effective_scheme(&self, system_scheme: Scheme) -> Scheme {
        if self.appearance.use_system {
            system_scheme
        } else {
            self.appearance.scheme
        }
    }

    /// Toggle the follow-system flag. The explicit scheme is left untouched
    /// so disabling the flag later restores the last manual choice.
    pub fn set_use_system(&mut self, use_system: bool) {
        self.appearance.use_system = use_system;
        self.persist_appearance();
    }

    /// Pick an explicit scheme. Forces follow-system off.
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.appearance.scheme = scheme;
        self.appearance.use_system = false;
        self.persist_appearance();
    }

    /// Select the interface language and persist it. Lookup switches as soon
    /// as this returns.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.persist_language();
    }

    fn persist_appearance(&self) {
        write_record(&self.dir.join(APPEARANCE_PREFS_FILE), &self.appearance);
    }

    fn persist_language(&self) {
        write_record(&self.dir.join(LANGUAGE_PREFS_FILE), &self.language);
    }
}

fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("failed to read preference record {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring corrupt preference record {}: {}", path.display(), e);
            None
        }
    }
}

/// Write one record atomically: serialize to a sibling temp file, then rename
/// over the target so a concurrent read sees either the old or the new record.
fn write_record<T: Serialize>(path: &Path, value: &T) {
    let result = (|| -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        log::warn!("failed to persist preference record {}: {}", path.display(), e);
    }
}
