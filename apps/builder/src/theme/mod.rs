// Theme Controller
// Binary light/dark display mode persisted under a single preference key.

pub mod store;

pub use store::{FilePreferenceStore, PreferenceStore};
#[cfg(test)]
pub use store::MemoryPreferenceStore;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;

/// Preference key the display mode is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only `"light"` is recognised; any other stored value behaves as dark.
    pub fn from_stored(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class of the toggle control: a moon offers dark mode, a sun offers light mode.
    pub fn indicator(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemeController {
    /// Reads the saved mode, defaulting to light when nothing (or nothing readable) is stored.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_stored(&value),
            Ok(None) => Theme::Light,
            Err(e) => {
                warn!("Could not read saved theme, using light: {e}");
                Theme::Light
            }
        };
        info!("Theme: {}", theme.as_str());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn indicator(&self) -> &'static str {
        self.theme.indicator()
    }

    /// Flips the mode and writes it back to the store.
    pub fn toggle(&mut self) -> Result<Theme, AppError> {
        let next = self.theme.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        info!("Theme switched to {}", next.as_str());
        Ok(next)
    }
}
