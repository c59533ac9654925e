//! Persisted theme preference store.

use super::document::{load_document, save_document, StoreResult};
use crate::model::theme::Theme;
use crate::repo::kv_repo::KvRepository;
use log::info;
use serde::{Deserialize, Serialize};

/// Storage key of the theme store document.
pub const THEME_STORE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ThemeState {
    theme: Theme,
}

pub struct ThemeStore<R: KvRepository> {
    repo: R,
    state: ThemeState,
}

impl<R: KvRepository> ThemeStore<R> {
    /// Loads the stored theme, defaulting to `Theme::Light`.
    pub fn load(repo: R) -> Self {
        let state = load_document::<_, ThemeState>(&repo, THEME_STORE_KEY).unwrap_or_default();
        Self { repo, state }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.state.theme = theme;
        save_document(&self.repo, THEME_STORE_KEY, &self.state)?;
        info!("event=theme_set module=store status=ok theme={theme}");
        Ok(())
    }

    /// Flips light/dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.state.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
