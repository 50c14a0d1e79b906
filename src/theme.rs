//! Light/dark theme controller.
//!
//! Resolution order on load: stored preference, then the OS signal, then
//! light. Only explicit `set_theme`/`toggle_theme` calls and toggle clicks
//! write to the store; everything visible goes through `apply_theme`.

use crate::preferences::{OsThemeSignal, PreferenceStore};
use crate::types::ThemeMode;
use futures::{Stream, StreamExt};
use serde::Serialize;

pub const DEFAULT_STORAGE_KEY: &str = "theme-preference";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_CHANGE_EVENT: &str = "themechange";

/// Icon while light is applied (offers dark).
pub const LIGHT_ICON: &str = "🌙";
/// Icon while dark is applied (offers light).
pub const DARK_ICON: &str = "☀️";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeChangeDetail {
    pub theme: ThemeMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChangeEvent {
    pub name: &'static str,
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: ThemeChangeDetail,
}

impl ThemeChangeEvent {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            name: THEME_CHANGE_EVENT,
            bubbles: true,
            cancelable: true,
            detail: ThemeChangeDetail { theme },
        }
    }
}

/// The document the controller renders into.
pub trait ThemeSurface {
    /// Value of the theme attribute on the document root.
    fn theme_attribute(&self) -> Option<String>;
    /// `None` removes the attribute.
    fn set_theme_attribute(&mut self, value: Option<&str>);
    fn has_toggle_button(&self) -> bool;
    fn has_toggle_icon(&self) -> bool;
    /// Ignored when the icon is absent.
    fn set_toggle_icon(&mut self, glyph: &str);
    fn dispatch_theme_change(&mut self, event: ThemeChangeEvent);
}

pub struct ThemeController<S, P, O> {
    surface: S,
    store: P,
    os: O,
    storage_key: String,
    attached: bool,
}

impl<S, P, O> ThemeController<S, P, O>
where
    S: ThemeSurface,
    P: PreferenceStore,
    O: OsThemeSignal,
{
    pub fn new(surface: S, store: P, os: O) -> Self {
        Self {
            surface,
            store,
            os,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attached: false,
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Applies the resolved theme and starts handling toggle clicks and OS
    /// changes. Without the toggle button and icon the controller stays
    /// inert and `false` is returned.
    pub fn init(&mut self) -> bool {
        if !self.surface.has_toggle_button() || !self.surface.has_toggle_icon() {
            tracing::warn!("dark mode toggle button not found");
            return false;
        }

        let theme = self.resolve();
        self.apply_theme(theme);
        self.attached = true;
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn current_theme(&self) -> ThemeMode {
        ThemeMode::from_marker(self.surface.theme_attribute().as_deref())
    }

    /// Persists and applies `theme`; any value other than "light" or
    /// "dark" is ignored.
    pub fn set_theme(&mut self, theme: &str) {
        match theme.parse::<ThemeMode>() {
            Ok(mode) => self.set_mode(mode),
            Err(err) => tracing::debug!(%err, "ignoring theme request"),
        }
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.persist(mode);
        self.apply_theme(mode);
    }

    pub fn toggle_theme(&mut self) {
        let next = self.current_theme().opposite();
        self.set_mode(next);
    }

    pub fn handle_toggle_click(&mut self) {
        if !self.attached {
            return;
        }
        self.toggle_theme();
    }

    /// Follows the OS only while no preference is stored.
    pub fn handle_system_theme_change(&mut self, prefers_dark: bool) {
        if !self.attached || self.stored_preference().is_some() {
            return;
        }
        let theme = if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        self.apply_theme(theme);
    }

    /// The stored value, if any. An empty string counts as unset.
    pub fn stored_preference(&self) -> Option<String> {
        self.store
            .get(&self.storage_key)
            .filter(|value| !value.is_empty())
    }

    pub fn resolve(&self) -> ThemeMode {
        match self.stored_preference() {
            Some(saved) => ThemeMode::from_marker(Some(&saved)),
            None if self.os.prefers_dark() => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    fn persist(&mut self, mode: ThemeMode) {
        if let Err(err) = self.store.set(&self.storage_key, mode.as_str()) {
            tracing::warn!(error = %err, "failed to save theme preference");
        }
    }

    fn apply_theme(&mut self, mode: ThemeMode) {
        match mode {
            ThemeMode::Dark => {
                self.surface.set_theme_attribute(Some(ThemeMode::Dark.as_str()));
                self.surface.set_toggle_icon(DARK_ICON);
            }
            ThemeMode::Light => {
                self.surface.set_theme_attribute(None);
                self.surface.set_toggle_icon(LIGHT_ICON);
            }
        }
        self.surface.dispatch_theme_change(ThemeChangeEvent::new(mode));
    }
}

/// Delivers each OS "prefers dark" change to `deliver` until the signal
/// source ends. Hosts pass `ThemeController::handle_system_theme_change`.
pub async fn follow_system_theme<St, F>(changes: St, mut deliver: F)
where
    St: Stream<Item = bool>,
    F: FnMut(bool),
{
    let mut changes = std::pin::pin!(changes);
    while let Some(prefers_dark) = changes.next().await {
        deliver(prefers_dark);
    }
}
