use std::path::PathBuf;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PcError, Result};
use crate::icons::{MoonIcon, SunIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The theme a toggle click switches to.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PcError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PcError::UnknownTheme(other.to_string())),
        }
    }
}

/// What the site asks for before any persisted choice exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn resolve(self, system: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => system,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = PcError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            other => match other.parse::<Theme>()? {
                Theme::Light => Ok(Self::Light),
                Theme::Dark => Ok(Self::Dark),
            },
        }
    }
}

/// Where the chosen theme survives between sessions.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>>;
    fn save(&mut self, theme: Theme) -> Result<()>;
}

/// Keeps the theme in memory and records every save.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
    saves: Vec<Theme>,
}

impl MemoryThemeStore {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            saves: Vec::new(),
        }
    }

    /// Every theme passed to `save`, oldest first.
    pub fn saves(&self) -> &[Theme] {
        &self.saves
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        Ok(self.theme)
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        self.theme = Some(theme);
        self.saves.push(theme);
        Ok(())
    }
}

/// One-word file (`light` or `dark`).
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `plan-compare/theme` under the user cache directory, creating the
    /// directory on first use. `None` when there is no usable cache dir.
    #[cfg(feature = "persist")]
    pub fn in_cache_dir() -> Option<Self> {
        let dir = dirs::cache_dir()?.join("plan-compare");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            debug!(dir = %dir.display(), "cannot create cache dir: {e}");
            return None;
        }
        Some(Self::new(dir.join("theme")))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => content.parse().map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PcError::Io(format!("failed to read {}: {e}", self.path.display()))),
        }
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        std::fs::write(&self.path, format!("{theme}\n"))
            .map_err(|e| PcError::Io(format!("failed to write {}: {e}", self.path.display())))
    }
}

/// The file store when a location is available, otherwise an in-memory one
/// whose changes end with the process.
#[derive(Debug)]
pub enum FallbackThemeStore {
    File(FileThemeStore),
    Memory(MemoryThemeStore),
}

impl FallbackThemeStore {
    pub fn new(file: Option<FileThemeStore>) -> Self {
        match file {
            Some(store) => Self::File(store),
            None => {
                warn!("no cache directory; theme changes will not be saved");
                Self::Memory(MemoryThemeStore::default())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl ThemeStore for FallbackThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        match self {
            Self::File(s) => s.load(),
            Self::Memory(s) => s.load(),
        }
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        match self {
            Self::File(s) => s.save(theme),
            Self::Memory(s) => s.save(theme),
        }
    }
}

/// Where the resolved theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Saved,
    /// Nothing saved; site preference or system default.
    Default,
    /// A saved value exists but could not be read.
    Unreadable,
}

/// The process-wide theme: resolved once at startup, flipped by the toggle.
pub struct ThemeState<S> {
    store: S,
    resolved: Theme,
    source: ThemeSource,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Persisted choice wins, then the site preference, then `system`.
    /// An unreadable persisted value is logged and ignored.
    pub fn init(store: S, preference: ThemePreference, system: Theme) -> Self {
        let (resolved, source) = match store.load() {
            Ok(Some(theme)) => {
                debug!(%theme, "using persisted theme");
                (theme, ThemeSource::Saved)
            }
            Ok(None) => (preference.resolve(system), ThemeSource::Default),
            Err(e) => {
                warn!("ignoring persisted theme: {e}");
                (preference.resolve(system), ThemeSource::Unreadable)
            }
        };
        debug!(%resolved, ?preference, ?source, "theme resolved");
        Self {
            store,
            resolved,
            source,
        }
    }

    pub fn resolved(&self) -> Theme {
        self.resolved
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Hand the opposite of the current theme to the store, then adopt it.
    /// On a failed save nothing changes.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.resolved.next();
        self.store.save(next)?;
        self.resolved = next;
        self.source = ThemeSource::Saved;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Theme a toggle click asks for. Anything not known to be dark goes dark.
pub fn toggle_target(current: Option<Theme>) -> Theme {
    match current {
        Some(Theme::Dark) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Moon while light, sun while dark. Renders nothing until `theme` is
/// resolved; a click hands the opposite theme to `on_toggle`.
#[component]
pub fn DarkModeToggle(
    #[prop(into)] theme: Signal<Option<Theme>>,
    on_toggle: Callback<Theme>,
) -> impl IntoView {
    move || {
        theme.get().map(|current| {
            let icon = match current {
                Theme::Dark => view! { <SunIcon /> }.into_any(),
                Theme::Light => view! { <MoonIcon /> }.into_any(),
            };
            view! {
                <button
                    type="button"
                    aria-label="Toggle dark mode"
                    class="inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent"
                    on:click=move |_| on_toggle.run(toggle_target(theme.get_untracked()))
                >
                    {icon}
                    <span class="sr-only">"Toggle theme"</span>
                </button>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::render_to_html;

    fn toggle_html(theme: Option<Theme>) -> String {
        render_to_html(move || {
            let theme = RwSignal::new(theme);
            view! { <DarkModeToggle theme=theme on_toggle=Callback::new(|_| {}) /> }
        })
    }

    #[test]
    fn next_flips() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Light);
    }

    #[test]
    fn toggle_target_defaults_to_dark() {
        assert_eq!(toggle_target(Some(Theme::Light)), Theme::Dark);
        assert_eq!(toggle_target(Some(Theme::Dark)), Theme::Light);
        assert_eq!(toggle_target(None), Theme::Dark);
    }

    #[test]
    fn parse_theme_and_preference() {
        assert_eq!(" Dark\n".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!("system".parse::<ThemePreference>().unwrap(), ThemePreference::System);
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
    }

    #[test]
    fn persisted_beats_preference_beats_system() {
        let s = ThemeState::init(MemoryThemeStore::with_theme(Theme::Dark), ThemePreference::Light, Theme::Light);
        assert_eq!(s.resolved(), Theme::Dark);
        assert_eq!(s.source(), ThemeSource::Saved);

        let s = ThemeState::init(MemoryThemeStore::default(), ThemePreference::Light, Theme::Dark);
        assert_eq!(s.resolved(), Theme::Light);
        assert_eq!(s.source(), ThemeSource::Default);

        let s = ThemeState::init(MemoryThemeStore::default(), ThemePreference::System, Theme::Dark);
        assert_eq!(s.resolved(), Theme::Dark);
    }

    #[test]
    fn toggle_from_light_saves_dark() {
        let mut s = ThemeState::init(MemoryThemeStore::with_theme(Theme::Light), ThemePreference::System, Theme::Light);
        assert_eq!(s.toggle().unwrap(), Theme::Dark);
        assert_eq!(s.store().saves(), [Theme::Dark]);
    }

    #[test]
    fn toggle_from_dark_saves_light() {
        let mut s = ThemeState::init(MemoryThemeStore::with_theme(Theme::Dark), ThemePreference::System, Theme::Light);
        assert_eq!(s.toggle().unwrap(), Theme::Light);
        assert_eq!(s.store().saves(), [Theme::Light]);
    }

    #[test]
    fn toggle_shows_moon_when_light() {
        let html = toggle_html(Some(Theme::Light));
        assert!(html.contains(r#"aria-label="Toggle dark mode""#));
        assert!(html.contains(r#"data-testid="moon-icon""#));
        assert!(!html.contains(r#"data-testid="sun-icon""#));
        assert!(html.contains("Toggle theme"));
    }

    #[test]
    fn toggle_shows_sun_when_dark() {
        let html = toggle_html(Some(Theme::Dark));
        assert!(html.contains(r#"aria-label="Toggle dark mode""#));
        assert!(html.contains(r#"data-testid="sun-icon""#));
        assert!(!html.contains(r#"data-testid="moon-icon""#));
    }

    #[test]
    fn unresolved_theme_renders_nothing() {
        let html = toggle_html(None);
        assert!(!html.contains("<button"));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileThemeStore::new(dir.path().join("theme"));
        assert_eq!(store.load().unwrap(), None);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn corrupt_file_falls_back_to_preference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "purple").unwrap();
        let store = FileThemeStore::new(&path);
        assert!(store.load().is_err());
        let s = ThemeState::init(store, ThemePreference::Dark, Theme::Light);
        assert_eq!(s.resolved(), Theme::Dark);
        assert_eq!(s.source(), ThemeSource::Unreadable);
    }

    #[test]
    fn missing_cache_dir_falls_back_to_memory() {
        let store = FallbackThemeStore::new(None);
        assert!(!store.is_persistent());
        let mut s = ThemeState::init(store, ThemePreference::System, Theme::Light);
        assert_eq!(s.resolved(), Theme::Light);
        assert_eq!(s.source(), ThemeSource::Default);
        assert_eq!(s.toggle().unwrap(), Theme::Dark);
        assert_eq!(s.store().load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn fallback_store_uses_file_when_available() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        let mut store = FallbackThemeStore::new(Some(FileThemeStore::new(&path)));
        assert!(store.is_persistent());
        store.save(Theme::Light).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "light");
    }
}
