use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the saved theme.
pub const STORAGE_KEY: &str = "theme";

/// How long the document keeps its colour transition after a switch.
pub const TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Saved value first, then the OS dark-mode preference, then `default`.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool, default: Theme) -> Theme {
        if let Some(theme) = stored.and_then(|s| s.parse().ok()) {
            return theme;
        }
        if prefers_dark {
            Theme::Dark
        } else {
            default
        }
    }
}

/// Inline head script that applies the saved theme before first paint, in the
/// same order as [`Theme::resolve`]. Hydration later takes over the class.
pub fn preload_script(default: Theme) -> String {
    let default_dark = default.is_dark();
    format!(
        "(function(){{var d;try{{var s=localStorage.getItem('{STORAGE_KEY}');\
         d=s==='dark'||(s!=='light'&&(matchMedia('(prefers-color-scheme: dark)').matches||{default_dark}));\
         }}catch(e){{d={default_dark};}}\
         document.documentElement.classList.toggle('dark',d);}})();"
    )
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Where the preference is persisted between visits.
pub trait ThemeStore {
    /// Raw saved value, if any.
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

/// The site-wide theme setting.
///
/// Resolved once when created and written back to the store on every change.
#[derive(Debug, Clone)]
pub struct ThemeSettings<S> {
    store: S,
    theme: Theme,
    default: Theme,
}

impl<S: ThemeStore> ThemeSettings<S> {
    pub fn load(store: S, prefers_dark: bool, default: Theme) -> Self {
        let theme = Theme::resolve(store.load().as_deref(), prefers_dark, default);
        Self {
            store,
            theme,
            default,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn has_saved(&self) -> bool {
        self.store
            .load()
            .is_some_and(|s| s.parse::<Theme>().is_ok())
    }

    /// Re-resolves against a changed OS preference. A saved choice wins, so
    /// this only moves the theme until the user picks one.
    pub fn follow_system(&mut self, prefers_dark: bool) -> Theme {
        if !self.has_saved() {
            self.theme = Theme::resolve(None, prefers_dark, self.default);
        }
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<String>>);

    impl MemoryStore {
        fn with(value: &str) -> Self {
            Self(RefCell::new(Some(value.to_string())))
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme.to_string());
        }
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(Theme::resolve(Some("light"), true, Theme::Dark), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false, Theme::Light), Theme::Dark);
        assert_eq!(Theme::resolve(None, true, Theme::Light), Theme::Dark);
        assert_eq!(Theme::resolve(None, false, Theme::Light), Theme::Light);
        assert_eq!(Theme::resolve(None, false, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_value_is_ignored() {
        assert_eq!(Theme::resolve(Some("sepia"), false, Theme::Light), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true, Theme::Light), Theme::Dark);
        assert_eq!(Theme::resolve(Some("\"dark\""), false, Theme::Light), Theme::Light);
    }

    #[test]
    fn test_preload_script_matches_resolution() {
        let script = preload_script(Theme::Dark);
        assert!(script.starts_with("(function(){var d;try{"));
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("d=s==='dark'||(s!=='light'&&("));
        assert!(script.contains("matches||true));}catch(e){d=true;}"));
        assert!(script.ends_with("document.documentElement.classList.toggle('dark',d);})();"));

        let light = preload_script(Theme::Light);
        assert!(light.contains("matches||false));}catch(e){d=false;}"));
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_load_does_not_write() {
        let settings = ThemeSettings::load(MemoryStore::default(), false, Theme::Dark);
        assert_eq!(settings.theme(), Theme::Dark);
        assert_eq!(settings.store().load(), None);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let mut settings = ThemeSettings::load(MemoryStore::with("light"), true, Theme::Dark);
        let original = settings.theme();
        assert_eq!(original, Theme::Light);

        let first = settings.toggle();
        assert_eq!(first, Theme::Dark);
        assert_eq!(settings.store().load().as_deref(), Some(first.as_str()));

        let second = settings.toggle();
        assert_eq!(second, original);
        assert_eq!(settings.store().load().as_deref(), Some(second.as_str()));
    }

    #[test]
    fn test_follow_system_until_saved() {
        let mut settings = ThemeSettings::load(MemoryStore::default(), false, Theme::Light);
        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.follow_system(true), Theme::Dark);
        assert_eq!(settings.follow_system(false), Theme::Light);
        // following the OS never writes
        assert_eq!(settings.store().load(), None);

        settings.set(Theme::Light);
        assert_eq!(settings.follow_system(true), Theme::Light);
    }

    #[test]
    fn test_set_persists() {
        let mut settings = ThemeSettings::load(MemoryStore::default(), true, Theme::Dark);
        settings.set(Theme::Light);
        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.store().load().as_deref(), Some("light"));
    }
}
