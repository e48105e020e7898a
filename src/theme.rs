use serde::{Deserialize, Serialize};

/// Storage key for the persisted light/dark choice.
pub const THEME_STORAGE_KEY: &str = "theme_preference";

/// Class applied to the document root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// A persisted theme choice. `None` in storage means the user has never
/// chosen and the OS color-scheme signal decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub is_dark: bool,
    pub manual_override: bool,
}

impl ThemePreference {
    pub fn manual(is_dark: bool) -> Self {
        Self {
            is_dark,
            manual_override: true,
        }
    }
}

/// Resolves the effective theme. A stored manual override always wins; the
/// OS signal only applies while no override exists.
pub fn resolve_is_dark(stored: Option<ThemePreference>, system_dark: bool) -> bool {
    match stored {
        Some(pref) if pref.manual_override => pref.is_dark,
        _ => system_dark,
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod store {
    use codee::string::JsonSerdeCodec;
    use leptos::prelude::*;
    use leptos_use::{storage::use_local_storage, use_preferred_dark};

    use super::{resolve_is_dark, ThemePreference, THEME_STORAGE_KEY};

    /// Reactive handle on the theme preference. One writer (the header
    /// toggle), readers via [`use_theme`].
    #[derive(Clone, Copy)]
    pub struct Theme {
        pub is_dark: Signal<bool>,
        set_stored: WriteSignal<Option<ThemePreference>>,
    }

    impl Theme {
        /// Flips the effective theme and records it as a manual override, so
        /// later OS color-scheme changes no longer apply.
        pub fn toggle(&self) {
            let next = !self.is_dark.get_untracked();
            self.set_stored.set(Some(ThemePreference::manual(next)));
        }
    }

    pub fn provide_theme() -> Theme {
        let (stored, set_stored, _) =
            use_local_storage::<Option<ThemePreference>, JsonSerdeCodec>(THEME_STORAGE_KEY);
        let system_dark = use_preferred_dark();
        // Invariant: once a manual value is stored, the OS signal is not even
        // tracked, so its subscription cannot fire a re-render.
        let is_dark = Signal::derive(move || {
            let stored = stored.get();
            if let Some(pref) = stored {
                if pref.manual_override {
                    return pref.is_dark;
                }
            }
            resolve_is_dark(stored, system_dark.get())
        });
        let theme = Theme { is_dark, set_stored };
        provide_context(theme);
        theme
    }

    pub fn use_theme() -> Theme {
        expect_context::<Theme>()
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use store::{provide_theme, use_theme, Theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_preference_adopts_the_os_signal() {
        assert!(resolve_is_dark(None, true));
        assert!(!resolve_is_dark(None, false));
    }

    #[test]
    fn manual_override_beats_the_os_signal() {
        let light = Some(ThemePreference::manual(false));
        assert!(!resolve_is_dark(light, true));

        let dark = Some(ThemePreference::manual(true));
        assert!(resolve_is_dark(dark, false));
    }

    #[test]
    fn manual_override_survives_reload() {
        // Reload replays resolution from storage; the stored value must
        // reproduce the same theme for any OS signal.
        let stored = Some(ThemePreference::manual(false));
        for system_dark in [false, true] {
            assert!(!resolve_is_dark(stored, system_dark));
        }
    }

    #[test]
    fn preference_round_trips_through_json() {
        let pref = ThemePreference::manual(true);
        let encoded = serde_json::to_string(&Some(pref)).unwrap();
        let decoded: Option<ThemePreference> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Some(pref));
    }

    #[test]
    fn absent_storage_decodes_to_unset() {
        let decoded: Option<ThemePreference> = serde_json::from_str("null").unwrap();
        assert_eq!(decoded, None);
        assert!(resolve_is_dark(decoded, true));
    }
}
