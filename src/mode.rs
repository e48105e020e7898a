use leptos::prelude::*;

/// Class applied to the document root element while developer mode is active.
pub const DEV_MODE_CLASS: &str = "dev-mode";

/// Which of the two rendering branches every section should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Normal,
    Developer,
}

impl ViewMode {
    pub fn is_developer(&self) -> bool {
        matches!(self, ViewMode::Developer)
    }

    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Normal => ViewMode::Developer,
            ViewMode::Developer => ViewMode::Normal,
        }
    }
}

/// Shared developer-mode flag. Exactly one writer (the header toggle), any
/// number of readers through [`use_dev_mode`]. Resets to [`ViewMode::Normal`]
/// on a full page load and is never persisted.
#[derive(Debug, Clone, Copy)]
pub struct DevMode(RwSignal<ViewMode>);

impl DevMode {
    pub fn new() -> Self {
        Self(RwSignal::new(ViewMode::default()))
    }

    pub fn mode(&self) -> Signal<ViewMode> {
        self.0.into()
    }

    pub fn toggle(&self) {
        self.0.update(|m| *m = m.toggled());
    }
}

impl Default for DevMode {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the mode flag into context at the app root.
pub fn provide_dev_mode() -> DevMode {
    let dev_mode = DevMode::new();
    provide_context(dev_mode);
    dev_mode
}

/// Reactive view of the shared mode flag. The signal is read synchronously at
/// first render, so late-mounted consumers see the current value immediately.
pub fn use_dev_mode() -> Signal<bool> {
    let dev_mode = expect_context::<DevMode>();
    Signal::derive(move || dev_mode.mode().get().is_developer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_normal_mode() {
        assert_eq!(ViewMode::default(), ViewMode::Normal);
        assert!(!ViewMode::default().is_developer());
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        let mode = ViewMode::Normal;
        let flipped = mode.toggled();
        assert!(flipped.is_developer());
        assert_eq!(flipped.toggled(), ViewMode::Normal);
    }
}
