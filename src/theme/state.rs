//! Active theme state.
//!
//! The active theme lives in a thread-local signal so that painting deriveds
//! re-run when it changes.

use spark_signals::{signal, Signal};

use super::{get_preset, terminal, Theme};

thread_local! {
    static ACTIVE_THEME: Signal<Theme> = signal(terminal());
}

/// Get the signal holding the active theme (for reactive tracking).
pub fn active_theme_signal() -> Signal<Theme> {
    ACTIVE_THEME.with(|s| s.clone())
}

/// Get the active theme (tracked when read inside a derived).
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|s| s.get())
}

/// Switch to a preset by name. Returns false if no such preset exists.
pub fn set_theme(name: &str) -> bool {
    match get_preset(name) {
        Some(theme) => {
            log::debug!("theme: switching to preset '{}'", theme.name);
            ACTIVE_THEME.with(|s| s.set(theme));
            true
        }
        None => {
            log::debug!("theme: unknown preset '{}'", name);
            false
        }
    }
}

/// Install a custom theme.
pub fn set_custom_theme(theme: Theme) {
    log::debug!("theme: switching to custom theme '{}'", theme.name);
    ACTIVE_THEME.with(|s| s.set(theme));
}

/// Reset to the terminal theme (for testing).
pub fn reset_theme_state() {
    ACTIVE_THEME.with(|s| s.set(terminal()));
}
