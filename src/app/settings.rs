// Settings module split: store (data & persistence) and ui (egui viewport).

pub mod store;
pub mod ui;

pub use store::{load_settings_from_disk, AppSettings, APP_SETTINGS};
pub use ui::{draw_settings_viewport, open_settings};

/// Read settings with a closure. A poisoned lock falls back to defaults.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    match APP_SETTINGS.read() {
        Ok(st) => f(&st),
        Err(poisoned) => f(&poisoned.into_inner()),
    }
}

/// Modify settings with a closure.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    match APP_SETTINGS.write() {
        Ok(mut st) => f(&mut st),
        Err(poisoned) => f(&mut poisoned.into_inner()),
    }
}
