// Settings store: data types, global state, load/save.
// Only UI preferences live here; cart and favorites are never persisted.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::localization::SupportedLang;
use crate::ui_constants::{CARD_WIDTH, CARD_WIDTH_MAX, CARD_WIDTH_MIN};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_card_width() -> f32 {
    CARD_WIDTH
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    // UI language (None = system). Stored as "en"/"ru" or null; "auto" maps to null.
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
    #[serde(default = "default_card_width")]
    pub card_width: f32,
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: None,
            card_width: CARD_WIDTH,
            show_footer: true,
        }
    }
}

fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|s| SupportedLang::from_code(&s)))
}

fn serialize_language_opt<S>(value: &Option<SupportedLang>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    /// Clamp values edited by hand in the JSON file.
    pub fn normalized(mut self) -> Self {
        if !self.card_width.is_finite() {
            self.card_width = CARD_WIDTH;
        }
        self.card_width = self.card_width.clamp(CARD_WIDTH_MIN, CARD_WIDTH_MAX);
        self
    }

    pub fn from_json(data: &str) -> Result<Self, SettingsError> {
        let s: AppSettings = serde_json::from_str(data)?;
        Ok(s.normalized())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data).map_err(|source| SettingsError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            if let Ok(mut st) = APP_SETTINGS.write() {
                *st = s;
            }
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!("Using default settings: {}", e);
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = super::with_settings(|s| s.clone());
    match st.save_to_file(&path) {
        Ok(()) => log::info!("Saved settings to {}", path.to_string_lossy()),
        Err(e) => log::error!("Failed to save settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let s = AppSettings::from_json("{}").unwrap();
        assert_eq!(s, AppSettings::default());
    }

    #[test]
    fn language_codes_round_trip_and_auto_is_none() {
        let s = AppSettings::from_json(r#"{"language":"ru"}"#).unwrap();
        assert_eq!(s.language, Some(SupportedLang::Russian));
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains(r#""language":"ru""#));

        let auto = AppSettings::from_json(r#"{"language":"auto"}"#).unwrap();
        assert_eq!(auto.language, None);
        let null = AppSettings::from_json(r#"{"language":null}"#).unwrap();
        assert_eq!(null.language, None);
    }

    #[test]
    fn card_width_is_clamped() {
        let s = AppSettings::from_json(r#"{"card_width":9000}"#).unwrap();
        assert_eq!(s.card_width, CARD_WIDTH_MAX);
        let s = AppSettings::from_json(r#"{"card_width":10}"#).unwrap();
        assert_eq!(s.card_width, CARD_WIDTH_MIN);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AppSettings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn save_then_load_file() {
        let dir = std::env::temp_dir().join(format!("creative_hub_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("app_settings.json");
        let s = AppSettings {
            language: Some(SupportedLang::English),
            card_width: 300.0,
            show_footer: false,
        };
        s.save_to_file(&path).unwrap();
        assert_eq!(AppSettings::load_from_file(&path).unwrap(), s);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppSettings::load_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
