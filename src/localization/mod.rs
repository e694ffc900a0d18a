use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 2] = ["en", "ru"];
const FALLBACK_LANG: &str = "en";

/// UI language that can be pinned in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedLang {
    English,
    Russian,
}

impl SupportedLang {
    pub const ALL: [SupportedLang; 2] = [SupportedLang::English, SupportedLang::Russian];

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Russian => "ru",
        }
    }

    /// Accepts "en", "ru" and region variants like "ru-RU"; anything else is None.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        let short = code.split(['-', '_']).next().unwrap_or_default();
        match short {
            "en" => Some(SupportedLang::English),
            "ru" => Some(SupportedLang::Russian),
            _ => None,
        }
    }

    /// Name of the language in itself, for the settings picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            SupportedLang::English => "English",
            SupportedLang::Russian => "Русский",
        }
    }
}

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "ru" => include_str!("resources/ru.ftl"),
        _ => include_str!("resources/en.ftl"),
    }
}

fn normalize_lang(code: &str) -> String {
    SupportedLang::from_code(code)
        .map(|l| l.code())
        .unwrap_or(FALLBACK_LANG)
        .to_string()
}

fn detect_system_lang() -> String {
    let sys = sys_locale::get_locale().unwrap_or_default();
    normalize_lang(&sys)
}

fn build_bundle(code: &str) -> Result<Bundle, LocalizationError> {
    let langid: LanguageIdentifier = code
        .parse()
        .map_err(|e| LocalizationError::InitError(format!("{code}: {e}")))?;
    let mut bundle: Bundle = FluentBundle::new(vec![langid]);
    // egui renders the Unicode isolation marks as boxes
    bundle.set_use_isolating(false);
    let res = FluentResource::try_new(load_ftl_source(code).to_string()).map_err(|(_, errs)| {
        LocalizationError::InitError(format!("{code}.ftl: {} parse error(s)", errs.len()))
    })?;
    bundle.add_resource(res).map_err(|errs| {
        LocalizationError::InitError(format!("{code}.ftl: {} duplicate message(s)", errs.len()))
    })?;
    Ok(bundle)
}

struct LocalizationManager {
    current: String,
    bundles: HashMap<String, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<String, Bundle> = HashMap::new();
        for &code in SUPPORTED_LANGS.iter() {
            match build_bundle(code) {
                Ok(b) => {
                    bundles.insert(code.to_string(), b);
                }
                Err(e) => log::error!("Localization bundle skipped: {e}"),
            }
        }
        Self {
            current: FALLBACK_LANG.to_string(),
            bundles,
        }
    }

    fn set_current(&mut self, code: &str) -> Result<(), LocalizationError> {
        let code = normalize_lang(code);
        if !self.bundles.contains_key(&code) {
            return Err(LocalizationError::UnsupportedLanguage(code));
        }
        self.current = code;
        Ok(())
    }

    fn set_auto(&mut self) -> Result<(), LocalizationError> {
        let detected = detect_system_lang();
        self.set_current(&detected)
    }

    fn format_in(&self, code: &str, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(code)?;
        let pattern = bundle.get_message(id)?.value()?;
        let mut errors = vec![];
        let s = bundle.format_pattern(pattern, args, &mut errors).to_string();
        if !errors.is_empty() {
            log::warn!("Fluent errors in '{id}' ({code}): {errors:?}");
        }
        Some(s)
    }

    fn format_with_args(&self, id: &str, args: Option<&FluentArgs>) -> String {
        self.format_in(&self.current, id, args)
            .or_else(|| self.format_in(FALLBACK_LANG, id, args))
            .unwrap_or_else(|| format!("[missing: {}]", id))
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Initialize localization. `None` follows the system locale; unsupported
/// locales fall back to English.
pub fn initialize_localization(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred {
            Some(lang) => mgr.set_current(lang.code()),
            None => mgr.set_auto(),
        }
    })?;
    log::info!("UI language: {}", get_current_language());
    Ok(())
}

/// Return current language code ("en", "ru").
pub fn get_current_language() -> String {
    LOCALIZATION.with(|cell| cell.borrow().current.clone())
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_ids(src: &str) -> Vec<&str> {
        src.lines()
            .filter(|l| l.chars().next().map_or(false, |c| c.is_ascii_alphabetic()))
            .filter_map(|l| l.split_once('=').map(|(id, _)| id.trim()))
            .collect()
    }

    #[test]
    fn every_english_message_has_a_russian_translation() {
        let ru = build_bundle("ru").unwrap();
        let en_ids = message_ids(load_ftl_source("en"));
        assert!(!en_ids.is_empty());
        for id in en_ids {
            assert!(ru.has_message(id), "ru.ftl is missing '{id}'");
        }
    }

    #[test]
    fn language_codes_are_normalized() {
        assert_eq!(SupportedLang::from_code("ru-RU"), Some(SupportedLang::Russian));
        assert_eq!(SupportedLang::from_code("EN_us"), Some(SupportedLang::English));
        assert_eq!(SupportedLang::from_code("de"), None);
        assert_eq!(normalize_lang("de-DE"), "en");
    }

    #[test]
    fn switching_language_changes_output() {
        initialize_localization(Some(SupportedLang::Russian)).unwrap();
        assert_eq!(translate("nav-catalog"), "Каталог");
        initialize_localization(Some(SupportedLang::English)).unwrap();
        assert_eq!(translate("nav-catalog"), "Catalog");
    }

    #[test]
    fn arguments_are_substituted_without_isolation_marks() {
        initialize_localization(Some(SupportedLang::English)).unwrap();
        let s = translate_with("cart-platform-fee", &[("percent", "5".to_string())]);
        assert_eq!(s, "Platform fee (5%)");
    }

    #[test]
    fn missing_ids_are_marked() {
        assert_eq!(translate("no-such-message"), "[missing: no-such-message]");
    }
}
