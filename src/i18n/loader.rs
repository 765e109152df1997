//! Translation loader and i18n management
//!
//! This module provides catalog loading, language detection, message
//! formatting and pluralization for the countdown and schedule texts.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{warn, error, debug};
use crate::utils::errors::{NaviosError, Result};
use crate::utils::logging::log_catalog_loaded;
use crate::config::I18nConfig;

const BUILTIN_CATALOGS: &[(&str, &str)] = &[
    ("ja", include_str!("../../translations/ja.json")),
    ("en", include_str!("../../translations/en.json")),
];

/// Message catalogs keyed by language code
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create an I18n instance with no catalogs loaded
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        }
    }

    /// Create an I18n instance with the catalogs compiled into the crate
    pub fn builtin(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self::new(config);
        for (lang_code, content) in BUILTIN_CATALOGS {
            if i18n.is_language_supported(lang_code) {
                i18n.insert_catalog(lang_code, content, "builtin")?;
            }
        }

        if !i18n.translations.contains_key(&i18n.default_language) {
            return Err(NaviosError::Translation(format!(
                "No built-in catalog for default language: {}",
                i18n.default_language
            )));
        }

        Ok(i18n)
    }

    /// Load translation files from a directory, overriding loaded catalogs
    ///
    /// Files are named `<lang>.json`. A missing or broken file is only fatal
    /// when nothing is loaded for the default language yet.
    pub async fn load_translations(&mut self, translations_dir: impl AsRef<Path>) -> Result<()> {
        let translations_dir = translations_dir.as_ref();

        if !translations_dir.exists() {
            warn!("Translations directory not found: {}", translations_dir.display());
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));
            let is_default = lang_code == &self.default_language;
            let has_fallback = self.translations.contains_key(lang_code);

            if file_path.exists() {
                if let Err(e) = self.load_language_file(&file_path, lang_code).await {
                    error!("Failed to load translations for {}: {}", lang_code, e);
                    if is_default && !has_fallback {
                        return Err(NaviosError::Translation(
                            format!("Failed to load default language translations: {}", e)
                        ));
                    }
                }
            } else {
                debug!("Translation file not found: {}", file_path.display());
                if is_default && !has_fallback {
                    return Err(NaviosError::Translation(
                        format!("Default language translation file not found: {}", file_path.display())
                    ));
                }
            }
        }

        Ok(())
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let source = file_path.display().to_string();
        self.insert_catalog(lang_code, &content, &source)
    }

    fn insert_catalog(&mut self, lang_code: &str, content: &str, source: &str) -> Result<()> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => {
                log_catalog_loaded(lang_code, self.count_keys(&map), source);
                self.translations.insert(lang_code.to_string(), map);
                Ok(())
            }
            _ => Err(NaviosError::Translation(
                format!("Invalid translation file format for {}", lang_code)
            )),
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let value = self.get_translation_value(key, effective_lang).or_else(|| {
            if effective_lang != self.default_language {
                self.get_translation_value(key, &self.default_language)
            } else {
                None
            }
        });

        match value {
            Some(translation) => {
                let text = self.extract_text_from_value(translation);
                self.format_message(&text, params)
            }
            None => {
                warn!("Translation key '{}' not found for language {}", key, effective_lang);
                key.to_string()
            }
        }
    }

    /// Get a translated message with pluralization support
    pub fn tp(&self, key: &str, lang: &str, count: i64, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);
        let plural_key = self.get_plural_key(key, count, effective_lang);

        let mut final_params = params.cloned().unwrap_or_default();
        final_params.insert("count".to_string(), count.to_string());

        self.t(&plural_key, effective_lang, Some(&final_params))
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Check if a catalog is loaded for a language
    pub fn has_catalog(&self, lang: &str) -> bool {
        self.translations.contains_key(lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language<'a>(&'a self, lang: &'a str) -> &'a str {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang
        } else {
            &self.default_language
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&Value> {
        let translations = self.translations.get(lang)?;

        // Nested keys like "countdown.upcoming.other"
        let mut keys = key.split('.');
        let mut current = translations.get(keys.next()?)?;
        for k in keys {
            current = current.get(k)?;
        }

        Some(current)
    }

    /// Extract text from JSON value (handle both strings and objects with pluralization)
    fn extract_text_from_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Object(obj) => {
                if let Some(other) = obj.get("other") {
                    self.extract_text_from_value(other)
                } else if let Some((_, first_value)) = obj.iter().next() {
                    self.extract_text_from_value(first_value)
                } else {
                    String::new()
                }
            }
            _ => value.to_string(),
        }
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        if let Some(params) = params {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        } else {
            template.to_string()
        }
    }

    /// Get the appropriate plural key based on count and language rules
    fn get_plural_key(&self, base_key: &str, count: i64, lang: &str) -> String {
        let plural_form = self.get_plural_form(count, lang);
        format!("{}.{}", base_key, plural_form)
    }

    /// Determine plural form based on language-specific rules
    fn get_plural_form(&self, count: i64, lang: &str) -> &'static str {
        match lang {
            // Japanese has no grammatical number
            "ja" => "other",
            _ => {
                if count == 1 { "one" } else { "other" }
            }
        }
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Pick a supported language from a locale tag such as `ja-JP` or an
    /// `Accept-Language` header value
    pub fn detect_language(&self, locale: Option<&str>) -> String {
        if let Some(locale) = locale {
            for candidate in locale.split(',') {
                let tag = candidate.split(';').next().unwrap_or(candidate).trim();
                let lang_code = tag.split(['-', '_']).next().unwrap_or(tag).to_ascii_lowercase();

                if self.is_language_supported(&lang_code) {
                    return lang_code;
                }
            }
        }

        self.default_language.clone()
    }

    /// Recursively count translation keys
    fn count_keys(&self, obj: &Map<String, Value>) -> usize {
        let mut count = 0;
        for value in obj.values() {
            match value {
                Value::Object(nested) => count += self.count_keys(nested),
                _ => count += 1,
            }
        }
        count
    }
}
