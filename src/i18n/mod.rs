//! Internationalization module
//!
//! Message catalogs for the countdown and schedule texts. Japanese is the
//! default language; any catalog following the same keys can be loaded.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
