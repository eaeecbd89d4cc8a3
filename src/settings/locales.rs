//! Preferred locale list (`General/preferred locales`)

use super::defaults::{GENERAL, PREFERRED_LOCALES};
use super::store::SettingsStore;

pub const FALLBACK_LOCALE: &str = "en";

/// Assign `locale` at `priority`, padding the list with `en` as needed
pub fn set_preferred_locale(mut locales: Vec<String>, priority: usize, locale: &str) -> Vec<String> {
    if locales.len() <= priority {
        locales.resize(priority + 1, FALLBACK_LOCALE.to_string());
    }
    locales[priority] = locale.to_string();
    locales
}

/// Stored preferred locales, `["en"]` when unset or empty
pub fn current_locales(store: &dyn SettingsStore) -> Vec<String> {
    match store.get_string_array(GENERAL, PREFERRED_LOCALES) {
        Ok(locales) if !locales.is_empty() => locales,
        _ => vec![FALLBACK_LOCALE.to_string()],
    }
}

/// Primary and secondary language choices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageOptions {
    available: Vec<String>,
    primary: Option<usize>,
    secondary: Option<usize>,
}

impl LanguageOptions {
    /// Available locales are sorted and deduplicated
    pub fn new(available: impl IntoIterator<Item = String>, current: &[String]) -> Self {
        let mut available: Vec<String> = available.into_iter().collect();
        available.sort();
        available.dedup();

        let index_of = |locale: Option<&String>| {
            locale.and_then(|locale| available.iter().position(|name| name == locale))
        };
        let primary = index_of(current.first());
        let secondary = index_of(current.get(1));

        LanguageOptions {
            available,
            primary,
            secondary,
        }
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn locale_at(&self, pos: usize) -> Option<&str> {
        self.available.get(pos).map(String::as_str)
    }

    pub fn primary(&self) -> Option<usize> {
        self.primary
    }

    pub fn secondary(&self) -> Option<usize> {
        self.secondary
    }
}
