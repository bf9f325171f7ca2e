//! Persistence and host-page configuration for the app shell.

use crate::core::config::ShellConfig;
use crate::core::empty_state::EmptyStateVariant;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "credfolio.locale";
pub(crate) const ROOT_ID: &str = "root";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// Read `data-*` overrides from the mount element, keeping defaults for anything absent.
pub(crate) fn load_shell_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    let Some(root) = document().get_element_by_id(ROOT_ID) else {
        return config;
    };
    if let Some(brand) = root.get_attribute("data-brand").filter(|v| !v.trim().is_empty()) {
        config.brand = brand;
    }
    if let Some(holder) = root
        .get_attribute("data-copyright")
        .filter(|v| !v.trim().is_empty())
    {
        config.copyright_holder = holder;
    }
    if let Some(raw) = root.get_attribute("data-collection") {
        config.collection = raw.parse().unwrap_or_else(|err| {
            console::warn!("falling back to default collection", err.to_string());
            EmptyStateVariant::Default
        });
    }
    config
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
