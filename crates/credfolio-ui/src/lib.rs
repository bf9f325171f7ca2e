#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Credfolio Web UI.
//! Presentational Yew components for the credential portfolio: strength meter,
//! bulk action bar, authentication shell and empty-state placeholder.

pub mod core;
pub mod i18n;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::selection::bulk_bar_view;
    use crate::core::strength::{StrengthLevel, get_password_strength, strength_view, ScoreClassifier};
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn non_empty_passwords_always_classify_into_known_levels() {
        for password in ["a", "password", "P4ssw0rd!", "correct horse battery staple"] {
            let level = get_password_strength(password).level;
            assert!(StrengthLevel::all().contains(&level));
            assert!(strength_view(password, &ScoreClassifier).is_some());
        }
    }

    #[test]
    fn bulk_bar_visibility_ignores_history() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert!(bulk_bar_view(2, &bundle).is_some());
        assert!(bulk_bar_view(0, &bundle).is_none());
        assert!(bulk_bar_view(1, &bundle).is_some());
        assert!(bulk_bar_view(0, &bundle).is_none());
    }
}
