//! View model for the authentication page shell.

use crate::core::config::ShellConfig;
use crate::i18n::TranslationBundle;
use crate::routes::Route;
use yew_router::Routable;

/// Fully resolved content for the three layout regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthLayoutView {
    /// Card heading.
    pub title: String,
    /// Optional line under the heading, kept verbatim.
    pub subtitle: Option<String>,
    /// Brand text in the header link.
    pub brand: String,
    /// Target of the header link.
    pub home_href: String,
    /// Accessible label for the header link.
    pub home_label: String,
    /// Footer copyright line.
    pub copyright: String,
}

/// Footer copyright line for the given year.
#[must_use]
pub fn copyright_line(config: &ShellConfig, year: u32, bundle: &TranslationBundle) -> String {
    let year = year.to_string();
    bundle.format(
        "auth.footer",
        "© {year} {holder}. All rights reserved.",
        &[("year", year.as_str()), ("holder", config.copyright_holder.as_str())],
    )
}

/// Resolve layout content from caller props and shell configuration.
#[must_use]
pub fn auth_layout_view(
    title: &str,
    subtitle: Option<&str>,
    config: &ShellConfig,
    year: u32,
    bundle: &TranslationBundle,
) -> AuthLayoutView {
    AuthLayoutView {
        title: title.to_string(),
        subtitle: subtitle.map(ToString::to_string),
        brand: config.brand.clone(),
        home_href: Route::Home.to_path(),
        home_label: bundle.text("auth.home", "Go to home"),
        copyright: copyright_line(config, year, bundle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(subtitle: Option<&str>) -> AuthLayoutView {
        auth_layout_view(
            "Sign in",
            subtitle,
            &ShellConfig::default(),
            2026,
            &TranslationBundle::default(),
        )
    }

    #[test]
    fn subtitle_absent_when_not_supplied() {
        let view = render(None);
        assert_eq!(view.title, "Sign in");
        assert_eq!(view.subtitle, None);
    }

    #[test]
    fn subtitle_kept_verbatim() {
        let raw = "  Welcome back, <friend> ";
        assert_eq!(render(Some(raw)).subtitle.as_deref(), Some(raw));
    }

    #[test]
    fn header_links_to_application_root() {
        let view = render(None);
        assert_eq!(view.home_href, "/");
        assert_eq!(view.brand, "Credfolio");
        assert_eq!(view.copyright, "© 2026 Credfolio. All rights reserved.");
    }

    #[test]
    fn identical_props_produce_identical_views() {
        assert_eq!(render(Some("x")), render(Some("x")));
    }
}
