//! Empty-state variants, their icon/gradient table and the optional call-to-action.

use crate::core::error::UnknownValue;
use crate::core::theme::{
    AMBER, EMERALD, Gradient, INDIGO, ORANGE, SLATE, SLATE_DARK, TEAL, VIOLET,
};
use std::str::FromStr;
use yew::{AttrValue, Callback};

/// Context the placeholder is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EmptyStateVariant {
    /// Credential list.
    Credentials,
    /// Portfolio list.
    Portfolio,
    /// Search results.
    Search,
    /// Anything else.
    #[default]
    Default,
}

/// Glyph drawn inside the placeholder badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmptyIcon {
    /// Certificate/award glyph.
    Award,
    /// Briefcase glyph.
    Briefcase,
    /// Magnifier glyph.
    Search,
    /// Inbox tray glyph.
    Inbox,
}

/// Icon and gradient pairing for a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    /// Icon drawn for the variant.
    pub icon: EmptyIcon,
    /// Badge background.
    pub gradient: Gradient,
}

impl EmptyStateVariant {
    /// All variants in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Credentials, Self::Portfolio, Self::Search, Self::Default]
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credentials => "credentials",
            Self::Portfolio => "portfolio",
            Self::Search => "search",
            Self::Default => "default",
        }
    }

    /// Static icon/gradient table.
    #[must_use]
    pub const fn style(self) -> VariantStyle {
        match self {
            Self::Credentials => VariantStyle {
                icon: EmptyIcon::Award,
                gradient: Gradient {
                    from: INDIGO,
                    to: VIOLET,
                },
            },
            Self::Portfolio => VariantStyle {
                icon: EmptyIcon::Briefcase,
                gradient: Gradient {
                    from: EMERALD,
                    to: TEAL,
                },
            },
            Self::Search => VariantStyle {
                icon: EmptyIcon::Search,
                gradient: Gradient {
                    from: AMBER,
                    to: ORANGE,
                },
            },
            Self::Default => VariantStyle {
                icon: EmptyIcon::Inbox,
                gradient: Gradient {
                    from: SLATE,
                    to: SLATE_DARK,
                },
            },
        }
    }

    /// Translation keys for the default title and message of the variant.
    #[must_use]
    pub const fn copy_keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Credentials => ("empty.credentials.title", "empty.credentials.body"),
            Self::Portfolio => ("empty.portfolio.title", "empty.portfolio.body"),
            Self::Search => ("empty.search.title", "empty.search.body"),
            Self::Default => ("empty.default.title", "empty.default.body"),
        }
    }

    /// Parse a raw variant, falling back to [`EmptyStateVariant::Default`] when unrecognised.
    #[must_use]
    pub fn from_raw_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for EmptyStateVariant {
    type Err = UnknownValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|variant| variant.as_str() == lowered)
            .ok_or_else(|| UnknownValue::new("empty-state variant", raw))
    }
}

/// Call-to-action shown under the message; label and handler travel together.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptyStateAction {
    /// Button text.
    pub label: AttrValue,
    /// Fired once per activation.
    pub on_action: Callback<()>,
}

impl EmptyStateAction {
    /// Pair a label with its handler.
    #[must_use]
    pub fn new(label: impl Into<AttrValue>, on_action: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_action,
        }
    }

    /// Build an action only when both halves are present.
    #[must_use]
    pub fn from_parts(label: Option<AttrValue>, on_action: Option<Callback<()>>) -> Option<Self> {
        Some(Self {
            label: label?,
            on_action: on_action?,
        })
    }

    /// Invoke the handler.
    pub fn activate(&self) {
        self.on_action.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn every_variant_has_a_distinct_icon_and_gradient() {
        let styles: Vec<VariantStyle> = EmptyStateVariant::all()
            .into_iter()
            .map(EmptyStateVariant::style)
            .collect();
        let icons: HashSet<EmptyIcon> = styles.iter().map(|style| style.icon).collect();
        assert_eq!(icons.len(), 4);
        for style in &styles {
            assert_ne!(style.gradient.from, style.gradient.to);
        }
    }

    #[test]
    fn default_variant_is_default() {
        assert_eq!(EmptyStateVariant::default(), EmptyStateVariant::Default);
        assert_eq!(
            EmptyStateVariant::Default.style().icon,
            EmptyIcon::Inbox
        );
    }

    #[test]
    fn every_variant_has_english_copy() {
        let bundle = crate::i18n::TranslationBundle::default();
        for variant in EmptyStateVariant::all() {
            let (title, body) = variant.copy_keys();
            assert!(!bundle.text(title, "").is_empty(), "{title}");
            assert!(!bundle.text(body, "").is_empty(), "{body}");
        }
    }

    #[test]
    fn unknown_variant_falls_back_to_default() {
        assert_eq!(
            "Portfolio".parse::<EmptyStateVariant>(),
            Ok(EmptyStateVariant::Portfolio)
        );
        assert!("archive".parse::<EmptyStateVariant>().is_err());
        assert_eq!(
            EmptyStateVariant::from_raw_or_default("archive"),
            EmptyStateVariant::Default
        );
    }

    #[test]
    fn action_requires_both_label_and_handler() {
        let cb = Callback::from(|()| ());
        assert!(EmptyStateAction::from_parts(Some("Add".into()), None).is_none());
        assert!(EmptyStateAction::from_parts(None, Some(cb.clone())).is_none());
        assert!(EmptyStateAction::from_parts(None, None).is_none());
        let action = EmptyStateAction::from_parts(Some("Add".into()), Some(cb))
            .expect("both halves present");
        assert_eq!(action.label.as_str(), "Add");
    }

    #[test]
    fn activation_fires_handler_once_each_time() {
        let hits = Rc::new(Cell::new(0_u32));
        let action = {
            let hits = Rc::clone(&hits);
            EmptyStateAction::new("Add", Callback::from(move |()| hits.set(hits.get() + 1)))
        };
        action.activate();
        assert_eq!(hits.get(), 1);
        action.activate();
        assert_eq!(hits.get(), 2);
    }
}
