//! Password strength classification and the lookup tables that drive the meter.
//!
//! # Design
//! - Classification sits behind [`PasswordClassifier`] so callers can plug in
//!   any scorer; [`ScoreClassifier`] is the built-in default.
//! - The meter consumes only `{level, message}`; every visual decision is a
//!   static lookup keyed by [`StrengthLevel`].

use crate::core::error::UnknownValue;
use std::str::FromStr;

/// Coarse three-level classification of password quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrengthLevel {
    /// Easily guessed.
    #[default]
    Weak,
    /// Acceptable but improvable.
    Medium,
    /// Meets every scoring criterion.
    Strong,
}

impl StrengthLevel {
    /// All levels, weakest first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Weak, Self::Medium, Self::Strong]
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Visual treatment for the level.
    #[must_use]
    pub const fn style(self) -> StrengthStyle {
        match self {
            Self::Weak => StrengthStyle {
                bar_class: "bg-error",
                text_class: "text-error",
                width: WidthFraction { thirds: 1 },
            },
            Self::Medium => StrengthStyle {
                bar_class: "bg-warning",
                text_class: "text-warning",
                width: WidthFraction { thirds: 2 },
            },
            Self::Strong => StrengthStyle {
                bar_class: "bg-success",
                text_class: "text-success",
                width: WidthFraction { thirds: 3 },
            },
        }
    }

    /// Parse a raw level, falling back to [`StrengthLevel::Weak`] when unrecognised.
    #[must_use]
    pub fn from_raw_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for StrengthLevel {
    type Err = UnknownValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|level| level.as_str() == lowered)
            .ok_or_else(|| UnknownValue::new("strength level", raw))
    }
}

/// Exact bar width expressed in thirds of the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthFraction {
    /// Numerator over a denominator of three (1..=3).
    pub thirds: u8,
}

impl WidthFraction {
    /// Width as a percentage of the track.
    #[must_use]
    pub fn as_percent(self) -> f64 {
        f64::from(self.thirds) * 100.0 / 3.0
    }

    /// Inline CSS declaration for the filled bar.
    #[must_use]
    pub fn css(self) -> String {
        format!("width: {:.4}%", self.as_percent())
    }
}

/// Per-level record combining the bar color, caption color and bar width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrengthStyle {
    /// Background class for the filled bar.
    pub bar_class: &'static str,
    /// Text class for the caption.
    pub text_class: &'static str,
    /// Filled width of the bar.
    pub width: WidthFraction,
}

/// Outcome of classifying a password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthResult {
    /// Coarse level.
    pub level: StrengthLevel,
    /// Human-readable explanation.
    pub message: String,
}

/// Pluggable password scorer.
pub trait PasswordClassifier {
    /// Classify a non-empty password.
    fn classify(&self, password: &str) -> StrengthResult;
}

impl<F> PasswordClassifier for F
where
    F: Fn(&str) -> StrengthResult + ?Sized,
{
    fn classify(&self, password: &str) -> StrengthResult {
        self(password)
    }
}

/// Minimum length that earns the length criterion.
pub const MIN_STRONG_LENGTH: usize = 12;

/// Default scorer: one point each for length, uppercase, lowercase, digit and symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreClassifier;

impl ScoreClassifier {
    /// Raw criterion score in `0..=5`.
    #[must_use]
    pub fn score(password: &str) -> u8 {
        let criteria = [
            password.chars().count() >= MIN_STRONG_LENGTH,
            password.chars().any(char::is_uppercase),
            password.chars().any(char::is_lowercase),
            password.chars().any(|c| c.is_ascii_digit()),
            password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
        ];
        criteria.into_iter().map(u8::from).sum()
    }
}

impl PasswordClassifier for ScoreClassifier {
    fn classify(&self, password: &str) -> StrengthResult {
        let (level, message) = match Self::score(password) {
            0..=2 => (
                StrengthLevel::Weak,
                "Weak password. Use at least 12 characters with mixed case, numbers and symbols.",
            ),
            3..=4 => (
                StrengthLevel::Medium,
                "Medium strength. Add length or more character types.",
            ),
            _ => (StrengthLevel::Strong, "Strong password."),
        };
        StrengthResult {
            level,
            message: message.to_string(),
        }
    }
}

/// Classify a password with the default scorer.
#[must_use]
pub fn get_password_strength(password: &str) -> StrengthResult {
    ScoreClassifier.classify(password)
}

/// Everything the meter needs to render one password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthView {
    /// Classified level.
    pub level: StrengthLevel,
    /// Caption text from the classifier.
    pub message: String,
    /// Looked-up visual treatment.
    pub style: StrengthStyle,
}

/// Build the meter view for a password; empty input renders nothing.
#[must_use]
pub fn strength_view<C>(password: &str, classifier: &C) -> Option<StrengthView>
where
    C: PasswordClassifier + ?Sized,
{
    if password.is_empty() {
        return None;
    }
    let StrengthResult { level, message } = classifier.classify(password);
    Some(StrengthView {
        level,
        message,
        style: level.style(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fixed(level: StrengthLevel) -> impl Fn(&str) -> StrengthResult {
        move |_: &str| StrengthResult {
            level,
            message: format!("{} message", level.as_str()),
        }
    }

    #[test]
    fn empty_password_renders_nothing_and_skips_classifier() {
        let calls = Cell::new(0_u32);
        let counting = |_: &str| {
            calls.set(calls.get() + 1);
            StrengthResult {
                level: StrengthLevel::Strong,
                message: String::new(),
            }
        };
        assert_eq!(strength_view("", &counting), None);
        assert_eq!(strength_view("", &counting), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn width_is_exact_third_per_level() {
        let widths: Vec<u8> = StrengthLevel::all()
            .into_iter()
            .map(|level| level.style().width.thirds)
            .collect();
        assert_eq!(widths, vec![1, 2, 3]);
        assert_eq!(StrengthLevel::Strong.style().width.as_percent(), 100.0);
        assert_eq!(
            StrengthLevel::Medium.style().width.css(),
            "width: 66.6667%"
        );
    }

    #[test]
    fn each_level_gets_a_single_distinct_color() {
        for level in StrengthLevel::all() {
            let view = strength_view("x", &fixed(level)).expect("non-empty renders");
            let matching = StrengthLevel::all()
                .into_iter()
                .filter(|other| other.style().bar_class == view.style.bar_class)
                .count();
            assert_eq!(matching, 1);
            assert_eq!(view.level, level);
            assert_eq!(view.message, format!("{} message", level.as_str()));
        }
    }

    #[test]
    fn caption_color_tracks_bar_color() {
        for level in StrengthLevel::all() {
            let style = level.style();
            let bar = style.bar_class.trim_start_matches("bg-");
            let text = style.text_class.trim_start_matches("text-");
            assert_eq!(bar, text);
        }
    }

    #[test]
    fn default_scorer_buckets_scores() {
        assert_eq!(get_password_strength("abc").level, StrengthLevel::Weak);
        assert_eq!(get_password_strength("Abcdef12").level, StrengthLevel::Medium);
        assert_eq!(
            get_password_strength("Correct-Horse-9").level,
            StrengthLevel::Strong
        );
        assert_eq!(ScoreClassifier::score("Correct-Horse-9"), 5);
        assert_eq!(ScoreClassifier::score("      "), 0);
    }

    #[test]
    fn view_is_stable_across_renders() {
        let first = strength_view("Abcdef12", &ScoreClassifier);
        let second = strength_view("Abcdef12", &ScoreClassifier);
        assert_eq!(first, second);
    }

    #[test]
    fn raw_levels_parse_or_fall_back_to_weak() {
        assert_eq!(" Strong ".parse::<StrengthLevel>(), Ok(StrengthLevel::Strong));
        assert_eq!("MEDIUM".parse::<StrengthLevel>(), Ok(StrengthLevel::Medium));
        let err = "excellent".parse::<StrengthLevel>().unwrap_err();
        assert_eq!(err.value, "excellent");
        assert_eq!(
            StrengthLevel::from_raw_or_default("excellent"),
            StrengthLevel::Weak
        );
    }
}
