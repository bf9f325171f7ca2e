//! Brand color tokens and gradient pairs used by the Credfolio UI.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the color (e.g., "indigo-500").
    pub name: &'static str,
    /// Hex RGB value for the color.
    pub hex: &'static str,
}

/// Two-stop diagonal gradient used behind placeholder icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    /// Starting color (top-left).
    pub from: ColorToken,
    /// Ending color (bottom-right).
    pub to: ColorToken,
}

impl Gradient {
    /// CSS `background` value for the gradient.
    #[must_use]
    pub fn css(self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.from.hex, self.to.hex
        )
    }
}

/// Indigo accent.
pub const INDIGO: ColorToken = ColorToken {
    name: "indigo-500",
    hex: "#6366F1",
};
/// Violet accent.
pub const VIOLET: ColorToken = ColorToken {
    name: "violet-500",
    hex: "#8B5CF6",
};
/// Emerald accent.
pub const EMERALD: ColorToken = ColorToken {
    name: "emerald-500",
    hex: "#10B981",
};
/// Teal accent.
pub const TEAL: ColorToken = ColorToken {
    name: "teal-500",
    hex: "#14B8A6",
};
/// Amber accent.
pub const AMBER: ColorToken = ColorToken {
    name: "amber-500",
    hex: "#F59E0B",
};
/// Orange accent.
pub const ORANGE: ColorToken = ColorToken {
    name: "orange-500",
    hex: "#F97316",
};
/// Neutral slate.
pub const SLATE: ColorToken = ColorToken {
    name: "slate-400",
    hex: "#94A3B8",
};
/// Darker neutral slate.
pub const SLATE_DARK: ColorToken = ColorToken {
    name: "slate-600",
    hex: "#475569",
};

#[cfg(test)]
mod tests {
    use super::{Gradient, INDIGO, VIOLET};

    #[test]
    fn gradient_css_lists_both_stops_in_order() {
        let gradient = Gradient {
            from: INDIGO,
            to: VIOLET,
        };
        assert_eq!(
            gradient.css(),
            "linear-gradient(135deg, #6366F1 0%, #8B5CF6 100%)"
        );
    }
}
