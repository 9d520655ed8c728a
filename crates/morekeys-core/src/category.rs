// Morekeys Category Model
// The closed set of long-press popup key categories

use strum_macros::{Display, EnumIter, FromRepr};

/// A recognized classification of long-press popup entries.
///
/// The discriminant is the stable ordinal used by the persisted ordering
/// string and must never change between releases. `Display` renders a stable
/// snake_case slug; an external localization layer maps slugs to user-facing
/// names and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum KeyCategory {
    Numbers = 0,
    LanguageKeys = 1,
    Symbols = 2,
    QuickActions = 3,
    MiscLetters = 4,
}

impl KeyCategory {
    /// Stable persistence ordinal for this category.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a category by its persistence ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    /// The key-spec prefix that marks a token as belonging to this category.
    pub const fn prefix(self) -> &'static str {
        match self {
            KeyCategory::Numbers => "number_",
            KeyCategory::LanguageKeys => "morekeys_",
            KeyCategory::Symbols => "qwertysyms_",
            KeyCategory::QuickActions => "actions_",
            KeyCategory::MiscLetters => "morekeys_misc_",
        }
    }
}

/// The built-in category preference used when nothing is persisted.
pub fn default_order() -> [KeyCategory; 5] {
    [
        KeyCategory::LanguageKeys,
        KeyCategory::Numbers,
        KeyCategory::Symbols,
        KeyCategory::QuickActions,
        KeyCategory::MiscLetters,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(KeyCategory::Numbers.ordinal(), 0);
        assert_eq!(KeyCategory::LanguageKeys.ordinal(), 1);
        assert_eq!(KeyCategory::Symbols.ordinal(), 2);
        assert_eq!(KeyCategory::QuickActions.ordinal(), 3);
        assert_eq!(KeyCategory::MiscLetters.ordinal(), 4);
    }

    #[test]
    fn test_from_ordinal_roundtrip() {
        for category in KeyCategory::iter() {
            assert_eq!(KeyCategory::from_ordinal(category.ordinal()), Some(category));
        }
    }

    #[test]
    fn test_from_ordinal_out_of_range() {
        assert_eq!(KeyCategory::from_ordinal(5), None);
        assert_eq!(KeyCategory::from_ordinal(255), None);
    }

    #[test]
    fn test_slugs() {
        assert_eq!(KeyCategory::Numbers.to_string(), "numbers");
        assert_eq!(KeyCategory::LanguageKeys.to_string(), "language_keys");
        assert_eq!(KeyCategory::QuickActions.to_string(), "quick_actions");
        assert_eq!(KeyCategory::MiscLetters.to_string(), "misc_letters");
    }

    #[test]
    fn test_default_order_lists_every_category_once() {
        let order = default_order();
        for category in KeyCategory::iter() {
            assert_eq!(order.iter().filter(|c| **c == category).count(), 1);
        }
    }
}
