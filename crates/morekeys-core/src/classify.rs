// Morekeys Classifier
// Maps a raw key-spec token to its category by prefix

use crate::category::KeyCategory;

/// Marker prefixing a key-spec token that references a keyboard resource
/// rather than spelling out a literal display string.
pub const RESOURCE_MARKER: &str = "!text/";

/// Prefix test order. `morekeys_` is a strict prefix of `morekeys_misc_`,
/// so MiscLetters must be tested before LanguageKeys.
pub(crate) const CLASSIFY_PRECEDENCE: [KeyCategory; 5] = [
    KeyCategory::MiscLetters,
    KeyCategory::QuickActions,
    KeyCategory::Symbols,
    KeyCategory::Numbers,
    KeyCategory::LanguageKeys,
];

/// Classify a key-spec token, returning `None` for non-configurable tokens.
///
/// The leading resource marker is stripped if present, then the remainder is
/// tested against the category prefixes in precedence order. Classification
/// depends only on the token itself, never on its position or neighbors.
pub fn classify(spec: &str) -> Option<KeyCategory> {
    let stripped = spec.strip_prefix(RESOURCE_MARKER).unwrap_or(spec);
    CLASSIFY_PRECEDENCE
        .iter()
        .copied()
        .find(|category| stripped.starts_with(category.prefix()))
}
