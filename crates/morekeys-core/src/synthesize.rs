// Morekeys Synthesizer
// Backfills popup entries that are implied but not declared by the layout

use crate::category::KeyCategory;
use crate::classify::{classify, RESOURCE_MARKER};

/// One synthesis rule: mint a missing `target` entry from the first declared
/// `source` entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SynthesisRule {
    pub source: KeyCategory,
    pub target: KeyCategory,
}

/// Rules applied, in order, once per reorder. A letter key that declares a
/// language variant or a symbol variant implicitly offers the misc-letter and
/// quick-action entries for the same letter, so layouts do not have to
/// enumerate every category on every key.
pub(crate) const SYNTHESIS_RULES: [SynthesisRule; 2] = [
    SynthesisRule {
        source: KeyCategory::LanguageKeys,
        target: KeyCategory::MiscLetters,
    },
    SynthesisRule {
        source: KeyCategory::Symbols,
        target: KeyCategory::QuickActions,
    },
];

impl SynthesisRule {
    /// Mint the missing target-category token, if this rule applies.
    ///
    /// Nothing is synthesized when the target category is already present,
    /// when no source-category token exists, or when the first source token
    /// is not a marked reference to a single lowercase letter. Only the first
    /// source token is considered; later ones never act as fallbacks.
    pub fn apply(&self, specs: &[String]) -> Option<String> {
        if specs.iter().any(|spec| classify(spec) == Some(self.target)) {
            return None;
        }

        let candidate = specs
            .iter()
            .find(|spec| classify(spec) == Some(self.source))?;
        let letter = candidate
            .strip_prefix(RESOURCE_MARKER)?
            .strip_prefix(self.source.prefix())?;

        if letter.len() == 1 && letter.chars().all(|c| c.is_ascii_lowercase()) {
            Some(format!("{RESOURCE_MARKER}{}{letter}", self.target.prefix()))
        } else {
            None
        }
    }
}
