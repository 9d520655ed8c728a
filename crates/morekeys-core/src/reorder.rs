// Morekeys Reorder Engine
// Emits popup tokens grouped by the user's category preference

use smallvec::SmallVec;

use crate::category::KeyCategory;
use crate::classify::classify;
use crate::synthesize::SYNTHESIS_RULES;

/// Working set for one key's popup entries. Display constraints keep popup
/// rows small, so the common case stays on the stack.
type SpecSet = SmallVec<[String; 8]>;

/// Reorder one key's popup tokens according to the configured category order.
///
/// Synthesis runs first, appending at most one minted token per rule after
/// the declared ones. Non-configurable tokens are emitted first, in original
/// relative order. Configurable tokens follow, grouped by category in the
/// order given; within a group the candidate order is preserved (a stable
/// grouping, not a sort). Categories missing from `order` are dropped
/// entirely, and a category listed twice emits its group twice.
pub fn reorder_key_specs(specs: &[String], order: &[KeyCategory]) -> Vec<String> {
    let mut candidates: SpecSet = specs.iter().cloned().collect();
    for rule in &SYNTHESIS_RULES {
        if let Some(minted) = rule.apply(&candidates) {
            candidates.push(minted);
        }
    }

    let mut reordered = Vec::with_capacity(candidates.len());
    reordered.extend(
        candidates
            .iter()
            .filter(|spec| classify(spec).is_none())
            .cloned(),
    );
    for &category in order {
        reordered.extend(
            candidates
                .iter()
                .filter(|spec| classify(spec) == Some(category))
                .cloned(),
        );
    }
    reordered
}
