// Morekeys Ordering Codec
// Persisted category-order string <-> in-memory category list

use crate::category::KeyCategory;

/// Encode a category order as comma-joined persistence ordinals.
pub fn encode_order(order: &[KeyCategory]) -> String {
    let ordinals: Vec<String> = order
        .iter()
        .map(|category| category.ordinal().to_string())
        .collect();
    ordinals.join(",")
}

/// Decode a persisted category-order string.
///
/// Entries that do not parse as an integer or name no category are dropped,
/// so a malformed or truncated string degrades to a shorter effective order
/// instead of failing. Categories missing from the result are disabled.
pub fn decode_order(encoded: &str) -> Vec<KeyCategory> {
    encoded
        .split(',')
        .filter_map(|piece| {
            let decoded = piece
                .parse::<u8>()
                .ok()
                .and_then(KeyCategory::from_ordinal);
            if decoded.is_none() && !piece.is_empty() {
                log::warn!("ignoring invalid long-press order entry '{piece}'");
            }
            decoded
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::default_order;

    #[test]
    fn test_default_order_encodes_to_known_string() {
        assert_eq!(encode_order(&default_order()), "1,0,2,3,4");
    }

    #[test]
    fn test_decode_default_string() {
        assert_eq!(decode_order("1,0,2,3,4"), default_order().to_vec());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let order = default_order();
        assert_eq!(decode_order(&encode_order(&order)), order.to_vec());
    }

    #[test]
    fn test_decode_drops_malformed_entries() {
        assert_eq!(
            decode_order("1,x,9,3"),
            vec![KeyCategory::LanguageKeys, KeyCategory::QuickActions]
        );
    }

    #[test]
    fn test_decode_rejects_negative_and_overflowing_entries() {
        assert!(decode_order("-1,256,999999999999").is_empty());
    }

    #[test]
    fn test_decode_rejects_padded_entries() {
        // No whitespace tolerance in the persisted form
        assert_eq!(decode_order(" 1,2 ,3"), vec![KeyCategory::QuickActions]);
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(decode_order("").is_empty());
    }

    #[test]
    fn test_decode_keeps_duplicates() {
        assert_eq!(
            decode_order("0,0"),
            vec![KeyCategory::Numbers, KeyCategory::Numbers]
        );
    }
}
