// ✂️ Input Tokenizer - Freeform list text -> ordered item requests
// One item per non-blank line; commas are NOT delimiters, so entries
// like "salt, coarse" stay a single item

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// One normalized entry from the user's raw input.
///
/// The display name keeps the original casing; `folded` is the
/// lowercased form every matching step works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Original line, trimmed (for debugging / verbatim fallback)
    pub raw: String,

    /// Item name as typed, amount word stripped
    pub name: String,

    /// Case-folded name used for rule matching and merging
    pub folded: String,

    /// Leading quantity, defaulting to a count of one
    pub amount: Amount,
}

impl ItemRequest {
    fn from_line(line: &str) -> ItemRequest {
        let raw = line.trim();

        // A leading word that parses as an amount is split off; the rest
        // is the item name. An amount with nothing after it is treated as
        // a plain name, since every token must stay displayable.
        let first = raw.split_whitespace().next().unwrap_or("");
        let (amount, name) = match Amount::parse(first) {
            Some(amount) => {
                let rest = raw[first.len()..].trim();
                if rest.is_empty() {
                    (Amount::default(), raw)
                } else {
                    (amount, rest)
                }
            }
            None => (Amount::default(), raw),
        };

        ItemRequest {
            raw: raw.to_string(),
            name: name.to_string(),
            folded: name.to_lowercase(),
            amount,
        }
    }
}

/// Split raw input text into item requests, one per non-blank line,
/// preserving input order exactly. Order is the downstream tie-break
/// for items landing in the same merchant group.
pub fn tokenize(text: &str) -> Vec<ItemRequest> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(ItemRequest::from_line)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
