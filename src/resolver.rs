// 🔍 Resolver - Assign each item request to a merchant
// First-match scan: merchants in config order, rules in declared order.
// Config order alone determines precedence; there is no scoring and no
// longest-match, so configuration authors control outcomes by ordering.

use serde::{Deserialize, Serialize};

use crate::config::MerchantConfig;
use crate::tokenizer::ItemRequest;

/// Where a resolved item landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    /// Ordinal of the matching merchant in the configuration
    Merchant(usize),

    /// No rule matched; the item goes to the synthetic last group
    Unassigned,
}

/// An item request plus its merchant assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub request: ItemRequest,
    pub assignment: Assignment,

    /// Name the item displays (and merges) under: the matched rule's
    /// canonical name if it had one, otherwise the name as typed
    pub display_name: String,
}

impl ResolvedItem {
    /// Case-folded display name, the merge key within a group.
    pub fn folded_display(&self) -> String {
        self.display_name.to_lowercase()
    }
}

/// Match one item request against the configuration. Pure: mutates
/// neither the configuration nor any session state.
pub fn resolve(request: ItemRequest, config: &MerchantConfig) -> ResolvedItem {
    for merchant in &config.merchants {
        for rule in &merchant.rules {
            if rule.matches(&request.folded) {
                let display_name = rule
                    .canonical
                    .clone()
                    .unwrap_or_else(|| request.name.clone());
                return ResolvedItem {
                    request,
                    assignment: Assignment::Merchant(merchant.ordinal),
                    display_name,
                };
            }
        }
    }

    let display_name = request.name.clone();
    ResolvedItem {
        request,
        assignment: Assignment::Unassigned,
        display_name,
    }
}

// ============================================================================
// TESTS
// ============================================================================
