// 🛒 Grouping Engine - Session state + the primary entry point
// One engine instance = one session: at most one installed configuration
// and one last-computed result, both replaced wholesale on write.
// Single-threaded by design; a concurrent host must serialize access.

use std::fmt;

use tracing::debug;

use crate::amount::Amount;
use crate::config::{ConfigError, MerchantConfig};
use crate::render::{self, ListGroup};
use crate::resolver::{resolve, Assignment, ResolvedItem};
use crate::tokenizer::tokenize;

/// Name of the synthetic group holding items no rule matched.
pub const UNASSIGNED_GROUP: &str = "Unassigned";

// ============================================================================
// GROUPED RESULT
// ============================================================================

/// One line of the final list: a display name plus its (possibly merged)
/// quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub amount: Amount,
    pub name: String,
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.is_single() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} {}", self.amount, self.name)
        }
    }
}

/// A merchant's slice of the result: group name + items in order of
/// first occurrence in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantGroup {
    pub name: String,
    pub items: Vec<ListItem>,
}

/// The grouped outcome of one `process_input` call. Merchant groups come
/// in configuration-ordinal order; the Unassigned group, if present, is
/// strictly last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResult {
    pub groups: Vec<MerchantGroup>,
}

impl GroupedResult {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// GROUPING
// ============================================================================

/// In-progress group: items paired with their case-folded merge keys.
#[derive(Default)]
struct Bucket {
    entries: Vec<(String, ListItem)>,
}

impl Bucket {
    /// Append an item, merging it into an earlier entry when the folded
    /// name matches and the amounts share a unit family. Incompatible
    /// amounts (say 500g milk next to 2l milk) stay separate lines;
    /// grouping never fails.
    fn push(&mut self, resolved: &ResolvedItem) {
        let key = resolved.folded_display();
        let amount = resolved.request.amount;

        for (existing_key, existing) in self.entries.iter_mut() {
            if *existing_key == key {
                if let Some(combined) = existing.amount.combine(amount) {
                    existing.amount = combined;
                    return;
                }
            }
        }

        self.entries.push((
            key,
            ListItem {
                amount,
                name: resolved.display_name.clone(),
            },
        ));
    }

    fn into_items(self) -> Vec<ListItem> {
        self.entries.into_iter().map(|(_, item)| item).collect()
    }
}

fn group(resolved: Vec<ResolvedItem>, config: Option<&MerchantConfig>) -> GroupedResult {
    let merchant_count = config.map(|c| c.merchants.len()).unwrap_or(0);
    let mut merchant_buckets: Vec<Bucket> = (0..merchant_count).map(|_| Bucket::default()).collect();
    let mut unassigned = Bucket::default();

    for item in &resolved {
        match item.assignment {
            Assignment::Merchant(ordinal) => merchant_buckets[ordinal].push(item),
            Assignment::Unassigned => unassigned.push(item),
        }
    }

    let mut groups = Vec::new();

    if let Some(config) = config {
        for (merchant, bucket) in config.merchants.iter().zip(merchant_buckets) {
            let items = bucket.into_items();
            if !items.is_empty() {
                groups.push(MerchantGroup {
                    name: merchant.name.clone(),
                    items,
                });
            }
        }
    }

    let leftovers = unassigned.into_items();
    if !leftovers.is_empty() {
        groups.push(MerchantGroup {
            name: UNASSIGNED_GROUP.to_string(),
            items: leftovers,
        });
    }

    GroupedResult { groups }
}

// ============================================================================
// SESSION ENGINE
// ============================================================================

/// The engine's single mutable session: current configuration (if any)
/// and the last computed result. All four public operations run to
/// completion synchronously and perform no I/O.
#[derive(Debug, Default)]
pub struct ListEngine {
    config: Option<MerchantConfig>,
    result: GroupedResult,
}

impl ListEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and install a configuration. On error the previously
    /// installed configuration (possibly none) stays active.
    pub fn load_config(&mut self, text: &str) -> Result<(), ConfigError> {
        let config = MerchantConfig::parse(text)?;
        debug!(
            merchants = config.merchants.len(),
            rules = config.rule_count(),
            "configuration installed"
        );
        self.config = Some(config);
        Ok(())
    }

    /// Whether a configuration is currently installed.
    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    /// Tokenize, resolve and group the input, replacing the stored
    /// result. Infallible: with no configuration installed every item
    /// lands in the Unassigned group, which is a valid outcome.
    pub fn process_input(&mut self, text: &str) {
        let requests = tokenize(text);
        debug!(items = requests.len(), "processing input");

        // No configuration behaves like an empty one: everything resolves
        // to the Unassigned group.
        let empty = MerchantConfig::default();
        let config = self.config.as_ref().unwrap_or(&empty);

        let resolved: Vec<ResolvedItem> = requests
            .into_iter()
            .map(|request| resolve(request, config))
            .collect();

        self.result = group(resolved, self.config.as_ref());
    }

    /// Plaintext projection of the current result. Pure read; empty
    /// string before the first `process_input`.
    pub fn plaintext_result(&self) -> String {
        self.result.to_string()
    }

    /// Structured projection of the current result. Pure read; empty
    /// before the first `process_input`.
    pub fn list_result(&self) -> Vec<ListGroup> {
        render::structured(&self.result)
    }

    /// The raw grouped result, for callers that want to project it
    /// themselves.
    pub fn result(&self) -> &GroupedResult {
        &self.result
    }
}

// ============================================================================
// TESTS
// ============================================================================
