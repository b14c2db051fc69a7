// 🏷️ Merchant Configuration - Rules as Data
// Line-oriented config text -> ordered merchants with ordered match rules
//
// Format, processed strictly in file order:
//   - "Name:"            merchant header (non-empty name before the colon)
//   - "pattern"          exact match, case-insensitive
//   - "~pattern"         substring match, case-insensitive
//   - "pat*tern"         wildcard match ('*' spans anything)
//   - "pattern -> Name"  alias: matches like the bare form, item displays
//                        under the canonical name
// Blank lines are ignored. Rule lines belong to the nearest header above.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Rejection of a configuration text. Always recoverable: the caller may
/// fix the text and retry, and the previously installed configuration
/// stays active in the meantime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("line {line}: item rule appears before any merchant header")]
    RuleBeforeHeader { line: usize },

    #[error("line {line}: merchant header has an empty name")]
    EmptyMerchantName { line: usize },

    #[error("line {line}: rule has an empty pattern")]
    EmptyPattern { line: usize },

    #[error("line {line}: alias rule has an empty canonical name")]
    EmptyCanonical { line: usize },
}

impl ConfigError {
    /// 1-based line number of the offending config line.
    pub fn line(&self) -> usize {
        match self {
            ConfigError::RuleBeforeHeader { line }
            | ConfigError::EmptyMerchantName { line }
            | ConfigError::EmptyPattern { line }
            | ConfigError::EmptyCanonical { line } => *line,
        }
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// Per-rule matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Case-insensitive equality (the default)
    Exact,

    /// Case-insensitive containment ("~pattern")
    Substring,

    /// '*'-pattern: anchored start/end, middle parts in order
    Wildcard,
}

/// One matching pattern owned by a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantRule {
    /// Pattern, already case-folded
    pub pattern: String,

    /// How the pattern is applied
    pub mode: MatchMode,

    /// Canonical display name for items matched through this rule
    /// (alias form "pattern -> Name"); None keeps the typed name
    pub canonical: Option<String>,
}

impl MerchantRule {
    /// Check whether this rule matches an already case-folded item name.
    pub fn matches(&self, folded: &str) -> bool {
        match self.mode {
            MatchMode::Exact => folded == self.pattern,
            MatchMode::Substring => folded.contains(&self.pattern),
            MatchMode::Wildcard => wildcard_match(&self.pattern, folded),
        }
    }
}

/// Match a '*'-pattern against text: the text must start with the first
/// segment, end with the last, and contain the middle segments in order.
/// Segments may not overlap, so "milk*milk" needs the text to contain
/// "milk" twice.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();

    let Some((first, rest)) = parts.split_first() else {
        return false;
    };

    if !text.starts_with(first) {
        return false;
    }

    let Some((last, middle)) = rest.split_last() else {
        // No '*' in the pattern; degenerate exact match.
        return text == *first;
    };

    let mut current_pos = first.len();
    for part in middle {
        if part.is_empty() {
            continue;
        }
        match text[current_pos..].find(part) {
            Some(pos) => current_pos += pos + part.len(),
            None => return false,
        }
    }

    // The tail segment must fit entirely after everything matched so far.
    last.is_empty() || (text.len() >= current_pos + last.len() && text.ends_with(last))
}

// ============================================================================
// MERCHANTS
// ============================================================================

/// A configured merchant: its display name, position in the config file
/// (which fixes output order), and its ordered rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub name: String,

    /// 0-based position in the configuration; defines group order
    pub ordinal: usize,

    pub rules: Vec<MerchantRule>,
}

/// The full, ordered merchant configuration.
///
/// The same pattern declared under two merchants is not an error: the
/// resolver scans in config order, so the first declaration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConfig {
    pub merchants: Vec<Merchant>,
}

impl MerchantConfig {
    /// Parse configuration text. Any error rejects the whole text
    /// atomically; no partially parsed configuration escapes.
    pub fn parse(text: &str) -> Result<MerchantConfig, ConfigError> {
        let mut merchants: Vec<Merchant> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            if let Some(header) = trimmed.strip_suffix(':') {
                let name = header.trim();
                if name.is_empty() {
                    return Err(ConfigError::EmptyMerchantName { line: line_no });
                }
                merchants.push(Merchant {
                    name: name.to_string(),
                    ordinal: merchants.len(),
                    rules: Vec::new(),
                });
            } else {
                let rule = parse_rule(trimmed, line_no)?;
                match merchants.last_mut() {
                    Some(merchant) => merchant.rules.push(rule),
                    None => return Err(ConfigError::RuleBeforeHeader { line: line_no }),
                }
            }
        }

        Ok(MerchantConfig { merchants })
    }

    /// Total number of rules across all merchants.
    pub fn rule_count(&self) -> usize {
        self.merchants.iter().map(|m| m.rules.len()).sum()
    }
}

fn parse_rule(line: &str, line_no: usize) -> Result<MerchantRule, ConfigError> {
    let (pattern_text, canonical) = match line.split_once("->") {
        Some((pattern, canonical)) => {
            let canonical = canonical.trim();
            if canonical.is_empty() {
                return Err(ConfigError::EmptyCanonical { line: line_no });
            }
            (pattern.trim(), Some(canonical.to_string()))
        }
        None => (line, None),
    };

    let (mode, pattern_text) = match pattern_text.strip_prefix('~') {
        Some(rest) => (MatchMode::Substring, rest.trim()),
        None if pattern_text.contains('*') => (MatchMode::Wildcard, pattern_text),
        None => (MatchMode::Exact, pattern_text),
    };

    if pattern_text.is_empty() {
        return Err(ConfigError::EmptyPattern { line: line_no });
    }

    Ok(MerchantRule {
        pattern: pattern_text.to_lowercase(),
        mode,
        canonical,
    })
}

// ============================================================================
// TESTS
// ============================================================================
