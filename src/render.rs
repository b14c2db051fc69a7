// 📄 Renderer - Read-only projections of a grouped result
// Plaintext for humans, {name, items} records for programmatic callers
// (checklists, JSON output). Both are pure reads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{GroupedResult, MerchantGroup};

/// Structured projection record: one group, items already formatted as
/// display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroup {
    pub name: String,
    pub items: Vec<String>,
}

impl From<&MerchantGroup> for ListGroup {
    fn from(group: &MerchantGroup) -> Self {
        ListGroup {
            name: group.name.clone(),
            items: group.items.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Project a grouped result into `{ name, items }` records, preserving
/// group and item order.
pub fn structured(result: &GroupedResult) -> Vec<ListGroup> {
    result.groups.iter().map(ListGroup::from).collect()
}

/// Plaintext format: each group name underlined with '=', one item per
/// line, a blank line between groups. Locale-independent; an empty
/// result renders as the empty string.
impl fmt::Display for GroupedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for group in &self.groups {
            if first {
                first = false;
            } else {
                f.write_str("\n")?;
            }

            writeln!(f, "{}", group.name)?;
            for _ in group.name.chars() {
                f.write_str("=")?;
            }
            f.write_str("\n")?;

            for item in &group.items {
                writeln!(f, "{}", item)?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ListEngine;

    fn engine_with(config: &str, input: &str) -> ListEngine {
        let mut engine = ListEngine::new();
        engine.load_config(config).unwrap();
        engine.process_input(input);
        engine
    }

    #[test]
    fn test_plaintext_layout() {
        let engine = engine_with("Store A:\nmilk\nStore B:\napples", "apples\nmilk\ncheese");

        let expected = "\
Store A
=======
milk

Store B
=======
apples

Unassigned
==========
cheese\n";
        assert_eq!(engine.plaintext_result(), expected);
    }

    #[test]
    fn test_plaintext_includes_amounts() {
        let engine = engine_with("Store A:\nmilk", "2l milk");
        assert_eq!(engine.plaintext_result(), "Store A\n=======\n2l milk\n");
    }

    #[test]
    fn test_empty_result_renders_empty_string() {
        assert_eq!(GroupedResult::default().to_string(), "");
    }

    #[test]
    fn test_structured_mirrors_plaintext_order() {
        let engine = engine_with("Store A:\nmilk\nStore B:\napples", "apples\nmilk");

        let groups = engine.list_result();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Store A");
        assert_eq!(groups[0].items, vec!["milk".to_string()]);
        assert_eq!(groups[1].name, "Store B");
        assert_eq!(groups[1].items, vec!["apples".to_string()]);
    }

    #[test]
    fn test_structured_serializes_to_json() {
        let engine = engine_with("Store A:\nmilk", "milk");

        let json = serde_json::to_string(&engine.list_result()).unwrap();
        assert_eq!(json, r#"[{"name":"Store A","items":["milk"]}]"#);
    }
}
