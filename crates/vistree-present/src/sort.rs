//! Natural sibling ordering by node code.
//!
//! Codes mix numeric and alphabetic segments (`000a`, `100a`, `1000a`);
//! plain lexicographic order would put `1000a` before `100a`. Siblings are
//! therefore keyed on the maximal leading digit run, with the full code as
//! tie-breaker.

use std::cmp::Ordering;

use vistree_hierarchy::Node;

/// Unsigned value of the maximal leading ASCII digit run; 0 when the code
/// starts with a non-digit.
fn numeric_prefix(code: &str) -> u64 {
    let mut value: u64 = 0;
    for byte in code.bytes() {
        if byte.is_ascii_digit() {
            value = value.saturating_mul(10).saturating_add((byte - b'0') as u64);
        } else {
            break;
        }
    }
    value
}

/// Total order on codes: numeric prefix ascending, then lexicographic.
pub fn natural_code_order(a: &str, b: &str) -> Ordering {
    numeric_prefix(a)
        .cmp(&numeric_prefix(b))
        .then_with(|| a.cmp(b))
}

/// Sorts a sibling list into natural code order. Stable, so re-sorting an
/// already-sorted list is the identity.
pub fn sorted_children<'h>(mut children: Vec<&'h Node>) -> Vec<&'h Node> {
    children.sort_by(|a, b| natural_code_order(a.code(), b.code()));
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistree_hierarchy::{Category, HierarchyBuilder, NodeMetadata, NodeType};

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("411.1"), 411);
        assert_eq!(numeric_prefix("1000a"), 1000);
        assert_eq!(numeric_prefix("C101"), 0);
        assert_eq!(numeric_prefix(""), 0);
    }

    #[test]
    fn test_numeric_prefix_orders_before_lexicographic() {
        assert_eq!(natural_code_order("100a", "1000a"), Ordering::Less);
        assert_eq!(natural_code_order("000a", "100a"), Ordering::Less);
        // Same number, lexicographic tie-break.
        assert_eq!(natural_code_order("100a", "100b"), Ordering::Less);
        // No digit run sorts first, then among themselves lexicographically.
        assert_eq!(natural_code_order("C101", "100a"), Ordering::Less);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let h = {
            let mut builder = HierarchyBuilder::new();
            for code in ["1000a", "000a", "100a", "C101", "411.1"] {
                builder = builder.node(
                    code,
                    NodeMetadata {
                        category: Category::AssetFunction,
                        node_type: NodeType::Group,
                        name: code.to_string(),
                        common_name: None,
                        definition: None,
                    },
                    &[],
                    &[],
                    None,
                );
            }
            builder.build().unwrap()
        };
        let nodes: Vec<_> = h.iter().collect();
        let once = sorted_children(nodes.clone());
        let codes: Vec<&str> = once.iter().map(|n| n.code()).collect();
        assert_eq!(codes, ["000a", "C101", "100a", "411.1", "1000a"]);

        let twice = sorted_children(once.clone());
        let again: Vec<&str> = twice.iter().map(|n| n.code()).collect();
        assert_eq!(codes, again);
    }
}
