//! Free-text and path-expression search over the hierarchy.
//!
//! A query that parses as a short path resolves to exactly one node and
//! short-circuits the scan; anything else falls back to a case-insensitive
//! substring match over code, name, and common name. Text-mode results keep
//! hierarchy traversal order rather than a relevance ranking - at the
//! observed node counts a stable order scans better than a scored one.

use vistree_hierarchy::{parse_short_path, Hierarchy, Locations, Node, ShortPath};

use crate::classify::{classify, ColorClass};

/// Codes ending in these characters are structural slots (selection
/// groupings, individualizable stand-ins), not addressable items.
const STRUCTURAL_MARKERS: [char; 2] = ['s', 'i'];

/// One text-mode hit: the node plus the short ancestor trail shown with it.
#[derive(Clone, Debug)]
pub struct SearchResult<'h> {
    pub node: &'h Node,
    /// At most two entries: the nearest function-leaf ancestor (when one
    /// exists) and the matched node itself.
    pub breadcrumb: Vec<&'h Node>,
}

/// Path-mode resolution: the single node the expression names.
#[derive(Clone, Debug)]
pub struct PathMatch<'h> {
    pub node: &'h Node,
    /// Full first-parent chain from the root to the node.
    pub breadcrumb: Vec<&'h Node>,
    pub path: ShortPath,
}

/// Outcome of one query: exactly one of the two modes.
#[derive(Clone, Debug)]
pub enum SearchOutcome<'h> {
    Path(PathMatch<'h>),
    Text(Vec<SearchResult<'h>>),
}

/// Runs `query` against the hierarchy.
///
/// Blank queries yield an empty text-mode result. Path mode is attempted
/// first on the upper-cased query; only when that fails does the node scan
/// run.
pub fn search<'h>(
    query: &str,
    hierarchy: &'h Hierarchy,
    locations: &Locations,
) -> SearchOutcome<'h> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return SearchOutcome::Text(vec![]);
    }

    if let Some(path) = parse_short_path(&trimmed.to_uppercase(), hierarchy, locations) {
        if let Some(node) = hierarchy.node(path.target_code()) {
            let breadcrumb = hierarchy.ancestor_chain(node);
            return SearchOutcome::Path(PathMatch {
                node,
                breadcrumb,
                path,
            });
        }
    }

    let needle = trimmed.to_lowercase();
    let mut results = vec![];
    for node in hierarchy.iter() {
        if has_structural_marker(node.code()) {
            continue;
        }
        if !matches_text(node, &needle) {
            continue;
        }
        results.push(SearchResult {
            node,
            breadcrumb: breadcrumb_for(hierarchy, node),
        });
    }
    SearchOutcome::Text(results)
}

fn has_structural_marker(code: &str) -> bool {
    code.chars()
        .last()
        .is_some_and(|c| STRUCTURAL_MARKERS.contains(&c))
}

fn matches_text(node: &Node, needle: &str) -> bool {
    if node.code().to_lowercase().contains(needle) {
        return true;
    }
    if node.name().to_lowercase().contains(needle) {
        return true;
    }
    node.common_name()
        .is_some_and(|name| name.to_lowercase().contains(needle))
}

/// The minimal trail that disambiguates a hit: the nearest function-leaf
/// ancestor on the first-parent chain, then the node itself.
fn breadcrumb_for<'h>(hierarchy: &'h Hierarchy, node: &'h Node) -> Vec<&'h Node> {
    let mut breadcrumb = vec![];
    let mut current = node;
    while let Some(parent) = hierarchy.first_parent(current) {
        let color = classify(parent).color_class;
        if matches!(
            color,
            ColorClass::AssetFunctionLeaf | ColorClass::ProductFunctionLeaf
        ) {
            breadcrumb.push(parent);
            break;
        }
        current = parent;
    }
    breadcrumb.push(node);
    breadcrumb
}
