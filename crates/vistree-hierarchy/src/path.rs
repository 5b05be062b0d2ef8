//! Short-path expressions resolved against a hierarchy snapshot.
//!
//! A short path names only the addressable segments of a chain, e.g.
//! `411.1/C101-P`; the group levels between them are implied. Parsing
//! resolves every segment, re-interpolates the implied ancestors through
//! first-parent chains, and validates any `-qualifier` suffixes against the
//! version's location table. Parsing is total: malformed text yields `None`,
//! never a panic.

use smallvec::SmallVec;

use crate::arena::Hierarchy;
use crate::locations::Locations;
use crate::node::Node;

/// Indices of full-chain nodes that jointly carry one location qualifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndividualizableSet {
    indices: SmallVec<[usize; 2]>,
}

impl IndividualizableSet {
    /// Full-chain node indices, in chain order.
    #[inline]
    pub fn node_indices(&self) -> &[usize] {
        &self.indices
    }
}

/// A parsed path: the full root-to-target node chain with per-node
/// qualifiers and the derived addressability facts the viewer needs.
#[derive(Clone, Debug)]
pub struct ShortPath {
    codes: Vec<String>,
    qualifiers: Vec<Option<String>>,
    /// Per-index: does this node print as its own short-path segment?
    leaf_flags: Vec<bool>,
    individualizable: Vec<IndividualizableSet>,
}

impl ShortPath {
    /// Number of nodes in the full chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Full-chain node codes, root first.
    #[inline]
    pub fn node_codes(&self) -> &[String] {
        &self.codes
    }

    /// Code of the path's target (deepest) node.
    pub fn target_code(&self) -> &str {
        // Parsing never produces an empty chain.
        self.codes.last().map(String::as_str).unwrap_or_default()
    }

    /// Qualifier attached to the node at `index`, if any.
    pub fn qualifier_at(&self, index: usize) -> Option<&str> {
        self.qualifiers.get(index).and_then(Option::as_deref)
    }

    /// Whether the node at `index` prints as its own short-path segment
    /// (function leaves, product types, and always the final node).
    pub fn is_leaf_node(&self, index: usize) -> bool {
        self.leaf_flags.get(index).copied().unwrap_or(false) || index + 1 == self.codes.len()
    }

    /// Segments eligible to carry a location qualifier, in chain order.
    #[inline]
    pub fn individualizable_sets(&self) -> &[IndividualizableSet] {
        &self.individualizable
    }

    /// Short textual form with qualifiers attached.
    pub fn to_short_string(&self) -> String {
        self.render(true)
    }

    /// Short textual form with every qualifier stripped.
    pub fn without_locations(&self) -> String {
        self.render(false)
    }

    fn render(&self, with_qualifiers: bool) -> String {
        let mut out = String::new();
        for index in 0..self.codes.len() {
            if !self.is_leaf_node(index) {
                continue;
            }
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&self.codes[index]);
            if with_qualifiers {
                if let Some(q) = self.qualifier_at(index) {
                    out.push('-');
                    out.push_str(q);
                }
            }
        }
        out
    }
}

impl std::fmt::Display for ShortPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_short_string())
    }
}

/// Parses `text` as a short path over `hierarchy`, validating qualifiers
/// against `locations`.
///
/// Consecutive segments must be connected through parent links: each
/// segment's node must reach the previous segment's node by climbing first
/// parents (any recorded parent closes the link at each step).
pub fn parse_short_path(
    text: &str,
    hierarchy: &Hierarchy,
    locations: &Locations,
) -> Option<ShortPath> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut chain: Vec<(String, Option<String>)> = vec![];
    let mut previous: Option<String> = None;

    for segment in text.split('/') {
        let (code, qualifier) = split_segment(segment)?;
        if let Some(q) = &qualifier {
            if !locations.parse_qualifier(q) {
                log::debug!("rejecting path {text:?}: bad qualifier {q:?}");
                return None;
            }
        }
        let node = hierarchy.node(code)?;

        match &previous {
            None => {
                for ancestor in hierarchy.ancestor_chain(node) {
                    chain.push((ancestor.code().to_string(), None));
                }
            }
            Some(prev) => {
                let link = climb_to(hierarchy, node, prev)?;
                for code in link {
                    chain.push((code, None));
                }
            }
        }
        // The qualifier belongs to the segment node itself.
        if let Some((_, slot)) = chain.last_mut() {
            *slot = qualifier;
        }
        previous = Some(code.to_string());
    }

    let codes: Vec<String> = chain.iter().map(|(c, _)| c.clone()).collect();
    let qualifiers: Vec<Option<String>> = chain.into_iter().map(|(_, q)| q).collect();

    let mut leaf_flags = Vec::with_capacity(codes.len());
    let mut individualizable = vec![];
    for (index, code) in codes.iter().enumerate() {
        let node = hierarchy.node(code)?;
        leaf_flags.push(node.is_leaf_node());
        if is_individualizable(node) {
            individualizable.push(IndividualizableSet {
                indices: SmallVec::from_slice(&[index]),
            });
        }
    }

    Some(ShortPath {
        codes,
        qualifiers,
        leaf_flags,
        individualizable,
    })
}

/// Splits `code-qualifier` on the first dash. An empty code or a dangling
/// dash is malformed.
fn split_segment(segment: &str) -> Option<(&str, Option<String>)> {
    match segment.split_once('-') {
        Some((code, qualifier)) => {
            if code.is_empty() || qualifier.is_empty() {
                None
            } else {
                Some((code, Some(qualifier.to_string())))
            }
        }
        None => {
            if segment.is_empty() {
                None
            } else {
                Some((segment, None))
            }
        }
    }
}

/// Climbs from `node` towards the root until a node whose parents include
/// `target` is reached; returns the codes from just below `target` down to
/// `node`. `None` when the first-parent chain runs out first.
fn climb_to(hierarchy: &Hierarchy, node: &Node, target: &str) -> Option<Vec<String>> {
    let mut reversed = vec![node.code().to_string()];
    let mut current = node;
    loop {
        if current.parent_codes().iter().any(|p| p == target) {
            reversed.reverse();
            return Some(reversed);
        }
        let parent = hierarchy.first_parent(current)?;
        reversed.push(parent.code().to_string());
        current = parent;
    }
}

/// Location-eligibility rule: a product type carries qualifiers itself; a
/// function leaf carries them only when no designated product type stands
/// in for it.
fn is_individualizable(node: &Node) -> bool {
    use crate::node::{Category, NodeType};
    let meta = node.metadata();
    if meta.category == Category::Product && meta.node_type == NodeType::Type {
        return true;
    }
    meta.category.is_function()
        && meta.node_type == NodeType::Leaf
        && node.product_type_code().is_none()
}
