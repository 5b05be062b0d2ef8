//! The hierarchy arena: every node of a version snapshot, addressed by code.
//!
//! Built once when a version is selected and immutable afterwards, so all
//! derived views (visibility, search, navigation) can recompute from it
//! every frame without invalidation bookkeeping.

use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::node::{Node, NodeMetadata};

/// Error raised when a snapshot's edge lists do not close over its nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HierarchyBuildError {
    /// The builder was given no nodes at all.
    Empty,
    /// The declared root code is not among the nodes.
    UnknownRoot(String),
    /// Two nodes were registered under the same code.
    DuplicateCode(String),
    /// An edge references a code with no node behind it.
    DanglingEdge { from: String, to: String },
}

impl fmt::Display for HierarchyBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "hierarchy has no nodes"),
            Self::UnknownRoot(code) => write!(f, "root code {code:?} has no node"),
            Self::DuplicateCode(code) => write!(f, "duplicate node code {code:?}"),
            Self::DanglingEdge { from, to } => {
                write!(f, "edge {from:?} -> {to:?} references a missing node")
            }
        }
    }
}

impl std::error::Error for HierarchyBuildError {}

/// Immutable snapshot of one hierarchy version.
///
/// Node iteration order is the insertion order of the builder, which loaders
/// keep aligned with the dataset's own ordering; search results and other
/// "traversal order" guarantees lean on it.
#[derive(Clone, Debug)]
pub struct Hierarchy {
    nodes: IndexMap<String, Node>,
    root: String,
}

impl Hierarchy {
    /// The distinguished root node.
    pub fn root(&self) -> &Node {
        // The builder guarantees the root code resolves.
        &self.nodes[&self.root]
    }

    /// Looks a node up by code.
    #[inline]
    pub fn node(&self, code: &str) -> Option<&Node> {
        self.nodes.get(code)
    }

    /// Number of nodes in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Resolved children of `node`, in dataset order.
    pub fn children<'h>(&'h self, node: &'h Node) -> impl Iterator<Item = &'h Node> + 'h {
        node.child_codes()
            .iter()
            .filter_map(move |code| self.nodes.get(code.as_str()))
    }

    /// Resolved parents of `node`, first parent first.
    pub fn parents<'h>(&'h self, node: &'h Node) -> impl Iterator<Item = &'h Node> + 'h {
        node.parent_codes()
            .iter()
            .filter_map(move |code| self.nodes.get(code.as_str()))
    }

    /// The canonical ("first") parent of `node`, if it has one.
    pub fn first_parent<'h>(&'h self, node: &Node) -> Option<&'h Node> {
        node.parent_codes().first().and_then(|c| self.node(c))
    }

    /// The designated product-type child of `node`, if any.
    pub fn product_type<'h>(&'h self, node: &Node) -> Option<&'h Node> {
        node.product_type_code().and_then(|c| self.node(c))
    }

    /// Chain of codes from the root down to `node`, following first parents.
    ///
    /// The hierarchy invariant makes this walk finite and acyclic.
    pub fn ancestor_chain(&self, node: &Node) -> Vec<&Node> {
        let mut chain: Vec<&Node> = vec![];
        let mut current = node.code();
        loop {
            let Some(n) = self.node(current) else { break };
            chain.push(n);
            match n.parent_codes().first() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        chain.reverse();
        chain
    }
}

/// One-shot builder for a [`Hierarchy`] snapshot.
///
/// Loaders register every node with its outgoing edges as codes; `build()`
/// checks that the edges close over the registered set so that lookups never
/// fail mid-frame.
#[derive(Default)]
pub struct HierarchyBuilder {
    nodes: IndexMap<String, Node>,
    root: Option<String>,
    duplicate: Option<String>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node. The first node registered becomes the root unless
    /// [`root`](Self::root) overrides it.
    pub fn node(
        mut self,
        code: impl Into<String>,
        metadata: NodeMetadata,
        parents: &[&str],
        children: &[&str],
        product_type: Option<&str>,
    ) -> Self {
        let code = code.into();
        if self.root.is_none() {
            self.root = Some(code.clone());
        }
        let node = Node {
            code: code.clone(),
            metadata,
            parents: parents.iter().map(|s| s.to_string()).collect::<SmallVec<_>>(),
            children: children.iter().map(|s| s.to_string()).collect(),
            product_type: product_type.map(|s| s.to_string()),
        };
        if self.nodes.insert(code.clone(), node).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(code);
        }
        self
    }

    /// Overrides the root code.
    pub fn root(mut self, code: impl Into<String>) -> Self {
        self.root = Some(code.into());
        self
    }

    /// Validates edges and freezes the snapshot.
    pub fn build(self) -> Result<Hierarchy, HierarchyBuildError> {
        if let Some(code) = self.duplicate {
            return Err(HierarchyBuildError::DuplicateCode(code));
        }
        let root = self.root.ok_or(HierarchyBuildError::Empty)?;
        if !self.nodes.contains_key(&root) {
            return Err(HierarchyBuildError::UnknownRoot(root));
        }
        for node in self.nodes.values() {
            let parents = node.parent_codes().iter().map(String::as_str);
            let children = node.child_codes().iter().map(String::as_str);
            for target in parents.chain(children).chain(node.product_type_code()) {
                if !self.nodes.contains_key(target) {
                    return Err(HierarchyBuildError::DanglingEdge {
                        from: node.code().to_string(),
                        to: target.to_string(),
                    });
                }
            }
        }
        Ok(Hierarchy {
            nodes: self.nodes,
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Category, NodeType};

    fn meta(category: Category, node_type: NodeType, name: &str) -> NodeMetadata {
        NodeMetadata {
            category,
            node_type,
            name: name.to_string(),
            common_name: None,
            definition: None,
        }
    }

    #[test]
    fn test_build_and_walk() {
        let h = HierarchyBuilder::new()
            .node("VE", meta(Category::Asset, NodeType::Group, "Vessel"), &[], &["400"], None)
            .node(
                "400",
                meta(Category::AssetFunction, NodeType::Group, "Ship systems"),
                &["VE"],
                &[],
                None,
            )
            .build()
            .unwrap();

        assert_eq!(h.root().code(), "VE");
        assert_eq!(h.len(), 2);
        let child = h.node("400").unwrap();
        assert_eq!(h.first_parent(child).unwrap().code(), "VE");
        let chain: Vec<&str> = h.ancestor_chain(child).iter().map(|n| n.code()).collect();
        assert_eq!(chain, ["VE", "400"]);
    }

    #[test]
    fn test_dangling_edge_is_a_build_error() {
        let err = HierarchyBuilder::new()
            .node("VE", meta(Category::Asset, NodeType::Group, "Vessel"), &[], &["999"], None)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            HierarchyBuildError::DanglingEdge {
                from: "VE".to_string(),
                to: "999".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_code_is_a_build_error() {
        let err = HierarchyBuilder::new()
            .node("VE", meta(Category::Asset, NodeType::Group, "Vessel"), &[], &[], None)
            .node("VE", meta(Category::Asset, NodeType::Group, "Vessel"), &[], &[], None)
            .build()
            .unwrap_err();
        assert_eq!(err, HierarchyBuildError::DuplicateCode("VE".to_string()));
    }
}
