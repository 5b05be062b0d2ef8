//! Effective-children computation: which nodes of the raw graph are drawn.
//!
//! Two kinds of children are elided rather than drawn. A node's designated
//! product type already appears as a badge on the node itself, so the child
//! is skipped and its own children take its place. Selection nodes are
//! transparent groupings; once the alternatives are known the selection node
//! disappears and the alternatives stand in for it. Children promoted
//! through either elision carry the nearest rendered ancestor as their
//! badge parent.
//!
//! Every consumer (arrow/bullet decision, rendering, counting) goes through
//! this one function instead of re-implementing the skip/promote rules.

use vistree_hierarchy::{Hierarchy, Node};

use crate::classify::classify;
use crate::sort::sorted_children;

/// One row of the presentation tree, produced on demand and never stored.
#[derive(Clone, Copy, Debug)]
pub struct PresentationEntry<'h> {
    pub node: &'h Node,
    /// Node whose code is shown as a leading badge, for children promoted
    /// out of an elided parent and for product types under a function.
    pub badge_parent: Option<&'h Node>,
    /// Whether expanding this row would show anything. Drives the
    /// arrow-vs-bullet decision without materializing the child list.
    pub has_visible_children: bool,
}

/// The rows to draw for an expanded `node`, in sibling order.
///
/// For rows obtained from a previous call, use [`entry_children`] instead
/// so a product type keeps threading its own badge parent downwards.
pub fn children_to_render<'h>(hierarchy: &'h Hierarchy, node: &'h Node) -> Vec<PresentationEntry<'h>> {
    collect_effective(hierarchy, node, None)
}

/// The rows to draw for an expanded presentation row.
pub fn entry_children<'h>(
    hierarchy: &'h Hierarchy,
    entry: &PresentationEntry<'h>,
) -> Vec<PresentationEntry<'h>> {
    collect_effective(hierarchy, entry.node, entry.badge_parent)
}

/// Whether `node` has any effective children, by the same elision rules.
///
/// A node whose raw children all elide down to nothing renders as a leaf
/// even though the raw graph has children, so this must recurse through
/// elided nodes rather than test raw non-emptiness.
pub fn has_visible_children(hierarchy: &Hierarchy, node: &Node) -> bool {
    any_effective(hierarchy, node)
}

fn collect_effective<'h>(
    hierarchy: &'h Hierarchy,
    node: &'h Node,
    node_badge: Option<&'h Node>,
) -> Vec<PresentationEntry<'h>> {
    // Badge shown on product-type children: a product type never chains a
    // second badge onto children of its own kind; it forwards the badge it
    // was rendered with.
    let badge_source = if classify(node).is_product_type {
        node_badge
    } else {
        Some(node)
    };
    let mut entries = vec![];
    push_children(hierarchy, node, node, badge_source, false, &mut entries);
    entries
}

/// Scans `parent`'s raw children. `rendered` is the nearest ancestor that is
/// actually drawn; `promoted` is true inside an elided subtree, where every
/// surfaced child carries `rendered` as its badge.
fn push_children<'h>(
    hierarchy: &'h Hierarchy,
    parent: &'h Node,
    rendered: &'h Node,
    badge_source: Option<&'h Node>,
    promoted: bool,
    out: &mut Vec<PresentationEntry<'h>>,
) {
    let children = sorted_children(hierarchy.children(parent).collect());
    for child in children {
        if parent.product_type_code() == Some(child.code()) {
            // Already shown as a badge on `rendered`; surface its children.
            push_children(hierarchy, child, rendered, badge_source, true, out);
        } else if classify(child).is_selection_node {
            push_children(hierarchy, child, rendered, badge_source, true, out);
        } else {
            let badge_parent = if promoted {
                Some(rendered)
            } else if classify(child).is_product_type {
                badge_source
            } else {
                None
            };
            out.push(PresentationEntry {
                node: child,
                badge_parent,
                has_visible_children: any_effective(hierarchy, child),
            });
        }
    }
}

fn any_effective(hierarchy: &Hierarchy, parent: &Node) -> bool {
    hierarchy.children(parent).any(|child| {
        if parent.product_type_code() == Some(child.code())
            || classify(child).is_selection_node
        {
            any_effective(hierarchy, child)
        } else {
            true
        }
    })
}
