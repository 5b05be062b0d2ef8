//! Navigation cursor: carries a "jump to node" request across frames.
//!
//! A selection (search-result click, badge click) arms the controller;
//! the next full tree pass consumes it. Every ancestor on the target's
//! first-parent chain is forced open before the pass recurses into it -
//! opening must happen before the recursion decision, otherwise the scroll
//! target is a node that is not yet mounted as an open sub-tree. The target
//! itself additionally requests scroll-into-view. A request that the pass
//! cannot resolve (stale code after a version switch) is dropped at the end
//! of the pass rather than retried, so an unreachable code can never block
//! navigation.

use rustc_hash::FxHashSet;

use vistree_hierarchy::Hierarchy;

/// Where the controller is in the locate cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocateState {
    /// Nothing pending.
    Idle,
    /// A selection happened; the next pass should find this code.
    PendingLocate(String),
    /// The pass reached the target this frame.
    Located { code: String, expand: bool },
}

/// Per-row instruction handed back to the tree pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitDirective {
    /// Open this row before deciding whether to recurse into it.
    pub force_open: bool,
    /// Bring this row into view now.
    pub scroll_into_view: bool,
}

/// Session-scoped navigation state. One instance per viewer; never
/// serialized.
#[derive(Debug, Default)]
pub struct NavigationController {
    state: LocateState,
    /// First-parent ancestor codes of the pending target (target included).
    expand_codes: FxHashSet<String>,
    expand_pending: bool,
    scroll_pending: bool,
    /// Sticky highlight; survives until replaced or the version changes.
    selected_code: Option<String>,
}

impl Default for LocateState {
    fn default() -> Self {
        Self::Idle
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current locate state, mainly for tests and status display.
    pub fn state(&self) -> &LocateState {
        &self.state
    }

    /// Code of the row to draw highlighted, if any.
    pub fn selected_code(&self) -> Option<&str> {
        self.selected_code.as_deref()
    }

    /// Arms the controller for `code`. The ancestor chain is resolved now,
    /// against the current snapshot; if the code is unknown the request
    /// still arms and the next pass drops it.
    pub fn select(&mut self, code: &str, hierarchy: &Hierarchy) {
        self.expand_codes.clear();
        if let Some(node) = hierarchy.node(code) {
            for ancestor in hierarchy.ancestor_chain(node) {
                self.expand_codes.insert(ancestor.code().to_string());
            }
        } else {
            log::debug!("selection target {code:?} not in current hierarchy");
        }
        self.state = LocateState::PendingLocate(code.to_string());
        self.selected_code = Some(code.to_string());
        self.expand_pending = true;
        self.scroll_pending = true;
    }

    /// Reports one row of the tree pass. Must be called before deciding
    /// whether to recurse into the row.
    pub fn visit(&mut self, code: &str, has_visible_children: bool) -> VisitDirective {
        let mut directive = VisitDirective::default();

        let is_target = matches!(&self.state, LocateState::PendingLocate(c) if c == code);
        if is_target {
            let expand = has_visible_children && self.expand_pending;
            directive.force_open = expand;
            directive.scroll_into_view = self.scroll_pending;
            self.state = LocateState::Located {
                code: code.to_string(),
                expand,
            };
            self.expand_pending = false;
            self.scroll_pending = false;
            self.expand_codes.clear();
            return directive;
        }

        if self.expand_pending && self.expand_codes.contains(code) {
            directive.force_open = true;
        }
        directive
    }

    /// Ends a tree pass. A reached target settles to idle; an unresolved
    /// request is treated as resolved with no effect - it is not retried on
    /// later passes.
    pub fn finish_pass(&mut self) {
        match &self.state {
            LocateState::Idle => {}
            LocateState::Located { .. } => {
                self.state = LocateState::Idle;
            }
            LocateState::PendingLocate(code) => {
                log::debug!("dropping unresolved navigation target {code:?}");
                self.state = LocateState::Idle;
                self.expand_pending = false;
                self.scroll_pending = false;
                self.expand_codes.clear();
            }
        }
    }

    /// Version switched: every code may now mean something else.
    pub fn on_version_changed(&mut self) {
        self.state = LocateState::Idle;
        self.expand_pending = false;
        self.scroll_pending = false;
        self.expand_codes.clear();
        self.selected_code = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistree_hierarchy::{Category, HierarchyBuilder, NodeMetadata, NodeType};

    fn meta(name: &str) -> NodeMetadata {
        NodeMetadata {
            category: Category::AssetFunction,
            node_type: NodeType::Group,
            name: name.to_string(),
            common_name: None,
            definition: None,
        }
    }

    fn chain() -> vistree_hierarchy::Hierarchy {
        HierarchyBuilder::new()
            .node("VE", meta("Vessel"), &[], &["400"], None)
            .node("400", meta("Systems"), &["VE"], &["410"], None)
            .node("410", meta("Propulsion"), &["400"], &["411"], None)
            .node("411", meta("Drivers"), &["410"], &[], None)
            .build()
            .unwrap()
    }

    #[test]
    fn test_ancestors_force_open_and_target_scrolls_once() {
        let h = chain();
        let mut nav = NavigationController::new();
        nav.select("411", &h);
        assert_eq!(nav.state(), &LocateState::PendingLocate("411".to_string()));

        // Pass in depth order, as the tree recursion would.
        assert!(nav.visit("VE", true).force_open);
        assert!(nav.visit("400", true).force_open);
        assert!(nav.visit("410", true).force_open);
        let target = nav.visit("411", false);
        assert!(target.scroll_into_view);
        assert!(!target.force_open); // leaf target: nothing to open
        assert_eq!(
            nav.state(),
            &LocateState::Located {
                code: "411".to_string(),
                expand: false
            }
        );

        // The cycle is consumed exactly once.
        let repeat = nav.visit("411", false);
        assert_eq!(repeat, VisitDirective::default());
        nav.finish_pass();
        assert_eq!(nav.state(), &LocateState::Idle);
        assert_eq!(nav.selected_code(), Some("411"));
    }

    #[test]
    fn test_target_with_children_forces_open_before_recursion() {
        let h = chain();
        let mut nav = NavigationController::new();
        nav.select("410", &h);
        let target = nav.visit("410", true);
        assert!(target.force_open);
        assert!(target.scroll_into_view);
    }

    #[test]
    fn test_unresolved_target_is_dropped_after_one_pass() {
        let h = chain();
        let mut nav = NavigationController::new();
        // Stale code from another version.
        nav.select("999", &h);
        assert!(!nav.visit("VE", true).force_open);
        nav.finish_pass();
        assert_eq!(nav.state(), &LocateState::Idle);
        // A later pass sees no residue.
        assert_eq!(nav.visit("VE", true), VisitDirective::default());
    }

    #[test]
    fn test_version_switch_clears_selection() {
        let h = chain();
        let mut nav = NavigationController::new();
        nav.select("411", &h);
        nav.on_version_changed();
        assert_eq!(nav.state(), &LocateState::Idle);
        assert_eq!(nav.selected_code(), None);
        assert_eq!(nav.visit("411", false), VisitDirective::default());
    }
}
