//! Presentation and navigation layer for the Gmod viewer.
//!
//! Everything here is a derived view over an immutable
//! [`Hierarchy`](vistree_hierarchy::Hierarchy) snapshot, recomputed from
//! scratch each frame: which children are shown (selection nodes disappear,
//! designated product types become badges), in what order, how free text
//! resolves to nodes, and how a location qualifier lands on the right path
//! segment. The only mutable state is the navigation cursor that carries a
//! "jump to node" request across frames.
//!
//! # Architecture
//!
//! - [`classify`] - node color class and presentation predicates
//! - [`sort`] - natural (numeric-prefix) sibling ordering
//! - [`visibility`] - effective children with badge parents
//! - [`search`] - path-mode / text-mode lookup with breadcrumbs
//! - [`navigation`] - locate/expand/scroll state machine
//! - [`location_edit`] - qualifier insertion into path text
//! - [`localid`] - LocalId string composition

pub mod classify;
pub mod localid;
pub mod location_edit;
pub mod navigation;
pub mod search;
pub mod sort;
pub mod visibility;

pub use classify::{classify, ColorClass, NodeClass};
pub use localid::{compose_local_id, LocalIdState};
pub use location_edit::{apply_location, LocationSpec};
pub use navigation::{LocateState, NavigationController, VisitDirective};
pub use search::{search, PathMatch, SearchOutcome, SearchResult};
pub use sort::{natural_code_order, sorted_children};
pub use visibility::{children_to_render, entry_children, has_visible_children, PresentationEntry};
