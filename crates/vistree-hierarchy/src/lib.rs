//! Immutable Gmod hierarchy snapshot and the collaborator surfaces built on it.
//!
//! The viewer never owns the classification graph; it works against a
//! snapshot loaded once per selected VIS version. This crate models that
//! snapshot as an arena of nodes addressed by their stable code, with
//! parent/child relationships expressed as code lists rather than owning
//! pointers (the hierarchy is a multi-parent DAG, not a tree).
//!
//! # Architecture
//!
//! - [`Hierarchy`] / [`HierarchyBuilder`] - the arena and its one-shot builder
//! - [`Node`] / [`NodeMetadata`] - per-node classification tags and names
//! - [`Locations`] / [`LocationBuilder`] - relative-location axes and the
//!   qualifier composer
//! - [`ShortPath`] / [`parse_short_path`] - path expressions like
//!   `411.1/C101-P` resolved against a hierarchy
//! - [`Codebooks`] - metadata tag codebooks for LocalId composition

mod arena;
mod codebooks;
mod locations;
mod node;
mod path;

pub use arena::{Hierarchy, HierarchyBuildError, HierarchyBuilder};
pub use codebooks::{Codebook, CodebookName, Codebooks};
pub use locations::{
    LocationBuildError, LocationBuilder, LocationGroup, Locations, RelativeLocation,
};
pub use node::{Category, Node, NodeMetadata, NodeType};
pub use path::{parse_short_path, IndividualizableSet, ShortPath};
