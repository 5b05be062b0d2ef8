//! Node classification for presentation: color class and badge predicates.
//!
//! Pure and total: every `(category, type)` pair maps to a class, with the
//! group styling as the fallback, so rendering never has to special-case an
//! unexpected node.

use vistree_hierarchy::{Category, Node, NodeType};

/// Presentation color class of a node badge.
///
/// The palette follows the viewer legend: greens for functions, red for
/// assignable products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// Dark green `#008000` - grouping levels.
    Group,
    /// Lime green `#00ff00` - lowest-level asset functions.
    AssetFunctionLeaf,
    /// Yellow-green `#99cc00` - product function compositions.
    ProductFunctionComposition,
    /// Light green `#ccffcc` - lowest-level product functions.
    ProductFunctionLeaf,
    /// Red `#e63333` - product selections and product types.
    ProductSelection,
}

impl ColorClass {
    /// Badge background as 8-bit RGB.
    pub fn badge_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Group => (0x00, 0x80, 0x00),
            Self::AssetFunctionLeaf => (0x00, 0xff, 0x00),
            Self::ProductFunctionComposition => (0x99, 0xcc, 0x00),
            Self::ProductFunctionLeaf => (0xcc, 0xff, 0xcc),
            Self::ProductSelection => (0xe6, 0x33, 0x33),
        }
    }

    /// True when badge text should be white-on-dark rather than
    /// black-on-light.
    pub fn light_text(&self) -> bool {
        matches!(self, Self::ProductSelection)
    }
}

/// Result of classifying one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeClass {
    pub color_class: ColorClass,
    /// Assignable product type; always rendered with the red badge style.
    pub is_product_type: bool,
    /// Transparent "choose one of these" grouping, elided from the tree.
    pub is_selection_node: bool,
}

/// Classifies `node` for presentation.
pub fn classify(node: &Node) -> NodeClass {
    let category = node.category();
    let node_type = node.node_type();
    let is_product_type = category == Category::Product && node_type == NodeType::Type;

    let color_class = if node.is_product_selection() {
        ColorClass::ProductSelection
    } else if node_type == NodeType::Group {
        ColorClass::Group
    } else if category == Category::AssetFunction && node_type == NodeType::Leaf {
        ColorClass::AssetFunctionLeaf
    } else if category == Category::ProductFunction && node_type == NodeType::Composition {
        ColorClass::ProductFunctionComposition
    } else if category == Category::ProductFunction && node_type == NodeType::Leaf {
        ColorClass::ProductFunctionLeaf
    } else if category.is_function() && node_type == NodeType::Selection {
        ColorClass::ProductSelection
    } else {
        ColorClass::Group
    };

    let is_selection_node = node.is_product_selection()
        || (category.is_function() && node_type == NodeType::Selection);

    NodeClass {
        color_class,
        is_product_type,
        is_selection_node,
    }
}
