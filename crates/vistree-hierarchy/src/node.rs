//! Node model: classification tags, metadata, and edge lists.

use smallvec::SmallVec;

/// Classification category of a hierarchy node (Annex C, Table C.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Physical asset grouping (the root side of the hierarchy).
    Asset,
    /// Function performed by the asset (e.g. 411 Propulsion).
    AssetFunction,
    /// Assignable physical product (e.g. C101 Engine).
    Product,
    /// Function performed within a product.
    ProductFunction,
}

impl Category {
    /// The tag string as published in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "ASSET",
            Self::AssetFunction => "ASSET FUNCTION",
            Self::Product => "PRODUCT",
            Self::ProductFunction => "PRODUCT FUNCTION",
        }
    }

    /// Parses a dataset tag string. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ASSET" => Some(Self::Asset),
            "ASSET FUNCTION" => Some(Self::AssetFunction),
            "PRODUCT" => Some(Self::Product),
            "PRODUCT FUNCTION" => Some(Self::ProductFunction),
            _ => None,
        }
    }

    /// True for the two function categories (asset or product function).
    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::AssetFunction | Self::ProductFunction)
    }
}

/// Classification type of a hierarchy node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Grouping level (e.g. 411 Propulsion).
    Group,
    /// Lowest-level function node (e.g. 411.1 Propulsion driver).
    Leaf,
    /// Composition of product functions.
    Composition,
    /// "Choose one or more of these alternatives" grouping.
    Selection,
    /// Assignable product type.
    Type,
}

impl NodeType {
    /// The tag string as published in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "GROUP",
            Self::Leaf => "LEAF",
            Self::Composition => "COMPOSITION",
            Self::Selection => "SELECTION",
            Self::Type => "TYPE",
        }
    }

    /// Parses a dataset tag string. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "GROUP" => Some(Self::Group),
            "LEAF" => Some(Self::Leaf),
            "COMPOSITION" => Some(Self::Composition),
            "SELECTION" => Some(Self::Selection),
            "TYPE" => Some(Self::Type),
            _ => None,
        }
    }
}

/// Descriptive metadata attached to a node.
#[derive(Clone, Debug)]
pub struct NodeMetadata {
    pub category: Category,
    pub node_type: NodeType,
    /// Formal name from the dataset.
    pub name: String,
    /// Human-friendly name, preferred for display when present.
    pub common_name: Option<String>,
    /// Long-form definition text.
    pub definition: Option<String>,
}

/// One node of the hierarchy snapshot.
///
/// Edges are code lists into the owning [`Hierarchy`](crate::Hierarchy)
/// arena; a node never owns its neighbours. Multiple parents are legal,
/// and the first recorded parent is the canonical one for chain walks.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) code: String,
    pub(crate) metadata: NodeMetadata,
    pub(crate) parents: SmallVec<[String; 2]>,
    pub(crate) children: Vec<String>,
    pub(crate) product_type: Option<String>,
}

impl Node {
    /// Stable identifier, unique within a hierarchy version.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.metadata.category
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.metadata.node_type
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    #[inline]
    pub fn common_name(&self) -> Option<&str> {
        self.metadata.common_name.as_deref()
    }

    /// Display name: common name when present, formal name otherwise.
    #[inline]
    pub fn display_name(&self) -> &str {
        self.metadata
            .common_name
            .as_deref()
            .unwrap_or(&self.metadata.name)
    }

    /// Parent codes, first parent first.
    #[inline]
    pub fn parent_codes(&self) -> &[String] {
        &self.parents
    }

    /// Child codes in dataset order.
    #[inline]
    pub fn child_codes(&self) -> &[String] {
        &self.children
    }

    /// Code of the designated product-type child, if any.
    #[inline]
    pub fn product_type_code(&self) -> Option<&str> {
        self.product_type.as_deref()
    }

    /// True for "choose one of these products" grouping nodes (CS1, CS3, ...).
    #[inline]
    pub fn is_product_selection(&self) -> bool {
        self.metadata.category == Category::Product
            && self.metadata.node_type == NodeType::Selection
    }

    /// True for nodes that print as their own segment in a short path.
    ///
    /// Function leaves and product types are terminal enough to address;
    /// groups and compositions are interpolated silently.
    #[inline]
    pub fn is_leaf_node(&self) -> bool {
        matches!(self.metadata.node_type, NodeType::Leaf | NodeType::Type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tag_round_trip() {
        for cat in [
            Category::Asset,
            Category::AssetFunction,
            Category::Product,
            Category::ProductFunction,
        ] {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse("SOMETHING ELSE"), None);
    }

    #[test]
    fn test_node_type_tag_round_trip() {
        for ty in [
            NodeType::Group,
            NodeType::Leaf,
            NodeType::Composition,
            NodeType::Selection,
            NodeType::Type,
        ] {
            assert_eq!(NodeType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(NodeType::parse("LEAFY"), None);
    }
}
