//! Inserting a location qualifier into path text.
//!
//! The form collects axis selections into a [`LocationSpec`]; applying it
//! rewrites the path string so the qualifier lands on the segment that can
//! actually carry it. When the text does not parse, a conservative raw edit
//! of the first segment preserves what the user typed instead of rejecting
//! the edit. That fallback intentionally stops at the first segment; do not
//! extend it.

use vistree_hierarchy::{parse_short_path, Hierarchy, LocationBuilder, Locations};

/// Location components collected from the form. No identity beyond the
/// current form session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocationSpec {
    pub number: Option<u32>,
    pub side: Option<char>,
    pub vertical: Option<char>,
    pub transverse: Option<char>,
    pub longitudinal: Option<char>,
}

impl LocationSpec {
    /// True when no component is set.
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.side.is_none()
            && self.vertical.is_none()
            && self.transverse.is_none()
            && self.longitudinal.is_none()
    }

    /// Canonical qualifier for this spec, or `None` when the spec is empty
    /// or the location table refuses a component.
    pub fn qualifier(&self, locations: &Locations) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut builder = LocationBuilder::new(locations);
        if let Some(n) = self.number {
            builder = builder.with_number(n).ok()?;
        }
        if let Some(c) = self.side {
            builder = builder.with_side(c).ok()?;
        }
        if let Some(c) = self.vertical {
            builder = builder.with_vertical(c).ok()?;
        }
        if let Some(c) = self.transverse {
            builder = builder.with_transverse(c).ok()?;
        }
        if let Some(c) = self.longitudinal {
            builder = builder.with_longitudinal(c).ok()?;
        }
        builder.build().ok()
    }
}

/// Rewrites `path_text` so it carries the qualifier described by `spec`.
///
/// An empty or refused spec leaves the text untouched. A parsed path gets
/// the qualifier on the segment mapped from the first individualizable
/// set; a path with no individualizable set comes back in location-free
/// form unchanged beyond qualifier stripping. Unparsable text gets the
/// first-segment fallback edit.
pub fn apply_location(
    path_text: &str,
    spec: &LocationSpec,
    hierarchy: &Hierarchy,
    locations: &Locations,
) -> String {
    let Some(qualifier) = spec.qualifier(locations) else {
        return path_text.to_string();
    };

    let Some(path) = parse_short_path(path_text, hierarchy, locations) else {
        return fallback_edit(path_text, &qualifier);
    };

    let clean = path.without_locations();
    let sets = path.individualizable_sets();
    let Some(first) = sets.first() else {
        // Qualifier inapplicable: nothing in this path can carry it.
        return clean;
    };
    let Some(&target_index) = first.node_indices().first() else {
        return clean;
    };

    // Map the full-chain index to a segment index by counting only the
    // nodes that print as segments.
    let mut segment_of_target = 0;
    let mut segment = 0;
    for index in 0..path.len() {
        if !path.is_leaf_node(index) {
            continue;
        }
        if index == target_index {
            segment_of_target = segment;
            break;
        }
        segment += 1;
    }

    let mut out = String::new();
    for (index, part) in clean.split('/').enumerate() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(part);
        if index == segment_of_target {
            out.push('-');
            out.push_str(&qualifier);
        }
    }
    out
}

/// Raw-text fallback: strip any `-suffix` from the first segment and append
/// the new qualifier there.
fn fallback_edit(path_text: &str, qualifier: &str) -> String {
    let (first, rest) = match path_text.find('/') {
        Some(slash) => (&path_text[..slash], &path_text[slash..]),
        None => (path_text, ""),
    };
    let base = match first.rfind('-') {
        Some(dash) => &first[..dash],
        None => first,
    };
    format!("{base}-{qualifier}{rest}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistree_hierarchy::{Category, HierarchyBuilder, NodeMetadata, NodeType};

    fn meta(category: Category, node_type: NodeType, name: &str) -> NodeMetadata {
        NodeMetadata {
            category,
            node_type,
            name: name.to_string(),
            common_name: None,
            definition: None,
        }
    }

    /// VE -> 411.1 (leaf, designated product type C101) -> C101.
    fn sample() -> Hierarchy {
        HierarchyBuilder::new()
            .node("VE", meta(Category::Asset, NodeType::Group, "Vessel"), &[], &["411.1"], None)
            .node(
                "411.1",
                meta(Category::AssetFunction, NodeType::Leaf, "Propulsion driver"),
                &["VE"],
                &["C101"],
                Some("C101"),
            )
            .node(
                "C101",
                meta(Category::Product, NodeType::Type, "Engine"),
                &["411.1"],
                &[],
                None,
            )
            .build()
            .unwrap()
    }

    fn side(c: char) -> LocationSpec {
        LocationSpec {
            side: Some(c),
            ..LocationSpec::default()
        }
    }

    #[test]
    fn test_empty_spec_is_a_no_op() {
        let h = sample();
        let locations = Locations::standard();
        let spec = LocationSpec::default();
        assert_eq!(
            apply_location("411.1/C101", &spec, &h, &locations),
            "411.1/C101"
        );
    }

    #[test]
    fn test_qualifier_lands_on_individualizable_segment() {
        let h = sample();
        let locations = Locations::standard();
        assert_eq!(
            apply_location("411.1/C101", &side('P'), &h, &locations),
            "411.1/C101-P"
        );
    }

    #[test]
    fn test_existing_qualifier_is_replaced() {
        let h = sample();
        let locations = Locations::standard();
        assert_eq!(
            apply_location("411.1/C101-2S", &side('P'), &h, &locations),
            "411.1/C101-P"
        );
    }

    #[test]
    fn test_no_individualizable_segment_returns_clean_path() {
        // A path ending on a bare group has nothing to qualify.
        let h = HierarchyBuilder::new()
            .node("VE", meta(Category::Asset, NodeType::Group, "Vessel"), &[], &["400"], None)
            .node(
                "400",
                meta(Category::AssetFunction, NodeType::Group, "Systems"),
                &["VE"],
                &[],
                None,
            )
            .build()
            .unwrap();
        let locations = Locations::standard();
        assert_eq!(apply_location("400", &side('P'), &h, &locations), "400");
    }

    #[test]
    fn test_fallback_edit_on_unparsable_text() {
        let h = sample();
        let locations = Locations::standard();
        // Unknown code: conservative first-segment edit.
        assert_eq!(
            apply_location("999.9/C101", &side('P'), &h, &locations),
            "999.9-P/C101"
        );
        // Existing suffix on the first segment is replaced.
        assert_eq!(
            apply_location("999.9-1S/C101", &side('P'), &h, &locations),
            "999.9-P/C101"
        );
    }

    #[test]
    fn test_refused_axis_combination_skips_the_edit() {
        let h = sample();
        let locations = Locations::standard();
        // 'U' is a vertical code, not a side.
        assert_eq!(
            apply_location("411.1/C101", &side('U'), &h, &locations),
            "411.1/C101"
        );
    }

    #[test]
    fn test_full_spec_composes_in_canonical_order() {
        let h = sample();
        let locations = Locations::standard();
        let spec = LocationSpec {
            number: Some(2),
            side: Some('P'),
            vertical: Some('U'),
            transverse: None,
            longitudinal: Some('F'),
        };
        assert_eq!(
            apply_location("411.1/C101", &spec, &h, &locations),
            "411.1/C101-2PUF"
        );
    }
}
