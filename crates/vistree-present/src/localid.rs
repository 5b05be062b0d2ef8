//! LocalId string composition from builder-form state.
//!
//! Assembles `/dnv-v2/vis-<version>/<primary>[/sec/<secondary>]/meta/<tags>`
//! from whatever the form currently holds. Tag separators depend on
//! codebook membership: `-` for standard values, `~` for custom ones, with
//! detail always `-` since it is free text. Composition never validates the
//! result - the grammar belongs to the SDK.

use vistree_hierarchy::{CodebookName, Codebooks};

/// Builder-form state for one LocalId. Built incrementally from input;
/// composed on demand every frame.
#[derive(Clone, Debug, Default)]
pub struct LocalIdState {
    pub primary_path: String,
    pub secondary_path: Option<String>,
    pub quantity: String,
    pub content: String,
    pub calculation: String,
    pub state: String,
    pub command: String,
    pub type_tag: String,
    pub position: String,
    pub detail: String,
}

impl LocalIdState {
    /// True when any metadata tag has a value.
    pub fn has_metadata(&self) -> bool {
        !self.tag_values().iter().all(|(_, v)| v.is_empty())
    }

    /// Tag emission order with the codebook each value is checked against.
    fn tag_values(&self) -> [(CodebookName, &str); 8] {
        [
            (CodebookName::Quantity, self.quantity.as_str()),
            (CodebookName::Content, self.content.as_str()),
            (CodebookName::Calculation, self.calculation.as_str()),
            (CodebookName::State, self.state.as_str()),
            (CodebookName::Command, self.command.as_str()),
            (CodebookName::Type, self.type_tag.as_str()),
            (CodebookName::Position, self.position.as_str()),
            (CodebookName::Detail, self.detail.as_str()),
        ]
    }
}

/// Composes the LocalId string for `state` against a version tag like
/// `3-8a`.
pub fn compose_local_id(state: &LocalIdState, version_tag: &str, codebooks: &Codebooks) -> String {
    let mut out = format!("/dnv-v2/vis-{version_tag}");

    if !state.primary_path.is_empty() {
        out.push('/');
        out.push_str(&state.primary_path);
    }
    if let Some(secondary) = state.secondary_path.as_deref() {
        if !secondary.is_empty() {
            out.push_str("/sec/");
            out.push_str(secondary);
        }
    }

    // Metadata only attaches to an addressed item.
    if state.primary_path.is_empty() {
        return out;
    }

    out.push_str("/meta");
    for (book, value) in state.tag_values() {
        if value.is_empty() {
            continue;
        }
        // Detail is free text and keeps the standard separator.
        let separator = if book == CodebookName::Detail || codebooks.is_standard(book, value) {
            '-'
        } else {
            '~'
        };
        out.push('/');
        out.push_str(book.prefix());
        out.push(separator);
        out.push_str(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use vistree_hierarchy::Codebook;

    fn codebooks() -> Codebooks {
        let mut books = IndexMap::new();
        books.insert(
            CodebookName::Quantity,
            Codebook::new(vec!["temperature".to_string(), "pressure".to_string()]),
        );
        books.insert(
            CodebookName::Content,
            Codebook::new(vec!["cooling.water".to_string()]),
        );
        Codebooks::new(books)
    }

    #[test]
    fn test_primary_only() {
        let state = LocalIdState {
            primary_path: "411.1/C101".to_string(),
            ..LocalIdState::default()
        };
        assert_eq!(
            compose_local_id(&state, "3-8a", &codebooks()),
            "/dnv-v2/vis-3-8a/411.1/C101/meta"
        );
    }

    #[test]
    fn test_secondary_item_section() {
        let state = LocalIdState {
            primary_path: "411.1".to_string(),
            secondary_path: Some("612.21".to_string()),
            ..LocalIdState::default()
        };
        assert_eq!(
            compose_local_id(&state, "3-8a", &codebooks()),
            "/dnv-v2/vis-3-8a/411.1/sec/612.21/meta"
        );
    }

    #[test]
    fn test_standard_and_custom_tag_separators() {
        let state = LocalIdState {
            primary_path: "411.1".to_string(),
            quantity: "temperature".to_string(),
            content: "exhaust.gas".to_string(),
            detail: "sensor one".to_string(),
            ..LocalIdState::default()
        };
        assert_eq!(
            compose_local_id(&state, "3-8a", &codebooks()),
            "/dnv-v2/vis-3-8a/411.1/meta/qty-temperature/cnt~exhaust.gas/detail-sensor one"
        );
    }

    #[test]
    fn test_no_primary_means_no_meta_section() {
        let state = LocalIdState {
            quantity: "temperature".to_string(),
            ..LocalIdState::default()
        };
        assert_eq!(
            compose_local_id(&state, "3-8a", &codebooks()),
            "/dnv-v2/vis-3-8a"
        );
        assert!(state.has_metadata());
    }

    #[test]
    fn test_detail_is_always_standard_separator() {
        let state = LocalIdState {
            primary_path: "411.1".to_string(),
            detail: "anything at all".to_string(),
            ..LocalIdState::default()
        };
        let id = compose_local_id(&state, "3-8a", &codebooks());
        assert!(id.ends_with("/meta/detail-anything at all"));
    }
}
