//! Metadata tag codebooks used when composing LocalIds.
//!
//! Each codebook is the set of standard values for one metadata prefix
//! (quantity, content, position, ...). Values are kept sorted for stable
//! pick-list display, and membership decides the `-` vs `~` tag separator.

use indexmap::IndexMap;

/// The eight codebooks a LocalId can draw tags from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodebookName {
    Quantity,
    Content,
    Position,
    Calculation,
    State,
    Command,
    Type,
    Detail,
}

impl CodebookName {
    /// All codebooks, in display order.
    pub const ALL: [CodebookName; 8] = [
        Self::Quantity,
        Self::Content,
        Self::Position,
        Self::Calculation,
        Self::State,
        Self::Command,
        Self::Type,
        Self::Detail,
    ];

    /// The tag prefix this codebook contributes to a LocalId.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Quantity => "qty",
            Self::Content => "cnt",
            Self::Position => "pos",
            Self::Calculation => "calc",
            Self::State => "state",
            Self::Command => "cmd",
            Self::Type => "type",
            Self::Detail => "detail",
        }
    }
}

/// One codebook: its standard values, sorted.
#[derive(Clone, Debug, Default)]
pub struct Codebook {
    values: Vec<String>,
}

impl Codebook {
    /// Builds a codebook, sorting the values.
    pub fn new(mut values: Vec<String>) -> Self {
        values.sort();
        Self { values }
    }

    /// Sorted standard values.
    #[inline]
    pub fn standard_values(&self) -> &[String] {
        &self.values
    }

    /// True when `value` is a standard value (exact match).
    pub fn contains(&self, value: &str) -> bool {
        self.values.binary_search_by(|v| v.as_str().cmp(value)).is_ok()
    }

    /// Values containing `filter` case-insensitively, for pick-list display.
    /// An empty filter yields everything.
    pub fn filtered(&self, filter: &str) -> Vec<&str> {
        if filter.is_empty() {
            return self.values.iter().map(String::as_str).collect();
        }
        let needle = filter.to_lowercase();
        self.values
            .iter()
            .filter(|v| v.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

/// All codebooks of one hierarchy version.
#[derive(Clone, Debug, Default)]
pub struct Codebooks {
    books: IndexMap<CodebookName, Codebook>,
}

impl Codebooks {
    /// Builds the collection from per-codebook value lists. Missing
    /// codebooks behave as empty.
    pub fn new(books: IndexMap<CodebookName, Codebook>) -> Self {
        Self { books }
    }

    /// The codebook for `name`; empty when the dataset omitted it.
    pub fn get(&self, name: CodebookName) -> &Codebook {
        static EMPTY: Codebook = Codebook { values: Vec::new() };
        self.books.get(&name).unwrap_or(&EMPTY)
    }

    /// True when `value` is standard for `name`. The detail codebook is
    /// free text, so nothing is standard there.
    pub fn is_standard(&self, name: CodebookName, value: &str) -> bool {
        if name == CodebookName::Detail {
            return false;
        }
        self.get(name).contains(value)
    }
}
