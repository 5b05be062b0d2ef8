//! Relative-location axes and the qualifier composer.
//!
//! A location qualifier refines a path segment to a physical installation
//! point: an optional instance number followed by at most one code per axis
//! (side, vertical, transverse, longitudinal), e.g. `1PU` for "number 1,
//! port, upper". The axis tables come from the version dataset; the builder
//! refuses codes that are not members of their axis.

use std::fmt;

use indexmap::IndexMap;

/// Axis a relative-location code belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationGroup {
    Side,
    Vertical,
    Transverse,
    Longitudinal,
}

impl LocationGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Side => "Side",
            Self::Vertical => "Vertical",
            Self::Transverse => "Transverse",
            Self::Longitudinal => "Longitudinal",
        }
    }
}

/// One selectable code on an axis, e.g. `P` "Port".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativeLocation {
    pub code: char,
    pub name: String,
}

/// The relative-location tables of one hierarchy version.
#[derive(Clone, Debug, Default)]
pub struct Locations {
    groups: IndexMap<LocationGroup, Vec<RelativeLocation>>,
}

impl Locations {
    /// The standard table shared by current dataset versions.
    pub fn standard() -> Self {
        let mut groups = IndexMap::new();
        groups.insert(
            LocationGroup::Side,
            vec![rel('P', "Port"), rel('C', "Centre"), rel('S', "Starboard")],
        );
        groups.insert(
            LocationGroup::Vertical,
            vec![rel('U', "Upper"), rel('M', "Middle"), rel('L', "Lower")],
        );
        groups.insert(
            LocationGroup::Transverse,
            vec![rel('I', "Inside"), rel('O', "Outside")],
        );
        groups.insert(
            LocationGroup::Longitudinal,
            vec![rel('F', "Forward"), rel('A', "Aft")],
        );
        Self { groups }
    }

    /// Builds a table from explicit per-axis entries (dataset loaders, tests).
    pub fn from_groups(groups: IndexMap<LocationGroup, Vec<RelativeLocation>>) -> Self {
        Self { groups }
    }

    /// Codes available on `group`, in dataset order.
    pub fn group(&self, group: LocationGroup) -> &[RelativeLocation] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All axes with their codes, in axis order.
    pub fn groups(&self) -> impl Iterator<Item = (LocationGroup, &[RelativeLocation])> {
        self.groups.iter().map(|(g, v)| (*g, v.as_slice()))
    }

    /// Axis that `code` belongs to, if any.
    pub fn group_of(&self, code: char) -> Option<LocationGroup> {
        self.groups
            .iter()
            .find(|(_, codes)| codes.iter().any(|rl| rl.code == code))
            .map(|(g, _)| *g)
    }

    /// Checks that `text` is a well-formed qualifier: an optional leading
    /// digit run (the instance number, non-zero) followed by letters that
    /// each belong to a distinct axis.
    pub fn parse_qualifier(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
        if !digits.is_empty() && digits.parse::<u32>().map_or(true, |n| n == 0) {
            return false;
        }
        let mut seen: Vec<LocationGroup> = vec![];
        for c in text.chars().skip(digits.len()) {
            let Some(group) = self.group_of(c) else {
                return false;
            };
            if seen.contains(&group) {
                return false;
            }
            seen.push(group);
        }
        true
    }
}

fn rel(code: char, name: &str) -> RelativeLocation {
    RelativeLocation {
        code,
        name: name.to_string(),
    }
}

/// Error raised when a qualifier cannot be composed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationBuildError {
    /// The code is not a member of the requested axis.
    InvalidCode { group: LocationGroup, code: char },
    /// The instance number must be positive.
    InvalidNumber(u32),
    /// `build()` was called with no component set.
    NoComponents,
}

impl fmt::Display for LocationBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode { group, code } => {
                write!(f, "{code:?} is not a {} code", group.as_str())
            }
            Self::InvalidNumber(n) => write!(f, "location number must be positive, got {n}"),
            Self::NoComponents => write!(f, "no location component set"),
        }
    }
}

impl std::error::Error for LocationBuildError {}

/// Composes a canonical qualifier string from selected axis codes.
///
/// Mirrors the incremental form-driven construction of the location section:
/// each setter validates immediately so the form can surface the refusal
/// next to the control that caused it.
#[derive(Clone, Debug)]
pub struct LocationBuilder<'a> {
    locations: &'a Locations,
    number: Option<u32>,
    side: Option<char>,
    vertical: Option<char>,
    transverse: Option<char>,
    longitudinal: Option<char>,
}

impl<'a> LocationBuilder<'a> {
    pub fn new(locations: &'a Locations) -> Self {
        Self {
            locations,
            number: None,
            side: None,
            vertical: None,
            transverse: None,
            longitudinal: None,
        }
    }

    pub fn with_number(mut self, number: u32) -> Result<Self, LocationBuildError> {
        if number == 0 {
            return Err(LocationBuildError::InvalidNumber(number));
        }
        self.number = Some(number);
        Ok(self)
    }

    pub fn with_side(mut self, code: char) -> Result<Self, LocationBuildError> {
        self.side = Some(Self::checked(self.locations, LocationGroup::Side, code)?);
        Ok(self)
    }

    pub fn with_vertical(mut self, code: char) -> Result<Self, LocationBuildError> {
        self.vertical = Some(Self::checked(self.locations, LocationGroup::Vertical, code)?);
        Ok(self)
    }

    pub fn with_transverse(mut self, code: char) -> Result<Self, LocationBuildError> {
        self.transverse = Some(Self::checked(self.locations, LocationGroup::Transverse, code)?);
        Ok(self)
    }

    pub fn with_longitudinal(mut self, code: char) -> Result<Self, LocationBuildError> {
        self.longitudinal = Some(Self::checked(
            self.locations,
            LocationGroup::Longitudinal,
            code,
        )?);
        Ok(self)
    }

    fn checked(
        locations: &Locations,
        group: LocationGroup,
        code: char,
    ) -> Result<char, LocationBuildError> {
        if locations.group(group).iter().any(|rl| rl.code == code) {
            Ok(code)
        } else {
            Err(LocationBuildError::InvalidCode { group, code })
        }
    }

    /// The canonical qualifier: number, then side/vertical/transverse/
    /// longitudinal codes in that order.
    pub fn build(&self) -> Result<String, LocationBuildError> {
        let mut out = String::new();
        if let Some(n) = self.number {
            out.push_str(&n.to_string());
        }
        for code in [self.side, self.vertical, self.transverse, self.longitudinal]
            .into_iter()
            .flatten()
        {
            out.push(code);
        }
        if out.is_empty() {
            return Err(LocationBuildError::NoComponents);
        }
        Ok(out)
    }
}
