use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column the projection is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Alias,
    #[default]
    Name,
    Phone,
}

impl SortColumn {
    /// Columns in display order.
    pub const ALL: [SortColumn; 3] = [SortColumn::Alias, SortColumn::Name, SortColumn::Phone];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Alias => "Alias",
            SortColumn::Name => "Name",
            SortColumn::Phone => "Phone",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SortColumn::Alias => 0,
            SortColumn::Name => 1,
            SortColumn::Phone => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::Alias => write!(f, "alias"),
            SortColumn::Name => write!(f, "name"),
            SortColumn::Phone => write!(f, "phone"),
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alias" => Ok(SortColumn::Alias),
            "name" => Ok(SortColumn::Name),
            "phone" => Ok(SortColumn::Phone),
            other => Err(format!("unknown sort column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction multiplier (+1 / -1) to a comparator result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Value of the `aria-sort` attribute surfaced on each sortable header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaSort {
    Ascending,
    Descending,
    None,
}

impl From<SortDirection> for AriaSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => AriaSort::Ascending,
            SortDirection::Descending => AriaSort::Descending,
        }
    }
}

impl fmt::Display for AriaSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AriaSort::Ascending => write!(f, "ascending"),
            AriaSort::Descending => write!(f, "descending"),
            AriaSort::None => write!(f, "none"),
        }
    }
}
