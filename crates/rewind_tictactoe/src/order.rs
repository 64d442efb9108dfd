//! Move-list sort order.

use serde::{Deserialize, Serialize};

/// Rendering order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl MoveOrder {
    /// The other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Sort button label naming the current order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort by: Ascending",
            Self::Descending => "Sort by: Descending",
        }
    }

    /// Collects `items` (given oldest first) in this order.
    pub fn arrange<I>(self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: DoubleEndedIterator,
    {
        match self {
            Self::Ascending => items.into_iter().collect(),
            Self::Descending => items.into_iter().rev().collect(),
        }
    }
}
