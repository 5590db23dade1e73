//! Dispatch constraint for multi-select filters.
//!
//! The report query treats "nothing selected" and "everything selected" the
//! same way: no filter at all. `Constraint` makes that explicit instead of
//! overloading `null` and the empty list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value sent downstream for a multi-select filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Constraint<T> {
    /// No constraint; every option is implicitly included.
    #[default]
    Unconstrained,
    /// Only the listed ids.
    Only(Vec<T>),
}

impl<T> Constraint<T> {
    /// Normalizes a selection against the number of available options.
    ///
    /// An empty selection or one covering every option collapses to
    /// [`Constraint::Unconstrained`].
    #[must_use]
    pub fn normalize(selected: Vec<T>, available: usize) -> Self {
        if selected.is_empty() || selected.len() == available {
            Self::Unconstrained
        } else {
            Self::Only(selected)
        }
    }

    /// Returns true if no constraint applies.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    /// Returns the constrained ids, if any.
    #[must_use]
    pub fn ids(&self) -> Option<&[T]> {
        match self {
            Self::Unconstrained => None,
            Self::Only(ids) => Some(ids),
        }
    }
}

impl<T: Clone> Constraint<T> {
    /// Converts to the wire shape: `None` for no constraint.
    #[must_use]
    pub fn to_option(&self) -> Option<Vec<T>> {
        self.ids().map(<[T]>::to_vec)
    }
}

impl<T: Serialize> Serialize for Constraint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unconstrained => serializer.serialize_none(),
            Self::Only(ids) => serializer.serialize_some(ids),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Constraint<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.map_or(Self::Unconstrained, Self::Only))
    }
}
