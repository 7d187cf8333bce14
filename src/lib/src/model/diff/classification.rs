use serde::{Deserialize, Serialize};
use std::fmt;

pub const TYPE_DIFF_MARKER: &str = "TYPE DIFF";

/// Where a field sits relative to the registered sources.
///
/// `Exclusive` holds the index of the owning source, in registration order.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Exclusive(usize),
    Common,
    TypeMismatch,
}

impl Classification {
    /// Classify a field from the size of its presence set.
    ///
    /// * present in exactly one source -> `Exclusive`, never a type mismatch
    /// * present in all sources with equal types -> `Common`
    /// * anything else -> `TypeMismatch`
    ///
    /// A field present in a strict subset of two or more sources is a
    /// `TypeMismatch` even when every present type is the same. Comparisons
    /// made with three taxi schemas have always been reported this way and the
    /// behavior is kept so reports stay comparable across runs.
    ///
    /// `first_present` is the index of the first source holding the field, it
    /// only matters for the exclusive case.
    pub fn classify(
        presence_size: usize,
        total_sources: usize,
        types_equal: bool,
        first_present: usize,
    ) -> Classification {
        if presence_size == 1 {
            Classification::Exclusive(first_present)
        } else if presence_size == total_sources && types_equal {
            Classification::Common
        } else {
            Classification::TypeMismatch
        }
    }

    pub fn is_exclusive(&self) -> bool {
        matches!(self, Classification::Exclusive(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Exclusive(idx) => write!(f, "exclusive({idx})"),
            Classification::Common => write!(f, "common"),
            Classification::TypeMismatch => write!(f, "type_mismatch"),
        }
    }
}
