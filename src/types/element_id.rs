//! Element identifier type
//!
//! Every level, family symbol, wall and family instance in a host document is
//! identified by an `ElementId`. Id 0 is reserved and invalid.

use std::fmt;

/// A unique identifier for host document elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// The invalid element id (0)
    pub const INVALID: ElementId = ElementId(0);

    /// Create a new id from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        ElementId(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the invalid id
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is a valid id
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        ElementId::INVALID
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
