//! Node IDs for the flat syntax graph.

use std::fmt;

/// Index into a [`SyntaxGraph`](crate::SyntaxGraph) arena.
///
/// Nodes refer to their children by ID rather than by pointer, which lets a
/// resolved back-reference close a loop in the graph without reference
/// cycles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SyntaxId(u32);

impl SyntaxId {
    /// Create a new `SyntaxId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        SyntaxId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyntaxId({})", self.0)
    }
}

impl fmt::Display for SyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
