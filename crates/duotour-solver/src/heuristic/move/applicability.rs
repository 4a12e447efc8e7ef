//! Outcome of checking a cached move against the live tours.

/// Whether a cached move still matches the tours it will be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Applicability {
    /// Recorded neighbours match; the move and its delta are exact.
    Applicable,

    /// The recorded edges no longer exist. The move can be discarded.
    NotApplicable,

    /// One recorded edge is intact and the other exists reversed. A later
    /// reversal may restore the orientation, so the move is kept.
    MayBeApplicable,
}

impl Applicability {
    #[inline]
    pub fn is_applicable(self) -> bool {
        matches!(self, Applicability::Applicable)
    }
}
