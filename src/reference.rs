use std::fmt::{Display, Formatter};
use std::ops::Neg;

/// Handle to a BDD node with a complement flag in the sign.
///
/// Index `1` is the single terminal node, so `Ref(1)` is constant true and
/// `Ref(-1)` is constant false.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ref(i32);

impl Ref {
    pub(crate) const fn positive(index: u32) -> Self {
        assert!(index != 0 && index < (1 << 31));
        Self(index as i32)
    }

    pub const fn is_negated(self) -> bool {
        self.0 < 0
    }

    pub const fn negate(self) -> Self {
        Self(-self.0)
    }

    /// Return the regular (non-negated) version of the reference.
    pub const fn regular(self) -> Self {
        Self(self.0.abs())
    }

    /// Return the index of the referenced node.
    pub const fn index(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Literal-style encoding: `index << 1 | negated`.
    pub(crate) const fn unsigned(self) -> u32 {
        (self.0.unsigned_abs() << 1) + self.is_negated() as u32
    }
}

impl Neg for Ref {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", if self.is_negated() { "~" } else { "" }, self.index())
    }
}
