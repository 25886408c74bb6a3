use std::fmt::{Debug, Display, Formatter};
use std::ops::Not;

/// Index of a node in the [`Aig`][crate::aig::Aig] arena.
///
/// Node `0` is always the constant-0 node.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Node(u32);

impl Node {
    pub const CONSTANT: Node = Node(0);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_constant(self) -> bool {
        self.0 == 0
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A node reference together with an inversion flag.
///
/// Packed as `node << 1 | complemented`, so the constant-0 signal is `0`
/// and constant-1 is `1`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Signal(u32);

// Constructors
impl Signal {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn one() -> Self {
        Self(1)
    }

    pub const fn new(node: Node, complemented: bool) -> Self {
        assert!(node.0 < (1 << 31), "Node index does not fit into a signal");
        Self(node.0 << 1 | complemented as u32)
    }

    pub const fn from_node(node: Node) -> Self {
        Self::new(node, false)
    }
}

// Getters
impl Signal {
    pub const fn node(self) -> Node {
        Node(self.0 >> 1)
    }

    pub const fn is_complemented(self) -> bool {
        self.0 & 1 != 0
    }

    pub const fn is_const(self) -> bool {
        self.node().is_constant()
    }

    /// Flip the inversion flag when `flag` is set.
    pub const fn not_if(self, flag: bool) -> Self {
        Self(self.0 ^ flag as u32)
    }
}

impl From<Node> for Signal {
    fn from(node: Node) -> Self {
        Self::from_node(node)
    }
}

impl From<bool> for Signal {
    fn from(b: bool) -> Self {
        if b {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl Not for Signal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl Not for &Signal {
    type Output = Signal;

    fn not(self) -> Self::Output {
        Signal(self.0 ^ 1)
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_const() {
            write!(f, "{}", self.0 & 1)
        } else {
            if self.is_complemented() {
                write!(f, "!")?;
            }
            write!(f, "{}", self.node())
        }
    }
}

impl Debug for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
