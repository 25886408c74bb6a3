//! Evaluation domains.
//!
//! A [`Domain`] decides what "evaluating" an AIG means: the value type, the
//! value of each primary input and of the constant node, how an edge
//! inversion acts, and how an AND node combines its two operands. The
//! simulation engine in [`crate::simulate`] is generic over this trait and
//! never looks at the values themselves.
//!
//! Domains are composed by wrapping: [`crate::adapters`] provides decorators
//! that satisfy the same trait, and `&D` / `Box<D>` are domains whenever `D`
//! is, so a decorator can borrow its base instead of owning it.

use log::warn;

use crate::aig::Aig;
use crate::error::{Error, Result};
use crate::signal::Node;

pub trait Domain {
    type Value: Clone;

    /// Value of a primary input.
    ///
    /// `position` is the index of the input in the graph's input order, or in
    /// a restricted order when an adapter hides some inputs.
    fn get_input(&self, node: Node, name: &str, position: usize, aig: &Aig) -> Result<Self::Value>;

    /// Value of the constant-0 node.
    fn get_constant(&self) -> Self::Value;

    fn invert(&self, value: &Self::Value) -> Self::Value;

    /// Combine the operands of the AND node `node`.
    ///
    /// Operands arrive with edge inversions already applied, in the order
    /// they are stored in the graph.
    fn and_op(&self, node: Node, left: &Self::Value, right: &Self::Value) -> Result<Self::Value>;

    /// When `true`, `node` is treated as a leaf: its fan-in is not visited
    /// and its value comes from [`Domain::terminal_value`].
    fn terminate(&self, _node: Node, _aig: &Aig) -> bool {
        false
    }

    /// Value of a node for which [`Domain::terminate`] returned `true`.
    fn terminal_value(&self, node: Node, _aig: &Aig) -> Result<Self::Value> {
        Err(Error::invariant(node, "domain terminated a node but has no value for it"))
    }
}

impl<D: Domain + ?Sized> Domain for &D {
    type Value = D::Value;

    fn get_input(&self, node: Node, name: &str, position: usize, aig: &Aig) -> Result<Self::Value> {
        (**self).get_input(node, name, position, aig)
    }
    fn get_constant(&self) -> Self::Value {
        (**self).get_constant()
    }
    fn invert(&self, value: &Self::Value) -> Self::Value {
        (**self).invert(value)
    }
    fn and_op(&self, node: Node, left: &Self::Value, right: &Self::Value) -> Result<Self::Value> {
        (**self).and_op(node, left, right)
    }
    fn terminate(&self, node: Node, aig: &Aig) -> bool {
        (**self).terminate(node, aig)
    }
    fn terminal_value(&self, node: Node, aig: &Aig) -> Result<Self::Value> {
        (**self).terminal_value(node, aig)
    }
}

impl<D: Domain + ?Sized> Domain for Box<D> {
    type Value = D::Value;

    fn get_input(&self, node: Node, name: &str, position: usize, aig: &Aig) -> Result<Self::Value> {
        (**self).get_input(node, name, position, aig)
    }
    fn get_constant(&self) -> Self::Value {
        (**self).get_constant()
    }
    fn invert(&self, value: &Self::Value) -> Self::Value {
        (**self).invert(value)
    }
    fn and_op(&self, node: Node, left: &Self::Value, right: &Self::Value) -> Result<Self::Value> {
        (**self).and_op(node, left, right)
    }
    fn terminate(&self, node: Node, aig: &Aig) -> bool {
        (**self).terminate(node, aig)
    }
    fn terminal_value(&self, node: Node, aig: &Aig) -> Result<Self::Value> {
        (**self).terminal_value(node, aig)
    }
}

/// What a domain does when it has no value for an input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OnMissing<T> {
    /// Report [`Error::MissingAssignment`].
    Fail,
    /// Log a warning and use the given value.
    Default(T),
}

impl<T: Clone> OnMissing<T> {
    pub fn resolve(&self, node: Node, name: &str) -> Result<T> {
        match self {
            OnMissing::Fail => Err(Error::MissingAssignment {
                node,
                name: name.to_string(),
            }),
            OnMissing::Default(value) => {
                warn!("no assignment given for '{}' ({}), assume default", name, node);
                Ok(value.clone())
            }
        }
    }
}

/// A domain assembled from four closures, one per required operation.
///
/// ```
/// use aig_sim::aig::Aig;
/// use aig_sim::domain::FnDomain;
/// use aig_sim::simulate::simulate_signal_once;
///
/// let mut aig = Aig::new("or");
/// let a = aig.add_input("a");
/// let b = aig.add_input("b");
/// let f = aig.add_or(a, b);
///
/// // Count how many leaves each node's cone touches, ignoring sharing.
/// let leaves = FnDomain::new(
///     |_node, _name, _pos, _aig| Ok(1u32),
///     || 0u32,
///     |v: &u32| *v,
///     |_node, l: &u32, r: &u32| Ok(l + r),
/// );
/// assert_eq!(simulate_signal_once(&aig, f, &leaves).unwrap(), 2);
/// ```
pub struct FnDomain<I, C, N, A> {
    input: I,
    constant: C,
    invert: N,
    and: A,
}

impl<T, I, C, N, A> FnDomain<I, C, N, A>
where
    T: Clone,
    I: Fn(Node, &str, usize, &Aig) -> Result<T>,
    C: Fn() -> T,
    N: Fn(&T) -> T,
    A: Fn(Node, &T, &T) -> Result<T>,
{
    pub fn new(input: I, constant: C, invert: N, and: A) -> Self {
        Self {
            input,
            constant,
            invert,
            and,
        }
    }
}

impl<T, I, C, N, A> Domain for FnDomain<I, C, N, A>
where
    T: Clone,
    I: Fn(Node, &str, usize, &Aig) -> Result<T>,
    C: Fn() -> T,
    N: Fn(&T) -> T,
    A: Fn(Node, &T, &T) -> Result<T>,
{
    type Value = T;

    fn get_input(&self, node: Node, name: &str, position: usize, aig: &Aig) -> Result<T> {
        (self.input)(node, name, position, aig)
    }
    fn get_constant(&self) -> T {
        (self.constant)()
    }
    fn invert(&self, value: &T) -> T {
        (self.invert)(value)
    }
    fn and_op(&self, node: Node, left: &T, right: &T) -> Result<T> {
        (self.and)(node, left, right)
    }
}
