//! Domain decorators.
//!
//! Each adapter wraps a base [`Domain`] and is itself a domain, so adapters
//! stack freely. Wrap `&base` to keep using the base domain afterwards.

use std::collections::HashMap;

use crate::aig::Aig;
use crate::domain::{Domain, OnMissing};
use crate::error::{Error, Result};
use crate::signal::Node;

/// Fixes some primary inputs to known values and presents the remaining
/// inputs to the base domain as if they were the only ones.
///
/// An unassigned input is delivered to the base domain with its position
/// among the unassigned inputs, not its position in the full input order.
pub struct Partial<D: Domain> {
    base: D,
    assignment: HashMap<Node, D::Value>,
    positions: HashMap<Node, usize>,
}

impl<D: Domain> Partial<D> {
    pub fn new(base: D, assignment: HashMap<Node, D::Value>, aig: &Aig) -> Self {
        let positions = aig
            .inputs()
            .iter()
            .map(|(node, _)| *node)
            .filter(|node| !assignment.contains_key(node))
            .enumerate()
            .map(|(pos, node)| (node, pos))
            .collect();
        Self {
            base,
            assignment,
            positions,
        }
    }

    /// Number of inputs left to the base domain.
    pub fn num_free_inputs(&self) -> usize {
        self.positions.len()
    }
}

impl<D: Domain> Domain for Partial<D> {
    type Value = D::Value;

    fn get_input(&self, node: Node, name: &str, _position: usize, aig: &Aig) -> Result<Self::Value> {
        if let Some(value) = self.assignment.get(&node) {
            return Ok(value.clone());
        }
        let &position = self
            .positions
            .get(&node)
            .ok_or_else(|| Error::invariant(node, format!("'{}' is not an input of the adapted graph", name)))?;
        self.base.get_input(node, name, position, aig)
    }

    fn get_constant(&self) -> Self::Value {
        self.base.get_constant()
    }

    fn invert(&self, value: &Self::Value) -> Self::Value {
        self.base.invert(value)
    }

    fn and_op(&self, node: Node, left: &Self::Value, right: &Self::Value) -> Result<Self::Value> {
        self.base.and_op(node, left, right)
    }

    fn terminate(&self, node: Node, aig: &Aig) -> bool {
        self.base.terminate(node, aig)
    }

    fn terminal_value(&self, node: Node, aig: &Aig) -> Result<Self::Value> {
        self.base.terminal_value(node, aig)
    }
}

/// Pins arbitrary nodes, internal ones included, to given values.
///
/// An assigned node is a leaf: the engine does not descend into its fan-in
/// and takes the assigned value instead. Unassigned AND nodes are combined
/// by the base domain. Inputs never reach the base domain; an input without
/// an assignment is resolved by the [`OnMissing`] policy, which defaults to
/// substituting the value given at construction.
pub struct Override<D: Domain> {
    base: D,
    assignment: HashMap<Node, D::Value>,
    on_missing: OnMissing<D::Value>,
}

impl<D: Domain> Override<D> {
    pub fn new(base: D, assignment: HashMap<Node, D::Value>, default: D::Value) -> Self {
        Self {
            base,
            assignment,
            on_missing: OnMissing::Default(default),
        }
    }

    /// Fail on unassigned inputs instead of substituting the default.
    pub fn strict(mut self) -> Self {
        self.on_missing = OnMissing::Fail;
        self
    }

    pub fn assignment(&self) -> &HashMap<Node, D::Value> {
        &self.assignment
    }
}

impl<D: Domain> Domain for Override<D> {
    type Value = D::Value;

    fn get_input(&self, node: Node, name: &str, _position: usize, _aig: &Aig) -> Result<Self::Value> {
        match self.assignment.get(&node) {
            Some(value) => Ok(value.clone()),
            None => self.on_missing.resolve(node, name),
        }
    }

    fn get_constant(&self) -> Self::Value {
        self.base.get_constant()
    }

    fn invert(&self, value: &Self::Value) -> Self::Value {
        self.base.invert(value)
    }

    fn and_op(&self, node: Node, left: &Self::Value, right: &Self::Value) -> Result<Self::Value> {
        match self.assignment.get(&node) {
            Some(value) => Ok(value.clone()),
            None => self.base.and_op(node, left, right),
        }
    }

    fn terminate(&self, node: Node, _aig: &Aig) -> bool {
        self.assignment.contains_key(&node)
    }

    fn terminal_value(&self, node: Node, _aig: &Aig) -> Result<Self::Value> {
        self.assignment
            .get(&node)
            .cloned()
            .ok_or_else(|| Error::invariant(node, "terminated node has no override"))
    }
}
