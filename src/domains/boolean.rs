use std::collections::HashMap;

use crate::aig::Aig;
use crate::bits::BitVec;
use crate::domain::{Domain, OnMissing};
use crate::error::{Error, Result};
use crate::signal::Node;

/// Simulates one input pattern: input at position `i` takes bit `i`.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: BitVec,
}

impl Pattern {
    pub fn new(pattern: BitVec) -> Self {
        Self { pattern }
    }
}

impl Domain for Pattern {
    type Value = bool;

    fn get_input(&self, node: Node, name: &str, position: usize, _aig: &Aig) -> Result<bool> {
        self.pattern.get(position).ok_or_else(|| Error::MissingAssignment {
            node,
            name: name.to_string(),
        })
    }

    fn get_constant(&self) -> bool {
        false
    }

    fn invert(&self, value: &bool) -> bool {
        !value
    }

    fn and_op(&self, _node: Node, left: &bool, right: &bool) -> Result<bool> {
        Ok(*left && *right)
    }
}

/// Input values keyed by input name.
#[derive(Debug, Clone)]
pub struct NameAssignment {
    assignment: HashMap<String, bool>,
    on_missing: OnMissing<bool>,
}

impl NameAssignment {
    pub fn new(assignment: HashMap<String, bool>) -> Self {
        Self {
            assignment,
            on_missing: OnMissing::Fail,
        }
    }

    /// Use `value` (with a warning) for inputs missing from the assignment.
    pub fn with_default(mut self, value: bool) -> Self {
        self.on_missing = OnMissing::Default(value);
        self
    }
}

impl Domain for NameAssignment {
    type Value = bool;

    fn get_input(&self, node: Node, name: &str, _position: usize, _aig: &Aig) -> Result<bool> {
        match self.assignment.get(name) {
            Some(&value) => Ok(value),
            None => self.on_missing.resolve(node, name),
        }
    }

    fn get_constant(&self) -> bool {
        false
    }

    fn invert(&self, value: &bool) -> bool {
        !value
    }

    fn and_op(&self, _node: Node, left: &bool, right: &bool) -> Result<bool> {
        Ok(*left && *right)
    }
}

/// Values keyed by node.
///
/// Assigned AND nodes act as cut points: their fan-in is never visited.
#[derive(Debug, Clone)]
pub struct NodeAssignment {
    assignment: HashMap<Node, bool>,
    on_missing: OnMissing<bool>,
}

impl NodeAssignment {
    pub fn new(assignment: HashMap<Node, bool>) -> Self {
        Self {
            assignment,
            on_missing: OnMissing::Fail,
        }
    }

    pub fn with_default(mut self, value: bool) -> Self {
        self.on_missing = OnMissing::Default(value);
        self
    }
}

impl Domain for NodeAssignment {
    type Value = bool;

    fn get_input(&self, node: Node, name: &str, _position: usize, _aig: &Aig) -> Result<bool> {
        match self.assignment.get(&node) {
            Some(&value) => Ok(value),
            None => self.on_missing.resolve(node, name),
        }
    }

    fn get_constant(&self) -> bool {
        false
    }

    fn invert(&self, value: &bool) -> bool {
        !value
    }

    fn and_op(&self, node: Node, left: &bool, right: &bool) -> Result<bool> {
        Ok(match self.assignment.get(&node) {
            Some(&value) => value,
            None => *left && *right,
        })
    }

    fn terminate(&self, node: Node, _aig: &Aig) -> bool {
        self.assignment.contains_key(&node)
    }

    fn terminal_value(&self, node: Node, _aig: &Aig) -> Result<bool> {
        self.assignment
            .get(&node)
            .copied()
            .ok_or_else(|| Error::invariant(node, "terminated node is not assigned"))
    }
}
