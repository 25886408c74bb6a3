use std::collections::HashMap;

use crate::aig::Aig;
use crate::bits::BitVec;
use crate::domain::{Domain, OnMissing};
use crate::error::{Error, Result};
use crate::signal::Node;

fn and_words(node: Node, left: &BitVec, right: &BitVec) -> Result<BitVec> {
    if left.len() != right.len() {
        return Err(Error::invariant(
            node,
            format!("operand widths differ: {} and {}", left.len(), right.len()),
        ));
    }
    Ok(left & right)
}

/// Bit-parallel simulation: every input carries a word of `width` patterns,
/// keyed by input name.
#[derive(Debug, Clone)]
pub struct WordAssignment {
    width: usize,
    assignment: HashMap<String, BitVec>,
    on_missing: OnMissing<BitVec>,
}

impl WordAssignment {
    /// # Panics
    ///
    /// Panics if some assigned word is not `width` bits wide.
    pub fn new(width: usize, assignment: HashMap<String, BitVec>) -> Self {
        for (name, word) in &assignment {
            assert_eq!(word.len(), width, "Word for '{}' has the wrong width", name);
        }
        Self {
            width,
            assignment,
            on_missing: OnMissing::Fail,
        }
    }

    pub fn with_default(mut self, value: BitVec) -> Self {
        assert_eq!(value.len(), self.width, "Default word has the wrong width");
        self.on_missing = OnMissing::Default(value);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Domain for WordAssignment {
    type Value = BitVec;

    fn get_input(&self, node: Node, name: &str, _position: usize, _aig: &Aig) -> Result<BitVec> {
        match self.assignment.get(name) {
            Some(word) => Ok(word.clone()),
            None => self.on_missing.resolve(node, name),
        }
    }

    fn get_constant(&self) -> BitVec {
        BitVec::zeros(self.width)
    }

    fn invert(&self, value: &BitVec) -> BitVec {
        !value
    }

    fn and_op(&self, node: Node, left: &BitVec, right: &BitVec) -> Result<BitVec> {
        and_words(node, left, right)
    }
}

/// Bit-parallel simulation keyed by node; assigned nodes are cut points.
#[derive(Debug, Clone)]
pub struct WordNodeAssignment {
    width: usize,
    assignment: HashMap<Node, BitVec>,
    on_missing: OnMissing<BitVec>,
}

impl WordNodeAssignment {
    pub fn new(width: usize, assignment: HashMap<Node, BitVec>) -> Self {
        for (node, word) in &assignment {
            assert_eq!(word.len(), width, "Word for {} has the wrong width", node);
        }
        Self {
            width,
            assignment,
            on_missing: OnMissing::Fail,
        }
    }

    pub fn with_default(mut self, value: BitVec) -> Self {
        assert_eq!(value.len(), self.width, "Default word has the wrong width");
        self.on_missing = OnMissing::Default(value);
        self
    }
}

impl Domain for WordNodeAssignment {
    type Value = BitVec;

    fn get_input(&self, node: Node, name: &str, _position: usize, _aig: &Aig) -> Result<BitVec> {
        match self.assignment.get(&node) {
            Some(word) => Ok(word.clone()),
            None => self.on_missing.resolve(node, name),
        }
    }

    fn get_constant(&self) -> BitVec {
        BitVec::zeros(self.width)
    }

    fn invert(&self, value: &BitVec) -> BitVec {
        !value
    }

    fn and_op(&self, node: Node, left: &BitVec, right: &BitVec) -> Result<BitVec> {
        match self.assignment.get(&node) {
            Some(word) => Ok(word.clone()),
            None => and_words(node, left, right),
        }
    }

    fn terminate(&self, node: Node, _aig: &Aig) -> bool {
        self.assignment.contains_key(&node)
    }

    fn terminal_value(&self, node: Node, _aig: &Aig) -> Result<BitVec> {
        self.assignment
            .get(&node)
            .cloned()
            .ok_or_else(|| Error::invariant(node, "terminated node is not assigned"))
    }
}
