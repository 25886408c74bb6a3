//! And-Inverter Graph model.
//!
//! Nodes live in a single arena and are addressed by [`Node`] indices.
//! Node `0` is the constant-0 node, every other node is either a primary
//! input or a two-input AND gate whose fan-in edges are [`Signal`]s.
//! Inversion lives on edges only.
//!
//! Primary inputs and outputs are kept in side tables in declaration order.
//! The position of an input in that order is what simulation domains see as
//! the input's `position`.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::signal::{Node, Signal};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NodeKind {
    Constant,
    /// Primary input at the given position.
    Input(usize),
    And([Signal; 2]),
    /// AND node reserved by a loader but not yet given its fan-in.
    Declared,
}

#[derive(Clone)]
pub struct Aig {
    name: String,
    nodes: Vec<NodeKind>,
    inputs: Vec<(Node, String)>,
    outputs: Vec<(Signal, String)>,
    input_names: HashMap<String, Node>,
}

impl Aig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: vec![NodeKind::Constant],
            inputs: Vec::new(),
            outputs: Vec::new(),
            input_names: HashMap::new(),
        }
    }
}

impl Default for Aig {
    fn default() -> Self {
        Aig::new("")
    }
}

impl Debug for Aig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aig")
            .field("name", &self.name)
            .field("inputs", &self.inputs.len())
            .field("outputs", &self.outputs.len())
            .field("ands", &self.num_ands())
            .finish()
    }
}

// Construction
impl Aig {
    fn push(&mut self, kind: NodeKind) -> Node {
        let node = Node::new(self.nodes.len() as u32);
        self.nodes.push(kind);
        node
    }

    pub fn add_input(&mut self, name: impl Into<String>) -> Signal {
        let name = name.into();
        let node = self.push(NodeKind::Input(self.inputs.len()));
        self.input_names.entry(name.clone()).or_insert(node);
        self.inputs.push((node, name));
        Signal::from_node(node)
    }

    /// Add an AND node over two existing signals.
    ///
    /// Operands are stored in the given order and never simplified.
    pub fn add_and(&mut self, left: Signal, right: Signal) -> Signal {
        assert!(left.node().index() < self.nodes.len(), "Unknown left operand {}", left);
        assert!(right.node().index() < self.nodes.len(), "Unknown right operand {}", right);
        let node = self.push(NodeKind::And([left, right]));
        Signal::from_node(node)
    }

    pub fn add_or(&mut self, left: Signal, right: Signal) -> Signal {
        !self.add_and(!left, !right)
    }

    pub fn add_xor(&mut self, left: Signal, right: Signal) -> Signal {
        let both = self.add_and(left, right);
        let none = self.add_and(!left, !right);
        self.add_and(!both, !none)
    }

    pub fn add_output(&mut self, signal: Signal, name: impl Into<String>) {
        assert!(signal.node().index() < self.nodes.len(), "Unknown output signal {}", signal);
        self.outputs.push((signal, name.into()));
    }

    /// Reserve an AND node whose fan-in is supplied later with [`Aig::define_and`].
    ///
    /// Loaders use this for gates that are referenced before they are defined.
    pub fn declare_and(&mut self) -> Node {
        self.push(NodeKind::Declared)
    }

    /// Supply the fan-in of a node reserved with [`Aig::declare_and`].
    ///
    /// The fan-in may reference any node, including ones declared later, so
    /// a careless loader can introduce a cycle; simulation reports it.
    pub fn define_and(&mut self, node: Node, fanin: &[Signal]) -> Result<()> {
        self.check(node)?;
        if self.nodes[node.index()] != NodeKind::Declared {
            return Err(Error::NotDeclared { node });
        }
        let &[left, right] = fanin else {
            return Err(Error::FaninCount {
                node,
                count: fanin.len(),
            });
        };
        for s in [left, right] {
            self.check(s.node())?;
        }
        self.nodes[node.index()] = NodeKind::And([left, right]);
        Ok(())
    }

    fn check(&self, node: Node) -> Result<()> {
        if node.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode {
                node,
                size: self.nodes.len(),
            })
        }
    }
}

// Getters
impl Aig {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constant(&self) -> Node {
        Node::CONSTANT
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub fn num_ands(&self) -> usize {
        self.nodes.iter().filter(|k| matches!(k, NodeKind::And(_))).count()
    }

    /// Primary inputs in declaration order.
    pub fn inputs(&self) -> &[(Node, String)] {
        &self.inputs
    }

    /// Primary outputs in declaration order.
    pub fn outputs(&self) -> &[(Signal, String)] {
        &self.outputs
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.nodes.len() as u32).map(Node::new)
    }

    pub fn kind(&self, node: Node) -> Result<NodeKind> {
        self.check(node)?;
        Ok(self.nodes[node.index()])
    }

    pub fn fanin(&self, node: Node) -> Option<[Signal; 2]> {
        match self.nodes.get(node.index()) {
            Some(NodeKind::And(fanin)) => Some(*fanin),
            _ => None,
        }
    }

    pub fn is_input(&self, node: Node) -> bool {
        self.input_position(node).is_some()
    }

    pub fn input_position(&self, node: Node) -> Option<usize> {
        match self.nodes.get(node.index()) {
            Some(NodeKind::Input(pos)) => Some(*pos),
            _ => None,
        }
    }

    pub fn input_name(&self, node: Node) -> Option<&str> {
        self.input_position(node).map(|pos| self.inputs[pos].1.as_str())
    }

    /// Look up an input by name. With duplicate names the first one wins.
    pub fn find_input(&self, name: &str) -> Option<Node> {
        self.input_names.get(name).copied()
    }

    pub fn input(&self, position: usize) -> Signal {
        Signal::from_node(self.inputs[position].0)
    }
}
