//! Error types for graph construction and simulation.

use thiserror::Error;

use crate::signal::Node;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node was reached again while its fan-in was still being evaluated.
    #[error("Cycle detected: node {node} is reachable from itself")]
    Cycle { node: Node },
    #[error("AND node {node} has {count} fan-in signals, expected 2")]
    FaninCount { node: Node, count: usize },
    #[error("Node {node} does not exist in a graph of {size} nodes")]
    UnknownNode { node: Node, size: usize },
    #[error("Node {node} is not a declared AND node without fan-in")]
    NotDeclared { node: Node },
    #[error("No assignment given for '{name}' ({node})")]
    MissingAssignment { node: Node, name: String },
    #[error("Domain invariant violated at {node}: {reason}")]
    DomainInvariant { node: Node, reason: String },
    /// The colour map says a node is done, but the value map has no entry for it.
    #[error("Node {node} is marked as evaluated but has no cached value")]
    StaleCache { node: Node },
}

/// Coarse classification of [`Error`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The graph is malformed. Fatal.
    StructuralViolation,
    /// A domain had no value for an input or node. Recoverable by policy.
    MissingAssignment,
    /// A domain or the caller broke the evaluation contract. Fatal.
    DomainInvariantViolation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Cycle { .. } | Error::FaninCount { .. } | Error::UnknownNode { .. } | Error::NotDeclared { .. } => {
                ErrorKind::StructuralViolation
            }
            Error::MissingAssignment { .. } => ErrorKind::MissingAssignment,
            Error::DomainInvariant { .. } | Error::StaleCache { .. } => ErrorKind::DomainInvariantViolation,
        }
    }

    /// The node the error is reported against.
    pub fn node(&self) -> Node {
        match self {
            Error::Cycle { node }
            | Error::FaninCount { node, .. }
            | Error::UnknownNode { node, .. }
            | Error::NotDeclared { node }
            | Error::MissingAssignment { node, .. }
            | Error::DomainInvariant { node, .. }
            | Error::StaleCache { node } => *node,
        }
    }

    pub(crate) fn invariant(node: Node, reason: impl Into<String>) -> Self {
        Error::DomainInvariant {
            node,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let node = Node::new(4);
        assert_eq!(Error::Cycle { node }.kind(), ErrorKind::StructuralViolation);
        assert_eq!(
            Error::FaninCount { node, count: 3 }.kind(),
            ErrorKind::StructuralViolation
        );
        assert_eq!(
            Error::MissingAssignment {
                node,
                name: "a".to_string()
            }
            .kind(),
            ErrorKind::MissingAssignment
        );
        assert_eq!(Error::invariant(node, "oops").kind(), ErrorKind::DomainInvariantViolation);
        assert_eq!(Error::StaleCache { node }.node(), node);
    }

    #[test]
    fn test_message() {
        let err = Error::FaninCount {
            node: Node::new(7),
            count: 0,
        };
        assert_eq!(err.to_string(), "AND node n7 has 0 fan-in signals, expected 2");
    }
}
