use crate::aig::Aig;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::signal::Node;
use crate::truth_table::{TruthTable, MAX_VARS};

/// Computes the complete function of every node as a truth table.
///
/// The input at position `p` is variable `p`, so the domain needs as many
/// variables as the graph (or the adapter in front of it) has inputs.
#[derive(Debug, Clone)]
pub struct TruthTableDomain {
    num_vars: usize,
}

impl TruthTableDomain {
    pub fn new(num_vars: usize) -> Self {
        assert!(num_vars <= MAX_VARS, "Too many variables for a truth table: {}", num_vars);
        Self { num_vars }
    }

    /// A domain with one variable per input of `aig`.
    pub fn for_aig(aig: &Aig) -> Self {
        Self::new(aig.num_inputs())
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }
}

impl Domain for TruthTableDomain {
    type Value = TruthTable;

    fn get_input(&self, node: Node, name: &str, position: usize, _aig: &Aig) -> Result<TruthTable> {
        if position >= self.num_vars {
            return Err(Error::invariant(
                node,
                format!(
                    "input '{}' at position {} exceeds {} truth table variables",
                    name, position, self.num_vars
                ),
            ));
        }
        Ok(TruthTable::nth_var(self.num_vars, position))
    }

    fn get_constant(&self) -> TruthTable {
        TruthTable::zero(self.num_vars)
    }

    fn invert(&self, value: &TruthTable) -> TruthTable {
        !value
    }

    fn and_op(&self, node: Node, left: &TruthTable, right: &TruthTable) -> Result<TruthTable> {
        if left.num_vars() != right.num_vars() {
            return Err(Error::invariant(
                node,
                format!("operands over {} and {} variables", left.num_vars(), right.num_vars()),
            ));
        }
        Ok(left & right)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::adapters::Partial;
    use crate::error::ErrorKind;
    use crate::simulate::{simulate_aig, simulate_signal_once, SimulateSettings};

    use test_log::test;

    #[test]
    fn test_majority() {
        let mut aig = Aig::new("maj");
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let c = aig.add_input("c");
        let ab = aig.add_and(a, b);
        let bc = aig.add_and(b, c);
        let ac = aig.add_and(a, c);
        let t = aig.add_or(ab, bc);
        let f = aig.add_or(t, ac);
        aig.add_output(f, "maj");

        let d = TruthTableDomain::for_aig(&aig);
        let sim = simulate_aig(&aig, &d, &SimulateSettings::default()).unwrap();
        assert_eq!(sim.outputs[&f].to_string(), "00010111");
    }

    #[test]
    fn test_too_few_variables() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let f = aig.add_and(a, b);
        let d = TruthTableDomain::new(1);
        let err = simulate_signal_once(&aig, f, &d).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainInvariantViolation);
        assert_eq!(err.node(), b.node());
    }

    #[test]
    fn test_partial_cofactor() {
        // f = a & !b & c; fixing b = 0 leaves the 2-variable function a & c.
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let c = aig.add_input("c");
        let ab = aig.add_and(a, !b);
        let f = aig.add_and(ab, c);

        let base = TruthTableDomain::new(2);
        let partial = Partial::new(&base, HashMap::from([(b.node(), base.get_constant())]), &aig);
        let tt = simulate_signal_once(&aig, f, &partial).unwrap();
        assert_eq!(tt.to_string(), "0001");
    }

    #[test]
    fn test_width_mismatch() {
        let d = TruthTableDomain::new(2);
        let err = d
            .and_op(Node::new(3), &TruthTable::zero(2), &TruthTable::zero(3))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainInvariantViolation);
    }
}
