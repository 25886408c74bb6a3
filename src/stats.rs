//! Size and depth statistics.

use std::fmt::{Display, Formatter};

use crate::aig::Aig;
use crate::domains::DepthDomain;
use crate::error::Result;
use crate::simulate::{simulate_aig, simulate_node, ColorMap, NodeValues, SimulateSettings};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AigStats {
    pub name: String,
    pub inputs: usize,
    pub outputs: usize,
    pub ands: usize,
    /// Fan-in edges of AND nodes, two per node.
    pub edges: usize,
    /// Largest number of AND levels on any path to an output.
    pub depth: u32,
}

impl AigStats {
    pub fn new(aig: &Aig) -> Result<Self> {
        let sim = simulate_aig(aig, &DepthDomain, &SimulateSettings::default())?;
        let depth = sim.outputs.values().copied().max().unwrap_or(0);
        Ok(Self {
            name: aig.name().to_string(),
            inputs: aig.num_inputs(),
            outputs: aig.num_outputs(),
            ands: aig.num_ands(),
            edges: 2 * aig.num_ands(),
            depth,
        })
    }
}

impl Display for AigStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: i/o = {}/{}, and = {}, edge = {}, lev = {}",
            self.name, self.inputs, self.outputs, self.ands, self.edges, self.depth
        )
    }
}

/// Depth of every node in the graph, dangling ones included.
pub fn node_depths(aig: &Aig) -> Result<NodeValues<u32>> {
    let mut colors = ColorMap::new();
    let mut values = NodeValues::new();
    for node in aig.nodes() {
        simulate_node(aig, node, &DepthDomain, &mut colors, &mut values)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    use test_log::test;

    fn half_adder() -> Aig {
        let mut aig = Aig::new("ha");
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let s = aig.add_xor(a, b);
        let c = aig.add_and(a, b);
        aig.add_output(s, "s");
        aig.add_output(c, "c");
        aig
    }

    #[test]
    fn test_stats() {
        let aig = half_adder();
        let stats = AigStats::new(&aig).unwrap();
        assert_eq!(stats.inputs, 2);
        assert_eq!(stats.outputs, 2);
        assert_eq!(stats.ands, 4);
        assert_eq!(stats.edges, 8);
        assert_eq!(stats.depth, 2);
        assert_eq!(stats.to_string(), "ha: i/o = 2/2, and = 4, edge = 8, lev = 2");
    }

    #[test]
    fn test_node_depths() {
        let mut aig = half_adder();
        let a = aig.input(0);
        let b = aig.input(1);
        // Dangling node, not reachable from any output.
        let d = aig.add_and(!a, b);
        let depths = node_depths(&aig).unwrap();
        assert_eq!(depths.len(), aig.num_nodes());
        assert_eq!(depths[&aig.constant()], 0);
        assert_eq!(depths[&a.node()], 0);
        assert_eq!(depths[&d.node()], 1);
        assert_eq!(depths.values().max(), Some(&2));
    }

    #[test]
    fn test_empty() {
        let stats = AigStats::new(&Aig::new("empty")).unwrap();
        assert_eq!(stats.depth, 0);
        assert_eq!(stats.ands, 0);
    }

    #[test]
    fn test_cycle() {
        let mut aig = Aig::new("loop");
        let a = aig.add_input("a");
        let g = aig.declare_and();
        aig.define_and(g, &[a, g.into()]).unwrap();
        aig.add_output(g.into(), "g");
        let err = AigStats::new(&aig).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
        assert!(node_depths(&aig).is_err());
    }
}
