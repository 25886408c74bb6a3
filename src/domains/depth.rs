use crate::aig::Aig;
use crate::domain::Domain;
use crate::error::Result;
use crate::signal::Node;

/// Number of AND levels between a node and the primary inputs.
///
/// Inversions are free.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthDomain;

impl Domain for DepthDomain {
    type Value = u32;

    fn get_input(&self, _node: Node, _name: &str, _position: usize, _aig: &Aig) -> Result<u32> {
        Ok(0)
    }

    fn get_constant(&self) -> u32 {
        0
    }

    fn invert(&self, value: &u32) -> u32 {
        *value
    }

    fn and_op(&self, _node: Node, left: &u32, right: &u32) -> Result<u32> {
        Ok(left.max(right) + 1)
    }
}
