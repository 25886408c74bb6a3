use crate::aig::Aig;
use crate::bdd::Bdd;
use crate::domain::Domain;
use crate::error::Result;
use crate::reference::Ref;
use crate::signal::Node;

/// Builds a BDD for every node in a shared manager.
///
/// The input at position `p` becomes BDD variable `p + 1`. The manager is
/// borrowed, so handles stay valid after simulation and several simulations
/// can share one manager.
#[derive(Debug, Clone, Copy)]
pub struct BddDomain<'a> {
    bdd: &'a Bdd,
}

impl<'a> BddDomain<'a> {
    pub fn new(bdd: &'a Bdd) -> Self {
        Self { bdd }
    }

    pub fn bdd(&self) -> &'a Bdd {
        self.bdd
    }
}

impl Domain for BddDomain<'_> {
    type Value = Ref;

    fn get_input(&self, _node: Node, _name: &str, position: usize, _aig: &Aig) -> Result<Ref> {
        Ok(self.bdd.mk_var(position as u32 + 1))
    }

    fn get_constant(&self) -> Ref {
        self.bdd.zero
    }

    fn invert(&self, value: &Ref) -> Ref {
        self.bdd.apply_not(*value)
    }

    fn and_op(&self, _node: Node, left: &Ref, right: &Ref) -> Result<Ref> {
        Ok(self.bdd.apply_and(*left, *right))
    }
}
