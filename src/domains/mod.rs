//! Concrete evaluation domains.
//!
//! | Domain               | Value        | Inputs come from                       |
//! |----------------------|--------------|----------------------------------------|
//! | [`Pattern`]          | `bool`       | stimulus bit vector, by position       |
//! | [`NameAssignment`]   | `bool`       | map keyed by input name                |
//! | [`NodeAssignment`]   | `bool`       | map keyed by node (cuts at any node)   |
//! | [`WordAssignment`]   | [`BitVec`]   | map keyed by input name                |
//! | [`WordNodeAssignment`] | [`BitVec`] | map keyed by node (cuts at any node)   |
//! | [`TruthTableDomain`] | [`TruthTable`] | projection of variable `position`    |
//! | [`BddDomain`]        | [`Ref`]      | BDD variable `position + 1`            |
//! | [`DepthDomain`]      | `u32`        | always `0`                             |
//!
//! [`BitVec`]: crate::bits::BitVec
//! [`TruthTable`]: crate::truth_table::TruthTable
//! [`Ref`]: crate::reference::Ref

mod bdd;
mod boolean;
mod depth;
mod truth_table;
mod word;

pub use bdd::BddDomain;
pub use boolean::{NameAssignment, NodeAssignment, Pattern};
pub use depth::DepthDomain;
pub use truth_table::TruthTableDomain;
pub use word::{WordAssignment, WordNodeAssignment};
