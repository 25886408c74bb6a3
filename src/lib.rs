//! # aig-sim: generic evaluation of And-Inverter Graphs
//!
//! **`aig-sim`** evaluates combinational circuits stored as AIGs over any
//! value domain: plain Booleans, bit-parallel words, truth tables, BDDs,
//! depths, or anything else that can express a constant, an inversion and
//! a two-input AND.
//!
//! ## What is an AIG?
//!
//! An And-Inverter Graph is a directed acyclic graph whose internal nodes are
//! all two-input AND gates. Negation is not a node but a flag on an edge.
//! Every combinational circuit can be written this way, which makes AIGs the
//! common currency of logic synthesis and verification tools.
//!
//! ## Key Features
//!
//! - **Domain-generic engine**: [`simulate`] is written once against the
//!   [`Domain`][crate::domain::Domain] trait.
//! - **Memoised and iterative**: every node is evaluated at most once per
//!   cache, and deep graphs do not overflow the call stack.
//! - **Composable adapters**: hide inputs ([`Partial`][crate::adapters::Partial])
//!   or pin arbitrary nodes ([`Override`][crate::adapters::Override]) without
//!   touching the base domain.
//! - **Structured errors**: cycles, malformed gates and missing assignments are
//!   reported as [`Error`][crate::error::Error] values, never panics.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use aig_sim::aig::Aig;
//! use aig_sim::domains::{NameAssignment, TruthTableDomain};
//! use aig_sim::simulate::{simulate_aig, simulate_signal_once, SimulateSettings};
//!
//! // f = a AND (NOT b)
//! let mut aig = Aig::new("example");
//! let a = aig.add_input("a");
//! let b = aig.add_input("b");
//! let f = aig.add_and(a, !b);
//! aig.add_output(f, "f");
//!
//! // Boolean evaluation under a named assignment.
//! let values = NameAssignment::new(HashMap::from([("a".to_string(), true), ("b".to_string(), false)]));
//! assert!(simulate_signal_once(&aig, f, &values).unwrap());
//!
//! // The complete function, rows in the order ab = 00, 01, 10, 11.
//! let domain = TruthTableDomain::for_aig(&aig);
//! let sim = simulate_aig(&aig, &domain, &SimulateSettings::default()).unwrap();
//! assert_eq!(sim.outputs[&f].to_string(), "0010");
//! ```
//!
//! ## Core Components
//!
//! - **[`aig`]**: the graph model.
//! - **[`domain`]** and **[`domains`]**: the evaluation contract and its stock implementations.
//! - **[`adapters`]**: domain decorators.
//! - **[`simulate`]**: the traversal engine.
//! - **[`bdd`]**: a small shared BDD manager used by [`BddDomain`][crate::domains::BddDomain].
//! - **[`stats`]**: size and depth figures.

pub mod adapters;
pub mod aig;
pub mod bdd;
pub mod bits;
pub mod cache;
pub mod domain;
pub mod domains;
pub mod error;
pub mod reference;
pub mod signal;
pub mod simulate;
pub mod stats;
pub mod truth_table;
pub mod utils;
