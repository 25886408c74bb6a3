//! Memoised depth-first simulation of AIGs over an arbitrary [`Domain`].
//!
//! The walk is iterative: an explicit stack of frames replaces recursion, so
//! graph depth is bounded by memory rather than by the call stack. Every node
//! goes through three colours:
//!
//! - *white*: not seen yet (absent from the [`ColorMap`]),
//! - *gray*: its fan-in is being evaluated,
//! - *black*: its value is stored in the [`NodeValues`] map.
//!
//! A black node is never evaluated again, which makes evaluation linear in
//! the size of the cone even with heavy reconvergence. Reaching a gray node
//! means the graph has a cycle.
//!
//! Evaluation order is the DFS post-order with the left operand first, so a
//! stateful domain (e.g. a shared BDD manager) sees a deterministic sequence
//! of calls.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::aig::{Aig, NodeKind};
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::signal::{Node, Signal};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Color {
    Gray,
    Black,
}

/// Visitation state per node. Missing nodes are white.
pub type ColorMap = HashMap<Node, Color>;

/// Memoised value per evaluated node.
pub type NodeValues<T> = HashMap<Node, T>;

#[derive(Debug, Copy, Clone)]
enum Frame {
    /// Visit a node: evaluate leaves, expand AND nodes.
    Enter(Node),
    /// Both operands of this AND node are black; combine them.
    Exit(Node, [Signal; 2]),
}

/// Evaluate `node` and everything it depends on.
///
/// Values already present for black nodes are reused; both maps may be
/// carried over between calls on the same graph and domain. On error, the
/// nodes this call left gray are uncoloured again, so the maps stay usable
/// for the next call.
pub fn simulate_node<D>(
    aig: &Aig,
    node: Node,
    domain: &D,
    colors: &mut ColorMap,
    values: &mut NodeValues<D::Value>,
) -> Result<D::Value>
where
    D: Domain + ?Sized,
{
    let mut entered = Vec::new();
    let result = walk(aig, node, domain, colors, values, &mut entered);
    if result.is_err() {
        for n in entered {
            if colors.get(&n) == Some(&Color::Gray) {
                colors.remove(&n);
            }
        }
    }
    result
}

/// The DFS proper. Every node coloured gray is recorded in `entered`.
fn walk<D>(
    aig: &Aig,
    node: Node,
    domain: &D,
    colors: &mut ColorMap,
    values: &mut NodeValues<D::Value>,
    entered: &mut Vec<Node>,
) -> Result<D::Value>
where
    D: Domain + ?Sized,
{
    let mut stack = vec![Frame::Enter(node)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(n) => {
                match colors.get(&n) {
                    Some(Color::Black) => continue,
                    Some(Color::Gray) => return Err(Error::Cycle { node: n }),
                    None => {}
                }

                let kind = aig.kind(n)?;

                if domain.terminate(n, aig) {
                    debug!("terminate at {}", n);
                    let value = domain.terminal_value(n, aig)?;
                    values.insert(n, value);
                    colors.insert(n, Color::Black);
                    continue;
                }

                match kind {
                    NodeKind::Constant => {
                        values.insert(n, domain.get_constant());
                        colors.insert(n, Color::Black);
                    }
                    NodeKind::Input(pos) => {
                        let name = &aig.inputs()[pos].1;
                        let value = domain.get_input(n, name, pos, aig)?;
                        values.insert(n, value);
                        colors.insert(n, Color::Black);
                    }
                    NodeKind::And(fanin @ [left, right]) => {
                        colors.insert(n, Color::Gray);
                        entered.push(n);
                        stack.push(Frame::Exit(n, fanin));
                        stack.push(Frame::Enter(right.node()));
                        stack.push(Frame::Enter(left.node()));
                    }
                    NodeKind::Declared => return Err(Error::FaninCount { node: n, count: 0 }),
                }
            }
            Frame::Exit(n, [left, right]) => {
                let l = operand(domain, values, left)?;
                let r = operand(domain, values, right)?;
                let value = domain.and_op(n, &l, &r)?;
                debug!("computed {} from {} and {}", n, left, right);
                values.insert(n, value);
                colors.insert(n, Color::Black);
            }
        }
    }

    values.get(&node).cloned().ok_or(Error::StaleCache { node })
}

/// Cached value of the node behind `signal`, inverted if the edge is.
fn operand<D>(domain: &D, values: &NodeValues<D::Value>, signal: Signal) -> Result<D::Value>
where
    D: Domain + ?Sized,
{
    let value = values
        .get(&signal.node())
        .ok_or(Error::StaleCache { node: signal.node() })?;
    Ok(if signal.is_complemented() {
        domain.invert(value)
    } else {
        value.clone()
    })
}

/// Evaluate a signal: its node's value, inverted once more if the signal is
/// complemented.
pub fn simulate_signal<D>(
    aig: &Aig,
    signal: Signal,
    domain: &D,
    colors: &mut ColorMap,
    values: &mut NodeValues<D::Value>,
) -> Result<D::Value>
where
    D: Domain + ?Sized,
{
    let value = simulate_node(aig, signal.node(), domain, colors, values)?;
    Ok(if signal.is_complemented() {
        domain.invert(&value)
    } else {
        value
    })
}

/// Evaluate a single signal with fresh maps.
pub fn simulate_signal_once<D>(aig: &Aig, signal: Signal, domain: &D) -> Result<D::Value>
where
    D: Domain + ?Sized,
{
    let mut colors = ColorMap::new();
    let mut values = NodeValues::new();
    simulate_signal(aig, signal, domain, &mut colors, &mut values)
}

#[derive(Debug, Clone, Default)]
pub struct SimulateSettings {
    /// Log one progress line per output before evaluating it.
    pub verbose: bool,
}

/// Result of simulating every output of a graph.
#[derive(Debug, Clone)]
pub struct Simulation<T> {
    /// Value per output signal. Outputs sharing a signal share an entry.
    pub outputs: HashMap<Signal, T>,
    /// Values of every node evaluated along the way.
    pub node_values: NodeValues<T>,
    pub runtime: Duration,
}

impl<T> Simulation<T> {
    /// Output values paired with output names, in declaration order.
    pub fn output_values<'a>(&'a self, aig: &'a Aig) -> Vec<(&'a str, &'a T)> {
        aig.outputs()
            .iter()
            .filter_map(|(signal, name)| self.outputs.get(signal).map(|v| (name.as_str(), v)))
            .collect()
    }

    pub fn output(&self, signal: Signal) -> Option<&T> {
        self.outputs.get(&signal)
    }
}

/// Evaluate every declared output of `aig`, sharing one value cache.
pub fn simulate_aig<D>(aig: &Aig, domain: &D, settings: &SimulateSettings) -> Result<Simulation<D::Value>>
where
    D: Domain + ?Sized,
{
    let mut colors = ColorMap::new();
    let mut values = NodeValues::new();
    let (outputs, runtime) = simulate_outputs(aig, domain, settings, &mut colors, &mut values)?;
    Ok(Simulation {
        outputs,
        node_values: values,
        runtime,
    })
}

/// Like [`simulate_aig`], but with caller-owned maps that may already hold
/// values from earlier calls.
pub fn simulate_aig_with<D>(
    aig: &Aig,
    domain: &D,
    settings: &SimulateSettings,
    colors: &mut ColorMap,
    values: &mut NodeValues<D::Value>,
) -> Result<HashMap<Signal, D::Value>>
where
    D: Domain + ?Sized,
{
    simulate_outputs(aig, domain, settings, colors, values).map(|(outputs, _)| outputs)
}

fn simulate_outputs<D>(
    aig: &Aig,
    domain: &D,
    settings: &SimulateSettings,
    colors: &mut ColorMap,
    values: &mut NodeValues<D::Value>,
) -> Result<(HashMap<Signal, D::Value>, Duration)>
where
    D: Domain + ?Sized,
{
    let start = Instant::now();
    let mut outputs = HashMap::new();

    for (signal, name) in aig.outputs() {
        if settings.verbose {
            info!("simulate '{}'", name);
        }
        let value = simulate_signal(aig, *signal, domain, colors, values)?;
        outputs.insert(*signal, value);
    }

    let runtime = start.elapsed();
    debug!("simulated {} outputs in {:?}", aig.num_outputs(), runtime);
    Ok((outputs, runtime))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::adapters::Override;
    use crate::domain::FnDomain;
    use crate::domains::NameAssignment;
    use crate::error::ErrorKind;

    use test_log::test;

    /// Boolean domain that counts every call.
    struct Counting {
        pattern: Vec<bool>,
        inputs: Cell<usize>,
        ands: RefCell<Vec<Node>>,
    }

    impl Counting {
        fn new(pattern: Vec<bool>) -> Self {
            Self {
                pattern,
                inputs: Cell::new(0),
                ands: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.inputs.get() + self.ands.borrow().len()
        }
    }

    impl Domain for Counting {
        type Value = bool;

        fn get_input(&self, _node: Node, _name: &str, position: usize, _aig: &Aig) -> Result<bool> {
            self.inputs.set(self.inputs.get() + 1);
            Ok(self.pattern[position])
        }
        fn get_constant(&self) -> bool {
            false
        }
        fn invert(&self, value: &bool) -> bool {
            !value
        }
        fn and_op(&self, node: Node, left: &bool, right: &bool) -> Result<bool> {
            self.ands.borrow_mut().push(node);
            Ok(*left && *right)
        }
    }

    #[test]
    fn test_single_and_complemented_operands() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let c = aig.add_and(!a, !b);
        aig.add_output(c, "f");

        for (pa, pb) in [(false, false), (false, true), (true, false), (true, true)] {
            let d = Counting::new(vec![pa, pb]);
            assert_eq!(simulate_signal_once(&aig, c, &d).unwrap(), !pa && !pb);
            assert_eq!(simulate_signal_once(&aig, !c, &d).unwrap(), !(!pa && !pb));
        }
    }

    #[test]
    fn test_constant_signals() {
        let aig = Aig::default();
        let d = Counting::new(vec![]);
        assert!(!simulate_signal_once(&aig, Signal::zero(), &d).unwrap());
        assert!(simulate_signal_once(&aig, Signal::one(), &d).unwrap());
        assert_eq!(d.calls(), 0);
    }

    #[test]
    fn test_memoization_across_outputs() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let c = aig.add_input("c");
        let shared = aig.add_and(a, b);
        let f = aig.add_and(shared, c);
        let g = aig.add_and(!shared, !c);
        aig.add_output(f, "f");
        aig.add_output(g, "g");
        aig.add_output(!shared, "h");

        let d = Counting::new(vec![true, true, false]);
        let sim = simulate_aig(&aig, &d, &SimulateSettings::default()).unwrap();

        assert_eq!(d.inputs.get(), 3);
        let ands = d.ands.borrow();
        assert_eq!(ands.iter().filter(|&&n| n == shared.node()).count(), 1);
        assert_eq!(ands.len(), 3);

        assert_eq!(sim.output(f), Some(&false));
        assert_eq!(sim.output(g), Some(&false));
        assert_eq!(sim.output(!shared), Some(&false));
        assert_eq!(sim.node_values.get(&shared.node()), Some(&true));
        assert_eq!(
            sim.output_values(&aig),
            vec![("f", &false), ("g", &false), ("h", &false)]
        );
    }

    #[test]
    fn test_exponential_reconvergence_is_linear() {
        // Both operands of every gate point at the same node, so an
        // unmemoised walk would visit 2^128 paths.
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let mut x = a;
        for _ in 0..64 {
            let y = aig.add_and(x, x);
            x = aig.add_and(y, !(!y));
        }
        aig.add_output(x, "f");

        let d = Counting::new(vec![true]);
        assert!(simulate_signal_once(&aig, x, &d).unwrap());
        assert_eq!(d.inputs.get(), 1);
        assert_eq!(d.ands.borrow().len(), 128);
    }

    #[test]
    fn test_idempotent_with_populated_cache() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let f = aig.add_and(a, !b);

        let d = Counting::new(vec![true, false]);
        let mut colors = ColorMap::new();
        let mut values = NodeValues::new();
        let first = simulate_signal(&aig, !f, &d, &mut colors, &mut values).unwrap();
        let calls = d.calls();
        let second = simulate_signal(&aig, !f, &d, &mut colors, &mut values).unwrap();
        assert_eq!(first, second);
        assert_eq!(d.calls(), calls);
        assert_eq!(colors.get(&f.node()), Some(&Color::Black));
    }

    #[test]
    fn test_maps_reusable_after_error() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let f = aig.add_and(a, b);

        let mut colors = ColorMap::new();
        let mut values = NodeValues::new();
        let only_a = NameAssignment::new(HashMap::from([("a".to_string(), true)]));
        let err = simulate_signal(&aig, f, &only_a, &mut colors, &mut values).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAssignment);
        assert_eq!(colors.get(&f.node()), None);
        // The input evaluated before the failure keeps its value.
        assert_eq!(colors.get(&a.node()), Some(&Color::Black));

        let both = NameAssignment::new(HashMap::from([("a".to_string(), true), ("b".to_string(), true)]));
        assert!(simulate_signal(&aig, f, &both, &mut colors, &mut values).unwrap());
    }

    #[test]
    fn test_maps_reusable_after_undefined_gate() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let x = aig.declare_and();
        let f = aig.add_and(a, Signal::from_node(x));
        let g = aig.add_and(f, a);

        let d = Counting::new(vec![true]);
        let mut colors = ColorMap::new();
        let mut values = NodeValues::new();
        let err = simulate_signal(&aig, g, &d, &mut colors, &mut values).unwrap_err();
        assert_eq!(err, Error::FaninCount { node: x, count: 0 });
        assert!(colors.values().all(|&c| c == Color::Black));

        // Same structural error again, not a spurious cycle.
        let err = simulate_signal(&aig, g, &d, &mut colors, &mut values).unwrap_err();
        assert_eq!(err, Error::FaninCount { node: x, count: 0 });
    }

    #[test]
    fn test_incremental_outputs() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let f = aig.add_and(a, b);
        let g = aig.add_and(f, !a);

        let d = Counting::new(vec![true, true]);
        let mut colors = ColorMap::new();
        let mut values = NodeValues::new();
        simulate_signal(&aig, f, &d, &mut colors, &mut values).unwrap();
        assert_eq!(d.calls(), 3);

        aig.add_output(f, "f");
        aig.add_output(g, "g");
        let settings = SimulateSettings { verbose: true };
        let outputs = simulate_aig_with(&aig, &d, &settings, &mut colors, &mut values).unwrap();
        // Only `g` itself is new.
        assert_eq!(d.calls(), 4);
        assert!(outputs[&f]);
        assert!(!outputs[&g]);
    }

    #[test]
    fn test_cycle_detected() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let x = aig.declare_and();
        let y = aig.declare_and();
        aig.define_and(x, &[a, Signal::from_node(y)]).unwrap();
        aig.define_and(y, &[!Signal::from_node(x), a]).unwrap();

        let d = Counting::new(vec![true]);
        let err = simulate_signal_once(&aig, Signal::from_node(x), &d).unwrap_err();
        assert_eq!(err, Error::Cycle { node: x });
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
    }

    #[test]
    fn test_self_loop_detected() {
        let mut aig = Aig::default();
        let x = aig.declare_and();
        aig.define_and(x, &[Signal::one(), Signal::from_node(x)]).unwrap();
        let d = Counting::new(vec![]);
        let err = simulate_signal_once(&aig, Signal::from_node(x), &d).unwrap_err();
        assert_eq!(err, Error::Cycle { node: x });
    }

    #[test]
    fn test_undefined_gate() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let x = aig.declare_and();
        let f = aig.add_and(a, Signal::from_node(x));
        let d = Counting::new(vec![true]);
        let err = simulate_signal_once(&aig, f, &d).unwrap_err();
        assert_eq!(err, Error::FaninCount { node: x, count: 0 });
    }

    #[test]
    fn test_terminate_short_circuits_cycle() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let x = aig.declare_and();
        let y = aig.declare_and();
        aig.define_and(x, &[a, Signal::from_node(y)]).unwrap();
        aig.define_and(y, &[Signal::from_node(x), a]).unwrap();
        let top = aig.add_and(Signal::from_node(x), a);

        let base = Counting::new(vec![true]);
        let over = Override::new(&base, HashMap::from([(x, true)]), false);
        let mut colors = ColorMap::new();
        let mut values = NodeValues::new();
        let value = simulate_signal(&aig, top, &over, &mut colors, &mut values).unwrap();
        assert!(!value);
        assert!(!colors.contains_key(&y));
        assert_eq!(values.get(&x), Some(&true));
    }

    #[test]
    fn test_domain_error_propagates() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let b = aig.add_input("b");
        let f = aig.add_and(a, b);
        aig.add_output(f, "f");

        let d = FnDomain::new(
            |_, _, _, _| Ok(true),
            || false,
            |v: &bool| !v,
            |node, _: &bool, _: &bool| Err(Error::invariant(node, "unknown node")),
        );
        let err = simulate_aig(&aig, &d, &SimulateSettings::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainInvariantViolation);
        assert_eq!(err.node(), f.node());
    }

    #[test]
    fn test_deep_chain_no_stack_overflow() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let mut x = a;
        for _ in 0..200_000 {
            x = aig.add_and(x, Signal::one());
        }
        let d = Counting::new(vec![true]);
        assert!(simulate_signal_once(&aig, x, &d).unwrap());
    }

    #[test]
    fn test_stale_cache() {
        let mut aig = Aig::default();
        let a = aig.add_input("a");
        let d = Counting::new(vec![true]);
        let mut colors = ColorMap::from([(a.node(), Color::Black)]);
        let mut values = NodeValues::new();
        let err = simulate_signal(&aig, a, &d, &mut colors, &mut values).unwrap_err();
        assert_eq!(err, Error::StaleCache { node: a.node() });
    }
}
