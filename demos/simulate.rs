use std::collections::HashMap;

use clap::{Parser, ValueEnum};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use aig_sim::aig::Aig;
use aig_sim::bdd::Bdd;
use aig_sim::bits::BitVec;
use aig_sim::domain::Domain;
use aig_sim::domains::{BddDomain, DepthDomain, NameAssignment, Pattern, TruthTableDomain, WordAssignment};
use aig_sim::signal::Signal;
use aig_sim::simulate::{simulate_aig, SimulateSettings};
use aig_sim::stats::AigStats;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// Single Boolean vector, `a + b`.
    Bool,
    /// Random 64-bit stimulus words.
    Words,
    /// Full truth tables (small widths only).
    Table,
    /// Shared BDD per output.
    Bdd,
    /// Logic depth per output.
    Depth,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Adder width in bits.
    #[arg(value_name = "INT", default_value = "4")]
    width: usize,

    #[clap(long, value_enum, default_value = "bool")]
    mode: Mode,

    /// First operand for `bool` mode.
    #[clap(short, value_name = "INT", default_value = "5")]
    a: u64,

    /// Second operand for `bool` mode.
    #[clap(short, value_name = "INT", default_value = "3")]
    b: u64,

    /// Look inputs up by name instead of by position.
    #[clap(long)]
    by_name: bool,

    /// Seed for `words` mode.
    #[clap(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Log each output as it is simulated.
    #[clap(short, long)]
    verbose: bool,
}

/// Ripple-carry adder: inputs `a0.., b0..`, outputs `s0..` and `cout`.
fn ripple_carry_adder(width: usize) -> Aig {
    let mut aig = Aig::new(format!("adder{}", width));
    let a: Vec<Signal> = (0..width).map(|i| aig.add_input(format!("a{}", i))).collect();
    let b: Vec<Signal> = (0..width).map(|i| aig.add_input(format!("b{}", i))).collect();
    let mut carry = Signal::zero();
    for i in 0..width {
        let half = aig.add_xor(a[i], b[i]);
        let sum = aig.add_xor(half, carry);
        let generate = aig.add_and(a[i], b[i]);
        let propagate = aig.add_and(half, carry);
        aig.add_output(sum, format!("s{}", i));
        carry = aig.add_or(generate, propagate);
    }
    aig.add_output(carry, "cout");
    aig
}

fn boolean_domain(args: &Cli, aig: &Aig) -> Box<dyn Domain<Value = bool>> {
    let bit = |x: u64, i: usize| i < 64 && x >> i & 1 != 0;
    if args.by_name {
        let mut values = HashMap::new();
        for i in 0..args.width {
            values.insert(format!("a{}", i), bit(args.a, i));
            values.insert(format!("b{}", i), bit(args.b, i));
        }
        Box::new(NameAssignment::new(values))
    } else {
        let bools: Vec<bool> = (0..aig.num_inputs())
            .map(|pos| {
                if pos < args.width {
                    bit(args.a, pos)
                } else {
                    bit(args.b, pos - args.width)
                }
            })
            .collect();
        Box::new(Pattern::new(BitVec::from_bools(bools)))
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let aig = ripple_carry_adder(args.width);
    println!("aig = {:?}", aig);
    println!("{}", AigStats::new(&aig)?);

    let settings = SimulateSettings { verbose: args.verbose };

    match args.mode {
        Mode::Bool => {
            let domain = boolean_domain(&args, &aig);
            let sim = simulate_aig(&aig, &domain, &settings)?;
            let mut sum = 0u128;
            for (i, (name, &value)) in sim.output_values(&aig).into_iter().enumerate() {
                println!("{} = {}", name, value as u8);
                if value && i < 128 {
                    sum |= 1 << i;
                }
            }
            println!("{} + {} = {} (mod 2^{})", args.a, args.b, sum, args.width + 1);
            println!("runtime: {:?}", sim.runtime);
        }
        Mode::Words => {
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let values = aig
                .inputs()
                .iter()
                .map(|(_, name)| (name.clone(), BitVec::from_u64(rng.gen(), 64)))
                .collect();
            let domain = WordAssignment::new(64, values);
            let sim = simulate_aig(&aig, &domain, &settings)?;
            for (name, value) in sim.output_values(&aig) {
                println!("{} = {}", name, value);
            }
            println!("runtime: {:?}", sim.runtime);
        }
        Mode::Table => {
            let domain = TruthTableDomain::for_aig(&aig);
            let sim = simulate_aig(&aig, &domain, &settings)?;
            for (name, value) in sim.output_values(&aig) {
                println!("{}: {} of {} rows true", name, value.count_ones(), value.num_rows());
            }
            println!("runtime: {:?}", sim.runtime);
        }
        Mode::Bdd => {
            let bdd = Bdd::default();
            let sim = simulate_aig(&aig, &BddDomain::new(&bdd), &settings)?;
            for (name, &f) in sim.output_values(&aig) {
                println!(
                    "{}: size {}, {} models",
                    name,
                    bdd.size(f),
                    bdd.sat_count(f, aig.num_inputs())
                );
            }
            println!("bdd = {:?}", bdd);
            println!("runtime: {:?}", sim.runtime);
        }
        Mode::Depth => {
            let sim = simulate_aig(&aig, &DepthDomain, &settings)?;
            for (name, depth) in sim.output_values(&aig) {
                println!("{}: depth {}", name, depth);
            }
        }
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
