//! Circuit enumeration engines.
//!
//! For a fixed number of gates an engine walks the wirings of gate wires
//! `ninputs..nwires`, each gate reading two earlier wires `right <= left`,
//! and reports every complete wiring whose output matches the target.
//!
//! | Engine | Formulation | Pruning | Use Case |
//! |--------|-------------|---------|----------|
//! | [`Pruned`] | Recursive | Symmetry, slack, duplicates | Production (default) |
//! | [`Odometer`] | Iterative mixed-radix counter | Commutativity only | Reference / cross-checking |
//!
//! Both engines visit matches in the same lexicographic order (earlier wires
//! are more significant; for each wire `left` is the outer digit and `right`
//! the inner one), so the first match of the odometer is never later than
//! the first match of the pruned engine. The odometer explores a superset of
//! the pruned candidates: it never misses a circuit the pruned engine finds.
//!
//! # Example
//!
//! ```
//! use nand_superopt::search::{Engine, Problem};
//! use nand_superopt::truth::TruthTable;
//!
//! let problem = Problem::new(TruthTable::parse("0110").unwrap());
//! let (found, _stats) = Engine::Pruned.strategy().search(&problem, 4);
//! assert_eq!(
//!     found.unwrap().to_string(),
//!     "c = ~(B A); d = ~(c B); e = ~(c A); f = ~(e d)"
//! );
//! ```

mod odometer;
mod pruned;

pub use odometer::Odometer;
pub use pruned::{PruneRules, Pruned};

use std::fmt;
use std::ops::{AddAssign, ControlFlow};
use std::str::FromStr;

use crate::circuit::Circuit;
use crate::truth::{tabulate_inputs, TruthTable, Word};
use crate::MAX_WIRES;

/// A target together with the tabulated words of its inputs.
#[derive(Debug, Clone)]
pub struct Problem {
    target: TruthTable,
    inputs: Vec<Word>,
}

impl Problem {
    pub fn new(target: TruthTable) -> Self {
        let inputs = tabulate_inputs(target.ninputs());
        Problem { target, inputs }
    }

    pub fn target(&self) -> &TruthTable {
        &self.target
    }

    /// Words of the primary inputs, `A` first.
    pub fn inputs(&self) -> &[Word] {
        &self.inputs
    }

    pub fn ninputs(&self) -> usize {
        self.target.ninputs()
    }
}

/// Counters for one search level.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Complete circuits whose output was compared with the target.
    pub candidates: u64,
    /// Circuits that matched (and were handed to the visitor).
    pub matches: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.candidates += rhs.candidates;
        self.matches += rhs.matches;
    }
}

/// A way of enumerating the circuits with a fixed number of gates.
pub trait Strategy {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Calls `visit` for every matching circuit with exactly `num_gates` gates,
    /// in lexicographic wiring order, until `visit` breaks or the space is
    /// exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `num_gates` is zero or the circuit would exceed
    /// [`MAX_WIRES`](crate::MAX_WIRES) wires.
    fn for_each_match(
        &self,
        problem: &Problem,
        num_gates: usize,
        visit: &mut dyn FnMut(&Circuit) -> ControlFlow<()>,
    ) -> SearchStats;

    /// Returns the first matching circuit with exactly `num_gates` gates, if any.
    fn search(&self, problem: &Problem, num_gates: usize) -> (Option<Circuit>, SearchStats) {
        let mut found = None;
        let stats = self.for_each_match(problem, num_gates, &mut |circuit: &Circuit| {
            found = Some(circuit.clone());
            ControlFlow::Break(())
        });
        (found, stats)
    }

    /// Returns every matching circuit with exactly `num_gates` gates.
    fn search_all(&self, problem: &Problem, num_gates: usize) -> (Vec<Circuit>, SearchStats) {
        let mut found = Vec::new();
        let stats = self.for_each_match(problem, num_gates, &mut |circuit: &Circuit| {
            found.push(circuit.clone());
            ControlFlow::Continue(())
        });
        (found, stats)
    }
}

/// Checks the level parameters shared by all engines.
///
/// Returns false when there is nothing to enumerate (a circuit without
/// inputs has no wire for its first gate to read).
fn level_is_searchable(problem: &Problem, num_gates: usize) -> bool {
    assert!(num_gates > 0, "a search level needs at least one gate");
    let num_wires = problem.ninputs() + num_gates;
    assert!(
        num_wires <= MAX_WIRES,
        "{} wires exceed the supported maximum of {}",
        num_wires,
        MAX_WIRES
    );
    problem.ninputs() > 0
}

/// Available enumeration engines.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Engine {
    /// Recursive search with all sound pruning rules.
    #[default]
    Pruned,
    /// Unpruned odometer sweep.
    Odometer,
}

impl Engine {
    /// Returns the engine with its default settings.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Engine::Pruned => Box::new(Pruned::default()),
            Engine::Odometer => Box::new(Odometer),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Pruned => write!(f, "pruned"),
            Engine::Odometer => write!(f, "odometer"),
        }
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pruned" => Ok(Engine::Pruned),
            "odometer" => Ok(Engine::Odometer),
            other => Err(format!("unknown engine {:?} (expected 'pruned' or 'odometer')", other)),
        }
    }
}
