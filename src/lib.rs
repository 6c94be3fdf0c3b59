//! # nand-superopt: minimal NAND circuits by exhaustive search
//!
//! **`nand-superopt`** finds a smallest circuit of 2-input NAND gates that
//! computes a given boolean function of up to five inputs. The function is
//! given as a truth table, and circuits are enumerated by increasing gate
//! count, so the first circuit found is minimal.
//!
//! ## How it works
//!
//! Every wire carries a truth-table *word*: bit `2^n - 1 - k` is the wire's
//! value in row `k`. A gate's word is the bitwise NAND of its input words, so
//! a whole circuit is simulated on all rows at once with a handful of integer
//! operations.
//!
//! For a fixed gate count the [`search`] engines walk all wirings in
//! topological order (every gate reads earlier wires only) and compare the
//! output word with the target. The default engine prunes symmetric and
//! redundant wirings; the odometer engine does not and serves as a reference.
//!
//! ## Key Features
//!
//! - **Two engines** behind one [`Strategy`][crate::search::Strategy] trait:
//!   recursive with pruning, and an iterative mixed-radix odometer.
//! - **Don't-care rows**: `x` in a pattern matches either output value.
//! - **Degenerate targets** (constants and bare inputs) are answered without gates.
//! - **Independent verification**: results are re-evaluated row by row with
//!   plain booleans.
//! - **Rendering**: gate listings, nested expressions, truth tables and Graphviz.
//!
//! ## Basic Usage
//!
//! ```rust
//! use nand_superopt::synth::{synthesize, SynthConfig};
//! use nand_superopt::truth::TruthTable;
//!
//! // 1. Describe the target: AND over two inputs
//! let target = TruthTable::parse("0001").unwrap();
//!
//! // 2. Search with the default settings (pruned engine, up to 6 gates)
//! let report = synthesize(&target, &SynthConfig::default()).unwrap();
//!
//! // 3. Inspect the result
//! let solution = report.best().unwrap();
//! assert_eq!(solution.num_gates(), 2);
//! assert_eq!(solution.to_string(), "c = ~(B A); d = ~(c c)");
//! assert!(solution.implements(&target));
//! ```
//!
//! ## Core Components
//!
//! - **[`truth`]**: Truth-table words and target functions.
//! - **[`circuit`]**: Circuits, their evaluation, and synthesis solutions.
//! - **[`search`]**: The enumeration engines.
//! - **[`synth`]**: The gate-count escalation driver.
//! - **[`print`]** and **[`dot`]**: Renderings.

pub mod bitset;
pub mod circuit;
pub mod dot;
pub mod error;
pub mod gate;
pub mod print;
pub mod search;
pub mod space;
pub mod synth;
pub mod truth;
pub mod types;

pub use crate::circuit::{Circuit, Solution};
pub use crate::error::SynthError;
pub use crate::synth::{synthesize, SynthConfig};
pub use crate::truth::TruthTable;

/// Largest number of wires (inputs plus gates) a circuit may have.
pub const MAX_WIRES: usize = bitset::WireSet::CAPACITY;
