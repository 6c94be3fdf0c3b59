//! Iterative enumeration as a mixed-radix counter.
//!
//! The whole wiring is one number: each gate is a digit pair `(left, right)`
//! with `right <= left < wire`, earlier gates being more significant. The
//! output gate's `right` is swept in a tight inner loop; everything else is
//! advanced like an odometer, and only the wires at or after the highest
//! changed digit are re-simulated.
//!
//! No pruning beyond commutativity is done, so a full level evaluates exactly
//! [`search_space_size`](crate::space::search_space_size) candidates.

use std::ops::ControlFlow;

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::search::{level_is_searchable, Problem, SearchStats, Strategy};
use crate::truth::nand;

/// The odometer engine.
#[derive(Debug, Copy, Clone, Default)]
pub struct Odometer;

impl Strategy for Odometer {
    fn name(&self) -> &'static str {
        "odometer"
    }

    fn for_each_match(
        &self,
        problem: &Problem,
        num_gates: usize,
        visit: &mut dyn FnMut(&Circuit) -> ControlFlow<()>,
    ) -> SearchStats {
        let mut stats = SearchStats::default();
        if !level_is_searchable(problem, num_gates) {
            return stats;
        }
        let target = problem.target();
        let ninputs = problem.ninputs();
        let output = ninputs + num_gates - 1;

        let mut gates = vec![Gate::from_indices(0, 0); num_gates];
        let mut words = problem.inputs().to_vec();
        words.resize(ninputs + num_gates, 0);

        let mut stale = ninputs;
        loop {
            for wire in stale..output {
                words[wire] = gates[wire - ninputs].eval(&words);
            }

            let left = gates[output - ninputs].left().index();
            let left_word = words[left];
            for right in 0..=left {
                stats.candidates += 1;
                if target.matches(nand(left_word, words[right])) {
                    stats.matches += 1;
                    gates[output - ninputs] = Gate::from_indices(left, right);
                    let circuit = Circuit::from_search(ninputs, gates.clone());
                    if visit(&circuit).is_break() {
                        return stats;
                    }
                }
            }

            match advance(&mut gates, ninputs) {
                Some(wire) => stale = wire,
                None => return stats,
            }
        }
    }
}

/// Steps `gates` to the next wiring and returns the highest changed wire,
/// or `None` once every wiring has been visited.
///
/// The output gate only advances its left input (its right input is swept by
/// the caller). Every other gate counts `right` up to `left`, then moves to
/// the next `left` with `right` back at zero.
fn advance(gates: &mut [Gate], ninputs: usize) -> Option<usize> {
    let last = gates.len() - 1;

    let output = ninputs + last;
    let left = gates[last].left().index();
    if left + 1 < output {
        gates[last] = Gate::from_indices(left + 1, 0);
        return Some(output);
    }
    gates[last] = Gate::from_indices(0, 0);

    // Carry
    for pos in (0..last).rev() {
        let wire = ninputs + pos;
        let left = gates[pos].left().index();
        let right = gates[pos].right().index();
        if right < left {
            gates[pos] = Gate::from_indices(left, right + 1);
            return Some(wire);
        }
        if left + 1 < wire {
            gates[pos] = Gate::from_indices(left + 1, 0);
            return Some(wire);
        }
        gates[pos] = Gate::from_indices(0, 0);
    }
    None
}
