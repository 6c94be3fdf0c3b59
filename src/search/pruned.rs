//! Recursive enumeration with canonicalization and pruning.
//!
//! The search assigns gate wires in order. For every wire it tries each
//! canonical input pair `right <= left`, computes the gate word and either
//! recurses to the next wire or, at the output wire, compares with the
//! target. Four rules cut branches that cannot lead to a new minimal circuit:
//!
//! - **Slack.** Every gate except the output must feed a later gate, or it
//!   could be deleted. Each wire carries the set of gates it transitively
//!   reads; if the gates still unread outnumber the input slots left to
//!   fill, the branch is dead. At the output wire the candidate must read
//!   every remaining gate, which forces its left input to be the previous
//!   gate.
//! - **Commuting order.** A gate that reads nothing in `k..w` can be moved in
//!   front of gate `k` without changing the circuit. Among such orderings only
//!   the one with strictly increasing words is kept.
//! - **Duplicates.** A gate computing a word that an earlier wire already
//!   has is redundant.
//! - **Value order** (off by default). Skips pairs whose right word exceeds
//!   the left word. Input order is already fixed by `right <= left`, so this
//!   throws away genuinely different circuits and can miss minimal ones.

use std::ops::{ControlFlow, Range};

use crate::bitset::WireSet;
use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::search::{level_is_searchable, Problem, SearchStats, Strategy};
use crate::truth::{nand, TruthTable, Word};
use crate::types::Wire;

/// Switches for the individual pruning rules.
///
/// Commutativity (`right <= left`) is always enforced.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PruneRules {
    /// Skip pairs whose right word is greater than the left word (default: false, lossy).
    pub value_order: bool,
    /// Reject branches that would leave a gate unused (default: true).
    pub slack: bool,
    /// Keep only increasing words among mutually independent gates (default: true).
    pub commuting_order: bool,
    /// Reject gates that recompute an existing word (default: true).
    pub duplicates: bool,
}

impl PruneRules {
    /// No pruning beyond commutativity.
    pub fn none() -> Self {
        PruneRules {
            value_order: false,
            slack: false,
            commuting_order: false,
            duplicates: false,
        }
    }
}

impl Default for PruneRules {
    fn default() -> Self {
        PruneRules {
            value_order: false,
            slack: true,
            commuting_order: true,
            duplicates: true,
        }
    }
}

/// The recursive pruning engine.
#[derive(Debug, Clone, Default)]
pub struct Pruned {
    rules: PruneRules,
}

impl Pruned {
    pub fn new(rules: PruneRules) -> Self {
        Pruned { rules }
    }
}

impl Strategy for Pruned {
    fn name(&self) -> &'static str {
        "pruned"
    }

    fn for_each_match(
        &self,
        problem: &Problem,
        num_gates: usize,
        visit: &mut dyn FnMut(&Circuit) -> ControlFlow<()>,
    ) -> SearchStats {
        if !level_is_searchable(problem, num_gates) {
            return SearchStats::default();
        }
        let ninputs = problem.ninputs();
        let num_wires = ninputs + num_gates;

        let mut words = problem.inputs().to_vec();
        words.resize(num_wires, 0);

        let mut sweep = Sweep {
            target: problem.target(),
            rules: self.rules,
            ninputs,
            num_gates,
            num_wires,
            words,
            gates: vec![Gate::from_indices(0, 0); num_gates],
            used: vec![WireSet::empty(); num_wires],
            stats: SearchStats::default(),
            visit,
        };
        let _ = sweep.sweep(ninputs, WireSet::empty());
        sweep.stats
    }
}

/// Search state for one level, threaded through the recursion.
struct Sweep<'a, 'v> {
    target: &'a TruthTable,
    rules: PruneRules,
    ninputs: usize,
    num_gates: usize,
    num_wires: usize,
    /// Word of every wire placed so far.
    words: Vec<Word>,
    /// Current wiring, one gate per gate wire.
    gates: Vec<Gate>,
    /// Gate wires transitively read by each wire, the wire itself included.
    used: Vec<WireSet>,
    stats: SearchStats,
    visit: &'v mut dyn FnMut(&Circuit) -> ControlFlow<()>,
}

impl Sweep<'_, '_> {
    /// Tries every extension of the partial circuit below wire `w`.
    ///
    /// `prev_used` holds the gate wires read by the gates placed so far.
    fn sweep(&mut self, w: usize, prev_used: WireSet) -> ControlFlow<()> {
        if w + 1 == self.num_wires {
            return self.sweep_output(w, prev_used);
        }

        for left in 0..w {
            for right in 0..=left {
                if self.rules.value_order && self.words[left] < self.words[right] {
                    continue;
                }

                let used = self.used[left].union(self.used[right]);
                let all_used = prev_used.union(used);
                if self.rules.slack && !self.has_slack(w, all_used) {
                    continue;
                }

                let word = nand(self.words[left], self.words[right]);
                if self.is_redundant(w, word, used) {
                    continue;
                }

                self.words[w] = word;
                self.used[w] = used.with(Wire::new(w));
                self.gates[w - self.ninputs] = Gate::from_indices(left, right);
                self.sweep(w + 1, all_used)?;
            }
        }
        ControlFlow::Continue(())
    }

    /// Tries every output gate for the complete circuit below wire `w`.
    fn sweep_output(&mut self, w: usize, prev_used: WireSet) -> ControlFlow<()> {
        let required = WireSet::range(self.ninputs, w);
        for left in self.output_lefts(w) {
            let left_word = self.words[left];
            for right in 0..=left {
                if self.rules.value_order && left_word < self.words[right] {
                    continue;
                }
                if self.rules.slack {
                    let all_used = prev_used.union(self.used[left]).union(self.used[right]);
                    if !all_used.is_superset(&required) {
                        continue;
                    }
                }

                self.stats.candidates += 1;
                if self.target.matches(nand(left_word, self.words[right])) {
                    self.stats.matches += 1;
                    self.gates[w - self.ninputs] = Gate::from_indices(left, right);
                    let circuit = Circuit::from_search(self.ninputs, self.gates.clone());
                    (self.visit)(&circuit)?;
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Left inputs worth trying for the output gate at wire `w`.
    ///
    /// Nothing but the output can read the gate just before it, and with
    /// `right <= left` that makes it the left input.
    fn output_lefts(&self, w: usize) -> Range<usize> {
        let previous = w - 1;
        if self.rules.slack && previous >= self.ninputs {
            previous..w
        } else {
            0..w
        }
    }

    /// Checks that the input slots of gates after `w` can still read every
    /// non-output gate missing from `all_used`.
    fn has_slack(&self, w: usize, all_used: WireSet) -> bool {
        let open_slots = 2 * (self.num_wires - w - 1);
        let unused = (self.num_gates - 1).saturating_sub(all_used.len());
        open_slots >= unused
    }

    /// Applies the commuting-order and duplicate rules to a new gate at `w`.
    fn is_redundant(&self, w: usize, word: Word, used: WireSet) -> bool {
        let mut k = w;
        if self.rules.commuting_order {
            while k > self.ninputs {
                let earlier = k - 1;
                if used.contains(Wire::new(earlier)) {
                    break;
                }
                if word <= self.words[earlier] {
                    return true;
                }
                k = earlier;
            }
        }
        // Wires at or above `k` are strictly smaller than `word` by now.
        self.rules.duplicates && self.words[..k].contains(&word)
    }
}
