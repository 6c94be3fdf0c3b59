//! NAND circuits and synthesis solutions.
//!
//! A [`Circuit`] is a topologically ordered list of gates over `ninputs`
//! primary inputs; the last gate drives the output. A [`Solution`] is what
//! the synthesizer reports: either such a circuit or one of the zero-gate
//! degenerate answers (a constant or a bare input).
//!
//! Two independent evaluators are provided. [`Circuit::simulate`] computes
//! whole truth-table words, exactly like the search engines do.
//! [`Circuit::eval_row`] walks the gates one row at a time with plain
//! booleans; it is slow but shares no code with the word model, which makes
//! it the reference used to verify search results.

use std::fmt;

use crate::error::SynthError;
use crate::gate::Gate;
use crate::truth::{input_value, num_rows, tabulate_inputs, TruthTable, Word, MAX_INPUTS};
use crate::types::{output_name, Wire};

/// A combinational circuit made of 2-input NAND gates.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Circuit {
    ninputs: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a circuit, checking that it is well formed.
    ///
    /// The gate at position `i` defines wire `ninputs + i` and may only read
    /// wires with smaller indices. At least one gate is required, since the
    /// last gate is the output.
    pub fn new(ninputs: usize, gates: Vec<Gate>) -> Result<Self, SynthError> {
        if ninputs > MAX_INPUTS {
            return Err(SynthError::TooManyInputs {
                ninputs,
                max: MAX_INPUTS,
            });
        }
        if gates.is_empty() {
            return Err(SynthError::InvalidCircuit {
                message: "a circuit needs at least one gate".to_string(),
            });
        }
        for (i, gate) in gates.iter().enumerate() {
            let wire = ninputs + i;
            if gate.left().index() >= wire {
                return Err(SynthError::InvalidCircuit {
                    message: format!(
                        "gate {} reads wire {}, which is not defined before it",
                        Wire::new(wire).name(ninputs),
                        gate.left().index()
                    ),
                });
            }
        }
        Ok(Circuit { ninputs, gates })
    }

    /// Creates a circuit from search state that is well formed by construction.
    pub(crate) fn from_search(ninputs: usize, gates: Vec<Gate>) -> Self {
        debug_assert!(Circuit::new(ninputs, gates.clone()).is_ok());
        Circuit { ninputs, gates }
    }

    pub fn ninputs(&self) -> usize {
        self.ninputs
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    pub fn num_wires(&self) -> usize {
        self.ninputs + self.gates.len()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The wire driving the circuit output (the last gate).
    pub fn output(&self) -> Wire {
        Wire::new(self.num_wires() - 1)
    }

    /// Returns the gate defining `wire`, or `None` for an input wire.
    pub fn gate(&self, wire: Wire) -> Option<&Gate> {
        wire.index()
            .checked_sub(self.ninputs)
            .and_then(|i| self.gates.get(i))
    }

    /// Iterates over gate wires together with their definitions.
    pub fn wires(&self) -> impl Iterator<Item = (Wire, &Gate)> + '_ {
        self.gates
            .iter()
            .enumerate()
            .map(move |(i, gate)| (Wire::new(self.ninputs + i), gate))
    }

    /// Number of gate inputs reading `wire`. An inverter reading it twice counts twice.
    pub fn fanout(&self, wire: Wire) -> usize {
        self.gates
            .iter()
            .flat_map(|gate| gate.inputs())
            .filter(|&input| input == wire)
            .count()
    }

    /// Truth-table words of every wire, inputs first.
    pub fn simulate(&self) -> Vec<Word> {
        let mut words = tabulate_inputs(self.ninputs);
        words.reserve(self.gates.len());
        for gate in &self.gates {
            let word = gate.eval(&words);
            words.push(word);
        }
        words
    }

    /// Truth-table word of the output (unmasked).
    pub fn output_word(&self) -> Word {
        self.simulate()[self.output().index()]
    }

    /// Output of the circuit for a single truth-table row.
    pub fn eval_row(&self, row: usize) -> bool {
        assert!(row < num_rows(self.ninputs), "row {} out of range", row);
        let mut values: Vec<bool> = (0..self.ninputs)
            .map(|input| input_value(self.ninputs, row, input))
            .collect();
        for gate in &self.gates {
            let value = gate.eval_row(&values);
            values.push(value);
        }
        values[self.output().index()]
    }

    /// Lazily evaluates the output row by row, first row first.
    pub fn rows(&self) -> Rows<'_> {
        Rows { circuit: self, row: 0 }
    }

    /// Checks the circuit against `target` row by row, stopping at the first mismatch.
    pub fn implements(&self, target: &TruthTable) -> bool {
        self.ninputs == target.ninputs() && target.accepts_rows(self.rows())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (wire, gate) in self.wires() {
            if wire.index() > self.ninputs {
                write!(f, "; ")?;
            }
            write!(
                f,
                "{} = ~({} {})",
                wire.name(self.ninputs),
                gate.left().name(self.ninputs),
                gate.right().name(self.ninputs)
            )?;
        }
        Ok(())
    }
}

/// Lazy row-by-row evaluation of a circuit, see [`Circuit::rows`].
pub struct Rows<'a> {
    circuit: &'a Circuit,
    row: usize,
}

impl Iterator for Rows<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= num_rows(self.circuit.ninputs) {
            return None;
        }
        let output = self.circuit.eval_row(self.row);
        self.row += 1;
        Some(output)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = num_rows(self.circuit.ninputs) - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// A synthesized implementation of a target function.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Solution {
    /// The target is constant; no gates needed.
    Constant { ninputs: usize, value: bool },
    /// The target equals one of the inputs; no gates needed.
    Input { ninputs: usize, wire: Wire },
    /// A circuit with at least one gate.
    Circuit(Circuit),
}

impl Solution {
    pub fn ninputs(&self) -> usize {
        match self {
            Solution::Constant { ninputs, .. } => *ninputs,
            Solution::Input { ninputs, .. } => *ninputs,
            Solution::Circuit(circuit) => circuit.ninputs(),
        }
    }

    pub fn num_gates(&self) -> usize {
        match self {
            Solution::Constant { .. } | Solution::Input { .. } => 0,
            Solution::Circuit(circuit) => circuit.num_gates(),
        }
    }

    pub fn as_circuit(&self) -> Option<&Circuit> {
        match self {
            Solution::Circuit(circuit) => Some(circuit),
            _ => None,
        }
    }

    /// Output for a single truth-table row.
    pub fn eval_row(&self, row: usize) -> bool {
        match self {
            Solution::Constant { value, .. } => *value,
            Solution::Input { ninputs, wire } => input_value(*ninputs, row, wire.index()),
            Solution::Circuit(circuit) => circuit.eval_row(row),
        }
    }

    /// Checks the solution against `target` row by row.
    pub fn implements(&self, target: &TruthTable) -> bool {
        self.ninputs() == target.ninputs()
            && target.accepts_rows((0..target.num_rows()).map(|row| self.eval_row(row)))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Constant { ninputs, value } => {
                write!(f, "{} = {}", output_name(*ninputs), *value as u8)
            }
            Solution::Input { ninputs, wire } => {
                write!(f, "{} = {}", output_name(*ninputs), wire.name(*ninputs))
            }
            Solution::Circuit(circuit) => write!(f, "{}", circuit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(index: usize) -> Wire {
        Wire::new(index)
    }

    fn and2() -> Circuit {
        // c = ~(B A); d = ~(c c)
        Circuit::new(2, vec![Gate::nand(w(1), w(0)), Gate::nand(w(2), w(2))]).unwrap()
    }

    #[test]
    fn test_circuit_basics() {
        let c = and2();
        assert_eq!(c.ninputs(), 2);
        assert_eq!(c.num_gates(), 2);
        assert_eq!(c.num_wires(), 4);
        assert_eq!(c.output(), w(3));
        assert_eq!(c.gate(w(0)), None);
        assert_eq!(c.gate(w(2)), Some(&Gate::nand(w(0), w(1))));
        assert_eq!(c.fanout(w(2)), 2);
        assert_eq!(c.fanout(w(0)), 1);
        assert_eq!(c.fanout(w(3)), 0);
    }

    #[test]
    fn test_circuit_rejects_forward_reference() {
        let err = Circuit::new(2, vec![Gate::nand(w(2), w(0))]).unwrap_err();
        assert!(matches!(err, SynthError::InvalidCircuit { .. }));
        assert!(Circuit::new(2, vec![]).is_err());
        assert!(Circuit::new(6, vec![Gate::nand(w(0), w(0))]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(and2().to_string(), "c = ~(B A); d = ~(c c)");
        let not = Circuit::new(1, vec![Gate::nand(w(0), w(0))]).unwrap();
        assert_eq!(not.to_string(), "b = ~(A A)");
    }

    #[test]
    fn test_simulate() {
        let c = and2();
        let words = c.simulate();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0], 0b0011);
        assert_eq!(words[1], 0b0101);
        assert_eq!(c.output_word() & 0b1111, 0b0001);
    }

    #[test]
    fn test_rows_agree_with_simulation() {
        let c = and2();
        let rows: Vec<bool> = c.rows().collect();
        assert_eq!(rows, vec![false, false, false, true]);
        assert_eq!(c.rows().len(), 4);
        let target = TruthTable::parse("0001").unwrap();
        assert!(c.implements(&target));
        assert!(target.matches(c.output_word()));
        assert!(!c.implements(&TruthTable::parse("0111").unwrap()));
        assert!(!c.implements(&TruthTable::parse("00010001").unwrap()));
    }

    #[test]
    fn test_solution_display() {
        let zero = Solution::Constant { ninputs: 2, value: false };
        let one = Solution::Constant { ninputs: 2, value: true };
        let a = Solution::Input { ninputs: 2, wire: w(0) };
        assert_eq!(zero.to_string(), "C = 0");
        assert_eq!(one.to_string(), "C = 1");
        assert_eq!(a.to_string(), "C = A");
        assert_eq!(Solution::Circuit(and2()).to_string(), "c = ~(B A); d = ~(c c)");
    }

    #[test]
    fn test_solution_implements() {
        let a = Solution::Input { ninputs: 2, wire: w(0) };
        assert!(a.implements(&TruthTable::parse("0011").unwrap()));
        assert!(!a.implements(&TruthTable::parse("0101").unwrap()));
        let one = Solution::Constant { ninputs: 2, value: true };
        assert!(one.implements(&TruthTable::parse("1x11").unwrap()));
        assert_eq!(one.num_gates(), 0);
        assert_eq!(Solution::Circuit(and2()).num_gates(), 2);
    }
}
