//! Human-readable renderings of solutions.
//!
//! The canonical gate listing is the [`Display`](std::fmt::Display) impl of
//! [`Solution`]. This module adds a nested expression form and a row-by-row
//! truth-table listing.

use crate::circuit::{Circuit, Solution};
use crate::truth::{input_value, num_rows};
use crate::types::{output_name, Wire};

/// Renders a solution as nested NAND expressions, one line per named wire.
///
/// A gate gets its own line if it is the output or feeds anything other than
/// exactly one gate input; every other gate is inlined into its single reader.
///
/// ```
/// use nand_superopt::print::expression;
/// use nand_superopt::synth::{synthesize, SynthConfig};
/// use nand_superopt::truth::TruthTable;
///
/// let target = TruthTable::parse("0110").unwrap();
/// let report = synthesize(&target, &SynthConfig::default()).unwrap();
/// assert_eq!(expression(report.best().unwrap()), "c = ~(B A)\nf = ~(~(c A) ~(c B))");
/// ```
pub fn expression(solution: &Solution) -> String {
    let circuit = match solution {
        Solution::Circuit(circuit) => circuit,
        other => return other.to_string(),
    };

    let output = circuit.output();
    let named: Vec<bool> = (0..circuit.num_wires())
        .map(|w| {
            let wire = Wire::new(w);
            wire.is_input(circuit.ninputs()) || wire == output || circuit.fanout(wire) != 1
        })
        .collect();

    let mut lines = Vec::new();
    for (wire, gate) in circuit.wires() {
        if !named[wire.index()] {
            continue;
        }
        lines.push(format!(
            "{} = ~({} {})",
            wire.name(circuit.ninputs()),
            term(circuit, gate.left(), &named),
            term(circuit, gate.right(), &named)
        ));
    }
    lines.join("\n")
}

fn term(circuit: &Circuit, wire: Wire, named: &[bool]) -> String {
    match circuit.gate(wire) {
        Some(gate) if !named[wire.index()] => format!(
            "~({} {})",
            term(circuit, gate.left(), named),
            term(circuit, gate.right(), named)
        ),
        _ => wire.name(circuit.ninputs()),
    }
}

/// Lists the output of a solution for every row, e.g. `0 1 -> 1`.
///
/// The first line names the inputs and the output.
pub fn truth_table(solution: &Solution) -> String {
    let ninputs = solution.ninputs();
    let mut lines = Vec::with_capacity(num_rows(ninputs) + 1);

    let mut header: Vec<String> = (0..ninputs).map(|i| Wire::new(i).name(ninputs)).collect();
    header.push("->".to_string());
    header.push(output_name(ninputs));
    lines.push(header.join(" "));

    for row in 0..num_rows(ninputs) {
        let mut cells: Vec<&str> = (0..ninputs)
            .map(|input| bit(input_value(ninputs, row, input)))
            .collect();
        cells.push("->");
        cells.push(bit(solution.eval_row(row)));
        lines.push(cells.join(" "));
    }
    lines.join("\n")
}

fn bit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
