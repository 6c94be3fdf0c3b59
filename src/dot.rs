//! Circuit to DOT (Graphviz) conversion.
//!
//! # DOT Format
//!
//! The generated graph is directed, signals flowing from the inputs to the
//! output:
//! - **Input wires** are boxes at the top (source rank)
//! - **Gates** are grouped by logic depth, one rank per depth
//! - **Output** is a separate node at the bottom (sink rank), fed by the last gate
//! - **Inverters** (gates reading the same wire twice) get a single edge,
//!   drawn with the inverter edge style
//!
//! # Examples
//!
//! ```
//! use nand_superopt::dot::to_dot;
//! use nand_superopt::synth::{synthesize, SynthConfig};
//! use nand_superopt::truth::TruthTable;
//!
//! let target = TruthTable::parse("0001").unwrap();
//! let report = synthesize(&target, &SynthConfig::default()).unwrap();
//! let dot = to_dot(report.best().unwrap()).unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::circuit::{Circuit, Solution};
use crate::truth::row_mask;
use crate::types::{output_name, Wire};

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
///
/// ```
/// use nand_superopt::dot::DotConfig;
///
/// let config = DotConfig {
///     rankdir: "LR",
///     ..DotConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for input wires (default: "box")
    pub input_shape: &'static str,
    /// Shape for gates (default: "circle")
    pub gate_shape: &'static str,
    /// Shape for the output node (default: "doublecircle")
    pub output_shape: &'static str,
    /// Style for the doubled edge of inverters (default: "bold")
    pub inverter_edge_style: &'static str,
    /// Layout direction (default: "TB")
    pub rankdir: &'static str,
    /// Whether to label gates with their truth-table word (default: false)
    pub show_words: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            input_shape: "box",
            gate_shape: "circle",
            output_shape: "doublecircle",
            inverter_edge_style: "bold",
            rankdir: "TB",
            show_words: false,
        }
    }
}

/// Converts a solution to DOT format with the default configuration.
pub fn to_dot(solution: &Solution) -> Result<String, std::fmt::Error> {
    to_dot_with_config(solution, &DotConfig::default())
}

/// Converts a solution to DOT format.
///
/// Zero-gate solutions are drawn as the output node connected to the input
/// it copies, or labeled with the constant.
pub fn to_dot_with_config(solution: &Solution, config: &DotConfig) -> Result<String, std::fmt::Error> {
    match solution {
        Solution::Circuit(circuit) => circuit_to_dot(circuit, config),
        Solution::Constant { ninputs, value } => {
            let mut dot = String::new();
            writeln!(dot, "digraph {{")?;
            writeln!(
                dot,
                "out [shape={}, label=\"{} = {}\"];",
                config.output_shape,
                output_name(*ninputs),
                *value as u8
            )?;
            writeln!(dot, "}}")?;
            Ok(dot)
        }
        Solution::Input { ninputs, wire } => {
            let mut dot = String::new();
            writeln!(dot, "digraph {{")?;
            writeln!(dot, "rankdir={};", config.rankdir)?;
            writeln!(dot, "w{} [shape={}, label=\"{}\"];", wire.index(), config.input_shape, wire.name(*ninputs))?;
            writeln!(dot, "out [shape={}, label=\"{}\"];", config.output_shape, output_name(*ninputs))?;
            writeln!(dot, "w{} -> out;", wire.index())?;
            writeln!(dot, "}}")?;
            Ok(dot)
        }
    }
}

fn circuit_to_dot(circuit: &Circuit, config: &DotConfig) -> Result<String, std::fmt::Error> {
    let ninputs = circuit.ninputs();
    let words = if config.show_words { circuit.simulate() } else { Vec::new() };

    let mut dot = String::new();
    writeln!(dot, "digraph {{")?;
    writeln!(dot, "rankdir={};", config.rankdir)?;

    // Inputs
    writeln!(dot, "{{ rank=source")?;
    for i in 0..ninputs {
        let wire = Wire::new(i);
        writeln!(dot, "w{} [shape={}, label=\"{}\"];", i, config.input_shape, wire.name(ninputs))?;
    }
    writeln!(dot, "}}")?;

    // Gates grouped by depth, so that gates at the same depth share a rank
    let depths = depths(circuit);
    let mut levels = BTreeMap::<usize, Vec<Wire>>::new();
    for (wire, _) in circuit.wires() {
        levels.entry(depths[wire.index()]).or_default().push(wire);
    }
    for level in levels.values() {
        writeln!(dot, "{{ rank=same")?;
        for &wire in level {
            let label = if config.show_words {
                format!("{}\\n{:#x}", wire.name(ninputs), words[wire.index()] & row_mask(ninputs))
            } else {
                wire.name(ninputs)
            };
            writeln!(
                dot,
                "w{} [shape={}, label=\"{}\"];",
                wire.index(),
                config.gate_shape,
                label
            )?;
        }
        writeln!(dot, "}}")?;
    }

    // Edges into every gate
    for (wire, gate) in circuit.wires() {
        if gate.is_inverter() {
            writeln!(
                dot,
                "w{} -> w{} [style={}];",
                gate.left().index(),
                wire.index(),
                config.inverter_edge_style
            )?;
        } else {
            writeln!(dot, "w{} -> w{};", gate.left().index(), wire.index())?;
            writeln!(dot, "w{} -> w{};", gate.right().index(), wire.index())?;
        }
    }

    writeln!(dot, "{{ rank=sink")?;
    writeln!(dot, "out [shape={}, label=\"out\"];", config.output_shape)?;
    writeln!(dot, "}}")?;
    writeln!(dot, "w{} -> out;", circuit.output().index())?;

    writeln!(dot, "}}")?;
    Ok(dot)
}

/// Logic depth of every wire: 0 for inputs, one more than the deepest input for gates.
fn depths(circuit: &Circuit) -> Vec<usize> {
    let mut depths = vec![0; circuit.ninputs()];
    for gate in circuit.gates() {
        let depth = 1 + depths[gate.left().index()].max(depths[gate.right().index()]);
        depths.push(depth);
    }
    depths
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gate::Gate;

    fn and2() -> Solution {
        let w = Wire::new;
        Solution::Circuit(Circuit::new(2, vec![Gate::nand(w(1), w(0)), Gate::nand(w(2), w(2))]).unwrap())
    }

    #[test]
    fn test_to_dot_circuit() {
        let dot = to_dot(&and2()).unwrap();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("w0 [shape=box, label=\"A\"];"));
        assert!(dot.contains("w1 -> w2;"));
        assert!(dot.contains("w0 -> w2;"));
        assert!(dot.contains("w2 -> w3 [style=bold];"));
        assert!(dot.contains("w3 -> out;"));
    }

    #[test]
    fn test_depths() {
        let circuit = and2();
        assert_eq!(depths(circuit.as_circuit().unwrap()), vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_to_dot_degenerate() {
        let zero = Solution::Constant { ninputs: 2, value: false };
        let dot = to_dot(&zero).unwrap();
        assert!(dot.contains("label=\"C = 0\""));

        let b = Solution::Input { ninputs: 2, wire: Wire::new(1) };
        let dot = to_dot(&b).unwrap();
        assert!(dot.contains("w1 -> out;"));
    }

    #[test]
    fn test_to_dot_with_config() {
        let config = DotConfig {
            show_words: true,
            rankdir: "LR",
            ..DotConfig::default()
        };
        let dot = to_dot_with_config(&and2(), &config).unwrap();
        assert!(dot.contains("rankdir=LR;"));
        // d = AND(A, B) has truth table 0001
        assert!(dot.contains("label=\"d\\n0x1\""));
    }

    /// Helper test to write DOT file for manual inspection (disabled by default)
    #[test]
    #[ignore]
    fn test_write_dot_file() {
        let dot = to_dot(&and2()).unwrap();
        std::fs::write("test_output.dot", &dot).unwrap();
        println!("DOT output:\n{}", dot);
    }
}
