//! Error types for circuit synthesis.
//!
//! Every variant is a configuration or representation problem detected before
//! (or at the start of) a search. The enumerators themselves never fail:
//! running out of gates is a normal negative result, not an error.

use std::fmt;

/// Errors reported by target parsing, circuit construction and the driver loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// The truth-table pattern has no rows at all.
    EmptyPattern,

    /// The pattern contains something other than `0`, `1` or `x`.
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its position (in characters) within the pattern.
        position: usize,
    },

    /// The pattern length is not a power of two.
    PatternLength {
        /// Number of rows in the rejected pattern.
        len: usize,
    },

    /// The target has more inputs than a truth-table word can hold.
    TooManyInputs {
        /// Requested number of inputs.
        ninputs: usize,
        /// Largest supported number of inputs.
        max: usize,
    },

    /// The gate ceiling is not a positive integer.
    InvalidGateLimit {
        /// The text that failed to parse.
        input: String,
    },

    /// Inputs plus gates exceed the capacity of the per-wire bitsets.
    TooManyWires {
        /// Requested number of wires.
        wires: usize,
        /// Largest supported number of wires.
        max: usize,
    },

    /// An explicitly constructed circuit is not a well-formed NAND network.
    InvalidCircuit {
        /// What is wrong with it.
        message: String,
    },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::EmptyPattern => write!(f, "truth table pattern is empty"),
            SynthError::InvalidCharacter { ch, position } => write!(
                f,
                "invalid character {:?} at position {} (expected '0', '1' or 'x')",
                ch, position
            ),
            SynthError::PatternLength { len } => write!(
                f,
                "truth table pattern must have a power-of-2 length, got {}",
                len
            ),
            SynthError::TooManyInputs { ninputs, max } => write!(
                f,
                "truth table too big: {} inputs, at most {} can be represented",
                ninputs, max
            ),
            SynthError::InvalidGateLimit { input } => {
                write!(f, "gate limit must be a positive integer, got {:?}", input)
            }
            SynthError::TooManyWires { wires, max } => {
                write!(f, "circuit would need {} wires, at most {} are supported", wires, max)
            }
            SynthError::InvalidCircuit { message } => write!(f, "invalid circuit: {}", message),
        }
    }
}

impl std::error::Error for SynthError {}

/// Parses a gate ceiling given on the command line.
///
/// Leading or trailing garbage, zero and negative numbers are all rejected.
pub fn parse_gate_limit(input: &str) -> Result<usize, SynthError> {
    match input.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SynthError::InvalidGateLimit {
            input: input.to_string(),
        }),
    }
}
