//! Wire identifiers and their human-readable names.
//!
//! Wires are numbered in topological order: the primary inputs come first
//! (`0..ninputs`), then one wire per gate. Whether a wire is an input depends
//! on the circuit it belongs to, so every query that needs that distinction
//! takes `ninputs` explicitly.

use std::fmt;

/// A wire index.
///
/// # Invariants
///
/// - Input wires are `0..ninputs`.
/// - A gate wire only reads wires with smaller indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Wire(usize);

impl Wire {
    /// Creates a wire with the given index.
    pub const fn new(index: usize) -> Self {
        Wire(index)
    }

    /// Returns the raw wire index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Checks whether this wire is one of the first `ninputs` (primary input) wires.
    pub const fn is_input(self, ninputs: usize) -> bool {
        self.0 < ninputs
    }

    /// Name of the wire in a circuit with `ninputs` inputs.
    ///
    /// Inputs are uppercase letters starting at `A`. Gates are lowercase and
    /// continue the alphabet after the inputs, so the first gate of a 2-input
    /// circuit is `c`. Past `z` the letters repeat with a numeric suffix
    /// (`a1`, `b1`, ...).
    pub fn name(self, ninputs: usize) -> String {
        if self.is_input(ninputs) {
            ((b'A' + self.0 as u8) as char).to_string()
        } else {
            let letter = (b'a' + (self.0 % 26) as u8) as char;
            match self.0 / 26 {
                0 => letter.to_string(),
                round => format!("{}{}", letter, round),
            }
        }
    }
}

/// Name printed for the output of a zero-gate solution: the uppercase letter
/// right after the inputs (`C` for a 2-input target).
pub fn output_name(ninputs: usize) -> String {
    ((b'A' + ninputs as u8) as char).to_string()
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<Wire> for usize {
    fn from(wire: Wire) -> Self {
        wire.0
    }
}

impl From<usize> for Wire {
    fn from(index: usize) -> Self {
        Wire(index)
    }
}
