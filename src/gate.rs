use std::fmt::{Display, Formatter};

use crate::truth::{nand, Word};
use crate::types::Wire;

/// A 2-input NAND gate, identified by the wires it reads.
///
/// NAND is commutative, so the inputs are kept in canonical order with
/// `right <= left`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Gate {
    left: Wire,
    right: Wire,
}

// Constructors
impl Gate {
    /// Creates the gate `~(a b)`, swapping the inputs if needed.
    pub fn nand(a: Wire, b: Wire) -> Gate {
        if b <= a {
            Gate { left: a, right: b }
        } else {
            Gate { left: b, right: a }
        }
    }

    /// Creates a gate from already-ordered input indices.
    pub(crate) fn from_indices(left: usize, right: usize) -> Gate {
        debug_assert!(right <= left);
        Gate {
            left: Wire::new(left),
            right: Wire::new(right),
        }
    }
}

// Getters
impl Gate {
    pub fn left(&self) -> Wire {
        self.left
    }

    pub fn right(&self) -> Wire {
        self.right
    }

    pub fn inputs(&self) -> [Wire; 2] {
        [self.left, self.right]
    }

    /// Returns true if both inputs are the same wire (an inverter).
    pub fn is_inverter(&self) -> bool {
        self.left == self.right
    }
}

// Evaluation
impl Gate {
    /// Computes the output word given the words of all earlier wires.
    #[inline]
    pub fn eval(&self, words: &[Word]) -> Word {
        nand(words[self.left.index()], words[self.right.index()])
    }

    /// Computes the output for one row given the values of all earlier wires.
    #[inline]
    pub fn eval_row(&self, values: &[bool]) -> bool {
        !(values[self.left.index()] && values[self.right.index()])
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "~({} {})", self.left, self.right)
    }
}
