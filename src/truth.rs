//! Bit-parallel truth tables.
//!
//! A boolean function of `n <= 5` inputs is stored as one [`Word`]: bit `b`
//! holds the output for row `2^n - 1 - b`. Put differently, the pattern
//! string `"0001"` (rows left to right) read as a binary number *is* the
//! word. Within row `k`, input `i` takes the value of bit `n - 1 - i` of `k`,
//! so input `A` is the most significant bit of the row index.
//!
//! With this layout a NAND of two wires is one bitwise operation that
//! evaluates all `2^n` rows at once. Only the low `2^n` bits are meaningful;
//! the higher bits replicate the all-inputs-zero row and are masked off when
//! a word is compared with a target.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// A packed truth table column.
pub type Word = u32;

/// Largest number of circuit inputs a [`Word`] can tabulate.
pub const MAX_INPUTS: usize = 5;

/// Evaluates a NAND gate on whole truth-table words.
#[inline]
pub fn nand(left: Word, right: Word) -> Word {
    !(left & right)
}

/// Number of rows in the truth table of an `ninputs`-input function.
pub fn num_rows(ninputs: usize) -> usize {
    1 << ninputs
}

/// Mask selecting the meaningful low `2^ninputs` bits of a word.
pub fn row_mask(ninputs: usize) -> Word {
    assert!(ninputs <= MAX_INPUTS, "{} inputs do not fit in a word", ninputs);
    ((1u64 << num_rows(ninputs)) - 1) as Word
}

/// Builds the words of the primary inputs.
///
/// Input `i` is a run of `2^(n-1-i)` ones repeated with period `2^(n-i)`:
///
/// ```text
/// n = 2:  A = 0011, B = 0101
/// n = 5:  A = 0xffff, B = 0xff00ff, C = 0xf0f0f0f, D = 0x33333333, E = 0x55555555
/// ```
pub fn tabulate_inputs(ninputs: usize) -> Vec<Word> {
    assert!(ninputs <= MAX_INPUTS, "{} inputs do not fit in a word", ninputs);
    let rows = num_rows(ninputs);
    (0..ninputs)
        .map(|i| {
            let run = 1usize << (ninputs - 1 - i);
            let mut word: u64 = (1u64 << run) - 1;
            let mut period = 2 * run;
            while period < rows {
                word |= word << period;
                period *= 2;
            }
            word as Word
        })
        .collect()
}

/// Value of input `input` in row `row` of an `ninputs`-input table.
#[inline]
pub fn input_value(ninputs: usize, row: usize, input: usize) -> bool {
    (row >> (ninputs - 1 - input)) & 1 == 1
}

/// Word bit holding row `row`.
#[inline]
fn row_bit(ninputs: usize, row: usize) -> Word {
    1 << (num_rows(ninputs) - 1 - row)
}

/// A synthesis target: the required output column, possibly with don't-cares.
///
/// # Invariants
///
/// - `ninputs <= MAX_INPUTS`
/// - `value` and `care` have no bits outside `row_mask(ninputs)`
/// - `value` has no bits outside `care`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    ninputs: usize,
    value: Word,
    care: Word,
}

impl TruthTable {
    /// Creates a fully specified target. Bits above the row mask are ignored.
    pub fn new(ninputs: usize, value: Word) -> Result<Self, SynthError> {
        Self::with_dont_cares(ninputs, value, Word::MAX)
    }

    /// Creates a target where only the rows set in `care` must match.
    pub fn with_dont_cares(ninputs: usize, value: Word, care: Word) -> Result<Self, SynthError> {
        if ninputs > MAX_INPUTS {
            return Err(SynthError::TooManyInputs {
                ninputs,
                max: MAX_INPUTS,
            });
        }
        let care = care & row_mask(ninputs);
        Ok(TruthTable {
            ninputs,
            value: value & care,
            care,
        })
    }

    /// Parses a pattern of `0`, `1` and `x` (don't care), one character per
    /// row, first row first.
    pub fn parse(pattern: &str) -> Result<Self, SynthError> {
        let len = pattern.chars().count();
        if len == 0 {
            return Err(SynthError::EmptyPattern);
        }
        if !len.is_power_of_two() {
            return Err(SynthError::PatternLength { len });
        }
        let ninputs = len.trailing_zeros() as usize;
        if ninputs > MAX_INPUTS {
            return Err(SynthError::TooManyInputs {
                ninputs,
                max: MAX_INPUTS,
            });
        }

        let mut value: Word = 0;
        let mut care: Word = 0;
        for (row, ch) in pattern.chars().enumerate() {
            let bit = row_bit(ninputs, row);
            match ch {
                '0' => care |= bit,
                '1' => {
                    care |= bit;
                    value |= bit;
                }
                'x' | 'X' => {}
                _ => return Err(SynthError::InvalidCharacter { ch, position: row }),
            }
        }
        Self::with_dont_cares(ninputs, value, care)
    }

    /// Number of inputs of the function.
    pub fn ninputs(&self) -> usize {
        self.ninputs
    }

    /// Number of rows (`2^ninputs`).
    pub fn num_rows(&self) -> usize {
        num_rows(self.ninputs)
    }

    /// The required output bits (zero on don't-care rows).
    pub fn value(&self) -> Word {
        self.value
    }

    /// The rows that must match.
    pub fn care(&self) -> Word {
        self.care
    }

    /// Mask of the meaningful bits of a word for this target.
    pub fn mask(&self) -> Word {
        row_mask(self.ninputs)
    }

    /// Returns true if there are no don't-care rows.
    pub fn is_fully_specified(&self) -> bool {
        self.care == self.mask()
    }

    /// Required output of row `row`, or `None` for a don't-care row.
    pub fn bit(&self, row: usize) -> Option<bool> {
        assert!(row < self.num_rows(), "row {} out of range", row);
        let bit = row_bit(self.ninputs, row);
        if self.care & bit == 0 {
            None
        } else {
            Some(self.value & bit != 0)
        }
    }

    /// Checks a whole output column against the target in one step.
    #[inline]
    pub fn matches(&self, word: Word) -> bool {
        (word ^ self.value) & self.care == 0
    }

    /// Checks a column given row by row, first row first.
    ///
    /// Stops at the first row that contradicts the target, so a lazy row
    /// evaluator only computes rows up to the first mismatch.
    pub fn accepts_rows(&self, rows: impl IntoIterator<Item = bool>) -> bool {
        let mut seen = 0;
        let all_ok = rows.into_iter().enumerate().all(|(row, output)| {
            seen = row + 1;
            row < self.num_rows() && self.bit(row).map_or(true, |expected| expected == output)
        });
        all_ok && seen == self.num_rows()
    }
}

impl FromStr for TruthTable {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TruthTable::parse(s)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows() {
            let ch = match self.bit(row) {
                None => 'x',
                Some(true) => '1',
                Some(false) => '0',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nand() {
        assert_eq!(nand(0b0011, 0b0101) & 0b1111, 0b1110);
        assert_eq!(nand(0, 0), Word::MAX);
        assert_eq!(nand(Word::MAX, Word::MAX), 0);
    }

    #[test]
    fn test_row_mask() {
        assert_eq!(row_mask(0), 0b1);
        assert_eq!(row_mask(1), 0b11);
        assert_eq!(row_mask(2), 0b1111);
        assert_eq!(row_mask(4), 0xffff);
        assert_eq!(row_mask(5), 0xffff_ffff);
    }

    #[test]
    fn test_tabulate_inputs() {
        assert_eq!(tabulate_inputs(0), vec![]);
        assert_eq!(tabulate_inputs(1), vec![0b01]);
        assert_eq!(tabulate_inputs(2), vec![0b0011, 0b0101]);
        assert_eq!(tabulate_inputs(3), vec![0x0f, 0x33, 0x55]);
        assert_eq!(
            tabulate_inputs(5),
            vec![0xffff, 0xff00ff, 0xf0f0f0f, 0x33333333, 0x55555555]
        );
    }

    #[test]
    fn test_tabulate_matches_row_semantics() {
        for n in 1..=MAX_INPUTS {
            let inputs = tabulate_inputs(n);
            for (i, &word) in inputs.iter().enumerate() {
                for row in 0..num_rows(n) {
                    let bit = word & row_bit(n, row) != 0;
                    assert_eq!(bit, input_value(n, row, i), "n={} input={} row={}", n, i, row);
                }
            }
        }
    }

    #[test]
    fn test_parse() {
        let and = TruthTable::parse("0001").unwrap();
        assert_eq!(and.ninputs(), 2);
        assert_eq!(and.value(), 0b0001);
        assert!(and.is_fully_specified());
        assert_eq!(and.bit(0), Some(false));
        assert_eq!(and.bit(3), Some(true));

        let not = TruthTable::parse("10").unwrap();
        assert_eq!(not.ninputs(), 1);
        assert_eq!(not.value(), 0b10);

        let constant = TruthTable::parse("1").unwrap();
        assert_eq!(constant.ninputs(), 0);
        assert_eq!(constant.value(), 1);
    }

    #[test]
    fn test_parse_dont_cares() {
        let t: TruthTable = "1x0X".parse().unwrap();
        assert_eq!(t.care(), 0b1010);
        assert_eq!(t.value(), 0b1000);
        assert!(!t.is_fully_specified());
        assert_eq!(t.bit(1), None);
        assert!(t.matches(0b1000));
        assert!(t.matches(0b1101));
        assert!(!t.matches(0b0000));
        assert_eq!(t.to_string(), "1x0x");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TruthTable::parse(""), Err(SynthError::EmptyPattern));
        assert_eq!(TruthTable::parse("010"), Err(SynthError::PatternLength { len: 3 }));
        assert_eq!(
            TruthTable::parse("01a1"),
            Err(SynthError::InvalidCharacter { ch: 'a', position: 2 })
        );
        let big = "0".repeat(64);
        assert_eq!(
            TruthTable::parse(&big),
            Err(SynthError::TooManyInputs { ninputs: 6, max: 5 })
        );
    }

    #[test]
    fn test_new_masks_value() {
        let t = TruthTable::new(2, 0xfff1).unwrap();
        assert_eq!(t.value(), 0b0001);
        assert!(t.matches(0xffff_fff1));
        assert!(TruthTable::new(6, 0).is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for pattern in ["0", "10", "0110", "00010111", "10101001x1x1x1x1"] {
            let t = TruthTable::parse(pattern).unwrap();
            assert_eq!(t.to_string(), pattern);
        }
    }

    #[test]
    fn test_accepts_rows() {
        let t = TruthTable::parse("0x01").unwrap();
        assert!(t.accepts_rows([false, false, false, true]));
        assert!(t.accepts_rows([false, true, false, true]));
        assert!(!t.accepts_rows([true, true, false, true]));
        // Too few rows is not a match.
        assert!(!t.accepts_rows([false, true]));
    }

    #[test]
    fn test_accepts_rows_stops_early() {
        let t = TruthTable::parse("0000").unwrap();
        let mut evaluated = 0;
        let rows = (0..4).map(|_| {
            evaluated += 1;
            true
        });
        assert!(!t.accepts_rows(rows));
        assert_eq!(evaluated, 1);
    }
}
