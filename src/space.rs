//! Size of the unpruned search space.
//!
//! A gate on wire `w` reads an unordered pair of earlier wires (with
//! repetition), giving `w * (w + 1) / 2` choices. The number of circuits with
//! a given gate count is the product of these over all gate wires, which grows
//! far beyond `u64` for moderately sized levels.

use num_bigint::BigUint;

/// Number of wirings with exactly `num_gates` gates over `ninputs` inputs.
///
/// This is the number of candidates the odometer engine evaluates on a full
/// level.
pub fn search_space_size(ninputs: usize, num_gates: usize) -> BigUint {
    (ninputs..ninputs + num_gates)
        .map(pairs_upto)
        .product()
}

/// Total number of wirings over all levels `1..=max_gates`.
pub fn cumulative_search_space_size(ninputs: usize, max_gates: usize) -> BigUint {
    (1..=max_gates).map(|g| search_space_size(ninputs, g)).sum()
}

/// Unordered pairs with repetition drawn from `0..wire`.
fn pairs_upto(wire: usize) -> BigUint {
    let w = BigUint::from(wire);
    let next = w.clone() + 1u32;
    (w * next) >> 1
}

/// `log2` of the search space, for logging huge levels compactly.
pub fn search_space_bits(ninputs: usize, num_gates: usize) -> u64 {
    search_space_size(ninputs, num_gates).bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::ToBigUint;
    use test_log::test;

    #[test]
    fn test_search_space_size() {
        assert_eq!(search_space_size(2, 1), 3.to_biguint().unwrap());
        assert_eq!(search_space_size(2, 4), 2700.to_biguint().unwrap());
        assert_eq!(search_space_size(3, 2), (6 * 10).to_biguint().unwrap());
        // No inputs: the first gate has nothing to read.
        assert_eq!(search_space_size(0, 3), BigUint::ZERO);
    }

    #[test]
    fn test_large_levels_do_not_overflow() {
        let size = search_space_size(5, 20);
        assert!(size > u64::MAX.to_biguint().unwrap());
        assert!(search_space_bits(5, 20) > 64);
    }

    #[test]
    fn test_cumulative() {
        assert_eq!(cumulative_search_space_size(2, 2), (3 + 3 * 6).to_biguint().unwrap());
        assert_eq!(cumulative_search_space_size(2, 0), BigUint::ZERO);
    }
}
