//! Gate-count escalation driver.
//!
//! [`synthesize`] first checks whether the target needs any gate at all
//! (constant or a bare input), then asks the configured engine for circuits
//! with 1, 2, ... gates and stops at the first level that yields a match.
//! Since levels are tried in increasing order, the reported gate count is
//! minimal within the searched range.

use std::ops::ControlFlow;
use std::time::Instant;

use log::{debug, info};

use crate::circuit::{Circuit, Solution};
use crate::error::SynthError;
use crate::search::{Engine, Problem, SearchStats};
use crate::space::{cumulative_search_space_size, search_space_bits};
use crate::truth::{TruthTable, Word};
use crate::types::Wire;
use crate::MAX_WIRES;

/// Driver settings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SynthConfig {
    /// Largest gate count to try.
    pub max_gates: usize,
    /// Enumeration engine.
    pub engine: Engine,
    /// Collect every match of the winning level instead of the first one.
    pub all_matches: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            max_gates: 6,
            engine: Engine::default(),
            all_matches: false,
        }
    }
}

/// Statistics of one searched level.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LevelStats {
    pub num_gates: usize,
    pub candidates: u64,
    pub matches: u64,
}

/// Outcome of [`synthesize`].
#[derive(Debug, Clone)]
pub struct Report {
    /// Solutions of the minimal gate count, in enumeration order. Empty if
    /// nothing was found within the ceiling.
    pub solutions: Vec<Solution>,
    /// Searched levels in increasing gate count. Empty for degenerate targets.
    pub levels: Vec<LevelStats>,
    /// The ceiling that was in effect.
    pub max_gates: usize,
}

impl Report {
    pub fn is_found(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// The first solution found, if any.
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// Gate count of the solutions, if any.
    pub fn num_gates(&self) -> Option<usize> {
        self.best().map(Solution::num_gates)
    }

    pub fn total_candidates(&self) -> u64 {
        self.levels.iter().map(|level| level.candidates).sum()
    }
}

/// Returns the zero-gate solution for `target`, if there is one.
///
/// Constants are preferred over inputs, and lower inputs over higher ones.
pub fn degenerate(target: &TruthTable) -> Option<Solution> {
    let ninputs = target.ninputs();
    if target.matches(0) {
        return Some(Solution::Constant { ninputs, value: false });
    }
    if target.matches(!0) {
        return Some(Solution::Constant { ninputs, value: true });
    }
    let problem = Problem::new(target.clone());
    problem
        .inputs()
        .iter()
        .position(|&word: &Word| target.matches(word))
        .map(|input| Solution::Input {
            ninputs,
            wire: Wire::new(input),
        })
}

/// Finds a minimal NAND circuit for `target` with at most `config.max_gates` gates.
///
/// Running out of gates is not an error: the returned report then has no
/// solutions. A ceiling that would exceed [`MAX_WIRES`] wires is rejected
/// before searching, unless the target needs no gates at all.
pub fn synthesize(target: &TruthTable, config: &SynthConfig) -> Result<Report, SynthError> {
    let mut report = Report {
        solutions: Vec::new(),
        levels: Vec::new(),
        max_gates: config.max_gates,
    };

    if let Some(solution) = degenerate(target) {
        info!("Target {} needs no gates: {}", target, solution);
        report.solutions.push(solution);
        return Ok(report);
    }

    // Saturates for absurd ceilings, which are then rejected like any other.
    let wires = target.ninputs().saturating_add(config.max_gates);
    if wires > MAX_WIRES {
        return Err(SynthError::TooManyWires { wires, max: MAX_WIRES });
    }

    let problem = Problem::new(target.clone());
    let strategy = config.engine.strategy();
    debug!("Searching for {} with the {} engine", target, strategy.name());
    debug!(
        "Up to {} gates: {} unpruned wirings in total",
        config.max_gates,
        cumulative_search_space_size(problem.ninputs(), config.max_gates)
    );

    for num_gates in 1..=config.max_gates {
        info!("Trying {} gates...", num_gates);
        debug!(
            "Level {}: about 2^{} unpruned wirings",
            num_gates,
            search_space_bits(problem.ninputs(), num_gates)
        );

        let start = Instant::now();
        let mut found: Vec<Circuit> = Vec::new();
        let all_matches = config.all_matches;
        let stats: SearchStats = strategy.for_each_match(&problem, num_gates, &mut |circuit: &Circuit| {
            found.push(circuit.clone());
            if all_matches {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
        debug!(
            "Level {}: {} candidates, {} matches in {:?}",
            num_gates,
            stats.candidates,
            stats.matches,
            start.elapsed()
        );

        report.levels.push(LevelStats {
            num_gates,
            candidates: stats.candidates,
            matches: stats.matches,
        });

        if !found.is_empty() {
            for circuit in &found {
                debug_assert!(circuit.implements(target), "{} does not implement {}", circuit, target);
            }
            info!("Found {} circuit(s) with {} gates", found.len(), num_gates);
            report.solutions.extend(found.into_iter().map(Solution::Circuit));
            return Ok(report);
        }
    }

    info!("No circuit with at most {} gates", config.max_gates);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn table(pattern: &str) -> TruthTable {
        TruthTable::parse(pattern).unwrap()
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(
            degenerate(&table("0000")),
            Some(Solution::Constant { ninputs: 2, value: false })
        );
        assert_eq!(
            degenerate(&table("1111")),
            Some(Solution::Constant { ninputs: 2, value: true })
        );
        assert_eq!(
            degenerate(&table("0101")),
            Some(Solution::Input { ninputs: 2, wire: Wire::new(1) })
        );
        assert_eq!(degenerate(&table("0110")), None);
        // Don't-cares allow a constant before an input.
        assert_eq!(
            degenerate(&table("0x0x")),
            Some(Solution::Constant { ninputs: 2, value: false })
        );
        assert_eq!(
            degenerate(&table("x")),
            Some(Solution::Constant { ninputs: 0, value: false })
        );
    }

    #[test]
    fn test_synthesize_degenerate_has_no_levels() {
        let report = synthesize(&table("0011"), &SynthConfig::default()).unwrap();
        assert_eq!(report.best().unwrap().to_string(), "C = A");
        assert_eq!(report.num_gates(), Some(0));
        assert!(report.levels.is_empty());
    }

    #[test]
    fn test_synthesize_escalates_levels() {
        let report = synthesize(&table("0110"), &SynthConfig::default()).unwrap();
        assert_eq!(report.num_gates(), Some(4));
        let gates: Vec<usize> = report.levels.iter().map(|l| l.num_gates).collect();
        assert_eq!(gates, vec![1, 2, 3, 4]);
        assert!(report.levels[..3].iter().all(|l| l.matches == 0));
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.total_candidates(), 3 + 9 + 31 + 42);
    }

    #[test]
    fn test_synthesize_all_matches() {
        let config = SynthConfig {
            all_matches: true,
            engine: Engine::Odometer,
            ..SynthConfig::default()
        };
        let report = synthesize(&table("0110"), &config).unwrap();
        assert_eq!(report.solutions.len(), 2);
        assert_eq!(report.levels.last().unwrap().candidates, 2700);
        for solution in &report.solutions {
            assert!(solution.implements(&table("0110")));
        }
    }

    #[test]
    fn test_synthesize_exhaustion_is_not_an_error() {
        let config = SynthConfig {
            max_gates: 3,
            ..SynthConfig::default()
        };
        let report = synthesize(&table("0110"), &config).unwrap();
        assert!(!report.is_found());
        assert_eq!(report.levels.len(), 3);
        assert_eq!(report.max_gates, 3);
    }

    #[test]
    fn test_synthesize_rejects_too_many_wires() {
        let config = SynthConfig {
            max_gates: 63,
            ..SynthConfig::default()
        };
        let err = synthesize(&table("0110"), &config).unwrap_err();
        assert_eq!(err, SynthError::TooManyWires { wires: 2 + 63, max: MAX_WIRES });
        // Degenerate targets never reach the limit check.
        assert!(synthesize(&table("0000"), &config).unwrap().is_found());
    }

    #[test]
    fn test_synthesize_accepts_exactly_max_wires() {
        let config = SynthConfig {
            max_gates: MAX_WIRES - 2,
            ..SynthConfig::default()
        };
        let report = synthesize(&table("0110"), &config).unwrap();
        assert_eq!(report.num_gates(), Some(4));
    }

    #[test]
    fn test_synthesize_rejects_huge_ceiling() {
        let config = SynthConfig {
            max_gates: usize::MAX,
            ..SynthConfig::default()
        };
        let err = synthesize(&table("0110"), &config).unwrap_err();
        assert_eq!(err, SynthError::TooManyWires { wires: usize::MAX, max: MAX_WIRES });

        let parsed = crate::error::parse_gate_limit(&usize::MAX.to_string()).unwrap();
        let config = SynthConfig {
            max_gates: parsed,
            ..SynthConfig::default()
        };
        assert!(matches!(
            synthesize(&table("01101001"), &config),
            Err(SynthError::TooManyWires { .. })
        ));
    }

    #[test]
    fn test_synthesize_not() {
        let report = synthesize(&table("10"), &SynthConfig::default()).unwrap();
        assert_eq!(report.best().unwrap().to_string(), "b = ~(A A)");
    }
}
