//! Tunables for [`crate::generator::generate_puzzle`], pulled out of the
//! reference implementation's inline literals so callers can override them.

/// Budgets and thresholds for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attempts at picking a symmetric hole set before giving up.
    pub hole_punch_attempts: u32,
    /// Rounds of hill-climbing toward the target difficulty.
    pub hill_climb_rounds: u32,
    /// Hill-climbing stops early once within this distance of the target.
    pub difficulty_tolerance: u64,
}

impl GeneratorConfig {
    /// Number of cells the hole-punch pass removes, for a board of side `n`
    /// and block width `w` (`N * w / 2`, rounded down).
    pub fn hole_count(&self, n: usize, w: usize) -> usize {
        n * w / 2
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            hole_punch_attempts: 100,
            hill_climb_rounds: 200,
            difficulty_tolerance: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_literals() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.hole_punch_attempts, 100);
        assert_eq!(cfg.hill_climb_rounds, 200);
        assert_eq!(cfg.difficulty_tolerance, 50);
        assert_eq!(cfg.hole_count(9, 3), 13);
    }
}
