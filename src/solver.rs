//! Backtracking solver: most-constrained-variable search, capped at a small
//! number of solutions (just enough to decide uniqueness).

use std::sync::Arc;

use crate::bitset::popcount;
use crate::error::SudokuError;
use crate::geometry::Geometry;
use crate::grid::Grid;
use crate::validate::validate_puzzle_with_geometry;

/// Searches from `grid`, returning up to `cap` completed grids.
///
/// Deterministic: at each step the most-constrained empty cell is chosen
/// (ties broken by lowest index, see [`Grid::most_constrained`]), and its
/// legal digits are tried in ascending order. Returns as soon as `cap`
/// solutions have been found.
pub fn solve(grid: Grid, cap: usize) -> Vec<Grid> {
    let mut solutions = Vec::new();
    solve_into(grid, cap, &mut solutions);
    solutions
}

fn solve_into(grid: Grid, cap: usize, solutions: &mut Vec<Grid>) {
    let Some(cell) = grid.most_constrained() else {
        solutions.push(grid);
        return;
    };

    let n = grid.geometry().n();
    let mask = grid.mask_at(cell);
    if popcount(mask) as usize == n {
        return; // dead end: every digit forbidden here
    }

    for digit in 1..=n as u8 {
        if mask & (1 << (digit - 1)) != 0 {
            continue;
        }
        let next = grid.clone().place(cell, digit);
        solve_into(next, cap, solutions);
        if solutions.len() >= cap {
            return;
        }
    }
}

/// Validates, decodes, and solves `s`, returning at most two solution strings.
///
/// `Err(SudokuError::Validation(_))` for malformed input,
/// `Err(SudokuError::Unsolvable)` if propagation or search finds no
/// completion. Otherwise `Ok` with one or two solution strings (two meaning
/// the puzzle's solution is not unique).
pub fn solve_puzzle(s: &str, w: usize) -> Result<Vec<String>, SudokuError> {
    let geometry = Arc::new(Geometry::new(w));
    solve_puzzle_with_geometry(s, geometry)
}

pub(crate) fn solve_puzzle_with_geometry(s: &str, geometry: Arc<Geometry>) -> Result<Vec<String>, SudokuError> {
    validate_puzzle_with_geometry(s, &geometry)?;
    let grid = Grid::decode(s, geometry)?;
    if grid.has_dead_cell() {
        return Err(SudokuError::Unsolvable);
    }

    let solutions = solve(grid, 2);
    if solutions.is_empty() {
        return Err(SudokuError::Unsolvable);
    }
    Ok(solutions.into_iter().map(|g| g.to_line_string()).collect())
}

/// `true` iff `s` has exactly one solution.
pub fn has_unique_solution(s: &str, w: usize) -> bool {
    match solve_puzzle(s, w) {
        Ok(solutions) => solutions.len() == 1,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_solution_3x3() {
        let p = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
        let solutions = solve_puzzle(p, 3).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].len(), 81);
        crate::validate::validate_solution(&solutions[0], 3).unwrap();
    }

    #[test]
    fn multi_solution_3x3() {
        let p = "123456789".to_string() + &".".repeat(72);
        let solutions = solve_puzzle(&p, 3).unwrap();
        assert_eq!(solutions.len(), 2);
        assert_eq!(
            solutions[0],
            "123456789456789123789123456231674895875912364694538217317265948542897631968341572"
        );
        assert!(solutions[1].starts_with("123456789"));
    }

    #[test]
    fn unsolvable_3x3() {
        let p = "516849732307605000809700065135060907472591006968370050253186074684207500791050608";
        assert_eq!(solve_puzzle(p, 3), Err(SudokuError::Unsolvable));
    }

    #[test]
    fn multi_solution_2x2() {
        let p = "12343412........";
        let solutions = solve_puzzle(p, 2).unwrap();
        assert_eq!(solutions, vec!["1234341221434321".to_string(), "1234341223414123".to_string()]);
    }

    #[test]
    fn has_unique_solution_matches_solve_count() {
        let p = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
        assert!(has_unique_solution(p, 3));
        let multi = "123456789".to_string() + &".".repeat(72);
        assert!(!has_unique_solution(&multi, 3));
    }
}
