//! Difficulty scoring: walks the forced-choice/branching trace of a puzzle's
//! unique solution and scores it by how often, and how hard, the solver
//! had to guess.

use std::sync::Arc;

use crate::bitset::popcount;
use crate::error::SudokuError;
use crate::geometry::Geometry;
use crate::grid::Grid;
use crate::solver::solve_puzzle_with_geometry;
use crate::validate::validate_puzzle_with_geometry;

/// A difficulty score. Larger means harder; see [`evaluate_difficulty`] for
/// how it is composed.
pub type Score = i64;

/// Scores `puzzle`'s difficulty.
///
/// If `solution` is omitted, the unique solution is found by solving
/// `puzzle` first (`Err(NonUnique)` if it isn't unique, `Err(Unsolvable)` if
/// it has none). The score is `E + 100 * sum((k-1)^2)`, where `E` is the
/// puzzle's initial empty-cell count and each `k` is the branching factor
/// (remaining legal digits) of a most-constrained cell at the point the
/// solver would have had to choose among them.
pub fn evaluate_difficulty(puzzle: &str, solution: Option<&str>, w: usize) -> Result<Score, SudokuError> {
    let geometry = Arc::new(Geometry::new(w));
    validate_puzzle_with_geometry(puzzle, &geometry)?;

    let solution = match solution {
        Some(s) => s.to_string(),
        None => {
            let solutions = solve_puzzle_with_geometry(puzzle, geometry.clone())?;
            if solutions.len() > 1 {
                return Err(SudokuError::NonUnique);
            }
            solutions.into_iter().next().ok_or(SudokuError::Unsolvable)?
        }
    };

    let mut grid = Grid::decode(puzzle, geometry.clone())?;
    if grid.has_dead_cell() {
        return Err(SudokuError::Unsolvable);
    }

    let n = geometry.n();
    let empty_cells_score = grid.geometry().c() - grid.filled_count();
    let mut branching_factors_score: i64 = 0;

    let solution_bytes: Vec<u8> = solution.bytes().collect();

    while let Some(cell) = grid.most_constrained() {
        let mask = grid.mask_at(cell);
        let branching_factor = n as i64 - popcount(mask) as i64;
        branching_factors_score += (branching_factor - 1).pow(2) * 100;

        let digit = solution_bytes
            .get(cell)
            .map(|&b| b - b'0')
            .filter(|&d| d >= 1 && d as usize <= n)
            .ok_or_else(|| SudokuError::Internal(format!("solution has no valid digit at position {cell}")))?;
        grid = grid.place(cell, digit);
    }

    let reconstructed = grid.to_line_string();
    if reconstructed != solution {
        return Err(SudokuError::Internal(format!(
            "reconstructed solution {reconstructed} disagreed with supplied solution {solution}"
        )));
    }

    Ok(empty_cells_score as i64 + branching_factors_score)
}
