//! Puzzle generation: seed a complete solution, punch symmetric holes while
//! keeping the puzzle uniquely solvable, then hill-climb toward a target
//! difficulty.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::difficulty::evaluate_difficulty;
use crate::error::SudokuError;
use crate::geometry::Geometry;
use crate::grid::Grid;
use crate::solver::solve;

/// Generates a puzzle of block width `w` aimed at `target_difficulty`.
///
/// Returns `(puzzle, solution, score)`. `min_difficulty` is a floor: the
/// hill-climb never accepts an edit that would drop the score below it.
/// All randomness is drawn from `rng`, so the same seed and parameters
/// reproduce the same triple.
pub fn generate_puzzle<R: Rng + ?Sized>(
    w: usize,
    target_difficulty: u64,
    min_difficulty: u64,
    rng: &mut R,
) -> Result<(String, String, i64), SudokuError> {
    generate_puzzle_with_config(w, target_difficulty, min_difficulty, &GeneratorConfig::default(), rng)
}

/// As [`generate_puzzle`], with an explicit [`GeneratorConfig`].
pub fn generate_puzzle_with_config<R: Rng + ?Sized>(
    w: usize,
    target_difficulty: u64,
    min_difficulty: u64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(String, String, i64), SudokuError> {
    let geometry = Arc::new(Geometry::new(w));
    let solution_grid = seed_solution(geometry.clone(), rng);
    let solution = solution_grid.to_line_string();

    let puzzle_grid = punch_holes(solution_grid.clone(), &geometry, config, rng)?;
    let puzzle_grid = hill_climb(puzzle_grid, &solution, target_difficulty, min_difficulty, config, rng)?;

    let puzzle = puzzle_grid.to_line_string();
    let score = evaluate_difficulty(&puzzle, Some(&solution), w)?;
    Ok((puzzle, solution, score))
}

/// Builds a complete, randomly-ordered solution grid: a shuffled first row,
/// then a randomized most-constrained completer.
fn seed_solution<R: Rng + ?Sized>(geometry: Arc<Geometry>, rng: &mut R) -> Grid {
    let n = geometry.n();
    let mut first_row: Vec<u8> = (1..=n as u8).collect();
    first_row.shuffle(rng);

    let mut grid = Grid::empty(geometry);
    for (col, &digit) in first_row.iter().enumerate() {
        grid = grid.place(col, digit);
    }

    complete_randomly(grid, rng).expect("a freshly-seeded first row always completes")
}

fn complete_randomly<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Option<Grid> {
    let Some(cell) = grid.most_constrained() else {
        return Some(grid);
    };

    let n = grid.geometry().n();
    let mask = grid.mask_at(cell);
    let mut digits: Vec<u8> = (1..=n as u8).filter(|&d| mask & (1 << (d - 1)) == 0).collect();
    digits.shuffle(rng);

    for digit in digits {
        if let Some(completed) = complete_randomly(grid.clone().place(cell, digit), rng) {
            return Some(completed);
        }
    }
    None
}

/// Removes a symmetric set of cells, retrying until the result still has a
/// unique solution or the attempt budget is exhausted.
fn punch_holes<R: Rng + ?Sized>(
    solution: Grid,
    geometry: &Arc<Geometry>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Grid, SudokuError> {
    let c = geometry.c();
    let half: Vec<usize> = (0..c / 2).collect();
    let k = config.hole_count(geometry.n(), geometry.w()).min(half.len());

    for _ in 0..config.hole_punch_attempts {
        let mut picks = half.clone();
        picks.shuffle(rng);
        picks.truncate(k);

        let mut candidate = solution.clone();
        for &i in &picks {
            candidate = clear(candidate, i);
            candidate = clear(candidate, c - 1 - i);
        }

        if has_unique_solution(&candidate) {
            return Ok(candidate);
        }
    }

    Err(SudokuError::GenerationError(format!(
        "no symmetric {k}-hole set produced a unique solution within {} attempts",
        config.hole_punch_attempts
    )))
}

/// Rounds of remove-a-filled-cell / reinstate-an-empty-cell edits, keeping
/// only edits that strictly reduce the distance to `target_difficulty` and
/// never dropping below `min_difficulty`.
fn hill_climb<R: Rng + ?Sized>(
    mut grid: Grid,
    solution: &str,
    target_difficulty: u64,
    min_difficulty: u64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Grid, SudokuError> {
    let w = grid.geometry().w();
    let mut score = evaluate_difficulty(&grid.to_line_string(), Some(solution), w)?;
    let mut distance = (score - target_difficulty as i64).unsigned_abs();

    for _ in 0..config.hill_climb_rounds {
        if distance < config.difficulty_tolerance {
            break;
        }

        let Some(edited) = propose_edit(&grid, solution, score, target_difficulty, rng) else {
            continue;
        };

        if !has_unique_solution(&edited) {
            continue;
        }
        let candidate_score = evaluate_difficulty(&edited.to_line_string(), Some(solution), w)?;
        if (candidate_score as u64) < min_difficulty {
            continue;
        }

        let candidate_distance = (candidate_score - target_difficulty as i64).unsigned_abs();
        if candidate_distance < distance {
            grid = edited;
            score = candidate_score;
            distance = candidate_distance;
        }
    }

    Ok(grid)
}

fn propose_edit<R: Rng + ?Sized>(
    grid: &Grid,
    solution: &str,
    score: i64,
    target_difficulty: u64,
    rng: &mut R,
) -> Option<Grid> {
    if score < target_difficulty as i64 {
        let filled: Vec<usize> = (0..grid.geometry().c()).filter(|&i| grid.is_filled(i)).collect();
        let &i = filled.choose(rng)?;
        Some(clear(grid.clone(), i))
    } else {
        let empty: Vec<usize> = (0..grid.geometry().c()).filter(|&i| !grid.is_filled(i)).collect();
        let &i = empty.choose(rng)?;
        let digit = solution.as_bytes()[i] - b'0';
        Some(grid.clone().place(i, digit))
    }
}

/// Clears a filled cell back to empty by rebuilding the grid from its
/// remaining filled digits (there is no direct "un-place", since forbidden
/// masks are derived from what is currently filled).
fn clear(grid: Grid, i: usize) -> Grid {
    if !grid.is_filled(i) {
        return grid;
    }
    let geometry = grid.geometry().clone();
    let mut rebuilt = Grid::empty(geometry);
    for cell in 0..grid.geometry().c() {
        if cell == i {
            continue;
        }
        if let Some(digit) = grid.digit_at(cell) {
            rebuilt = rebuilt.place(cell, digit);
        }
    }
    rebuilt
}

fn has_unique_solution(grid: &Grid) -> bool {
    if grid.has_dead_cell() {
        return false;
    }
    solve(grid.clone(), 2).len() == 1
}
