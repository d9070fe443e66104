//! Universally-quantified invariants, property-tested. Grounded in the
//! property-test module of the retrieved `numelace-generator` example,
//! the only file in the corpus that reaches for `proptest` around a
//! sudoku generator/solver.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sudoku_core::{evaluate_difficulty, generate_puzzle, has_unique_solution, solve_puzzle};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn has_unique_solution_matches_solve_count(seed in 0u64..500) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (puzzle, _solution, _score) = generate_puzzle(3, 500, 0, &mut rng).unwrap();
        let solutions = solve_puzzle(&puzzle, 3).unwrap();
        prop_assert_eq!(has_unique_solution(&puzzle, 3), solutions.len() == 1);
    }

    #[test]
    fn solve_puzzle_output_always_validates_and_agrees_with_input(seed in 0u64..500) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (puzzle, solution, _score) = generate_puzzle(3, 300, 0, &mut rng).unwrap();
        let solutions = solve_puzzle(&puzzle, 3).unwrap();
        prop_assert_eq!(&solutions[0], &solution);
        for (p_ch, s_ch) in puzzle.chars().zip(solution.chars()) {
            if p_ch != '.' && p_ch != '0' {
                prop_assert_eq!(p_ch, s_ch);
            }
        }
    }

    #[test]
    fn difficulty_is_at_least_the_empty_cell_count(seed in 0u64..200) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (puzzle, solution, _score) = generate_puzzle(3, 400, 0, &mut rng).unwrap();
        let empty = puzzle.chars().filter(|&c| c == '.').count() as i64;
        let score = evaluate_difficulty(&puzzle, Some(&solution), 3).unwrap();
        prop_assert!(score >= empty);
    }

    #[test]
    fn generator_is_deterministic_for_a_fixed_seed(seed in 0u64..200, target in 100u64..2000) {
        let mut rng_a = ChaCha8Rng::seed_from_u64(seed);
        let mut rng_b = ChaCha8Rng::seed_from_u64(seed);
        let a = generate_puzzle(3, target, 0, &mut rng_a).unwrap();
        let b = generate_puzzle(3, target, 0, &mut rng_b).unwrap();
        prop_assert_eq!(a, b);
    }
}
