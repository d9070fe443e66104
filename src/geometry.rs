//! Pure coordinate math for a Sudoku board of block width `w`.
//!
//! Everything here is a function of `w` alone. [`Geometry`] precomputes and
//! caches the peer list of every cell and the `3N` houses once, so the
//! solver's hot loop never re-derives them.

use crunchy::unroll;

/// Precomputed geometry for a board of block width `w`.
///
/// Cheap to clone (wrap in `Arc` for sharing across solver recursion, which
/// is what [`crate::grid::Grid`] does).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    w: usize,
    n: usize,
    c: usize,
    peers: Vec<Vec<usize>>,
    houses: Vec<Vec<usize>>,
}

impl Geometry {
    /// Builds the geometry for block width `w` (`w = 3` for a standard 9x9 board).
    ///
    /// # Panics
    ///
    /// Panics if `w == 0`.
    pub fn new(w: usize) -> Self {
        assert!(w > 0, "block width must be positive");
        let n = w * w;
        let c = n * n;

        let houses = Self::build_houses(w, n);
        let peers = Self::build_peers(c, &houses);

        Geometry { w, n, c, peers, houses }
    }

    /// Block width (`w` in the spec; `N = w^2`, `C = w^4`).
    #[inline]
    pub fn w(&self) -> usize {
        self.w
    }

    /// Side length / digit count (`N = w^2`).
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cell count (`C = w^4`).
    #[inline]
    pub fn c(&self) -> usize {
        self.c
    }

    /// Row of cell `i`, `0..N`.
    #[inline]
    pub fn row_of(&self, i: usize) -> usize {
        i / self.n
    }

    /// Column of cell `i`, `0..N`.
    #[inline]
    pub fn col_of(&self, i: usize) -> usize {
        i % self.n
    }

    /// Block of cell `i`, `0..N`.
    #[inline]
    pub fn block_of(&self, i: usize) -> usize {
        (self.row_of(i) / self.w) * self.w + (self.col_of(i) / self.w)
    }

    /// Cells sharing a row, column, or block with `i`, excluding `i` itself.
    ///
    /// Deduplicated and sorted ascending; deterministic across calls.
    #[inline]
    pub fn peers(&self, i: usize) -> &[usize] {
        &self.peers[i]
    }

    /// The `3N` houses (rows, then columns, then blocks), each `N` cells.
    #[inline]
    pub fn houses(&self) -> &[Vec<usize>] {
        &self.houses
    }

    fn build_houses(w: usize, n: usize) -> Vec<Vec<usize>> {
        let mut houses = Vec::with_capacity(3 * n);

        // Three house kinds, a fixed compile-time-constant trip count.
        unroll! {
            for kind in 0..3 {
                for g in 0..n {
                    let mut cells = Vec::with_capacity(n);
                    match kind {
                        0 => {
                            // row g
                            for c in 0..n {
                                cells.push(g * n + c);
                            }
                        }
                        1 => {
                            // column g
                            for r in 0..n {
                                cells.push(r * n + g);
                            }
                        }
                        _ => {
                            // block g
                            let row_off = (g / w) * w;
                            let col_off = (g % w) * w;
                            for dr in 0..w {
                                for dc in 0..w {
                                    cells.push((row_off + dr) * n + (col_off + dc));
                                }
                            }
                        }
                    }
                    houses.push(cells);
                }
            }
        }

        houses
    }

    fn build_peers(c: usize, houses: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut peer_sets: Vec<Vec<bool>> = vec![vec![false; c]; c];
        for house in houses {
            for &a in house {
                for &b in house {
                    if a != b {
                        peer_sets[a][b] = true;
                    }
                }
            }
        }
        peer_sets
            .into_iter()
            .map(|row| row.into_iter().enumerate().filter(|(_, is_peer)| *is_peer).map(|(idx, _)| idx).collect())
            .collect()
    }
}
