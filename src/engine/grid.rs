/// A single cell value; `0` is empty, anything else is a power of two.
pub type Tile = u64;
/// Points accumulated from merges.
pub type Score = u64;

/// Result of one [`Grid::slide_down`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    /// True when the pre-slide grid had a gap to fall into or a pair to merge.
    pub moved: bool,
    /// Sum of all merged pairs in this pass.
    pub points: Score,
}

/// A rectangular tile grid stored row-major.
///
/// Dimensions are fixed apart from [`Grid::rotate_ccw`], which swaps them
/// for non-square grids. Cloning yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Grid { rows, cols, cells: vec![0; rows * cols] }
    }

    /// Build a grid from explicit rows.
    ///
    /// Panics if `rows` is empty or its rows are not all of equal length.
    ///
    /// ```
    /// use twenty48::engine::Grid;
    /// let g = Grid::from_rows(vec![vec![2, 0], vec![2, 0]]);
    /// assert_eq!((g.rows(), g.cols()), (2, 2));
    /// assert_eq!(g.get(1, 0), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        assert!(
            !rows.is_empty() && !rows[0].is_empty(),
            "grid dimensions must be non-zero"
        );
        let cols = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "all rows must have equal length"
        );
        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Grid { rows: height, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.idx(row, col)]
    }

    /// Overwrite the value at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        let i = self.idx(row, col);
        self.cells[i] = value;
    }

    /// Count the empty cells.
    #[inline]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == 0).count()
    }

    /// Positions of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.get(r, c) == 0)
    }

    /// Sum of every tile on the grid.
    #[inline]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().sum()
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Rotate the grid 90 degrees counter-clockwise in place.
    ///
    /// Cell `(r, c)` of the rotated grid takes the value of cell
    /// `(c, cols - 1 - r)` of the original; dimensions swap for non-square
    /// grids. Four rotations restore the original exactly.
    ///
    /// ```
    /// use twenty48::engine::Grid;
    /// let mut g = Grid::from_rows(vec![vec![2, 4, 8], vec![0, 0, 16]]);
    /// g.rotate_ccw();
    /// assert_eq!((g.rows(), g.cols()), (3, 2));
    /// assert_eq!(g.get(0, 0), 8);
    /// assert_eq!(g.get(0, 1), 16);
    /// ```
    pub fn rotate_ccw(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        let mut rotated = vec![0; rows * cols];
        for r in 0..cols {
            for c in 0..rows {
                rotated[r * rows + c] = self.cells[c * cols + (cols - 1 - r)];
            }
        }
        self.cells = rotated;
        self.rows = cols;
        self.cols = rows;
    }

    /// Whether a downward slide would change anything: some tile sits above
    /// an empty cell, or two vertically adjacent tiles are equal.
    ///
    /// Callers handling other directions rotate first; see
    /// [`Direction::rotation_count`](super::Direction::rotation_count).
    pub fn can_slide_down(&self) -> bool {
        for r in (1..self.rows).rev() {
            for c in (0..self.cols).rev() {
                let below = self.get(r, c);
                let above = self.get(r - 1, c);
                if below != 0 && below == above {
                    return true;
                }
                if below == 0 && above != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Slide every tile as far down as it goes, merge equal vertical pairs,
    /// then close the gaps the merges opened.
    ///
    /// `moved` reports whether the pre-slide grid could slide at all, and
    /// `points` the sum of all merged pairs. When nothing can slide the
    /// grid is left untouched.
    ///
    /// ```
    /// use twenty48::engine::Grid;
    /// let mut g = Grid::from_rows(vec![vec![2, 0], vec![2, 0]]);
    /// let outcome = g.slide_down();
    /// assert!(outcome.moved);
    /// assert_eq!(outcome.points, 4);
    /// assert_eq!(g, Grid::from_rows(vec![vec![0, 0], vec![4, 0]]));
    /// ```
    pub fn slide_down(&mut self) -> SlideOutcome {
        let moved = self.can_slide_down();
        // One settle pass drops a tile at most one row, so the fixed point
        // is reached after at most `rows` passes.
        for _ in 0..self.rows {
            self.settle();
        }
        let points = self.merge_down();
        self.settle();
        SlideOutcome { moved, points }
    }

    // Single gravity pass: a tile directly above an empty cell drops one row.
    fn settle(&mut self) {
        for r in (1..self.rows).rev() {
            for c in 0..self.cols {
                if self.get(r, c) == 0 && self.get(r - 1, c) != 0 {
                    self.set(r, c, self.get(r - 1, c));
                    self.set(r - 1, c, 0);
                }
            }
        }
    }

    // Merge pass from the last row boundary upward. The upward scan keeps a
    // freshly merged cell from merging again in the same slide.
    fn merge_down(&mut self) -> Score {
        let mut points = 0;
        for r in (1..self.rows).rev() {
            for c in 0..self.cols {
                let below = self.get(r, c);
                if below != 0 && below == self.get(r - 1, c) {
                    self.set(r, c, below * 2);
                    self.set(r - 1, c, 0);
                    points += below * 2;
                }
            }
        }
        points
    }
}
