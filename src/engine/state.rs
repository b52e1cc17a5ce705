use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::grid::{Grid, Score, Tile};

/// Seed for games created without an explicit one.
pub const DEFAULT_SEED: u64 = 118;
/// Chance in 100 that a spawned tile is a 2 rather than a 4.
pub const TWO_TILE_CHANCE: u32 = 70;
/// Rows and columns of a default board.
pub const DEFAULT_SIZE: usize = 4;
/// Tiles spawned when a fresh game begins.
pub const INITIAL_TILES: usize = 2;

/// A direction tiles can be slid.
///
/// Every direction is a rotation of the canonical downward slide; the
/// rotation count says how many counter-clockwise quarter turns take the
/// board there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Left,
    Up,
    Right,
}

impl Direction {
    /// All directions, in rotation-count order.
    pub const ALL: [Direction; 4] =
        [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    /// Counter-clockwise quarter turns mapping this direction onto the
    /// canonical downward slide.
    #[inline]
    pub fn rotation_count(self) -> usize {
        match self {
            Direction::Down => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Right => 3,
        }
    }
}

/// Full game state: the grid, the score, and the RNG that feeds tile
/// placement.
///
/// The RNG is owned and seeded, so a game constructed with a fixed seed
/// replays identically given the same commands.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: Score,
    rng: StdRng,
}

impl GameState {
    /// Create an empty game with the default seed.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_seed(rows, cols, DEFAULT_SEED)
    }

    /// Create an empty game whose RNG starts from an explicit seed.
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Self {
        GameState {
            grid: Grid::new(rows, cols),
            score: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// An independent copy of the current grid.
    pub fn board(&self) -> Grid {
        self.grid.clone()
    }

    /// Replace the grid wholesale, dimensions included.
    pub fn set_board(&mut self, grid: Grid) {
        self.grid = grid;
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Overwrite the score; meant for state restoration.
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    /// Place a 2 (70%) or 4 (30%) on a uniformly chosen empty cell.
    ///
    /// Returns the value placed, or 0 when no cell is empty. A full board
    /// draws nothing from the RNG; otherwise exactly two draws are made,
    /// position first, then tile value.
    ///
    /// ```
    /// use twenty48::engine::GameState;
    /// let mut game = GameState::with_seed(4, 4, 11);
    /// let placed = game.add_tile();
    /// assert!(placed == 2 || placed == 4);
    /// assert_eq!(game.board().count_empty(), 15);
    /// ```
    pub fn add_tile(&mut self) -> Tile {
        let empty = self.grid.count_empty();
        if empty == 0 {
            return 0;
        }
        let target = self.rng.gen_range(0..empty);
        let value = random_tile_value(&mut self.rng);
        let (r, c) = self
            .grid
            .empty_cells()
            .nth(target)
            .expect("Could not find an empty cell");
        self.grid.set(r, c, value);
        value
    }

    /// Slide tiles in the given direction, merging equal pairs and spawning
    /// a random tile on success.
    ///
    /// The grid is rotated into the canonical downward orientation, slid,
    /// and rotated back. The new tile is placed before the board is rotated
    /// back, which keeps seeded games reproducible. A failed move leaves
    /// grid, score, and RNG untouched and returns `false`.
    ///
    /// ```
    /// use twenty48::engine::{Direction, GameState, Grid};
    /// let mut game = GameState::new(2, 2);
    /// game.set_board(Grid::from_rows(vec![vec![2, 0], vec![2, 0]]));
    /// assert!(game.make_move(Direction::Down));
    /// assert_eq!(game.score(), 4);
    /// assert_eq!(game.board().get(1, 0), 4);
    /// ```
    pub fn make_move(&mut self, direction: Direction) -> bool {
        let turns = direction.rotation_count();
        for _ in 0..turns {
            self.grid.rotate_ccw();
        }
        let outcome = self.grid.slide_down();
        if outcome.moved {
            self.score += outcome.points;
            self.add_tile();
        }
        for _ in 0..(4 - turns) % 4 {
            self.grid.rotate_ccw();
        }
        outcome.moved
    }

    /// True when no direction can change the board.
    ///
    /// The check probes a scratch copy through all four orientations, so
    /// the observable grid never moves.
    ///
    /// ```
    /// use twenty48::engine::GameState;
    /// // With no tiles nothing can slide, so an untouched board counts as over.
    /// assert!(GameState::new(4, 4).is_game_over());
    /// ```
    pub fn is_game_over(&self) -> bool {
        let mut probe = self.grid.clone();
        for _ in 0..4 {
            if probe.can_slide_down() {
                return false;
            }
            probe.rotate_ccw();
        }
        true
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                match self.grid.get(r, c) {
                    0 => write!(f, "{:>5}", "-")?,
                    v => write!(f, "{v:>5}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..100) < TWO_TILE_CHANCE {
        2
    } else {
        4
    }
}
