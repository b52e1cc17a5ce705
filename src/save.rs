//! Plain-text snapshots of a game in progress.
//!
//! Format: a header line `"<rows> <cols>"`, a line with the score, then
//! `rows` lines of `cols` space-separated tile values. Loading rebuilds the
//! game through the engine's public surface, so a loaded game continues
//! from the default RNG seed rather than the stream position at save time.

use std::fs;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::Path;

use crate::engine::{GameState, Grid, Score};

/// File name used when the player does not choose one.
pub const DEFAULT_SAVE_PATH: &str = "save.2048";

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid number: {0}")]
    Number(#[from] ParseIntError),
    #[error("file too short or malformed")]
    Malformed,
    #[error("dimensions do not match the header")]
    Dimensions,
}

/// Render a game to the snapshot format.
pub fn encode_game(game: &GameState) -> String {
    let grid = game.board();
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", grid.rows(), grid.cols()));
    out.push_str(&format!("{}\n", game.score()));
    for r in 0..grid.rows() {
        let fields: Vec<String> = (0..grid.cols()).map(|c| grid.get(r, c).to_string()).collect();
        out.push_str(&fields.join(" "));
        out.push('\n');
    }
    out
}

/// Write a game snapshot to `path`, replacing any existing file.
pub fn write_game_to_path<P: AsRef<Path>>(path: P, game: &GameState) -> Result<(), SaveError> {
    let data = encode_game(game);
    let mut f = fs::File::create(path)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

/// Parse a snapshot from text.
pub fn parse_game_str(text: &str) -> Result<GameState, SaveError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(SaveError::Malformed)?;
    let mut dims = header.split_whitespace();
    let rows: usize = dims.next().ok_or(SaveError::Malformed)?.parse()?;
    let cols: usize = dims.next().ok_or(SaveError::Malformed)?.parse()?;
    if dims.next().is_some() {
        return Err(SaveError::Malformed);
    }
    if rows == 0 || cols == 0 {
        return Err(SaveError::Dimensions);
    }

    let score: Score = lines.next().ok_or(SaveError::Malformed)?.trim().parse()?;

    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        let line = lines.next().ok_or(SaveError::Malformed)?;
        let mut filled = 0;
        for (c, field) in line.split_whitespace().enumerate() {
            if c >= cols {
                return Err(SaveError::Dimensions);
            }
            grid.set(r, c, field.parse()?);
            filled = c + 1;
        }
        if filled != cols {
            return Err(SaveError::Dimensions);
        }
    }

    let mut game = GameState::new(rows, cols);
    game.set_score(score);
    game.set_board(grid);
    Ok(game)
}

/// Read and parse a snapshot file.
pub fn parse_game_file<P: AsRef<Path>>(path: P) -> Result<GameState, SaveError> {
    let text = fs::read_to_string(path)?;
    parse_game_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;
    use tempfile::NamedTempFile;

    #[test]
    fn round_trip_mid_game() {
        let mut game = GameState::with_seed(4, 4, 5);
        game.add_tile();
        game.add_tile();
        for dir in [Direction::Down, Direction::Left, Direction::Up] {
            game.make_move(dir);
        }

        let tmp = NamedTempFile::new().unwrap();
        write_game_to_path(tmp.path(), &game).unwrap();
        let loaded = parse_game_file(tmp.path()).unwrap();
        assert_eq!(loaded.board(), game.board());
        assert_eq!(loaded.score(), game.score());
    }

    #[test]
    fn round_trip_non_square() {
        let mut game = GameState::new(3, 2);
        game.set_board(Grid::from_rows(vec![vec![2, 0], vec![0, 4], vec![8, 0]]));
        game.set_score(12);

        let tmp = NamedTempFile::new().unwrap();
        write_game_to_path(tmp.path(), &game).unwrap();
        let loaded = parse_game_file(tmp.path()).unwrap();
        assert_eq!(loaded.board(), game.board());
        assert_eq!(loaded.score(), 12);
    }

    #[test]
    fn encode_exact_format() {
        let mut game = GameState::new(2, 3);
        game.set_board(Grid::from_rows(vec![vec![2, 0, 4], vec![0, 16, 0]]));
        game.set_score(20);
        assert_eq!(encode_game(&game), "2 3\n20\n2 0 4\n0 16 0\n");
    }

    #[test]
    fn parse_static_snapshot() {
        let game = parse_game_str("2 2\n8\n2 4\n0 2\n").unwrap();
        assert_eq!(game.score(), 8);
        assert_eq!(game.board(), Grid::from_rows(vec![vec![2, 4], vec![0, 2]]));
    }

    #[test]
    fn parse_rejects_missing_lines() {
        assert!(matches!(parse_game_str(""), Err(SaveError::Malformed)));
        assert!(matches!(parse_game_str("2 2\n"), Err(SaveError::Malformed)));
        assert!(matches!(parse_game_str("2 2\n0\n2 0\n"), Err(SaveError::Malformed)));
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        assert!(matches!(parse_game_str("a 2\n0\n"), Err(SaveError::Number(_))));
        assert!(matches!(
            parse_game_str("2 2\nxyz\n0 0\n0 0\n"),
            Err(SaveError::Number(_))
        ));
        assert!(matches!(
            parse_game_str("2 2\n0\n0 -2\n0 0\n"),
            Err(SaveError::Number(_))
        ));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(matches!(
            parse_game_str("2 2\n0\n0 0 0\n0 0\n"),
            Err(SaveError::Dimensions)
        ));
        assert!(matches!(
            parse_game_str("2 2\n0\n0\n0 0\n"),
            Err(SaveError::Dimensions)
        ));
        assert!(matches!(parse_game_str("0 0\n0\n"), Err(SaveError::Dimensions)));
    }
}
