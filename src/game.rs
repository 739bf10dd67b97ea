use rand::Rng;

use crate::{
    board::Board,
    common::{GameError, ParseError},
    config::GameConfig,
    coordinate::Coordinate,
    parser::parse_guess,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Result record for an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub coordinate: Coordinate,
    pub hit: bool,
    pub ship_sunk: bool,
    pub all_sunk: bool,
    /// Accepted guesses so far, this one included.
    pub guess_count: usize,
}

/// One game: the hidden board plus the count of accepted guesses.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    guesses: usize,
}

/// Start a new game with `config`, placing the fleet with `rng`.
pub fn init_game<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Game, GameError> {
    Game::new(config, rng)
}

impl Game {
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let board = Board::generate(config, rng)?;
        log::info!(
            "new game: {}x{} board, {} ships of length {}",
            config.board_size,
            config.board_size,
            config.num_ships,
            config.ship_length
        );
        Ok(Self::from_board(board))
    }

    /// Start a game on an already populated board.
    pub fn from_board(board: Board) -> Self {
        Self { board, guesses: 0 }
    }

    pub fn config(&self) -> &GameConfig {
        self.board.config()
    }

    /// Immutable reference to the hidden board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn guess_count(&self) -> usize {
        self.guesses
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Parse `raw` and fire at the resulting cell.
    ///
    /// Rejected input leaves the guess count unchanged. Guesses are still
    /// accepted after the game is won.
    pub fn submit_guess(&mut self, raw: &str) -> Result<ShotReport, ParseError> {
        let coordinate = parse_guess(raw, self.config().board_size).map_err(|e| {
            log::debug!("rejected guess {:?}: {}", raw, e);
            e
        })?;
        self.fire_at(coordinate)
    }

    /// Fire at a cell given by index, counting it as a guess. Cells off the
    /// board are rejected with `OutOfBounds` and not counted.
    pub fn fire_at(&mut self, coordinate: Coordinate) -> Result<ShotReport, ParseError> {
        if !coordinate.in_bounds(self.config().board_size) {
            return Err(ParseError::OutOfBounds);
        }
        self.guesses += 1;
        let outcome = self.board.fire(coordinate);
        if outcome.ship_sunk && outcome.all_sunk {
            log::info!("fleet sunk in {} guesses", self.guesses);
        }
        Ok(ShotReport {
            coordinate,
            hit: outcome.hit,
            ship_sunk: outcome.ship_sunk,
            all_sunk: outcome.all_sunk,
            guess_count: self.guesses,
        })
    }
}
