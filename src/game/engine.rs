use super::win::{winning_lines_through, WinningLine};
use super::{Board, Coord, Counter};
use crate::config::EngineConfig;
use crate::error::GameError;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Counter),
    Draw,
}

/// A single two-player game.
///
/// The game exclusively owns its [`Board`]; collaborators read state through
/// the query methods and mutate only via [`Game::drop_counter`] and
/// [`Game::reset`]. All operations are synchronous and either complete fully
/// or fail without touching state.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    number_to_win: usize,
    starting_player: Counter,
    current_player: Counter,
    last_move: Option<Coord>,
    winner: Option<Counter>,
    winning_lines: Vec<WinningLine>,
    drawn: bool,
}

impl Game {
    /// Create a fresh game from a configuration. Red moves first.
    ///
    /// Dimensions and `number_to_win` are checked here as well, so a
    /// hand-built config cannot bypass [`EngineConfig::validate`].
    pub fn new(config: &EngineConfig) -> Result<Self, GameError> {
        if config.number_to_win == 0 {
            return Err(GameError::InvalidNumberToWin);
        }
        let board = Board::new(config.columns, config.rows)?;
        Ok(Game {
            board,
            number_to_win: config.number_to_win,
            starting_player: Counter::Red,
            current_player: Counter::Red,
            last_move: None,
            winner: None,
            winning_lines: Vec::new(),
            drawn: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Counter {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    pub fn winner(&self) -> Option<Counter> {
        self.winner
    }

    /// Every winning line created by the final move. More than one line is
    /// possible when a single counter completes runs along several axes.
    pub fn winning_lines(&self) -> &[WinningLine] {
        &self.winning_lines
    }

    pub fn is_draw(&self) -> bool {
        self.drawn
    }

    /// Check if the game has ended, by win or by draw
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.drawn
    }

    /// Get game outcome if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner {
            Some(counter) => Some(GameOutcome::Winner(counter)),
            None if self.drawn => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Check if a column can accept the next move
    pub fn is_column_playable(&self, column: usize) -> bool {
        !self.is_game_over() && self.board.is_column_playable(column)
    }

    /// Get list of columns the next move may target (empty once the game
    /// is over)
    pub fn playable_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        (0..self.board.columns())
            .filter(|&column| self.board.is_column_playable(column))
            .collect()
    }

    /// Drop the current player's counter into a column.
    ///
    /// On success returns the landing coordinate, having run win detection
    /// around it: a win records the winner and every completed line without
    /// advancing the turn, a full board records a draw, and otherwise the
    /// turn passes to the other player. All failures leave state unchanged.
    pub fn drop_counter(&mut self, column: usize) -> Result<Coord, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let coord = self.board.place(column, self.current_player)?;
        self.last_move = Some(coord);

        let lines = winning_lines_through(&self.board, coord, self.number_to_win);
        if !lines.is_empty() {
            self.winner = Some(self.current_player);
            self.winning_lines = lines;
        } else if self.board.is_full() {
            self.drawn = true;
        } else {
            self.current_player = self.current_player.other();
        }
        Ok(coord)
    }

    /// Restore the initial empty state with the original starting player.
    ///
    /// A live game cannot be reset mid-play: this is a no-op returning
    /// `false` unless the game is over.
    pub fn reset(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        // Dimensions were validated at construction
        self.board = Board::new(self.board.columns(), self.board.rows())
            .unwrap_or_else(|_| unreachable!("dimensions already validated"));
        self.current_player = self.starting_player;
        self.last_move = None;
        self.winner = None;
        self.winning_lines = Vec::new();
        self.drawn = false;
        true
    }
}

impl Default for Game {
    /// A standard 7x6 game with four-to-win
    fn default() -> Self {
        Game::new(&EngineConfig::default())
            .unwrap_or_else(|_| unreachable!("default config is valid"))
    }
}
