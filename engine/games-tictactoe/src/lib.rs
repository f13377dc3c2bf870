//! TicTacToe game implementation for the MCTS engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the `GameState` trait for the search.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{GameState, Player};
//! use games_tictactoe::{Action, State};
//!
//! let state = State::initial().apply_move(&Action::Place(4));
//! assert_eq!(state.player_to_move(), Player::Two);
//! assert_eq!(state.legal_moves().len(), 8);
//! ```

use engine_core::{GameState, Player, DRAW};

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Current player: 1=X, 2=O
    current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            current_player: 1, // X goes first
            winner: 0,
        }
    }

    /// Build a state from a board, deriving the player to move and the winner.
    ///
    /// X always moves first, so X is to move when both sides have placed the
    /// same number of pieces.
    pub fn from_board(board: [u8; 9]) -> Self {
        let xs = board.iter().filter(|&&cell| cell == 1).count();
        let os = board.iter().filter(|&&cell| cell == 2).count();
        Self {
            board,
            current_player: if xs > os { 2 } else { 1 },
            winner: Self::check_winner(&board),
        }
    }

    /// Board cells: 0=empty, 1=X, 2=O
    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    /// Winner code: 0=ongoing, 1=X, 2=O, 3=draw
    pub fn winner(&self) -> u8 {
        self.winner
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Get legal positions (empty cells)
    pub fn legal_positions(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;

        // Check for winner
        new_state.winner = Self::check_winner(&new_state.board);

        // The turn passes even on a winning move, so a finished board
        // names the loser as the side to move
        new_state.current_player = if self.current_player == 1 { 2 } else { 1 };

        new_state
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> u8 {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a]; // Return the winning player
            }
        }

        // Check for draw (board full but no winner)
        if board.iter().all(|&cell| cell != 0) {
            return 3; // Draw
        }

        0 // Game ongoing
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.board.chunks(3) {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    1 => "X",
                    2 => "O",
                    _ => ".",
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a piece at the given position (0-8)
    Place(u8),
}

impl Action {
    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(pos) => *pos,
        }
    }
}

impl GameState for State {
    type Move = Action;

    fn initial() -> Self {
        Self::new()
    }

    fn legal_moves(&self) -> Vec<Action> {
        self.legal_positions().into_iter().map(Action::Place).collect()
    }

    fn win_value(&self) -> i32 {
        match self.winner {
            1 => Player::One.win_value(),
            2 => Player::Two.win_value(),
            3 => DRAW,
            _ => 0,
        }
    }

    fn apply_move(&self, mv: &Action) -> Self {
        self.make_move(mv.position())
    }

    fn player_to_move(&self) -> Player {
        if self.current_player == 1 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}
