//! Connect 4 adapter for the MCTS engine
//!
//! Seven columns of six cells. Players alternate dropping a disc into a
//! column that still has room; the disc settles on the lowest empty cell.
//! Four in a row along any line wins, and a full board with no line is a
//! draw.
//!
//! Cells are indexed `row * COLS + col` with row 0 at the bottom:
//! ```text
//! row 5  35 36 37 38 39 40 41
//!  ...
//! row 0   0  1  2  3  4  5  6
//!        c0 c1 c2 c3 c4 c5 c6
//! ```
//!
//! ```rust
//! use engine_core::{GameState, Player};
//! use games_connect4::{Action, State};
//!
//! let state = State::initial().apply_move(&Action::Drop(3));
//! assert_eq!(state.column_height(3), 1);
//! assert_eq!(state.player_to_move(), Player::Two);
//! ```

use engine_core::{GameState, Player, DRAW};

pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const BOARD_SIZE: usize = COLS * ROWS;

/// Line directions as (column step, row step); the opposite rays are
/// walked by negating them.
const LINES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

const CONNECT: usize = 4;

/// A Connect 4 position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    cells: [Option<Player>; BOARD_SIZE],
    heights: [u8; COLS],
    to_move: Player,
    /// Outcome in engine encoding: 0 ongoing, ±1 winner, `DRAW`
    outcome: i32,
}

impl State {
    /// Empty board, player one to move.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            heights: [0; COLS],
            to_move: Player::One,
            outcome: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome != 0
    }

    /// Winning player, if the game ended on a line of four.
    pub fn winner(&self) -> Option<Player> {
        Player::from_win_value(self.outcome)
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize == ROWS)
    }

    /// Discs stacked in `col`.
    pub fn column_height(&self, col: usize) -> u8 {
        self.heights[col]
    }

    /// Disc at (`col`, `row`), row 0 being the bottom.
    pub fn cell(&self, col: usize, row: usize) -> Option<Player> {
        self.cells[row * COLS + col]
    }

    /// Columns a disc can still go into. Empty once the game is over.
    pub fn open_columns(&self) -> impl Iterator<Item = u8> + '_ {
        let done = self.is_done();
        (0..COLS as u8).filter(move |&c| !done && (self.heights[c as usize] as usize) < ROWS)
    }

    /// Drop a disc for the side to move. Returns `None` if the column is
    /// out of range or full, or the game is already over.
    pub fn drop_disc(&self, col: u8) -> Option<State> {
        let col = col as usize;
        if self.is_done() || col >= COLS || self.heights[col] as usize >= ROWS {
            return None;
        }

        let row = self.heights[col] as usize;
        let mut next = self.clone();
        next.cells[row * COLS + col] = Some(self.to_move);
        next.heights[col] += 1;
        next.outcome = if next.line_through(col, row) >= CONNECT {
            self.to_move.win_value()
        } else if next.is_full() {
            DRAW
        } else {
            0
        };
        // The turn passes on every move, including the last one
        next.to_move = self.to_move.opponent();
        Some(next)
    }

    /// Longest run of same-colour discs through (`col`, `row`).
    fn line_through(&self, col: usize, row: usize) -> usize {
        let Some(owner) = self.cell(col, row) else {
            return 0;
        };
        LINES
            .iter()
            .map(|&(dc, dr)| {
                1 + self.ray(col, row, dc, dr, owner) + self.ray(col, row, -dc, -dr, owner)
            })
            .max()
            .unwrap_or(1)
    }

    /// Discs owned by `owner` walking from (`col`, `row`) exclusive.
    fn ray(&self, col: usize, row: usize, dc: isize, dr: isize, owner: Player) -> usize {
        (1..CONNECT)
            .map_while(|step| {
                let c = col.checked_add_signed(dc * step as isize)?;
                let r = row.checked_add_signed(dr * step as isize)?;
                (c < COLS && r < ROWS && self.cell(c, r) == Some(owner)).then_some(())
            })
            .count()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// A Connect 4 move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop into column 0-6
    Drop(u8),
}

impl Action {
    pub fn column(&self) -> u8 {
        let Action::Drop(col) = self;
        *col
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<&str> = (0..COLS)
                .map(|col| match self.cell(col, row) {
                    Some(Player::One) => "R",
                    Some(Player::Two) => "Y",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

impl GameState for State {
    type Move = Action;

    fn initial() -> Self {
        Self::new()
    }

    fn legal_moves(&self) -> Vec<Action> {
        self.open_columns().map(Action::Drop).collect()
    }

    fn win_value(&self) -> i32 {
        self.outcome
    }

    /// Illegal drops leave the position unchanged; the engine only applies
    /// moves taken from `legal_moves`.
    fn apply_move(&self, mv: &Action) -> Self {
        self.drop_disc(mv.column()).unwrap_or_else(|| self.clone())
    }

    fn player_to_move(&self) -> Player {
        self.to_move
    }

    fn render(&self) -> String {
        self.to_string()
    }
}
