//! Players and the win-value convention.
//!
//! Every adapter reports the outcome of a position as a plain `i32`:
//!
//! ```text
//!  0  -> undecided (game still running, or nothing known yet)
//! +1  -> Player::One won
//! -1  -> Player::Two won
//!  other nonzero -> finished without a winner (see DRAW)
//! ```

/// Win value of a position that is not decided yet.
pub const UNDECIDED: i32 = 0;

/// Win value of a finished game without a winner.
///
/// Nonzero so the position counts as terminal, but it matches neither
/// player's sign so no win counter is credited for it.
pub const DRAW: i32 = 2;

/// One of the two sides of a zero-sum game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Win value reported when this player wins (+1 / -1).
    #[inline]
    pub fn win_value(self) -> i32 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// The winner encoded by a win value, if any.
    ///
    /// Returns `None` for undecided positions and for draw-like sentinels.
    #[inline]
    pub fn from_win_value(value: i32) -> Option<Player> {
        match value {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    /// Dense index (0 or 1) for per-player tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}
