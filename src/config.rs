use core::time::Duration;

use crate::ship::ShipKind;

/// Grid dimension of every board.
pub const SIZE: usize = 10;
/// Ships every fleet is expected to carry, in table order.
pub const SHIP_KINDS: [ShipKind; 5] = ShipKind::ALL;
/// Sinks needed to win a game.
pub const TOTAL_SHIPS: usize = SHIP_KINDS.len();
/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Games played per match unless configured otherwise.
pub const DEFAULT_GAMES: u32 = 10;
/// Rounds allowed per game unless configured otherwise: enough for one shot
/// at every cell.
pub const DEFAULT_MAX_ROUNDS: u32 = (SIZE * SIZE) as u32;

/// Runtime settings of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub games: u32,
    pub max_rounds: u32,
    /// Deadline for every receive. `None` blocks indefinitely.
    pub recv_timeout: Option<Duration>,
    /// Reject boards whose ships are not straight runs of the right size.
    pub validate_boards: bool,
}

impl MatchConfig {
    pub fn new(games: u32, max_rounds: u32) -> Self {
        Self {
            games,
            max_rounds,
            recv_timeout: None,
            validate_boards: false,
        }
    }

    pub fn with_recv_timeout(mut self, timeout: Duration) -> Self {
        self.recv_timeout = Some(timeout);
        self
    }

    pub fn with_board_validation(mut self, enabled: bool) -> Self {
        self.validate_boards = enabled;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GAMES, DEFAULT_MAX_ROUNDS)
    }
}
