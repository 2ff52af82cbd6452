use crate::ludo::error::GameError;

/// Number of players sharing the board. Two players start on opposite
/// sides of the track, four players are spaced a quarter turn apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerCount {
    Two,
    Four,
}

impl PlayerCount {
    pub const fn count(self) -> u8 {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Four => 4,
        }
    }

    /// Distance between consecutive entry tiles on the shared track.
    pub const fn spacing(self) -> u8 {
        match self {
            PlayerCount::Two => 26,
            PlayerCount::Four => 13,
        }
    }

    /// Track offset of a player's entry tile relative to player 0.
    pub const fn offset(self, player: u8) -> u8 {
        player * self.spacing()
    }

    pub fn players(self) -> impl Iterator<Item = u8> {
        0..self.count()
    }

    /// Validates a player index against this count.
    pub fn check_player(self, player: u8) -> Result<u8, GameError> {
        if player < self.count() {
            Ok(player)
        } else {
            Err(GameError::InvalidPlayer(player))
        }
    }
}
