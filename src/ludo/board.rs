use std::fmt::Write;

use crate::ludo::{
    position::{self, BASE, HOME, TOKENS_PER_PLAYER},
    GameError, PlayerCount,
};

/// The only owner of mutable game state: one position per token, packed as
/// `token = player * 4 + slot`. A board is a plain value over an inline
/// array, so every copy is a deep copy and no two boards can ever alias
/// the same buffer.
///
/// Positions are player-relative (see [`crate::ludo::position`]); the
/// absolute track coordinate is always derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    positions: [u8; 16],
    players: PlayerCount,
}

impl Board {
    /// Creates a board with every token at base.
    pub fn new(players: PlayerCount) -> Self {
        Board {
            positions: [BASE; 16],
            players,
        }
    }

    pub fn players(&self) -> PlayerCount {
        self.players
    }

    /// Number of live token slots on this board.
    pub fn token_count(&self) -> u8 {
        self.players.count() * TOKENS_PER_PLAYER
    }

    /// Owning player of a token index. Callers must validate the index first.
    pub fn player_of(token: u8) -> u8 {
        token / TOKENS_PER_PLAYER
    }

    pub fn token_index(player: u8, slot: u8) -> u8 {
        player * TOKENS_PER_PLAYER + slot
    }

    pub(crate) fn check_token(&self, token: u8) -> Result<u8, GameError> {
        if token < self.token_count() {
            Ok(token)
        } else {
            Err(GameError::InvalidToken(token))
        }
    }

    /// Player-relative position of a token.
    pub fn position(&self, token: u8) -> Result<u8, GameError> {
        self.check_token(token)?;
        Ok(self.positions[token as usize])
    }

    /// Debug and test aid: place a token anywhere in the position domain.
    /// Never clamps; a value past home is refused outright.
    pub fn set_position(&mut self, token: u8, position: u8) -> Result<(), GameError> {
        self.check_token(token)?;
        if position > HOME {
            return Err(GameError::InvalidPosition(position));
        }
        self.positions[token as usize] = position;
        Ok(())
    }

    pub(crate) fn set_position_unchecked(&mut self, token: u8, position: u8) {
        self.positions[token as usize] = position;
    }

    /// Absolute main-track tile currently occupied by a token, if it is on
    /// the main track at all. A token at 52 still occupies its shared tile.
    pub fn absolute_position(&self, token: u8) -> Option<u8> {
        let relative = self.positions[token as usize];
        if position::on_main_track(relative) {
            Some(position::absolute_tile(
                relative,
                Self::player_of(token),
                self.players,
            ))
        } else {
            None
        }
    }

    /// Number of tokens of any player standing on an absolute track tile.
    pub fn occupants(&self, tile: u8) -> u8 {
        (0..self.token_count())
            .filter(|&token| self.absolute_position(token) == Some(tile))
            .count() as u8
    }

    /// Two or more tokens on one shared tile halt all movement onto or
    /// through it, no matter whose tokens they are.
    pub fn is_blockade(&self, tile: u8) -> bool {
        let mut seen = 0;
        for token in 0..self.token_count() {
            if self.absolute_position(token) == Some(tile) {
                seen += 1;
                if seen >= 2 {
                    return true;
                }
            }
        }
        false
    }

    /// Capture-exempt shared tiles: each player's entry tile. Home-stretch
    /// squares are private and therefore safe by construction.
    pub fn is_safe_tile(&self, tile: u8) -> bool {
        (tile - 1) % self.players.spacing() == 0
    }

    /// True once all four tokens of a player stand on home.
    pub fn has_won(&self, player: u8) -> Result<bool, GameError> {
        self.players.check_player(player)?;
        Ok((0..TOKENS_PER_PLAYER)
            .all(|slot| self.positions[Self::token_index(player, slot) as usize] == HOME))
    }

    /// Human-readable per-token summary. Debugging aid only, not a format
    /// anything should parse.
    pub fn to_fancy_string(&self) -> String {
        let mut out = String::new();
        for player in self.players.players() {
            for slot in 0..TOKENS_PER_PLAYER {
                let token = Self::token_index(player, slot);
                let _ = write!(out, "P{player}.{slot}: ");
                match self.positions[token as usize] {
                    BASE => out.push_str("base"),
                    HOME => out.push_str("home"),
                    p if p > position::STRETCH_START => {
                        let _ = write!(out, "stretch +{}", p - position::STRETCH_START);
                    }
                    p => {
                        let tile = position::absolute_tile(p, player, self.players);
                        let _ = write!(out, "track {p} (abs {tile})");
                        if self.is_safe_tile(tile) {
                            out.push_str(" *safe*");
                        }
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ludo::position::STRETCH_START;

    #[test]
    fn fresh_board_has_all_tokens_at_base() {
        for players in [PlayerCount::Two, PlayerCount::Four] {
            let board = Board::new(players);
            for token in 0..board.token_count() {
                assert_eq!(board.position(token), Ok(BASE));
            }
        }
    }

    #[test]
    fn set_get_round_trip_and_shared_index_failure() {
        let mut board = Board::new(PlayerCount::Four);
        board.set_position(5, 37).unwrap();
        assert_eq!(board.position(5), Ok(37));

        assert_eq!(board.position(16), Err(GameError::InvalidToken(16)));
        assert_eq!(board.set_position(16, 1), Err(GameError::InvalidToken(16)));

        let two = Board::new(PlayerCount::Two);
        assert_eq!(two.position(8), Err(GameError::InvalidToken(8)));
    }

    #[test]
    fn set_position_never_clamps_past_home() {
        let mut board = Board::new(PlayerCount::Four);
        assert_eq!(
            board.set_position(0, HOME + 1),
            Err(GameError::InvalidPosition(59))
        );
        assert_eq!(board.position(0), Ok(BASE));
        board.set_position(0, HOME).unwrap();
        assert_eq!(board.position(0), Ok(HOME));
    }

    #[test]
    fn absolute_position_only_defined_on_track() {
        let mut board = Board::new(PlayerCount::Four);
        assert_eq!(board.absolute_position(4), None);
        board.set_position(4, 1).unwrap();
        assert_eq!(board.absolute_position(4), Some(14));
        board.set_position(4, STRETCH_START).unwrap();
        assert_eq!(board.absolute_position(4), Some(13));
        board.set_position(4, STRETCH_START + 1).unwrap();
        assert_eq!(board.absolute_position(4), None);
        board.set_position(4, HOME).unwrap();
        assert_eq!(board.absolute_position(4), None);
    }

    #[test]
    fn blockade_is_colour_blind() {
        let mut board = Board::new(PlayerCount::Four);
        assert!(!board.is_blockade(20));
        // One token of player 0, one of player 2, same absolute tile 20.
        board.set_position(0, 20).unwrap();
        assert!(!board.is_blockade(20));
        board.set_position(8, 46).unwrap(); // relative 46 + offset 26 = abs 20
        assert!(board.is_blockade(20));
        assert_eq!(board.occupants(20), 2);
        assert_eq!(board.occupants(21), 0);
    }

    #[test]
    fn own_pair_forms_a_blockade_too() {
        let mut board = Board::new(PlayerCount::Four);
        board.set_position(0, 9).unwrap();
        board.set_position(1, 9).unwrap();
        assert!(board.is_blockade(9));
    }

    #[test]
    fn safe_tiles_are_entry_tiles() {
        let four = Board::new(PlayerCount::Four);
        for tile in 1..=52 {
            assert_eq!(
                four.is_safe_tile(tile),
                [1, 14, 27, 40].contains(&tile),
                "tile {tile}"
            );
        }
        let two = Board::new(PlayerCount::Two);
        for tile in 1..=52 {
            assert_eq!(two.is_safe_tile(tile), [1, 27].contains(&tile), "tile {tile}");
        }
    }

    #[test]
    fn win_requires_all_four_home() {
        let mut board = Board::new(PlayerCount::Two);
        assert_eq!(board.has_won(0), Ok(false));
        for slot in 0..4 {
            board.set_position(slot, HOME).unwrap();
        }
        assert_eq!(board.has_won(0), Ok(true));
        board.set_position(3, 57).unwrap();
        assert_eq!(board.has_won(0), Ok(false));
        assert_eq!(board.has_won(2), Err(GameError::InvalidPlayer(2)));
    }

    #[test]
    fn copies_never_alias() {
        let mut board = Board::new(PlayerCount::Four);
        let copy = board;
        board.set_position(0, 10).unwrap();
        assert_eq!(copy.position(0), Ok(BASE));
        assert_eq!(board.position(0), Ok(10));
    }

    #[test]
    fn fancy_string_mentions_every_token() {
        let mut board = Board::new(PlayerCount::Two);
        board.set_position(0, 1).unwrap();
        board.set_position(1, 55).unwrap();
        board.set_position(2, HOME).unwrap();
        let text = board.to_fancy_string();
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("track 1 (abs 1) *safe*"));
        assert!(text.contains("stretch +3"));
        assert!(text.contains("home"));
        assert!(text.contains("base"));
    }
}
