use crate::ludo::PlayerCount;

/// Tokens waiting at base sit on this position.
pub const BASE: u8 = 0;
/// Length of the shared circular main track.
pub const TRACK_TILES: u8 = 52;
/// First home-stretch position. Deliberately equal to the last main-track
/// tile: the transition onto the stretch happens exactly there, so 52 is
/// both the final shared tile and the first private one.
pub const STRETCH_START: u8 = 52;
/// Terminal position. A token that reaches it never moves again.
pub const HOME: u8 = 58;
/// Only this roll lets a token leave base.
pub const EXIT_ROLL: u8 = 6;
/// Tokens per player; token index = player * 4 + slot.
pub const TOKENS_PER_PLAYER: u8 = 4;

/// Classification of a raw position for move resolution. The overlap at 52
/// is resolved in favour of the stretch here: movement from 52 onward is
/// plain stretch arithmetic, never track arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Base,
    /// Main track, relative 1..=51.
    Track(u8),
    /// Home stretch, relative 52..=57.
    Stretch(u8),
    Home,
}

impl Square {
    pub fn classify(position: u8) -> Square {
        match position {
            BASE => Square::Base,
            HOME => Square::Home,
            p if p >= STRETCH_START => Square::Stretch(p),
            p => Square::Track(p),
        }
    }
}

/// True while the token physically occupies a shared track tile. This
/// includes 52: a token entering the stretch still stands on the last
/// main-track tile and counts for blockades and captures there.
pub fn on_main_track(position: u8) -> bool {
    (1..=TRACK_TILES).contains(&position)
}

/// True from stretch entry up to and including home.
pub fn on_home_stretch(position: u8) -> bool {
    (STRETCH_START..=HOME).contains(&position)
}

/// Maps a player-relative main-track tile (1..=52) to the absolute tile
/// shared by all players. Only defined on the main track; base, stretch
/// and home have no absolute coordinate.
pub fn absolute_tile(relative: u8, player: u8, players: PlayerCount) -> u8 {
    debug_assert!(on_main_track(relative));
    (relative - 1 + players.offset(player)) % TRACK_TILES + 1
}

/// Inverse of [`absolute_tile`] for the same player and count.
pub fn relative_tile(absolute: u8, player: u8, players: PlayerCount) -> u8 {
    debug_assert!(on_main_track(absolute));
    (absolute - 1 + TRACK_TILES - players.offset(player)) % TRACK_TILES + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_round_trips_for_all_players() {
        for players in [PlayerCount::Two, PlayerCount::Four] {
            for player in players.players() {
                for relative in 1..=TRACK_TILES {
                    let absolute = absolute_tile(relative, player, players);
                    assert!(on_main_track(absolute));
                    assert_eq!(relative_tile(absolute, player, players), relative);
                }
            }
        }
    }

    #[test]
    fn entry_tiles_are_offset_by_spacing() {
        assert_eq!(absolute_tile(1, 0, PlayerCount::Four), 1);
        assert_eq!(absolute_tile(1, 1, PlayerCount::Four), 14);
        assert_eq!(absolute_tile(1, 2, PlayerCount::Four), 27);
        assert_eq!(absolute_tile(1, 3, PlayerCount::Four), 40);
        assert_eq!(absolute_tile(1, 0, PlayerCount::Two), 1);
        assert_eq!(absolute_tile(1, 1, PlayerCount::Two), 27);
    }

    #[test]
    fn overlap_tile_is_both_track_and_stretch() {
        assert!(on_main_track(STRETCH_START));
        assert!(on_home_stretch(STRETCH_START));
        assert_eq!(Square::classify(STRETCH_START), Square::Stretch(52));
        assert_eq!(Square::classify(51), Square::Track(51));
        assert_eq!(Square::classify(HOME), Square::Home);
        assert_eq!(Square::classify(BASE), Square::Base);
    }

    #[test]
    fn track_wraps_past_fifty_two() {
        // Player 3 with four players: relative 40 sits on absolute 40 + 39 mod 52.
        assert_eq!(absolute_tile(40, 3, PlayerCount::Four), 27);
        assert_eq!(relative_tile(27, 3, PlayerCount::Four), 40);
    }
}
