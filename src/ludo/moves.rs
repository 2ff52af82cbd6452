use tracing::debug;

use crate::{
    ludo::{
        position::{self, Square, EXIT_ROLL, HOME, STRETCH_START, TOKENS_PER_PLAYER, TRACK_TILES},
        Board, GameError,
    },
    misc::TinyVec,
};

/// Token indices of one player that can legally move, ascending by slot.
pub type MovableTokens = TinyVec<u8, 4>;

impl Board {
    /// Computes the legal destination of `token` for `step`, or the precise
    /// reason there is none. Pure: never mutates, never rolls dice.
    ///
    /// Priority order is fixed: home first, then base, then stretch, then
    /// track. A token standing on 52 moves by stretch arithmetic even
    /// though it still occupies a shared tile.
    pub fn resolve_destination(&self, token: u8, step: u8) -> Result<u8, GameError> {
        let current = self.position(token)?;
        if step == 0 {
            return Err(GameError::InvalidRoll(step));
        }
        let player = Self::player_of(token);
        match Square::classify(current) {
            Square::Home => Err(GameError::AlreadyHome),
            Square::Base => {
                if step != EXIT_ROLL {
                    return Err(GameError::NotMovable);
                }
                let entry = position::absolute_tile(1, player, self.players());
                if self.is_blockade(entry) {
                    return Err(GameError::PathBlocked);
                }
                Ok(1)
            }
            Square::Stretch(p) => {
                let target = p as u16 + step as u16;
                if target > HOME as u16 {
                    Err(GameError::Overshoot)
                } else {
                    Ok(target as u8)
                }
            }
            Square::Track(p) => {
                // No partial progress: the first blockade anywhere on the
                // crossed span, destination included, refuses the whole move.
                let raw = p as u16 + step as u16;
                let last_shared = raw.min(TRACK_TILES as u16) as u8;
                for crossed in p + 1..=last_shared {
                    let tile = position::absolute_tile(crossed, player, self.players());
                    if self.is_blockade(tile) {
                        return Err(GameError::PathBlocked);
                    }
                }
                if raw <= TRACK_TILES as u16 {
                    return Ok(raw as u8);
                }
                // Overflow walks onto the stretch: the first step past 52
                // lands on 52 itself, further steps climb from there.
                let target = TRACK_TILES as u16 + (raw - TRACK_TILES as u16) - 1;
                if target > HOME as u16 {
                    Err(GameError::Overshoot)
                } else {
                    Ok(target as u8)
                }
            }
        }
    }

    /// Applies a move: resolves the destination, commits it, then evicts
    /// any opposing tokens the mover landed on. Either the whole move
    /// happens or the board is left untouched.
    pub fn move_token(&mut self, token: u8, step: u8) -> Result<u8, GameError> {
        let target = self.resolve_destination(token, step)?;
        self.set_position_unchecked(token, target);
        debug!(token, step, target, "move committed");
        self.resolve_captures(token, target);
        Ok(target)
    }

    /// Brings a token at base into play on its entry tile. Unlike a rolled
    /// move this does not consume a step count, but the entry tile must
    /// still be free of blockades.
    pub fn exit_base(&mut self, token: u8) -> Result<(), GameError> {
        let current = self.position(token)?;
        if current != position::BASE {
            return Err(GameError::NotAtBase);
        }
        let player = Self::player_of(token);
        let entry = position::absolute_tile(1, player, self.players());
        if self.is_blockade(entry) {
            return Err(GameError::PathBlocked);
        }
        self.set_position_unchecked(token, 1);
        debug!(token, "token entered play");
        self.resolve_captures(token, 1);
        Ok(())
    }

    /// All tokens of `player` that could legally move with `step`, in slot
    /// order. An empty list is a normal outcome (no legal move this turn);
    /// only a bad player index or step count is an error.
    pub fn movable_tokens(&self, player: u8, step: u8) -> Result<MovableTokens, GameError> {
        self.players().check_player(player)?;
        if !(1..=6).contains(&step) {
            return Err(GameError::InvalidRoll(step));
        }
        let mut movable = MovableTokens::new();
        for slot in 0..TOKENS_PER_PLAYER {
            let token = Self::token_index(player, slot);
            if self.resolve_destination(token, step).is_ok() {
                movable.push(token);
            }
        }
        Ok(movable)
    }

    /// Sends every opposing main-track token sharing the mover's new tile
    /// back to base. Runs only after a committed move; safety is judged on
    /// the destination tile alone, and same-colour tokens always coexist.
    fn resolve_captures(&mut self, mover: u8, target: u8) {
        // Destination 52 is already the stretch entry, which is private and
        // therefore safe.
        if !position::on_main_track(target) || target >= STRETCH_START {
            return;
        }
        let player = Self::player_of(mover);
        let tile = position::absolute_tile(target, player, self.players());
        if self.is_safe_tile(tile) {
            return;
        }
        for token in 0..self.token_count() {
            if Self::player_of(token) == player {
                continue;
            }
            if self.absolute_position(token) == Some(tile) {
                self.set_position_unchecked(token, position::BASE);
                debug!(token, tile, "token captured");
            }
        }
    }
}
