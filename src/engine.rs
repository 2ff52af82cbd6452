use hashbrown::HashMap;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::trace;

use crate::ludo::{position::BASE, Board, Die};

/// Picks the strongest token for `player` to move with `roll`, or `None`
/// when nothing can move this turn. Greedy: a capture outweighs any amount
/// of plain progress, otherwise the furthest destination wins.
pub fn choose_move(board: &Board, player: u8, roll: u8) -> Option<u8> {
    let candidates = board.movable_tokens(player, roll).ok()?;
    candidates
        .iter()
        .copied()
        .max_by_key(|&token| move_score(board, token, roll))
}

fn move_score(board: &Board, token: u8, roll: u8) -> i32 {
    let mut probe = *board;
    let Ok(target) = probe.move_token(token, roll) else {
        return i32::MIN;
    };
    let captures = (0..board.token_count())
        .filter(|&t| {
            probe.position(t) == Ok(BASE) && board.position(t) != Ok(BASE)
        })
        .count() as i32;
    captures * 100 + target as i32
}

/// Plays one game with greedy players taking round-robin turns (a six
/// grants another turn). Returns the winner, or `None` if the turn limit
/// runs out first.
pub fn play_random_game(mut board: Board, turn_limit: u32) -> Option<u8> {
    let count = board.players().count();
    let mut player = 0;
    for _ in 0..turn_limit {
        let die = Die::roll();
        if let Some(token) = choose_move(&board, player, die.value()) {
            let _ = board.move_token(token, die.value());
            trace!(player, token, roll = die.value(), "playout move");
        }
        if board.has_won(player) == Ok(true) {
            return Some(player);
        }
        if !die.grants_extra_turn() {
            player = (player + 1) % count;
        }
    }
    None
}

/// Estimates per-player win counts from parallel greedy playouts starting
/// at `board`. Games hitting the turn limit are dropped from the tally.
pub fn win_rates(board: &Board, games: u32, turn_limit: u32) -> HashMap<u8, u32> {
    (0..games)
        .into_par_iter()
        .filter_map(|_| play_random_game(*board, turn_limit))
        .fold(HashMap::new, |mut tally, winner| {
            *tally.entry(winner).or_insert(0) += 1;
            tally
        })
        .reduce(HashMap::new, |mut merged, tally| {
            for (winner, wins) in tally {
                *merged.entry(winner).or_insert(0) += wins;
            }
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ludo::PlayerCount;

    #[test]
    fn prefers_a_capture_over_plain_progress() {
        let mut board = Board::new(PlayerCount::Four);
        board.set_position(0, 1).unwrap();
        board.set_position(1, 10).unwrap();
        board.set_position(4, 42).unwrap(); // opponent on absolute tile 3
        assert_eq!(choose_move(&board, 0, 2), Some(0));
    }

    #[test]
    fn no_move_available_yields_none() {
        let board = Board::new(PlayerCount::Four);
        assert_eq!(choose_move(&board, 0, 3), None);
        assert!(choose_move(&board, 0, 6).is_some());
    }

    #[test]
    fn playouts_terminate_and_stay_legal() {
        for _ in 0..5 {
            let board = Board::new(PlayerCount::Two);
            if let Some(winner) = play_random_game(board, 2_000) {
                assert!(winner < 2);
            }
        }
    }

    #[test]
    fn win_rate_tally_is_bounded_by_game_count() {
        let board = Board::new(PlayerCount::Two);
        let rates = win_rates(&board, 8, 300);
        assert!(rates.values().sum::<u32>() <= 8);
        assert!(rates.keys().all(|&winner| winner < 2));
    }
}
