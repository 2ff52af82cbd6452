use ludo::{
    engine,
    ludo::{Board, Die, PlayerCount},
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let board = Board::new(PlayerCount::Four);
    let games = 1_000;
    let rates = engine::win_rates(&board, games, 2_000);

    println!("{games} greedy self-play games, four players:");
    let mut players: Vec<_> = rates.iter().collect();
    players.sort();
    for (player, wins) in players {
        println!("  player {player}: {wins} wins");
    }

    println!("\nsample game:");
    show_one_game();
}

fn show_one_game() {
    let mut board = Board::new(PlayerCount::Two);
    let mut player = 0;
    for turn in 0..100_000 {
        let die = Die::roll();
        if let Some(token) = engine::choose_move(&board, player, die.value()) {
            let _ = board.move_token(token, die.value());
        }
        if board.has_won(player) == Ok(true) {
            println!("player {player} wins after {turn} turns\n");
            break;
        }
        if !die.grants_extra_turn() {
            player = (player + 1) % board.players().count();
        }
    }
    print!("{}", board.to_fancy_string());
}
