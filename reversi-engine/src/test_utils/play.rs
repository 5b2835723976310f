use crate::{Game, Location, NullObserver, Outcome, Side};
use std::io::{self, BufRead, Write};

/// Play an interactive game on stdin/stdout, showing hints for the side to move.
/// Returns when the game ends or stdin is closed.
pub fn play_interactive() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new(NullObserver);
    let mut side = Side::default();
    game.initialize();

    while !game.is_finished() {
        let moves = game.show_hints(side);
        if moves.is_empty() {
            println!("{} has no legal moves and passes.", side);
            side = !side;
            continue;
        }

        println!("\n{}\n", game);
        print!("{} to move {}: ", side, moves);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let loc: Location = match line.parse() {
            Ok(loc) => loc,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.apply_move(loc.x() as i32, loc.y() as i32, side) {
            Ok(captures) => {
                println!("{} played {}, capturing {}.", side, loc, captures);
                side = !side;
            }
            Err(err) => println!("Invalid move: {}. Legal moves: {}", err, moves),
        }
    }

    game.clear_hints();
    let (dark, light) = game.score();
    println!("\n{}\n\nDark {} - Light {}", game, dark, light);
    match game.outcome() {
        Some(Outcome::Winner(winner)) => println!("Winner: {}.", winner),
        _ => println!("Draw."),
    }
    Ok(())
}
