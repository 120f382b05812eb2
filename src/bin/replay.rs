use clap::Parser;
use dama::board::parse_move;
use dama::protocol::session::{format_error, format_outcome};
use dama::rules::Rules;
use dama::status::status_line;
use dama::Game;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a sequence of moves from the starting position", long_about = None)]
struct Args {
    /// Moves in `row,col-row,col` notation, e.g. `5,2-4,3 2,1-3,2`
    moves: Vec<String>,

    #[arg(long)]
    backward_captures: bool,

    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();
    dama::init_logging(args.log.as_deref());

    let mut game = Game::new().with_rules(Rules {
        backward_captures: args.backward_captures,
    });

    for (i, m) in args.moves.iter().enumerate() {
        let (from, to) = match parse_move(m) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("move {}: {}", i + 1, e);
                std::process::exit(2);
            }
        };
        match game.attempt_move(from, to) {
            Ok(outcome) => println!("{:>3}. {}", i + 1, format_outcome(&outcome)),
            Err(e) => {
                eprintln!("move {} ({}): {}", i + 1, m, format_error(e));
                std::process::exit(1);
            }
        }
    }

    print!("{}", game.board());
    let count = game.count_pieces();
    println!("{}", status_line(&count, game.turn()));
    if let Some(side) = count.winner() {
        println!("winner {}", side);
    }
}
