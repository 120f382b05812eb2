//! Dama text driver entry point.

use clap::Parser;
use dama::protocol::{run_loop, EngineOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Let men open a capture backwards
    #[arg(long)]
    backward_captures: bool,

    /// Print the board after every accepted move
    #[arg(long)]
    show_board: bool,

    /// Log filter, e.g. `debug` or `dama=info` (defaults to RUST_LOG, then `warn`)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();
    dama::init_logging(args.log.as_deref());

    let options = EngineOptions {
        backward_captures: args.backward_captures,
        show_board: args.show_board,
        ..EngineOptions::default()
    };

    // Run the command loop
    if let Err(e) = run_loop(options) {
        eprintln!("command loop failed: {:?}", e);
        std::process::exit(1);
    }
}
