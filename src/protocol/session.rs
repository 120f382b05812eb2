//! Line-based event loop for dama

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::options::EngineOptions;
use super::parser::{parse_command, Command};
use crate::board::{parse_move, Square};
use crate::error::MoveError;
use crate::game::{Game, MoveOutcome};
use crate::status::status_line;

pub struct Session {
    game: Game,
    running: bool,
    options: EngineOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            game: Game::new().with_rules(options.rules()),
            running: true,
            options,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::IsReady => {
                res.push("readyok".to_string());
            }
            Command::NewGame => {
                self.game = Game::new().with_rules(self.options.rules());
                res.push("ok".to_string());
            }
            Command::Position { moves } => {
                // Replay on a scratch game so a bad move leaves the current one intact
                let mut temp_game = Game::new().with_rules(self.options.rules());
                for move_str in &moves {
                    let applied = parse_move(move_str)
                        .map_err(|e| e.to_string())
                        .and_then(|(from, to)| {
                            temp_game.attempt_move(from, to).map_err(|e| e.to_string())
                        });
                    if let Err(e) = applied {
                        res.push(format!("info string invalid move {}: {}", move_str, e));
                        return res;
                    }
                }
                self.game = temp_game;
                res.push("ok".to_string());
            }
            Command::Select(s) => match s.parse::<Square>() {
                Ok(sq) => match self.game.select(sq) {
                    Ok(()) => res.push(format!("selected {}", sq)),
                    Err(e) => res.push(format_error(e)),
                },
                Err(e) => res.push(format!("info string {}", e)),
            },
            Command::Deselect => match self.game.deselect() {
                Ok(()) => res.push("ok".to_string()),
                Err(e) => res.push(format_error(e)),
            },
            Command::Target(s) => match s.parse::<Square>() {
                Ok(to) => {
                    let result = self.game.move_selected(to);
                    self.push_move_result(result, &mut res);
                }
                Err(e) => res.push(format!("info string {}", e)),
            },
            Command::Move { from, to } => match (from.parse::<Square>(), to.parse::<Square>()) {
                (Ok(from), Ok(to)) => {
                    let result = self.game.attempt_move(from, to);
                    self.push_move_result(result, &mut res);
                }
                (Err(e), _) | (_, Err(e)) => res.push(format!("info string {}", e)),
            },
            Command::Board => {
                res.extend(self.game.board().to_string().lines().map(str::to_string));
            }
            Command::Status => {
                let count = self.game.count_pieces();
                res.push(status_line(&count, self.game.turn()));
                if let Some(side) = count.winner() {
                    res.push(format!("winner {}", side));
                }
            }
            Command::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => {
                        self.game.set_rules(self.options.rules());
                        res.push(format!("info string setoption {} = {:?}", name, value));
                    }
                    Err(e) => {
                        warn!(%name, "setoption failed: {}", e);
                        res.push(format!("info string error: {}", e));
                    }
                }
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) => {
                res.push(format!("info string unknown command: {}", s));
            }
        }
        res
    }

    fn push_move_result(&self, result: Result<MoveOutcome, MoveError>, res: &mut Vec<String>) {
        match result {
            Ok(outcome) => {
                res.push(format_outcome(&outcome));
                if self.options.show_board {
                    res.extend(self.game.board().to_string().lines().map(str::to_string));
                }
                if let Some(side) = self.game.count_pieces().winner() {
                    res.push(format!("winner {}", side));
                }
            }
            Err(e) => res.push(format_error(e)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// `moved <from> <to> [captured <sq>] [promoted] [continue] next <side>`
pub fn format_outcome(outcome: &MoveOutcome) -> String {
    let mut line = format!("moved {} {}", outcome.moved_from, outcome.moved_to);
    if let Some(sq) = outcome.captured {
        line.push_str(&format!(" captured {}", sq));
    }
    if outcome.promoted {
        line.push_str(" promoted");
    }
    if outcome.chain_continues {
        line.push_str(" continue");
    }
    line.push_str(&format!(" next {}", outcome.next_active_side));
    line
}

pub fn format_error(e: MoveError) -> String {
    format!("error {}: {}", e.kind(), e)
}

pub fn run_loop(options: EngineOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut session = Session::with_options(options);
    let mut buf = String::new();

    while session.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            debug!("input closed");
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        let cmd = parse_command(line);
        let responses = session.handle_command(cmd);

        for r in responses {
            writeln!(writer, "{}", r)?;
        }

        // Flush after each command so a driving process sees the reply immediately
        writer.flush()?;
    }

    Ok(())
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    let cmd = parse_command(line);
    session.handle_command(cmd)
}
