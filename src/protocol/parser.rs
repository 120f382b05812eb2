//! Command parser for the dama text driver.
//!
//! One command per line, whitespace separated. Squares stay as text here and
//! are parsed by the session so that bad notation gets a proper reply.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    IsReady,
    NewGame,
    /// `position startpos [moves <from-to> ...]`
    Position {
        moves: Vec<String>,
    },
    Select(String),
    Deselect,
    Target(String),
    Move {
        from: String,
        to: String,
    },
    Board,
    Status,
    SetOption {
        name: String,
        value: Option<String>,
    },
    Quit,
    Unknown(String),
}

/// Parse a command line (simple tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown("".to_string());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts[0] {
        "isready" => Command::IsReady,
        "newgame" => Command::NewGame,
        "deselect" => Command::Deselect,
        "board" => Command::Board,
        "status" => Command::Status,
        "quit" => Command::Quit,
        "select" if parts.len() == 2 => Command::Select(parts[1].to_string()),
        "target" if parts.len() == 2 => Command::Target(parts[1].to_string()),
        "move" if parts.len() == 3 => Command::Move {
            from: parts[1].to_string(),
            to: parts[2].to_string(),
        },
        "setoption" => {
            // expected: setoption name <name> [value <val>]
            let mut name = String::new();
            let mut value: Option<String> = None;
            let mut i = 1usize;
            while i < parts.len() {
                match parts[i] {
                    "name" => {
                        i += 1;
                        let mut vals = Vec::new();
                        while i < parts.len() && parts[i] != "value" {
                            vals.push(parts[i]);
                            i += 1;
                        }
                        name = vals.join(" ");
                    }
                    "value" => {
                        i += 1;
                        value = Some(parts[i..].join(" "));
                        break;
                    }
                    _ => {
                        i += 1;
                    }
                }
            }
            Command::SetOption { name, value }
        }
        "position" if parts.get(1) == Some(&"startpos") => {
            let mut moves: Vec<String> = Vec::new();
            if let Some(pos) = parts.iter().position(|&s| s == "moves") {
                for &m in &parts[pos + 1..] {
                    moves.push(m.to_string());
                }
            }
            Command::Position { moves }
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("isready"), Command::IsReady);
        assert_eq!(parse_command("  board  "), Command::Board);
        assert_eq!(parse_command("select 5,2"), Command::Select("5,2".to_string()));
        assert_eq!(
            parse_command("move 5,2 4,3"),
            Command::Move {
                from: "5,2".to_string(),
                to: "4,3".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_arity_is_unknown() {
        assert_eq!(
            parse_command("move 5,2"),
            Command::Unknown("move 5,2".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }
}
