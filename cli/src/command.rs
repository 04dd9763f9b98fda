use tictactoe_engine::games::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(usize),
    SetDifficulty(Difficulty),
    Reset,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = concat!(
    "Commands: <0-8> | move <0-8> | difficulty <easy|medium|hard> (starts a new game)",
    " | reset | show | help | quit"
);

/// Parses one input line. Out-of-range cells are rejected here so the engine
/// only ever sees indices 0..=8.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments in '{}'", line.trim()));
    }

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("move" | "m", Some(index)) => parse_index(index).map(Command::Move),
        ("difficulty" | "d", Some(level)) => level.parse().map(Command::SetDifficulty),
        ("reset" | "r", None) => Ok(Command::Reset),
        ("show" | "s", None) => Ok(Command::Show),
        ("help" | "h" | "?", None) => Ok(Command::Help),
        ("quit" | "q" | "exit", None) => Ok(Command::Quit),
        (index, None) if index.chars().all(|c| c.is_ascii_digit()) => {
            parse_index(index).map(Command::Move)
        }
        _ => Err(format!("Unknown command '{}'. {}", line.trim(), HELP)),
    }
}

fn parse_index(raw: &str) -> Result<usize, String> {
    let index: usize = raw
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", raw))?;
    if index >= CELL_COUNT {
        return Err(format!("Cell must be between 0 and {}, got {}", CELL_COUNT - 1, index));
    }
    Ok(index)
}
