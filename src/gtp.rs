//! Go Text Protocol (GTP) session over the board engine.
//!
//! This is a board-only GTP v2 front end: it keeps a position and its
//! history, and answers the commands needed to set up and replay games. It
//! does not generate moves.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the session
//! - `boardsize <size>` - Set board size and clear the board
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Play a move (`pass` allowed)
//! - `undo` - Take back the last move
//! - `fixed_handicap <count>` - Place handicap stones on an empty board
//! - `showboard` - Print the board diagram
//! - `captures <color>` - Number of stones captured by `color`
//!
//! ## Example
//!
//! ```ignore
//! use goban_rust::gtp::GtpSession;
//! let mut session = GtpSession::new(19)?;
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::trace;

use crate::board::Board;
use crate::constants::{BLACK, COORD_LETTERS, EMPTY, Sign, WHITE, opponent};
use crate::vertex::{parse_coord, str_coord};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "fixed_handicap",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

/// Parse a GTP color argument (`b`, `black`, `w`, `white`).
fn parse_color(s: &str) -> Option<Sign> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(BLACK),
        "w" | "white" => Some(WHITE),
        _ => None,
    }
}

/// GTP session state.
pub struct GtpSession {
    /// Current position
    board: Board,
    /// Positions before each move, most recent last
    history: Vec<Board>,
}

impl GtpSession {
    /// Create a session with an empty board of the given size.
    pub fn new(size: i64) -> Result<Self> {
        let board = Board::new(size).context("cannot start session")?;
        Ok(Self {
            board,
            history: Vec::new(),
        })
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Replace the current board, remembering the old one for `undo`.
    fn push(&mut self, next: Board) {
        let prev = std::mem::replace(&mut self.board, next);
        self.history.push(prev);
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        trace!(command, ?args, "gtp command");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<i64>() else {
                    return (false, "invalid size".to_string());
                };
                // Coordinates run out past the last column letter
                if size > COORD_LETTERS.len() as i64 {
                    return (false, "unacceptable size".to_string());
                }
                match Board::new(size) {
                    Ok(board) => {
                        self.board = board;
                        self.history.clear();
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.board = Board::empty(self.board.size());
                self.history.clear();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(sign) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };

                if args[1].eq_ignore_ascii_case("pass") {
                    self.push(self.board.clone());
                    return (true, String::new());
                }

                let Some(v) = parse_coord(args[1], self.board.size()) else {
                    return (false, "invalid coordinate".to_string());
                };
                match self.board.try_make_move(sign.into(), v) {
                    Ok(next) if next.get(v) == Some(EMPTY) => (false, "suicide".to_string()),
                    Ok(next) => {
                        self.push(next);
                        (true, String::new())
                    }
                    Err(_) => (false, "illegal move".to_string()),
                }
            }

            "undo" => match self.history.pop() {
                Some(prev) => {
                    self.board = prev;
                    (true, String::new())
                }
                None => (false, "cannot undo".to_string()),
            },

            "fixed_handicap" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(count) = arg.parse::<usize>() else {
                    return (false, "invalid number of stones".to_string());
                };
                if !self.board.is_empty() {
                    return (false, "board not empty".to_string());
                }
                let points = self.board.handicap_placement(count);
                if count < 2 || points.len() < count {
                    return (false, "invalid number of stones".to_string());
                }

                let size = self.board.size();
                let next = points
                    .iter()
                    .fold(self.board.clone(), |b, &v| b.with_sign(v, BLACK));
                self.push(next);
                let coords: Vec<String> = points
                    .iter()
                    .filter_map(|&v| str_coord(v, size))
                    .collect();
                (true, coords.join(" "))
            }

            "showboard" => {
                let caps = self.board.captures();
                let message = format!(
                    "\n{}Captures: black {} white {}",
                    self.board, caps.black, caps.white
                );
                (true, message)
            }

            "captures" => {
                let Some(sign) = args.first().and_then(|a| parse_color(a)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.board.captures().get(sign).to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Play a sequence of GTP moves on an empty board, alternating colors and
/// starting with black. `pass` skips a turn.
///
/// # Errors
/// Fails on an invalid size, an unparsable coordinate, an occupied point or
/// a suicide, naming the 1-based move number.
pub fn replay(size: i64, moves: &[String]) -> Result<Board> {
    let mut board = Board::new(size)?;
    let mut sign = BLACK;

    for (i, mv) in moves.iter().enumerate() {
        let n = i + 1;
        if !mv.eq_ignore_ascii_case("pass") {
            let v = parse_coord(mv, board.size())
                .with_context(|| format!("move {n}: invalid coordinate {mv:?}"))?;
            let next = board
                .try_make_move(sign.into(), v)
                .with_context(|| format!("move {n}: {mv}"))?;
            if next.get(v) == Some(EMPTY) {
                bail!("move {n}: {mv} is suicide");
            }
            board = next;
        }
        sign = opponent(sign);
    }
    Ok(board)
}
