//! Human player that reads moves from a text stream.
//!
//! `HumanPlayer` implements the `Player` trait for people typing coordinates.
//! It prints the board and the legal moves to its writer, then reads one line
//! from its reader and parses it as `row col` (or `row,col`).
//!
//! # Control Flow
//!
//! ```text
//! Orchestrator::step()
//!     ↓
//! player.get_move(snapshot)
//!     ↓
//! print board + legal moves, read one line
//!     ↓
//! Move::parse(line)
//!     ↓
//! Orchestrator validates; on rejection asks again (is_human() == true)
//! ```
//!
//! # Examples
//!
//! ```
//! use othello_engine::agent::human_player::HumanPlayer;
//! use othello_engine::agent::player::Player;
//! use othello_engine::game_repr::{Move, Position};
//!
//! let input = "2 3\n".as_bytes();
//! let mut player = HumanPlayer::new(input, std::io::sink(), "Alice".to_string());
//! assert_eq!(player.get_move(&Position::default()).unwrap(), Move::new(2, 3));
//! ```

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{GameError, Move, Position, Result};
use std::io::{self, BufRead, Write};

/// Human player reading one move per line.
///
/// Legality is not checked here; the driver does that against its own board.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self {
            input,
            output,
            name,
        }
    }

    fn prompt(&mut self, position: &Position) -> io::Result<()> {
        let moves: Vec<String> = position.legal_moves().iter().map(|m| m.to_string()).collect();
        writeln!(self.output, "{position}")?;
        writeln!(
            self.output,
            "{} to move ({}). Legal moves: {}",
            position.turn(),
            self.name,
            moves.join(" ")
        )?;
        write!(self.output, "> ")?;
        self.output.flush()
    }
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's standard input and output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), "Human".to_string())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, position: &Position) -> Result<Move> {
        if !position.can_move(position.turn()) {
            return Err(GameError::NoLegalMoves(position.turn()));
        }

        // Prompt output is best effort; only the input side can end the game.
        if let Err(e) = self.prompt(position) {
            log::warn!("Failed to write prompt: {e}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(GameError::InputClosed),
            Ok(_) => Move::parse(&line),
            Err(e) => {
                log::error!("Failed to read move: {e}");
                Err(GameError::InputClosed)
            }
        }
    }

    fn is_human(&self) -> bool {
        true
    }

    fn game_ended(&mut self, result: &GameResult) {
        if let Err(e) = writeln!(self.output, "{result}") {
            log::warn!("Failed to write result: {e}");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Color;

    fn player(input: &str) -> HumanPlayer<&[u8], Vec<u8>> {
        HumanPlayer::new(input.as_bytes(), Vec::new(), "Tester".to_string())
    }

    #[test]
    fn test_reads_space_and_comma_forms() {
        let mut p = player("2 3\n4,5\n");
        let pos = Position::default();
        assert_eq!(p.get_move(&pos).unwrap(), Move::new(2, 3));
        assert_eq!(p.get_move(&pos).unwrap(), Move::new(4, 5));
    }

    #[test]
    fn test_garbage_is_invalid_type() {
        let mut p = player("two three\n");
        assert!(matches!(
            p.get_move(&Position::default()),
            Err(GameError::InvalidType(_))
        ));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut p = player("");
        assert_eq!(p.get_move(&Position::default()), Err(GameError::InputClosed));
    }

    #[test]
    fn test_prompt_lists_board_and_moves() {
        let mut p = player("2 3\n");
        p.get_move(&Position::default()).unwrap();

        let shown = String::from_utf8(p.output.clone()).unwrap();
        assert!(shown.contains("...WB..."));
        assert!(shown.contains("Black to move (Tester)"));
        assert!(shown.contains("(2, 3) (3, 2) (4, 5) (5, 4)"));
    }

    #[test]
    fn test_is_human() {
        let p = player("");
        assert!(p.is_human());
        assert_eq!(p.name(), "Tester");
    }

    #[test]
    fn test_no_legal_move_is_an_error() {
        let pos = Position::from_layout(&["BBB.", "....", "....", "...."], Color::White).unwrap();
        let mut p = player("0 3\n");
        assert_eq!(p.get_move(&pos), Err(GameError::NoLegalMoves(Color::White)));
    }
}
