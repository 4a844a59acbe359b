//! Game lifecycle management for headless Othello games.
//!
//! This module contains the [`Orchestrator`], which owns the authoritative
//! [`Position`] and one [`Player`] per color. It:
//! - Hands the side to move a deep copy of the board and asks for a move
//! - Validates and applies the returned move
//! - Passes the turn when the side to move has nothing to play
//! - Detects the end of the game and notifies both players
//!
//! # Example Flow
//!
//! ```text
//! [Create Players] -> [Request Move] -> [Player provides move]
//!   -> [Validate + Apply] -> [Check End] -> [Request Move] ...
//!                 |
//!                 +-- rejected: human asked again, automated player forfeits
//! ```
//!
//! [`play_series`] runs many independent games in parallel and aggregates
//! them into [`SeriesStats`].

use crate::agent::ai::{AIConfig, AIType};
use crate::agent::player::Player;
use crate::game_repr::{Color, GameError, Move, Position, Result};
use rayon::prelude::*;
use std::fmt;

pub use crate::agent::player::GameResult;

/// Odd constant used to spread one series seed over many games
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Board shape and the color that moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub first_turn: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            first_turn: Color::Black,
        }
    }
}

impl GameConfig {
    /// Fresh starting position for this configuration.
    pub fn new_position(&self) -> Result<Position> {
        Position::new(self.rows, self.cols, self.first_turn)
    }
}

/// Everything worth keeping once a game is over
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub result: GameResult,
    /// `(black, white)` disc counts of the final position
    pub scores: (u32, u32),
    /// Every applied move in order, with the color that played it
    pub moves: Vec<(Color, Move)>,
    pub final_position: Position,
}

/// Drives one game between two players.
///
/// The orchestrator is the only place moves are applied. Players only ever
/// see a clone of the live position.
pub struct Orchestrator {
    /// Authoritative board
    position: Position,

    /// Player for Black
    black: Box<dyn Player>,

    /// Player for White
    white: Box<dyn Player>,

    /// Applied moves in order
    moves: Vec<(Color, Move)>,

    /// Set once the game has ended
    /// None while the game is in progress
    result: Option<GameResult>,
}

impl Orchestrator {
    /// Start a new game on a fresh board.
    pub fn new(config: &GameConfig, black: Box<dyn Player>, white: Box<dyn Player>) -> Result<Self> {
        let position = config.new_position()?;
        log::info!(
            "New {}x{} game: {} (Black) vs {} (White), {} moves first",
            config.rows,
            config.cols,
            black.name(),
            white.name(),
            config.first_turn
        );
        Ok(Self::from_position(position, black, white))
    }

    /// Continue a game from an arbitrary position.
    pub fn from_position(position: Position, black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        Self {
            position,
            black,
            white,
            moves: Vec::new(),
            result: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn transcript(&self) -> &[(Color, Move)] {
        &self.moves
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    fn player_mut(&mut self, color: Color) -> &mut dyn Player {
        match color {
            Color::Black => self.black.as_mut(),
            Color::White => self.white.as_mut(),
        }
    }

    /// Request one move from the side to move and apply it.
    ///
    /// Returns `false` once the game has ended. A rejected human move leaves
    /// the board untouched and returns `true`, so the next call asks again.
    pub fn step(&mut self) -> bool {
        if self.result.is_some() {
            return false;
        }

        if self.position.is_game_over() {
            let result = GameResult::from_winner(self.position.winner());
            self.finish(result);
            return false;
        }

        let color = self.position.turn();
        if !self.position.can_move(color) {
            log::info!("{color} has no legal move and passes");
            self.position.switch_turn();
            return true;
        }

        let snapshot = self.position.clone();
        let player = self.player_mut(color);
        let is_human = player.is_human();
        let name = player.name().to_string();

        let outcome = player
            .get_move(&snapshot)
            .and_then(|mv| self.position.apply_move(mv.row, mv.col).map(|()| mv));

        match outcome {
            Ok(mv) => {
                log::debug!("{color} ({name}) plays {mv}");
                self.moves.push((color, mv));
                true
            }
            Err(GameError::InputClosed) => {
                log::warn!("{name} stopped providing moves");
                self.finish(GameResult::Aborted);
                false
            }
            Err(error) if is_human => {
                log::warn!("{name}: {error}, try again");
                true
            }
            Err(error) => {
                log::warn!("{color} ({name}) forfeits: {error}");
                self.finish(GameResult::Forfeit {
                    offender: color,
                    error,
                });
                false
            }
        }
    }

    fn finish(&mut self, result: GameResult) {
        let (black, white) = self.position.scores();
        log::info!("Game over after {} moves: {result} ({black}-{white})", self.moves.len());

        self.black.game_ended(&result);
        self.white.game_ended(&result);
        self.result = Some(result);
    }

    /// Play until the game ends.
    pub fn play(mut self) -> GameSummary {
        while self.step() {}

        let result = self.result.unwrap_or(GameResult::Aborted);
        GameSummary {
            result,
            scores: self.position.scores(),
            moves: self.moves,
            final_position: self.position,
        }
    }
}

/// Aggregated results of a series of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub games: u32,
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    /// Games ended by forfeit; the winner is also counted in the wins
    pub forfeits: u32,
    pub aborted: u32,
    pub black_discs: u64,
    pub white_discs: u64,
}

impl SeriesStats {
    pub fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        match summary.result.winner() {
            Some(Color::Black) => self.black_wins += 1,
            Some(Color::White) => self.white_wins += 1,
            None => {}
        }
        match summary.result {
            GameResult::Draw => self.draws += 1,
            GameResult::Forfeit { .. } => self.forfeits += 1,
            GameResult::Aborted => self.aborted += 1,
            GameResult::BlackWins | GameResult::WhiteWins => {}
        }
        self.black_discs += u64::from(summary.scores.0);
        self.white_discs += u64::from(summary.scores.1);
    }

    pub fn merge(self, other: SeriesStats) -> SeriesStats {
        SeriesStats {
            games: self.games + other.games,
            black_wins: self.black_wins + other.black_wins,
            white_wins: self.white_wins + other.white_wins,
            draws: self.draws + other.draws,
            forfeits: self.forfeits + other.forfeits,
            aborted: self.aborted + other.aborted,
            black_discs: self.black_discs + other.black_discs,
            white_discs: self.white_discs + other.white_discs,
        }
    }

    /// Share of games won by `color`, 0.0 for an empty series
    pub fn win_rate(&self, color: Color) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match color {
            Color::Black => self.black_wins,
            Color::White => self.white_wins,
        };
        f64::from(wins) / f64::from(self.games)
    }
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: Black {} ({:.1}%), White {} ({:.1}%), draws {}, forfeits {}, aborted {}",
            self.games,
            self.black_wins,
            self.win_rate(Color::Black) * 100.0,
            self.white_wins,
            self.win_rate(Color::White) * 100.0,
            self.draws,
            self.forfeits,
            self.aborted
        )
    }
}

fn game_seed(base: Option<u64>, game: u64, slot: u64) -> Option<u64> {
    base.map(|seed| seed.wrapping_add((2 * game + slot).wrapping_mul(SEED_STRIDE)))
}

/// Play `games` independent games in parallel and aggregate the results.
///
/// Every game gets its own board and its own players. With a `seed`, each
/// player's seed is derived from it and the game index, so the whole series
/// is reproducible; without one, players seed themselves from entropy.
/// Human players cannot take part in a series.
pub fn play_series(
    config: &GameConfig,
    black: AIConfig,
    white: AIConfig,
    games: u32,
    seed: Option<u64>,
) -> Result<SeriesStats> {
    if black.ai_type == AIType::Human || white.ai_type == AIType::Human {
        return Err(GameError::InvalidPlayer(
            "human players cannot play a series".to_string(),
        ));
    }
    config.new_position()?;

    log::info!(
        "Playing {games} games: {} (Black) vs {} (White)",
        black.display_string(),
        white.display_string()
    );

    let stats = (0..u64::from(games))
        .into_par_iter()
        .map(|game| -> Result<SeriesStats> {
            let black = AIConfig {
                seed: game_seed(seed, game, 0),
                ..black
            };
            let white = AIConfig {
                seed: game_seed(seed, game, 1),
                ..white
            };
            let summary =
                Orchestrator::new(config, black.create_player(), white.create_player())?.play();

            let mut stats = SeriesStats::default();
            stats.record(&summary);
            Ok(stats)
        })
        .try_reduce(SeriesStats::default, |a, b| Ok(a.merge(b)))?;

    log::info!("{stats}");
    Ok(stats)
}
