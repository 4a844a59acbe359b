//! Agent Type Registry - Centralized registry for player implementations
//!
//! Maps the names accepted on the command line to constructors, so the driver
//! never has to know which concrete player it is talking to.

use super::{HeuristicPlayer, MinimaxPlayer};
use crate::agent::human_player::HumanPlayer;
use crate::agent::player::Player;
use crate::agent::random_player::RandomPlayer;
use crate::game_repr::{GameError, Result};

pub use super::minimax_player::Difficulty;

/// Enumeration of available agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AIType {
    /// Uniform choice among legal moves
    Random,
    /// One-ply positional ranking with occasional feints
    Heuristic,
    /// Depth-limited minimax with alpha-beta pruning
    #[default]
    Minimax,
    /// Moves typed on standard input
    Human,
}

impl AIType {
    /// Get all available agent types
    pub fn all() -> &'static [AIType] {
        &[
            AIType::Random,
            AIType::Heuristic,
            AIType::Minimax,
            AIType::Human,
        ]
    }

    /// Resolve a registry name (`random`, `heuristic`, `minimax`, `human`),
    /// ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Result<AIType> {
        let wanted = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::InvalidPlayer(format!("unknown player type '{wanted}'")))
    }

    /// Name used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            AIType::Random => "random",
            AIType::Heuristic => "heuristic",
            AIType::Minimax => "minimax",
            AIType::Human => "human",
        }
    }

    /// Get the display name for this agent type
    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::Random => "Random",
            AIType::Heuristic => "Heuristic",
            AIType::Minimax => "Minimax",
            AIType::Human => "Human",
        }
    }

    /// Get a short description of this agent type
    pub fn description(&self) -> &'static str {
        match self {
            AIType::Random => "Plays a uniformly random legal move",
            AIType::Heuristic => "Greedy positional play with occasional feints",
            AIType::Minimax => "Classical minimax with alpha-beta pruning",
            AIType::Human => "Reads moves as 'row col' from standard input",
        }
    }

    /// Check if this agent type uses difficulty levels
    pub fn supports_difficulty(&self) -> bool {
        matches!(self, AIType::Minimax)
    }

    /// Whether this agent consumes a random seed
    pub fn is_seeded(&self) -> bool {
        matches!(self, AIType::Random | AIType::Heuristic)
    }

    /// Create a Player instance for this agent type
    ///
    /// `difficulty` is ignored by agents that do not search, `seed` by agents
    /// without randomness.
    pub fn create_player(&self, difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Player> {
        match self {
            AIType::Random => Box::new(RandomPlayer::new(seed)),
            AIType::Heuristic => Box::new(HeuristicPlayer::new(seed)),
            AIType::Minimax => Box::new(MinimaxPlayer::with_difficulty(difficulty)),
            AIType::Human => Box::new(HumanPlayer::stdin()),
        }
    }
}

/// Configuration for a single player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AIConfig {
    /// The agent to use
    pub ai_type: AIType,
    /// Search strength, for agents that search
    pub difficulty: Difficulty,
    /// Seed for agents with randomness; `None` draws from entropy
    pub seed: Option<u64>,
}

impl AIConfig {
    /// Create a new configuration without a seed
    pub fn new(ai_type: AIType, difficulty: Difficulty) -> Self {
        Self {
            ai_type,
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a Player instance from this configuration
    pub fn create_player(&self) -> Box<dyn Player> {
        self.ai_type.create_player(self.difficulty, self.seed)
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        if self.ai_type.supports_difficulty() {
            format!("{} ({})", self.ai_type.display_name(), self.difficulty.name())
        } else {
            self.ai_type.display_name().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_type_all() {
        let all = AIType::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&AIType::Minimax));
    }

    #[test]
    fn test_ai_type_from_name() {
        assert_eq!(AIType::from_name("random").unwrap(), AIType::Random);
        assert_eq!(AIType::from_name("Heuristic").unwrap(), AIType::Heuristic);
        assert_eq!(AIType::from_name(" MINIMAX ").unwrap(), AIType::Minimax);
        assert_eq!(AIType::from_name("human").unwrap(), AIType::Human);
        assert!(matches!(
            AIType::from_name("alphazero"),
            Err(GameError::InvalidPlayer(_))
        ));
    }

    #[test]
    fn test_ai_type_keys_round_trip() {
        for ai_type in AIType::all() {
            assert_eq!(AIType::from_name(ai_type.key()).unwrap(), *ai_type);
        }
    }

    #[test]
    fn test_ai_type_supports_difficulty() {
        assert!(AIType::Minimax.supports_difficulty());
        assert!(!AIType::Random.supports_difficulty());
        assert!(!AIType::Human.supports_difficulty());
    }

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.ai_type, AIType::Minimax);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_ai_config_display_string() {
        let config = AIConfig::new(AIType::Minimax, Difficulty::Hard);
        assert_eq!(config.display_string(), "Minimax (Hard)");
        let config = AIConfig::new(AIType::Random, Difficulty::Hard).with_seed(4);
        assert_eq!(config.display_string(), "Random");
    }

    #[test]
    fn test_create_player_names() {
        let player = AIConfig::new(AIType::Minimax, Difficulty::Easy).create_player();
        assert_eq!(player.name(), "AI (Easy)");
        assert!(!player.is_human());

        let player = AIConfig::new(AIType::Heuristic, Difficulty::Easy)
            .with_seed(1)
            .create_player();
        assert_eq!(player.name(), "Heuristic");
    }
}
