//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Criterion for picking the final move among the root's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionCriterion {
    /// Most-visited child: the robust choice under low sample counts.
    #[default]
    VisitCount,
    /// Highest mean score.
    MeanScore,
}

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Score credited to a node whose edge mover won the rollout.
    pub win_reward: f64,

    /// Score credited on a tied rollout.
    pub tie_reward: f64,

    /// Score credited when the edge mover lost the rollout.
    pub loss_reward: f64,

    /// How the final move is extracted from the root's children.
    pub criterion: SelectionCriterion,

    /// Random seed. Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            win_reward: 10.0,
            tie_reward: 3.0,
            loss_reward: 0.0,
            criterion: SelectionCriterion::VisitCount,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Set the exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set the win/tie/loss reward scheme.
    #[must_use]
    pub fn with_rewards(mut self, win: f64, tie: f64, loss: f64) -> Self {
        self.win_reward = win;
        self.tie_reward = tie;
        self.loss_reward = loss;
        self
    }

    /// Set the best-move criterion.
    #[must_use]
    pub fn with_criterion(mut self, criterion: SelectionCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.win_reward, 10.0);
        assert_eq!(config.tie_reward, 3.0);
        assert_eq!(config.loss_reward, 0.0);
        assert_eq!(config.criterion, SelectionCriterion::VisitCount);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_exploration(2.0)
            .with_rewards(1.0, 0.5, -1.0)
            .with_criterion(SelectionCriterion::MeanScore)
            .with_seed(123);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.win_reward, 1.0);
        assert_eq!(config.tie_reward, 0.5);
        assert_eq!(config.loss_reward, -1.0);
        assert_eq!(config.criterion, SelectionCriterion::MeanScore);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = MctsConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MctsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.criterion, deserialized.criterion);
    }
}
