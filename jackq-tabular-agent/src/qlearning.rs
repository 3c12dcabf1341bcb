//! Q-learning agent.
mod base;
mod config;
mod explorer;
mod history;
mod table;
pub use base::QLearning;
pub use config::QLearningConfig;
pub use explorer::EpsilonGreedy;
pub use history::{EpisodeHistory, QLearningStats};
pub use table::QTable;
