pub mod config;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigError, CONFIG_FILE};
pub use models::{
    AppState, GamePhase, GameSummary, QuizSession, RoundResult, TargetRoundsError,
};
pub use session::handle_drill_input;
pub use ui::{draw_drill, draw_quit_confirmation, draw_summary};
