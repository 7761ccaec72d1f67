pub mod controller;
pub mod state;
pub mod view;

pub use controller::{RecommendationController, SubmitOutcome};
pub use state::UiState;
