pub mod event;
pub mod indicator;
pub mod pane;
pub mod state;

pub use pane::Pane;
pub use state::AppState;
