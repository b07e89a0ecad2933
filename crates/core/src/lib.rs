//! Streak core crate - plain data types shared by the scoring engine.

mod change;
mod context;
mod events;
mod state;

pub use change::ScoreChangeType;
pub use context::ScoreContext;
pub use events::{ComboChanged, ScoreChanged};
pub use state::ScoreSnapshot;
