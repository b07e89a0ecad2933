//! Score change direction.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ScoreChangeType {
    Add,
    Subtract,
}

impl ScoreChangeType {
    pub fn is_add(self) -> bool {
        self == Self::Add
    }
}
