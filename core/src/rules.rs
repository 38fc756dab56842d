use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{is_valid_item_id, ItemId, ITEM_COUNT};
use crate::game::{expected_pairs, PairKey};

pub const DEFAULT_PATH: [ItemId; ITEM_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Session configuration. The path defines the one correct sequence; its
/// adjacent pairs are the expected connection keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub path: Vec<ItemId>,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_vec(),
        }
    }
}

impl GameRules {
    pub fn validate(&self) -> Result<(), PathError> {
        if self.path.len() != ITEM_COUNT {
            return Err(PathError::WrongLength {
                expected: ITEM_COUNT,
                found: self.path.len(),
            });
        }
        let mut seen = [false; ITEM_COUNT + 1];
        for &id in &self.path {
            if !is_valid_item_id(id) {
                return Err(PathError::OutOfDomain { id });
            }
            if seen[id as usize] {
                return Err(PathError::DuplicateItem { id });
            }
            seen[id as usize] = true;
        }
        Ok(())
    }

    pub fn expected_pairs(&self) -> Vec<PairKey> {
        expected_pairs(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    WrongLength { expected: usize, found: usize },
    OutOfDomain { id: ItemId },
    DuplicateItem { id: ItemId },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::WrongLength { expected, found } => {
                write!(f, "path must list {expected} items, got {found}")
            }
            PathError::OutOfDomain { id } => {
                write!(f, "item id {id} is outside the board domain")
            }
            PathError::DuplicateItem { id } => {
                write!(f, "item id {id} appears twice in the path")
            }
        }
    }
}

impl std::error::Error for PathError {}
