use serde::{Deserialize, Serialize};

use crate::board::ItemId;
use crate::state::{ActiveItem, CoreState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

/// Read-only view of the session for the presentation layer. Built fresh
/// after every transition; renderers never reach into `CoreState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub left: Vec<ItemId>,
    pub right: Vec<ItemId>,
    pub lines: Vec<LineSegment>,
    pub active: Option<ActiveItem>,
    pub solved: bool,
}

impl BoardSnapshot {
    pub fn from_state(state: &CoreState) -> Self {
        let lines = state
            .connections
            .iter()
            .map(|conn| LineSegment {
                a: [conn.from.x, conn.from.y],
                b: [conn.to.x, conn.to.y],
            })
            .collect();
        Self {
            left: state.layout.left.clone(),
            right: state.layout.right.clone(),
            lines,
            active: state.active,
            solved: state.solved,
        }
    }
}
