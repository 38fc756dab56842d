use serde::{Deserialize, Serialize};

use crate::action::CoreAction;
use crate::board::{is_valid_item_id, scramble_columns, BoardLayout, ItemId};
use crate::game::{connection_index, is_complete, Connection, PairKey, TapPoint};
use crate::rules::{GameRules, PathError};
use crate::snapshot::BoardSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveItem {
    pub id: ItemId,
    pub pos: TapPoint,
}

/// Whole game state for one session. Replaced state flows out through
/// `snapshot`; the only way in is `apply`.
#[derive(Clone, Debug)]
pub struct CoreState {
    pub layout: BoardLayout,
    pub active: Option<ActiveItem>,
    pub connections: Vec<Connection>,
    pub solved: bool,
    pub rules: GameRules,
    expected: Vec<PairKey>,
}

impl CoreState {
    pub fn new(seed: u32) -> Self {
        let rules = GameRules::default();
        let expected = rules.expected_pairs();
        Self {
            layout: scramble_columns(seed),
            active: None,
            connections: Vec::new(),
            solved: false,
            rules,
            expected,
        }
    }

    pub fn with_rules(seed: u32, rules: GameRules) -> Result<Self, PathError> {
        rules.validate()?;
        let expected = rules.expected_pairs();
        Ok(Self {
            layout: scramble_columns(seed),
            active: None,
            connections: Vec::new(),
            solved: false,
            rules,
            expected,
        })
    }

    pub fn expected_pairs(&self) -> &[PairKey] {
        &self.expected
    }

    /// Returns whether the action was applied. Ids outside the board domain
    /// are dropped here and leave the state untouched.
    pub fn apply(&mut self, action: CoreAction) -> bool {
        match action {
            CoreAction::Tap { item_id, x, y } => self.handle_tap(item_id, TapPoint::new(x, y)),
        }
    }

    fn handle_tap(&mut self, item_id: ItemId, pos: TapPoint) -> bool {
        if !is_valid_item_id(item_id) {
            return false;
        }
        let Some(active) = self.active.take() else {
            self.active = Some(ActiveItem { id: item_id, pos });
            return true;
        };
        let key = PairKey::new(active.id, item_id);
        if let Some(index) = connection_index(&self.connections, key) {
            self.connections.remove(index);
        } else if !key.is_self_pair() {
            self.connections.push(Connection {
                key,
                from: active.pos,
                to: pos,
            });
        }
        // Self-tap falls through with the set unchanged; the re-check below
        // is idempotent either way.
        self.solved = is_complete(&self.connections, &self.expected);
        true
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_state(self)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new(0)
    }
}
