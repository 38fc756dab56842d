use serde::{Deserialize, Serialize};

use crate::game::rand_unit;

pub type ItemId = u8;

pub const ITEM_COUNT: usize = 8;
pub const COLUMN_SLOTS: usize = 4;
pub const LEFT_ITEMS: [ItemId; COLUMN_SLOTS] = [1, 3, 5, 7];
pub const RIGHT_ITEMS: [ItemId; COLUMN_SLOTS] = [2, 4, 6, 8];

const LEFT_SHUFFLE_SALT: u32 = 0x51DE_0001;
const RIGHT_SHUFFLE_SALT: u32 = 0x51DE_0002;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

pub fn is_valid_item_id(id: ItemId) -> bool {
    (1..=ITEM_COUNT as ItemId).contains(&id)
}

pub fn side_of(id: ItemId) -> Option<Side> {
    if !is_valid_item_id(id) {
        return None;
    }
    if id % 2 == 1 {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub left: Vec<ItemId>,
    pub right: Vec<ItemId>,
}

impl BoardLayout {
    pub fn ordered() -> Self {
        Self {
            left: LEFT_ITEMS.to_vec(),
            right: RIGHT_ITEMS.to_vec(),
        }
    }

    pub fn slot_of(&self, id: ItemId) -> Option<(Side, usize)> {
        if let Some(slot) = self.left.iter().position(|entry| *entry == id) {
            return Some((Side::Left, slot));
        }
        self.right
            .iter()
            .position(|entry| *entry == id)
            .map(|slot| (Side::Right, slot))
    }
}

/// Permutes each column independently. The same seed always yields the same
/// layout; item-to-side assignment never changes.
pub fn scramble_columns(seed: u32) -> BoardLayout {
    BoardLayout {
        left: shuffled_column(seed, LEFT_SHUFFLE_SALT, &LEFT_ITEMS),
        right: shuffled_column(seed, RIGHT_SHUFFLE_SALT, &RIGHT_ITEMS),
    }
}

fn shuffled_column(seed: u32, salt_base: u32, items: &[ItemId; COLUMN_SLOTS]) -> Vec<ItemId> {
    let mut order = items.to_vec();
    for i in (1..order.len()).rev() {
        let salt = salt_base.wrapping_add(i as u32);
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        order.swap(i, j);
    }
    order
}
