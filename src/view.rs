use serde::{Deserialize, Serialize};
use tentsunagi_core::{side_of, BoardSnapshot, ItemId, Side, COLUMN_SLOTS};

pub const LINE_STROKE_WIDTH: f32 = 4.0;
pub const ITEM_SIZE: f32 = 100.0;

const LEFT_COLUMN_X_FRAC: f32 = 0.25;
const RIGHT_COLUMN_X_FRAC: f32 = 0.75;

/// Viewport the two columns are laid out in. Render targets hand this in;
/// the core knows nothing about screen size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLayout {
    pub width: f32,
    pub height: f32,
}

impl ViewLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Center of a column slot. Slots are spread evenly down each column.
    pub fn slot_center(&self, side: Side, slot: usize) -> [f32; 2] {
        let x_frac = match side {
            Side::Left => LEFT_COLUMN_X_FRAC,
            Side::Right => RIGHT_COLUMN_X_FRAC,
        };
        let row = (slot.min(COLUMN_SLOTS - 1)) as f32 + 0.5;
        [
            self.width * x_frac,
            self.height * row / COLUMN_SLOTS as f32,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: ItemId,
    pub side: Side,
    pub slot: usize,
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub stroke_width: f32,
}

/// One instance per item, column by column in layout order. The active item
/// is flagged for highlighting.
pub fn build_item_instances(snapshot: &BoardSnapshot, layout: ViewLayout) -> Vec<ItemInstance> {
    let mut instances = Vec::with_capacity(snapshot.left.len() + snapshot.right.len());
    let active_id = snapshot.active.map(|item| item.id);
    let mut push_column = |items: &[ItemId]| {
        for (slot, &id) in items.iter().enumerate() {
            let Some(side) = side_of(id) else {
                continue;
            };
            let center = layout.slot_center(side, slot);
            instances.push(ItemInstance {
                id,
                side,
                slot,
                pos: [center[0] - ITEM_SIZE * 0.5, center[1] - ITEM_SIZE * 0.5],
                size: [ITEM_SIZE, ITEM_SIZE],
                highlighted: active_id == Some(id),
            });
        }
    };
    push_column(&snapshot.left);
    push_column(&snapshot.right);
    instances
}

/// One line per drawn connection, in insertion order. Order carries no
/// meaning for the renderer.
pub fn build_line_instances(snapshot: &BoardSnapshot) -> Vec<LineInstance> {
    snapshot
        .lines
        .iter()
        .map(|line| LineInstance {
            from: line.a,
            to: line.b,
            stroke_width: LINE_STROKE_WIDTH,
        })
        .collect()
}
