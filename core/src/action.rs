use crate::board::ItemId;

#[derive(Clone, Copy, Debug)]
pub enum CoreAction {
    Tap { item_id: ItemId, x: f32, y: f32 },
}
