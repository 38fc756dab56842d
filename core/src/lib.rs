pub mod action;
pub mod board;
pub mod game;
pub mod rules;
pub mod snapshot;
pub mod state;

pub use action::CoreAction;
pub use board::{
    is_valid_item_id, scramble_columns, side_of, BoardLayout, ItemId, Side, COLUMN_SLOTS,
    ITEM_COUNT, LEFT_ITEMS, RIGHT_ITEMS,
};
pub use game::{
    connection_index, expected_pairs, is_complete, session_seed, Connection, PairKey, TapPoint,
    SESSION_SEED_BASE,
};
pub use rules::{GameRules, PathError, DEFAULT_PATH};
pub use snapshot::{BoardSnapshot, LineSegment};
pub use state::{ActiveItem, CoreState};
