use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::ItemId;

pub const SESSION_SEED_BASE: u32 = 0x7E57_2520;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn session_seed(base: u32, nonce: u32) -> u32 {
    base ^ nonce.wrapping_mul(0x9E37_79B9) ^ 0x5CA7_7EED
}

/// Unordered pair of item ids. Construction sorts the endpoints, so the key
/// for (a, b) and (b, a) is the same value.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PairKey {
    lo: ItemId,
    hi: ItemId,
}

impl PairKey {
    pub fn new(a: ItemId, b: ItemId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn lo(&self) -> ItemId {
        self.lo
    }

    pub fn hi(&self) -> ItemId {
        self.hi
    }

    pub fn is_self_pair(&self) -> bool {
        self.lo == self.hi
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapPoint {
    pub x: f32,
    pub y: f32,
}

impl TapPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub key: PairKey,
    pub from: TapPoint,
    pub to: TapPoint,
}

pub fn connection_index(connections: &[Connection], key: PairKey) -> Option<usize> {
    connections.iter().position(|conn| conn.key == key)
}

/// Adjacent pairs along a path, canonicalized. An 8-item path yields 7 keys.
pub fn expected_pairs(path: &[ItemId]) -> Vec<PairKey> {
    path.windows(2)
        .map(|pair| PairKey::new(pair[0], pair[1]))
        .collect()
}

/// True iff the connection set matches the expected key set exactly: every
/// expected key is present and nothing extra is drawn. The cardinality check
/// rejects extras even when all expected keys are covered.
pub fn is_complete(connections: &[Connection], expected: &[PairKey]) -> bool {
    if connections.len() != expected.len() {
        return false;
    }
    expected
        .iter()
        .all(|key| connections.iter().any(|conn| conn.key == *key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(a: ItemId, b: ItemId) -> Connection {
        Connection {
            key: PairKey::new(a, b),
            from: TapPoint::new(0.0, 0.0),
            to: TapPoint::new(1.0, 1.0),
        }
    }

    #[test]
    fn pair_key_is_direction_independent() {
        assert_eq!(PairKey::new(3, 8), PairKey::new(8, 3));
        assert_eq!(PairKey::new(3, 8).to_string(), "3-8");
    }

    #[test]
    fn expected_pairs_from_default_path() {
        let keys = expected_pairs(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(keys.len(), 7);
        assert_eq!(keys[0], PairKey::new(1, 2));
        assert_eq!(keys[6], PairKey::new(7, 8));
    }

    #[test]
    fn is_complete_rejects_missing_and_extra() {
        let expected = expected_pairs(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut connections: Vec<Connection> = expected
            .iter()
            .map(|key| conn(key.lo(), key.hi()))
            .collect();
        assert!(is_complete(&connections, &expected));

        connections.push(conn(1, 8));
        assert!(!is_complete(&connections, &expected));

        connections.pop();
        connections.remove(3);
        assert!(!is_complete(&connections, &expected));
    }

    #[test]
    fn session_seed_varies_with_nonce() {
        let a = session_seed(SESSION_SEED_BASE, 0);
        let b = session_seed(SESSION_SEED_BASE, 1);
        assert_ne!(a, b);
    }
}
