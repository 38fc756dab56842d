use tentsunagi_core::{CoreAction, CoreState, GameRules, ItemId, PairKey, PathError};

fn tap(state: &mut CoreState, item_id: ItemId) -> bool {
    let offset = item_id as f32 * 10.0;
    state.apply(CoreAction::Tap {
        item_id,
        x: offset,
        y: offset + 1.0,
    })
}

fn connect(state: &mut CoreState, a: ItemId, b: ItemId) {
    assert!(tap(state, a));
    assert!(tap(state, b));
}

fn keys(state: &CoreState) -> Vec<PairKey> {
    state.connections.iter().map(|conn| conn.key).collect()
}

#[test]
fn first_tap_arms_without_connecting() {
    let mut state = CoreState::new(1);
    assert!(tap(&mut state, 3));
    let active = state.active.expect("item should be armed");
    assert_eq!(active.id, 3);
    assert!(state.connections.is_empty());
}

#[test]
fn second_tap_connects_and_clears_active() {
    let mut state = CoreState::new(1);
    connect(&mut state, 1, 2);
    assert!(state.active.is_none());
    assert_eq!(keys(&state), vec![PairKey::new(1, 2)]);
    let conn = &state.connections[0];
    assert_eq!((conn.from.x, conn.from.y), (10.0, 11.0));
    assert_eq!((conn.to.x, conn.to.y), (20.0, 21.0));
}

#[test]
fn full_expected_set_solves_in_any_order() {
    // Scenario A, deliberately out of path order.
    let mut state = CoreState::new(9);
    for (a, b) in [(7, 8), (1, 2), (4, 5), (2, 3), (6, 7), (3, 4), (5, 6)] {
        connect(&mut state, a, b);
    }
    assert!(state.solved);
}

#[test]
fn extra_connection_breaks_completion() {
    // Scenario B: all expected pairs plus (1, 8).
    let mut state = CoreState::new(9);
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 8)] {
        connect(&mut state, a, b);
    }
    assert!(state.solved);
    connect(&mut state, 1, 8);
    assert!(!state.solved);
}

#[test]
fn missing_pair_is_not_complete() {
    // Scenario C: everything except (4, 5).
    let mut state = CoreState::new(9);
    for (a, b) in [(1, 2), (2, 3), (3, 4), (5, 6), (6, 7), (7, 8)] {
        connect(&mut state, a, b);
    }
    assert!(!state.solved);
}

#[test]
fn self_tap_is_a_no_op() {
    // Scenario D: tap 3 twice in a row.
    let mut state = CoreState::new(2);
    connect(&mut state, 1, 2);
    let before = keys(&state);
    let solved_before = state.solved;
    assert!(tap(&mut state, 3));
    assert!(tap(&mut state, 3));
    assert!(state.active.is_none());
    assert_eq!(keys(&state), before);
    assert_eq!(state.solved, solved_before);
}

#[test]
fn retapping_a_pair_toggles_it_off() {
    // Scenario E.
    let mut state = CoreState::new(2);
    connect(&mut state, 1, 2);
    connect(&mut state, 3, 4);
    assert_eq!(state.connections.len(), 2);
    connect(&mut state, 1, 2);
    assert_eq!(keys(&state), vec![PairKey::new(3, 4)]);
}

#[test]
fn toggle_twice_restores_prior_state() {
    let mut state = CoreState::new(5);
    connect(&mut state, 5, 6);
    let before = keys(&state);
    connect(&mut state, 7, 2);
    connect(&mut state, 2, 7);
    assert_eq!(keys(&state), before);
}

#[test]
fn breaking_a_solved_board_clears_the_flag() {
    let mut state = CoreState::new(3);
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 8)] {
        connect(&mut state, a, b);
    }
    assert!(state.solved);
    connect(&mut state, 4, 5);
    assert!(!state.solved);
    connect(&mut state, 4, 5);
    assert!(state.solved);
}

#[test]
fn connections_never_hold_a_self_pair() {
    // Exhaustive-ish tap soup; the set must stay free of (id, id) pairs and
    // duplicate keys throughout.
    let mut state = CoreState::new(11);
    let taps = [1, 1, 2, 2, 3, 3, 4, 4, 5, 6, 5, 6, 7, 8, 8, 7, 1, 2, 1, 2];
    for id in taps {
        tap(&mut state, id);
        for conn in &state.connections {
            assert!(!conn.key.is_self_pair());
        }
        let mut seen = keys(&state);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), state.connections.len());
    }
}

#[test]
fn out_of_domain_id_is_rejected() {
    let mut state = CoreState::new(1);
    assert!(!tap(&mut state, 0));
    assert!(!tap(&mut state, 9));
    assert!(state.active.is_none());

    // A pending selection survives a rejected tap.
    assert!(tap(&mut state, 1));
    assert!(!tap(&mut state, 42));
    assert_eq!(state.active.map(|item| item.id), Some(1));
    assert!(state.connections.is_empty());
}

#[test]
fn custom_rules_change_the_winning_set() {
    let rules = GameRules {
        path: vec![8, 7, 6, 5, 4, 3, 2, 1],
    };
    let mut state = CoreState::with_rules(4, rules).unwrap();
    for (a, b) in [(8, 7), (7, 6), (6, 5), (5, 4), (4, 3), (3, 2), (2, 1)] {
        connect(&mut state, a, b);
    }
    assert!(state.solved);
}

#[test]
fn invalid_rules_never_build_a_state() {
    let rules = GameRules {
        path: vec![1, 2, 3, 4, 5, 6, 7, 7],
    };
    assert_eq!(
        CoreState::with_rules(4, rules).err(),
        Some(PathError::DuplicateItem { id: 7 })
    );
}
