use super::*;
use crate::state::piece::PieceSetState;

#[test]
fn identical_states_share_a_fingerprint() {
    let a = SlicedCubesState::uniform(PieceSetState::new(0.5, 3.0, 1.0, 1.0, 1.0, 1.0));
    let b = SlicedCubesState::uniform(PieceSetState::new(0.5, 3.0, 1.0, 1.0, 1.0, 1.0));
    assert_eq!(fingerprint_state(&a), fingerprint_state(&b));
}

#[test]
fn any_field_change_moves_both_streams() {
    let base = SlicedCubesState::uniform(PieceSetState::default());
    let fp = fingerprint_state(&base);
    let mut slots = *base.slots();
    slots[3].bc = f64::EPSILON;
    let other = fingerprint_state(&SlicedCubesState::new(slots));
    assert_ne!(fp.hi, other.hi);
    assert_ne!(fp.lo, other.lo);
}

#[test]
fn slot_order_matters() {
    let mut slots = [PieceSetState::default(); 4];
    slots[0].co = 1.0;
    let first = fingerprint_state(&SlicedCubesState::new(slots));
    slots[0].co = 0.0;
    slots[1].co = 1.0;
    let second = fingerprint_state(&SlicedCubesState::new(slots));
    assert_ne!(first, second);
}
