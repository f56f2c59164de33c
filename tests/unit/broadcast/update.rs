use super::*;
use crate::animation::engine::{Engine, EngineConfig};
use crate::stage::table::StageTable;

fn snapshot(t: f64) -> Snapshot {
    Engine::new(StageTable::standard(), EngineConfig::default())
        .unwrap()
        .snapshot(t)
        .unwrap()
}

#[test]
fn envelope_carries_channel_cycles_and_digest() {
    let update = StateUpdate::from_snapshot(7, &snapshot(65.0));
    assert_eq!(update.channel, SLICED_CUBES_STATE_NAME);
    assert_eq!(update.seq, 7);
    assert_eq!(update.t, 65.0);
    assert_eq!(update.cycles, [1; SLOT_COUNT]);
    assert!(update.is_intact());
}

#[test]
fn tampered_state_is_detected() {
    let mut update = StateUpdate::from_snapshot(0, &snapshot(12.5));
    let mut slots = *update.state.slots();
    slots[0].cn += 0.25;
    update.state = SlicedCubesState::new(slots);
    assert!(!update.is_intact());
}

#[test]
fn json_shape_is_stable() {
    let update = StateUpdate::from_snapshot(1, &snapshot(25.0));
    let v = serde_json::to_value(&update).unwrap();
    assert_eq!(v["channel"], "sliced_cubes");
    assert_eq!(v["state"].as_array().unwrap().len(), 4);
    assert_eq!(v["state"][0]["ac"], 1.0);
    let back: StateUpdate = serde_json::from_value(v).unwrap();
    assert_eq!(back, update);
}
