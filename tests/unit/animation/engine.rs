use approx::assert_relative_eq;

use super::*;
use crate::stage::table::{STAGE1, STAGE3, STAGE4, STAGE6, rebase_one_node};
use crate::state::piece::Field;

fn engine(config: EngineConfig) -> Engine {
    Engine::new(StageTable::standard(), config).unwrap()
}

fn default_engine() -> Engine {
    engine(EngineConfig::default())
}

#[test]
fn midway_between_stage3_and_stage4() {
    let s = default_engine().sample(25.0).unwrap();
    for slot in s.slots() {
        assert_eq!(*slot, PieceSetState::new(0.5, 3.0, 1.0, 1.0, 1.0, 1.0));
    }
}

#[test]
fn clock_zero_reproduces_stage1() {
    let s = default_engine().sample(0.0).unwrap();
    assert_eq!(s, SlicedCubesState::uniform(STAGE1));
}

#[test]
fn boundary_selects_start_of_next_segment() {
    let e = default_engine();
    let snap = e.snapshot(20.0).unwrap();
    assert_eq!(snap.slots[0].position.segment, 2);
    assert_eq!(snap.slots[0].position.fraction, 0.0);
    assert_eq!(snap.state(), SlicedCubesState::uniform(STAGE3));
    // Just past the boundary the selectors already point at STAGE4's node.
    let after = e.sample(20.000_001).unwrap();
    assert_eq!(after.slots()[0].an, STAGE4.an);
}

#[test]
fn sampling_is_bit_identical() {
    let e = default_engine();
    let twin = default_engine();
    let mut t = 0.0;
    while t < 200.0 {
        let a = e.sample(t).unwrap();
        let b = twin.sample(t).unwrap();
        for (x, y) in a.slots().iter().zip(b.slots()) {
            for field in Field::ALL {
                assert_eq!(x.get(field).to_bits(), y.get(field).to_bits());
            }
        }
        t += 0.37;
    }
}

#[test]
fn selectors_are_always_binary_and_fields_in_range() {
    for wrap in [WrapMode::Carry, WrapMode::Reset] {
        let e = engine(EngineConfig {
            wrap,
            ..EngineConfig::default()
        });
        let mut t = 0.0;
        while t < 130.0 {
            let s = e.sample(t).unwrap();
            s.validate().unwrap();
            for slot in s.slots() {
                assert!(slot.an == 0.0 || slot.an == 1.0);
                assert!(slot.bn == 0.0 || slot.bn == 1.0);
            }
            t += 0.093;
        }
    }
}

#[test]
fn fields_stay_between_bracketing_keyframes() {
    let e = default_engine();
    let mut t = 0.0;
    while t < 60.0 {
        let sample = e.sample_slot(Slot::ALL[0], t).unwrap();
        let (a, b) = e
            .table()
            .segment_endpoints(sample.position.segment, WrapMode::Carry)
            .unwrap();
        for field in [Field::Co, Field::Cn, Field::Ac, Field::Bc] {
            let v = sample.state.get(field);
            let lo = a.get(field).min(b.get(field));
            let hi = a.get(field).max(b.get(field));
            assert!(v >= lo && v <= hi, "{} = {v} at t = {t}", field.name());
        }
        t += 0.11;
    }
}

#[test]
fn segment_ends_meet_next_segment_starts() {
    let e = default_engine();
    for segment in 0..5 {
        let end = e
            .interpolate(SegmentPos {
                cycle: 0,
                segment,
                fraction: 1.0,
            })
            .unwrap();
        let next = e
            .interpolate(SegmentPos {
                cycle: 0,
                segment: segment + 1,
                fraction: 0.0,
            })
            .unwrap();
        assert_eq!(end, next, "segment {segment}");
    }
    // The wrapped segment ends on STAGE1 one node further along.
    let end = e
        .interpolate(SegmentPos {
            cycle: 0,
            segment: 5,
            fraction: 1.0,
        })
        .unwrap();
    assert_eq!(end, rebase_one_node(STAGE1));
}

#[test]
fn cycle_boundary_advances_origin_in_carry_mode() {
    let e = default_engine();
    let before = e.sample_slot(Slot::ALL[0], 59.999).unwrap();
    let after = e.sample_slot(Slot::ALL[0], 60.0).unwrap();
    assert_eq!(e.origin_shift(&before), 0);
    assert_eq!(e.origin_shift(&after), 1);
    assert_eq!(after.state, STAGE1);
    assert_relative_eq!(before.state.cn, 3.0, epsilon = 1e-3);
    assert_eq!(before.state.an, 1.0);

    let reset = engine(EngineConfig {
        wrap: WrapMode::Reset,
        ..EngineConfig::default()
    });
    let late = reset.sample_slot(Slot::ALL[0], 125.0).unwrap();
    assert_eq!(reset.origin_shift(&late), 0);
}

#[test]
fn reset_wrap_returns_pieces_to_host() {
    let e = engine(EngineConfig {
        wrap: WrapMode::Reset,
        ..EngineConfig::default()
    });
    let s = e.sample(55.0).unwrap().slots()[0];
    assert_eq!(s.co, 0.5);
    assert_eq!(s.cn, 1.0);
    assert_eq!(s.ac, 1.0);
    assert_eq!(s.an, 0.0);

    let carry = default_engine().sample(55.0).unwrap().slots()[0];
    assert_eq!(carry.cn, 2.5);
    assert_eq!(carry.an, STAGE6.an);
}

#[test]
fn phase_offsets_shift_individual_slots() {
    let e = engine(EngineConfig {
        phase_offsets: [0.0, 5.0, 0.0, 60.0],
        ..EngineConfig::default()
    });
    let snap = e.snapshot(20.0).unwrap();
    assert_eq!(snap.slots[0].state, STAGE3);
    assert_eq!(
        snap.slots[1].state,
        PieceSetState::new(0.5, 3.0, 1.0, 1.0, 1.0, 1.0)
    );
    assert_eq!(snap.slots[3].state, STAGE3);
    assert_eq!(snap.cycles(), [0, 0, 0, 1]);
}

#[test]
fn invalid_configuration_is_rejected() {
    let bad_duration = EngineConfig {
        segment_duration: 0.0,
        ..EngineConfig::default()
    };
    assert!(Engine::new(StageTable::standard(), bad_duration).is_err());

    let bad_offset = EngineConfig {
        phase_offsets: [0.0, -1.0, 0.0, 0.0],
        ..EngineConfig::default()
    };
    let err = Engine::new(StageTable::standard(), bad_offset).unwrap_err();
    assert!(err.to_string().contains("slot 1"));

    let e = default_engine();
    assert!(e.sample(-1.0).is_err());
    assert!(e.sample(f64::NAN).is_err());
}

#[test]
fn config_parses_with_defaults() {
    let cfg: EngineConfig = serde_json::from_str(r#"{"wrap":"reset"}"#).unwrap();
    assert_eq!(cfg.segment_duration, 10.0);
    assert_eq!(cfg.wrap, WrapMode::Reset);
    assert!(serde_json::from_str::<EngineConfig>(r#"{"speed":2}"#).is_err());
}

#[test]
fn offset_never_masks_a_negative_driver_clock() {
    let e = engine(EngineConfig {
        phase_offsets: [0.0, 5.0, 0.0, 0.0],
        ..EngineConfig::default()
    });
    let slot = Slot::ALL[1];
    assert!(e.sample_slot(slot, -1.0).is_err());
    let sample = e.sample_slot(slot, 0.0).unwrap();
    assert_eq!(sample.position.segment, 0);
    assert_eq!(sample.position.fraction, 0.5);
}
