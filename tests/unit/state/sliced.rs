use super::*;

#[test]
fn channel_names_are_fixed() {
    assert_eq!(SLICED_CUBES_STATE_NAME, "sliced_cubes");
    assert_eq!(COLORS_STATE_NAME, "colors");
}

#[test]
fn state_serializes_as_plain_array() {
    let s = SlicedCubesState::uniform(PieceSetState::new(1.0, 3.0, 2.0, 0.0, 2.0, 0.0));
    let v = serde_json::to_value(s).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), SLOT_COUNT);
    assert_eq!(arr[3]["cn"].as_f64(), Some(3.0));
    let back: SlicedCubesState = serde_json::from_value(v).unwrap();
    assert_eq!(back, s);
}

#[test]
fn wrong_arity_is_rejected() {
    let one = r#"[{"co":0,"cn":0,"ac":0,"an":0,"bc":0,"bn":0}]"#;
    assert!(serde_json::from_str::<SlicedCubesState>(one).is_err());
}

#[test]
fn slots_are_axis_half_turns() {
    assert!(Slot::new(4).is_err());
    let s = Slot::new(2).unwrap();
    assert_eq!(s.index(), 2);
    assert_eq!(s.half_turn_axis(), Some(nalgebra::Vector3::y_axis()));
    assert_eq!(Slot::ALL[0].half_turn_axis(), None);
    approx::assert_relative_eq!(s.rotation().angle(), std::f64::consts::PI, epsilon = 1e-12);
    assert!(serde_json::from_str::<Slot>("7").is_err());
    assert_eq!(serde_json::from_str::<Slot>("3").unwrap(), Slot::ALL[3]);
}

#[test]
fn validate_names_the_offending_slot() {
    let mut slots = [PieceSetState::default(); SLOT_COUNT];
    slots[2].bn = 0.25;
    let err = SlicedCubesState::new(slots).validate().unwrap_err();
    assert!(err.to_string().contains("slot 2"));
}
