use super::*;

#[test]
fn standard_table_is_valid_under_both_wraps() {
    let stages = StageTable::standard().stages().to_owned();
    let table = StageTable::new(stages).unwrap();
    table.check_wrap(WrapMode::Carry).unwrap();
    table.check_wrap(WrapMode::Reset).unwrap();
}

#[test]
fn keyframes_are_indexable_and_stage7_is_derived() {
    let table = StageTable::standard();
    assert_eq!(table.keyframe(0).unwrap().state, STAGE1);
    assert_eq!(table.keyframe(3).unwrap().state, STAGE4);
    assert!(table.keyframe(STAGE_COUNT).is_none());

    let s7 = table.keyframe(6).unwrap();
    assert_eq!(s7, table.stage7());
    assert_eq!(s7.state, STAGE1);
    assert_eq!(s7.node_shift, 1);
    assert!((0..6).all(|i| table.keyframe(i).unwrap().node_shift == 0));
}

#[test]
fn carry_rebases_stage7_into_stage6_frame() {
    let table = StageTable::standard();
    let (start, end) = table.segment_endpoints(5, WrapMode::Carry).unwrap();
    assert_eq!(start, STAGE6);
    assert_eq!(end, PieceSetState::new(0.0, 3.0, 0.0, 1.0, 0.0, 1.0));
    let (_, raw) = table.segment_endpoints(5, WrapMode::Reset).unwrap();
    assert_eq!(raw, STAGE1);
    assert!(table.segment_endpoints(6, WrapMode::Carry).is_err());
}

#[test]
fn numeric_table_matches_narrative() {
    let table = StageTable::standard();
    let expected = [
        (true, true, true),
        (true, false, false),
        (true, true, true),
        (true, false, true),
        (false, true, false),
        (true, true, true),
    ];
    for (segment, (corner, wedge_a, wedge_b)) in expected.into_iter().enumerate() {
        let g = table.moving_groups(segment, WrapMode::Carry).unwrap();
        assert_eq!(
            g,
            MovingGroups {
                corner,
                wedge_a,
                wedge_b
            },
            "segment {segment}: {}",
            STAGE_NARRATIVE[segment]
        );
    }
}

#[test]
fn fractional_selector_is_malformed() {
    let mut stages = *StageTable::standard().stages();
    stages[3].an = 0.5;
    let err = StageTable::new(stages).unwrap_err();
    assert!(matches!(err, SlicedCubesError::MalformedStageTable(_)));
    assert!(err.to_string().contains("STAGE4"));
}

#[test]
fn selector_switch_off_the_corner_is_malformed() {
    let mut stages = *StageTable::standard().stages();
    // Wedge B still sits in the tetrahedron when its selector flips.
    stages[2].bc = 0.0;
    let err = StageTable::new(stages).unwrap_err();
    assert!(err.to_string().contains("bn switches across STAGE3 -> STAGE4"));
}

#[test]
fn carry_needs_stage1_at_rest_on_host() {
    let mut stages = *StageTable::standard().stages();
    stages[0].cn = 0.5;
    stages[1].cn = 1.0;
    let table = StageTable::new(stages).unwrap();
    assert!(table.check_wrap(WrapMode::Carry).is_err());
    assert!(table.check_wrap(WrapMode::Reset).is_ok());
}

#[test]
fn reset_wrap_rejects_selector_jump_in_tetrahedron() {
    let mut stages = *StageTable::standard().stages();
    stages[5].bc = 0.0;
    let table = StageTable::new(stages).unwrap();
    assert!(table.check_wrap(WrapMode::Carry).is_ok());
    assert!(table.check_wrap(WrapMode::Reset).is_err());
}

#[test]
fn json_table_is_validated_on_load() {
    let json = serde_json::to_string(&StageTable::standard()).unwrap();
    let back: StageTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, StageTable::standard());

    let mut v: serde_json::Value = serde_json::from_str(&json).unwrap();
    v[1]["an"] = serde_json::json!(0.3);
    assert!(serde_json::from_value::<StageTable>(v).is_err());
}
