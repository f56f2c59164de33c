use super::*;

#[test]
fn parity_is_stable_for_negative_coordinates() {
    assert_eq!(Node::new(0, 0).parity(), Parity::Even);
    assert_eq!(Node::new(-1, 0).parity(), Parity::Odd);
    assert_eq!(Node::new(-1, -1).parity(), Parity::Even);
    assert_eq!(Node::new(-3, 2).parity(), Parity::Odd);
    assert_eq!(Node::new(i64::MIN, 0).parity(), Parity::Even);
}

#[test]
fn single_step_flips_parity() {
    for axis in [
        TransitAxis::PosX,
        TransitAxis::NegX,
        TransitAxis::PosY,
        TransitAxis::NegY,
    ] {
        let n = Node::new(5, -7);
        assert_eq!(n.step(axis, 1).parity(), n.parity().flip());
        assert_eq!(n.step(axis, 2).parity(), n.parity());
        assert_eq!(n.step(axis, 1).step(axis, -1), n);
    }
}

#[test]
fn basis_maps_local_x_onto_transit_unit() {
    for axis in [
        TransitAxis::PosX,
        TransitAxis::NegX,
        TransitAxis::PosY,
        TransitAxis::NegY,
    ] {
        let mapped = axis.basis() * nalgebra::Vector3::x();
        approx::assert_relative_eq!(mapped, axis.unit(), epsilon = 1e-12);
        let up = axis.basis() * nalgebra::Vector3::z();
        approx::assert_relative_eq!(up, nalgebra::Vector3::z(), epsilon = 1e-12);
    }
}

#[test]
fn parity_of_count_alternates() {
    assert_eq!(Parity::of_count(0), Parity::Even);
    assert_eq!(Parity::of_count(1), Parity::Odd);
    assert_eq!(Parity::of_count(10), Parity::Even);
}

#[test]
fn axis_serializes_snake_case() {
    let s = serde_json::to_string(&TransitAxis::NegY).unwrap();
    assert_eq!(s, "\"neg_y\"");
}
