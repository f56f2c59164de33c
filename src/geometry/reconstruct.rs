//! Turning a piece-set state into rigid poses.
//!
//! Every display runs this on the same state and node frame, so the formulas below are the
//! whole contract between the engine and a renderer: anything not derived from the six fields
//! and the static parameters would let displays drift apart.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

use crate::{
    foundation::math::lerp,
    geometry::params::GeometryParams,
    lattice::region::NodeFrame,
    state::piece::{NodeSelector, PieceSetState},
    state::sliced::Slot,
};

/// `cn` value where the corner leaves the host cube.
pub const DETACH_AT: f64 = 1.0;
/// `cn` value where the corner joins the destination structure.
pub const ATTACH_AT: f64 = 2.0;
/// `ac`/`bc` value where a wedge changes owner.
pub const REPARENT_AT: f64 = 1.0;

/// Which rigid body a corner belongs to for a given `cn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerPhase {
    /// `cn` in `[0, 1]`: part of the host cube, sliding out along its axis.
    AttachedToHost,
    /// `cn` in `(1, 2)`: flying straight between the nodes.
    InFlight,
    /// `cn` in `[2, 3]`: part of the destination structure.
    AttachedToDestination,
}

/// Body whose transform a wedge inherits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WedgeParent {
    /// The node-side tetrahedron of the selected node.
    Node(NodeSelector),
    /// The wedge's corner piece.
    Corner,
}

/// World pose of a corner piece.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CornerPose {
    /// Centroid placement and orientation.
    pub world: Isometry3<f64>,
    /// Attachment phase.
    pub phase: CornerPhase,
}

/// World pose of a wedge and its pose relative to the governing parent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WedgePose {
    /// Placement in world space.
    pub world: Isometry3<f64>,
    /// Governing parent.
    pub parent: WedgeParent,
    /// `world` expressed in the parent's frame.
    pub local: Isometry3<f64>,
}

/// Reconstructed poses of one piece set.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PieceSetPose {
    /// Slot the poses belong to.
    pub slot: Slot,
    /// The corner piece.
    pub corner: CornerPose,
    /// Wedge A.
    pub wedge_a: WedgePose,
    /// Wedge B.
    pub wedge_b: WedgePose,
}

/// Slot-local to world rotation (transit basis followed by the slot's half turn).
pub fn slot_orientation(frame: &NodeFrame, slot: Slot) -> UnitQuaternion<f64> {
    frame.basis * slot.rotation()
}

/// Phase of a corner at node position `cn`.
pub fn corner_phase(cn: f64) -> CornerPhase {
    if cn <= DETACH_AT {
        CornerPhase::AttachedToHost
    } else if cn < ATTACH_AT {
        CornerPhase::InFlight
    } else {
        CornerPhase::AttachedToDestination
    }
}

/// World pose of the corner of `slot`.
///
/// While attached the corner sits at its rest position on the host or destination node and only
/// `co` turns it. Between the thresholds it flies straight from one rest position to the other.
pub fn corner_pose(
    state: &PieceSetState,
    slot: Slot,
    frame: &NodeFrame,
    params: &GeometryParams,
) -> CornerPose {
    let orient = slot_orientation(frame, slot);
    let rest = orient * params.corner_rest();

    let phase = corner_phase(state.cn);
    let centroid: Point3<f64> = match phase {
        CornerPhase::AttachedToHost => frame.host_origin + rest,
        CornerPhase::InFlight => {
            let progress = (state.cn - DETACH_AT) / (ATTACH_AT - DETACH_AT);
            frame.host_origin + rest + frame.transit() * progress
        }
        CornerPhase::AttachedToDestination => frame.destination_origin + rest,
    };

    CornerPose {
        world: Isometry3::from_parts(
            Translation3::from(centroid.coords),
            orient * corner_twist(state.co, params),
        ),
        phase,
    }
}

fn corner_twist(co: f64, params: &GeometryParams) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&GeometryParams::corner_axis(), co * params.twist_angle)
}

/// One wedge's attachment inputs, in slot-local space.
struct WedgeSpec {
    attach: f64,
    selector: NodeSelector,
    home: Vector3<f64>,
    socket: Vector3<f64>,
}

/// World pose of one wedge.
///
/// Below [`REPARENT_AT`] the wedge is a child of node `selector` and slides from its home to the
/// handover point, the socket of an untwisted corner resting on that node. From `REPARENT_AT`
/// on it is a child of the corner: it sits on its socket and takes on the corner's twist,
/// becoming rigid at 2. Both sides meet at the handover as long as the corner rests on the
/// selected node when `attach` crosses 1, which the stage tables guarantee.
fn wedge_pose(
    wedge: WedgeSpec,
    co: f64,
    orient: UnitQuaternion<f64>,
    corner: &Isometry3<f64>,
    frame: &NodeFrame,
    params: &GeometryParams,
) -> WedgePose {
    if wedge.attach < REPARENT_AT {
        let node = Isometry3::from_parts(
            Translation3::from(frame.origin(wedge.selector).coords),
            orient,
        );
        let handover = params.corner_rest() + wedge.socket;
        let s = wedge.attach / REPARENT_AT;
        let local = Isometry3::translation(
            lerp(wedge.home.x, handover.x, s),
            lerp(wedge.home.y, handover.y, s),
            lerp(wedge.home.z, handover.z, s),
        );
        WedgePose {
            world: node * local,
            parent: WedgeParent::Node(wedge.selector),
            local,
        }
    } else {
        let seated = (wedge.attach - REPARENT_AT) / (2.0 - REPARENT_AT);
        let untwist = corner_twist((seated - 1.0) * co, params);
        let local = Isometry3::from_parts(Translation3::from(untwist * wedge.socket), untwist);
        WedgePose {
            world: corner * local,
            parent: WedgeParent::Corner,
            local,
        }
    }
}

/// Reconstruct every piece of one slot.
pub fn reconstruct(
    state: &PieceSetState,
    slot: Slot,
    frame: &NodeFrame,
    params: &GeometryParams,
) -> PieceSetPose {
    let orient = slot_orientation(frame, slot);
    let corner = corner_pose(state, slot, frame, params);
    let wedge_a = wedge_pose(
        WedgeSpec {
            attach: state.ac,
            selector: state.selector_a(),
            home: Vector3::from(params.wedge_a_home),
            socket: params.socket_a(),
        },
        state.co,
        orient,
        &corner.world,
        frame,
        params,
    );
    let wedge_b = wedge_pose(
        WedgeSpec {
            attach: state.bc,
            selector: state.selector_b(),
            home: Vector3::from(params.wedge_b_home),
            socket: params.socket_b(),
        },
        state.co,
        orient,
        &corner.world,
        frame,
        params,
    );
    PieceSetPose {
        slot,
        corner,
        wedge_a,
        wedge_b,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/reconstruct.rs"]
mod tests;
