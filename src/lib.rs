//! Sliced Cubes drives a lockstep sculpture animation spread across a lattice of displays.
//!
//! A single driver owns the clock, samples one 24-scalar state tuple per tick and broadcasts it.
//! Every display reconstructs the same rigid poses from that tuple, so no geometry ever crosses
//! the wire.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `StageTable + EngineConfig + t -> SlicedCubesState` (four piece sets, each
//!    interpolated between keyframes on its own phase-shifted clock)
//! 2. **Broadcast**: `Snapshot -> StateUpdate` on the `sliced_cubes` channel, fingerprinted
//! 3. **Reconstruct**: `StateUpdate + DisplayRegion -> Vec<HostView>` (per-host rigid poses)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure sampling**: the state at `t` depends on `t` and the static configuration only.
//! - **Bounded values**: every field stays inside its documented range, selectors are exactly
//!   0 or 1.
//! - **Fail loudly**: bad clocks, tables or parameters are errors, never clamped.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a walkthrough of the state model and the geometry contract, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod broadcast;
mod config;
mod display;
mod driver;
mod foundation;
mod geometry;
mod lattice;
mod stage;
mod state;

/// Standalone documentation of the state model, the stage cycle and the geometry contract.
pub mod guide;

pub use animation::engine::{Engine, EngineConfig, Snapshot, SlotSample};
pub use animation::time::{SegmentPos, TimeMapping};
pub use broadcast::fingerprint::{StateFingerprint, fingerprint_state};
pub use broadcast::sink::{InMemorySink, JsonLinesSink, StateSink};
pub use broadcast::update::StateUpdate;
pub use config::show::ShowConfig;
pub use display::client::{Applied, DisplayClient, HostView};
pub use driver::clock::Clock;
pub use driver::pipeline::{Driver, RunStats};
pub use foundation::error::{CubesResult, SlicedCubesError};
pub use geometry::params::GeometryParams;
pub use geometry::reconstruct::{
    ATTACH_AT, CornerPhase, CornerPose, DETACH_AT, PieceSetPose, REPARENT_AT, WedgeParent,
    WedgePose, corner_phase, corner_pose, reconstruct, slot_orientation,
};
pub use lattice::node::{Node, Parity, TransitAxis};
pub use lattice::region::{DisplayRegion, Lattice, NodeFrame};
pub use stage::table::{
    Keyframe, MovingGroups, SEGMENT_COUNT, STAGE_COUNT, STAGE_NARRATIVE, STAGE1, STAGE2, STAGE3,
    STAGE4, STAGE5, STAGE6, STORED_STAGES, StageTable, WrapMode, rebase_one_node,
};
pub use state::piece::{Field, NodeSelector, PieceSetState};
pub use state::sliced::{
    COLORS_STATE_NAME, SLICED_CUBES_STATE_NAME, SLOT_COUNT, SlicedCubesState, Slot,
};
