//! # Sliced Cubes guide (v0.1.0)
//!
//! This module is a standalone walkthrough of the state model, the stage cycle and the geometry
//! contract that every display has to honor. It is meant for people writing a renderer or a new
//! stage table.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Node`](crate::Node): a point of the infinite display checkerboard. Parity is
//!   `(x + y) mod 2`, with negative coordinates handled by `rem_euclid`.
//! - [`PieceSetState`](crate::PieceSetState): six scalars describing one corner and its two
//!   wedges (`co`, `cn`, `ac`, `an`, `bc`, `bn`).
//! - [`SlicedCubesState`](crate::SlicedCubesState): the four piece sets of a cube, one per
//!   [`Slot`](crate::Slot). This is the whole broadcast payload.
//! - [`StageTable`](crate::StageTable): six keyframes plus a derived seventh.
//! - [`Engine`](crate::Engine): the pure function from a clock value to a state tuple.
//! - [`Driver`](crate::Driver): owns the clock and pushes [`StateUpdate`](crate::StateUpdate)s
//!   into a [`StateSink`](crate::StateSink).
//! - [`DisplayClient`](crate::DisplayClient): turns updates into per-host poses for the nodes
//!   one display owns.
//!
//! ---
//!
//! ## Field ranges
//!
//! | field | range | meaning |
//! |-------|-------|---------|
//! | `co`  | `[0, 1]` | corner twist: 0 cube pose, 1 octahedron pose |
//! | `cn`  | `[0, 3]` | corner travel: 0 on the host, 3 on the destination |
//! | `ac`, `bc` | `[0, 2]` | wedge attachment: 0 node side, 2 corner side |
//! | `an`, `bn` | `{0, 1}` | node the wedge's node side refers to: 0 host, 1 destination |
//!
//! The engine never emits a value outside these ranges and selectors never take fractional
//! values: they jump at the start of the segment that changes them.
//!
//! ---
//!
//! ## Time mapping
//!
//! With segment duration `d`, a slot's local clock `t` (driver clock plus its phase offset) maps to
//! segment `floor(t / d) mod 6` at fraction `(t mod d) / d`. Exact multiples of `d` start the
//! next segment at fraction 0, so `t = 0` is exactly `STAGE1`. Continuous fields are blended
//! linearly between the segment's endpoints.
//!
//! ## Closing the cycle
//!
//! The seventh keyframe is `STAGE1` anchored one node further along the transit axis. Under
//! [`WrapMode::Carry`](crate::WrapMode::Carry) the last segment blends from `STAGE6` to `STAGE1`
//! rebased into `STAGE6`'s frame (`cn + 3`, `an + 1`, `bn + 1`), and every completed cycle moves
//! the host one node along the axis. [`WrapMode::Reset`](crate::WrapMode::Reset) blends to
//! `STAGE1`'s raw values instead and the host never moves.
//!
//! A selector may only change across a segment whose start keyframe has the matching wedge fully
//! on its corner (`ac == 2` or `bc == 2`). At that point the node frame does not contribute to the
//! wedge pose, so the switch is invisible. [`StageTable::new`](crate::StageTable::new) and
//! [`StageTable::check_wrap`](crate::StageTable::check_wrap) reject tables that break this.
//!
//! ---
//!
//! ## Geometry contract
//!
//! Poses are computed in [`reconstruct`](crate::reconstruct) from the state, the slot, the host's
//! [`NodeFrame`](crate::NodeFrame) and the shared [`GeometryParams`](crate::GeometryParams):
//!
//! - Slot 0 is the untouched piece set; slots 1 to 3 are its half turns about the cube's x, y and
//!   z axes, so the four corners take the cube's alternating vertices.
//! - A corner is rigid on the host while `cn <= 1`, flies straight to the destination while
//!   `1 < cn < 2`, and is rigid on the destination for `cn >= 2`. Only `co` turns it: a twist of
//!   `co` times `twist_angle` about the cube diagonal through its vertex.
//! - A wedge has one parent at a time. Below `ac == 1` (or `bc`) it is a child of node `an`
//!   (or `bn`) and slides from its home toward its socket. From 1 on it is a child of the corner
//!   and is rigidly seated at 2. Position is continuous at 1; velocity may jump.
//!
//! Every position is continuous in `t`, including across cycle boundaries once the host shift is
//! applied. Displays that disagree on any parameter will drift apart, so ship one
//! [`ShowConfig`](crate::ShowConfig) to all of them.
//!
//! ---
//!
//! ## Checking lockstep
//!
//! Each [`StateUpdate`](crate::StateUpdate) carries a
//! [`StateFingerprint`](crate::StateFingerprint) over the exact bits of the 24 fields. Two engines
//! built from the same configuration produce the same fingerprint for the same `t`; a display can
//! call [`StateUpdate::is_intact`](crate::StateUpdate::is_intact) to detect corruption in transit.
