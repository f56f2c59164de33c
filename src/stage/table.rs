//! The ordered keyframes a piece set cycles through.
//!
//! Six stages are stored. The seventh is the first stage one node further along the transit
//! axis, so a full cycle leaves a reassembled cube on the destination node.

use crate::{
    foundation::error::{CubesResult, SlicedCubesError},
    state::piece::PieceSetState,
};

/// Intact cube on the host node.
pub const STAGE1: PieceSetState = PieceSetState::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
/// Corners twisted into the octahedron pose and lifted off, both wedges riding them.
pub const STAGE2: PieceSetState = PieceSetState::new(1.0, 1.0, 2.0, 0.0, 2.0, 0.0);
/// Corners have carried their wedges across to the destination node.
pub const STAGE3: PieceSetState = PieceSetState::new(1.0, 3.0, 2.0, 0.0, 2.0, 0.0);
/// Corners untwisted; wedges dropped into the destination node's tetrahedron.
pub const STAGE4: PieceSetState = PieceSetState::new(0.0, 3.0, 0.0, 1.0, 0.0, 1.0);
/// Dodecahedron phase: corners twist and lift again, wedge B rides them, wedge A stays.
pub const STAGE5: PieceSetState = PieceSetState::new(1.0, 2.0, 0.0, 1.0, 2.0, 1.0);
/// Wedge A joins wedge B on the lifted corners.
pub const STAGE6: PieceSetState = PieceSetState::new(1.0, 2.0, 2.0, 1.0, 2.0, 1.0);

/// Stored keyframes.
pub const STORED_STAGES: usize = 6;
/// Keyframes including the derived seventh.
pub const STAGE_COUNT: usize = STORED_STAGES + 1;
/// Transitions per cycle.
pub const SEGMENT_COUNT: usize = STORED_STAGES;

/// `cn` distance between the host and destination nodes.
const CN_PER_NODE: f64 = 3.0;

/// Short description of each transition of the default table, `1 -> 2` first.
pub const STAGE_NARRATIVE: [&str; SEGMENT_COUNT] = [
    "corners twist and lift off; both wedges climb onto the corners",
    "corners fly to the destination node carrying their wedges",
    "corners untwist; both wedges drop into the destination tetrahedron",
    "corners twist and lift; wedge B climbs back onto its corner",
    "wedge A climbs onto its corner",
    "corners untwist and reseat; both wedges drop into the tetrahedron",
];

/// How the last transition (stage 6 to the derived stage 7) is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Stage 7 is expressed in stage 6's node frame and each cycle moves the cube origin one
    /// node along the transit axis.
    #[default]
    Carry,
    /// Stage 7 uses stage 1's raw values in the same frame: pieces return to the host node.
    Reset,
}

/// A keyframe together with the node it is anchored on, counted in transit steps from the
/// cycle's host node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Keyframe {
    /// Field values relative to the anchoring node.
    pub state: PieceSetState,
    /// Transit steps from the host node.
    pub node_shift: i64,
}

/// Which piece groups change during one transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MovingGroups {
    /// `co` or `cn` changes.
    pub corner: bool,
    /// `ac` changes.
    pub wedge_a: bool,
    /// `bc` changes.
    pub wedge_b: bool,
}

/// Validated, read-only keyframe sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct StageTable {
    stages: [PieceSetState; STORED_STAGES],
}

impl Default for StageTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl StageTable {
    /// The built-in table (`STAGE1` through `STAGE6`).
    pub fn standard() -> Self {
        Self {
            stages: [STAGE1, STAGE2, STAGE3, STAGE4, STAGE5, STAGE6],
        }
    }

    /// Build a custom table, validating every keyframe and the five stored transitions.
    ///
    /// The wrapped transition depends on the wrap mode and is checked by
    /// [`StageTable::check_wrap`].
    pub fn new(stages: [PieceSetState; STORED_STAGES]) -> CubesResult<Self> {
        for (i, s) in stages.iter().enumerate() {
            s.check_ranges().map_err(|e| {
                SlicedCubesError::malformed_table(format!("STAGE{}: {e}", i + 1))
            })?;
        }
        let table = Self { stages };
        for segment in 0..SEGMENT_COUNT - 1 {
            let (a, b) = (table.stages[segment], table.stages[segment + 1]);
            check_selector_switch(segment, &a, &b)?;
        }
        Ok(table)
    }

    /// Validate the stage 6 to stage 7 transition under `wrap`.
    pub fn check_wrap(&self, wrap: WrapMode) -> CubesResult<()> {
        let (a, b) = self.segment_endpoints(SEGMENT_COUNT - 1, wrap)?;
        b.check_ranges().map_err(|e| {
            SlicedCubesError::malformed_table(format!(
                "STAGE7 rebased onto STAGE6's node: {e} (carry wrap needs STAGE1 to rest on its host)"
            ))
        })?;
        check_selector_switch(SEGMENT_COUNT - 1, &a, &b)
    }

    /// Stored stages, `STAGE1` first.
    pub fn stages(&self) -> &[PieceSetState; STORED_STAGES] {
        &self.stages
    }

    /// Keyframe `index` in `0..STAGE_COUNT`; index 6 is the derived stage 7.
    pub fn keyframe(&self, index: usize) -> Option<Keyframe> {
        match index {
            i if i < STORED_STAGES => Some(Keyframe {
                state: self.stages[i],
                node_shift: 0,
            }),
            STORED_STAGES => Some(self.stage7()),
            _ => None,
        }
    }

    /// Stage 1 translated one node along the transit axis.
    pub fn stage7(&self) -> Keyframe {
        Keyframe {
            state: self.stages[0],
            node_shift: 1,
        }
    }

    /// Start and end field values of `segment`, both expressed in the cycle's host frame.
    pub fn segment_endpoints(
        &self,
        segment: usize,
        wrap: WrapMode,
    ) -> CubesResult<(PieceSetState, PieceSetState)> {
        if segment >= SEGMENT_COUNT {
            return Err(SlicedCubesError::invalid_config(format!(
                "segment {segment} out of range (0..{SEGMENT_COUNT})"
            )));
        }
        let start = self.stages[segment];
        let end = if segment + 1 < STORED_STAGES {
            self.stages[segment + 1]
        } else {
            match wrap {
                WrapMode::Carry => rebase_one_node(self.stage7().state),
                WrapMode::Reset => self.stage7().state,
            }
        };
        Ok((start, end))
    }

    /// Piece groups that move during `segment`.
    pub fn moving_groups(&self, segment: usize, wrap: WrapMode) -> CubesResult<MovingGroups> {
        let (a, b) = self.segment_endpoints(segment, wrap)?;
        Ok(MovingGroups {
            corner: a.co != b.co || a.cn != b.cn,
            wedge_a: a.ac != b.ac,
            wedge_b: a.bc != b.bc,
        })
    }
}

impl<'de> serde::Deserialize<'de> for StageTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stages = <[PieceSetState; STORED_STAGES]>::deserialize(deserializer)?;
        StageTable::new(stages).map_err(serde::de::Error::custom)
    }
}

/// Express a state anchored one node further along the transit axis in the previous node's
/// frame.
pub fn rebase_one_node(state: PieceSetState) -> PieceSetState {
    PieceSetState {
        cn: state.cn + CN_PER_NODE,
        an: state.an + 1.0,
        bn: state.bn + 1.0,
        ..state
    }
}

// A selector may only flip while its wedge rides the corner, where the node frame does not
// contribute to the wedge pose.
fn check_selector_switch(
    segment: usize,
    a: &PieceSetState,
    b: &PieceSetState,
) -> CubesResult<()> {
    for (name, sel_a, sel_b, attach) in [("an", a.an, b.an, a.ac), ("bn", a.bn, b.bn, a.bc)] {
        if sel_a != sel_b && attach != 2.0 {
            return Err(SlicedCubesError::malformed_table(format!(
                "{name} switches across STAGE{} -> STAGE{} while its wedge is not on the corner",
                segment + 1,
                segment + 2
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/stage/table.rs"]
mod tests;
