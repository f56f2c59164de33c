use crate::{
    animation::time::{SegmentPos, TimeMapping},
    foundation::error::{CubesResult, SlicedCubesError},
    foundation::math::lerp,
    lattice::region::Lattice,
    stage::table::{StageTable, WrapMode},
    state::piece::PieceSetState,
    state::sliced::{SLOT_COUNT, SlicedCubesState, Slot},
};

/// Timing parameters shared by every display.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Seconds per stage transition.
    pub segment_duration: f64,
    /// Per-slot clock offset in seconds; all zero keeps the slots in lockstep.
    pub phase_offsets: [f64; SLOT_COUNT],
    /// Interpretation of the stage 6 to stage 7 transition.
    pub wrap: WrapMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            segment_duration: 10.0,
            phase_offsets: [0.0; SLOT_COUNT],
            wrap: WrapMode::Carry,
        }
    }
}

impl EngineConfig {
    /// Reject values that would make displays disagree instead of clamping them.
    pub fn validate(&self) -> CubesResult<()> {
        TimeMapping::new(self.segment_duration)?;
        for (i, off) in self.phase_offsets.iter().enumerate() {
            if !off.is_finite() || *off < 0.0 {
                return Err(SlicedCubesError::invalid_config(format!(
                    "phase offset of slot {i} must be finite and >= 0 (got {off})"
                )));
            }
        }
        Ok(())
    }
}

/// One slot's interpolated state and where it was taken from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlotSample {
    /// Slot this sample belongs to.
    pub slot: Slot,
    /// Position of the slot's clock in the cycle.
    pub position: SegmentPos,
    /// Interpolated fields.
    pub state: PieceSetState,
}

/// Every slot sampled at one clock value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Snapshot {
    /// Driver clock value.
    pub t: f64,
    /// Per-slot samples in payload order.
    pub slots: [SlotSample; SLOT_COUNT],
}

impl Snapshot {
    /// The broadcast tuple.
    pub fn state(&self) -> SlicedCubesState {
        SlicedCubesState::new(self.slots.map(|s| s.state))
    }

    /// Completed cycles per slot.
    pub fn cycles(&self) -> [u64; SLOT_COUNT] {
        self.slots.map(|s| s.position.cycle)
    }
}

/// Pure mapping from clock value to piece-set states.
#[derive(Clone, Debug)]
pub struct Engine {
    table: StageTable,
    config: EngineConfig,
    mapping: TimeMapping,
}

impl Engine {
    /// Build an engine, validating the configuration and the wrapped transition.
    pub fn new(table: StageTable, config: EngineConfig) -> CubesResult<Self> {
        config.validate()?;
        table.check_wrap(config.wrap)?;
        let mapping = TimeMapping::new(config.segment_duration)?;
        Ok(Self {
            table,
            config,
            mapping,
        })
    }

    /// Keyframes in use.
    pub fn table(&self) -> &StageTable {
        &self.table
    }

    /// Timing parameters in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clock to segment mapping in use.
    pub fn mapping(&self) -> &TimeMapping {
        &self.mapping
    }

    /// Fields at a located position.
    ///
    /// Continuous fields blend linearly. Selectors hold the start keyframe's value at fraction
    /// 0 and the approached keyframe's value for the rest of the segment.
    pub fn interpolate(&self, pos: SegmentPos) -> CubesResult<PieceSetState> {
        let (a, b) = self.table.segment_endpoints(pos.segment, self.config.wrap)?;
        let f = pos.fraction;
        let snap = |from: f64, to: f64| if f == 0.0 { from } else { to };
        Ok(PieceSetState {
            co: lerp(a.co, b.co, f),
            cn: lerp(a.cn, b.cn, f),
            ac: lerp(a.ac, b.ac, f),
            an: snap(a.an, b.an),
            bc: lerp(a.bc, b.bc, f),
            bn: snap(a.bn, b.bn),
        })
    }

    /// Sample one slot at driver clock `t`.
    pub fn sample_slot(&self, slot: Slot, t: f64) -> CubesResult<SlotSample> {
        // Checked before the offset is applied so a bad driver clock is never masked.
        TimeMapping::check_clock(t)?;
        let position = self
            .mapping
            .locate(t + self.config.phase_offsets[slot.index()])?;
        let state = self.interpolate(position)?;
        Ok(SlotSample {
            slot,
            position,
            state,
        })
    }

    /// Sample all four slots.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn snapshot(&self, t: f64) -> CubesResult<Snapshot> {
        let [s0, s1, s2, s3] = Slot::ALL;
        Ok(Snapshot {
            t,
            slots: [
                self.sample_slot(s0, t)?,
                self.sample_slot(s1, t)?,
                self.sample_slot(s2, t)?,
                self.sample_slot(s3, t)?,
            ],
        })
    }

    /// The broadcast tuple at `t`.
    pub fn sample(&self, t: f64) -> CubesResult<SlicedCubesState> {
        Ok(self.snapshot(t)?.state())
    }

    /// Transit steps the cube origin has advanced for a sample.
    pub fn origin_shift(&self, sample: &SlotSample) -> i64 {
        Lattice::origin_shift(sample.position.cycle, self.config.wrap)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
