use crate::{
    foundation::error::{CubesResult, SlicedCubesError},
    stage::table::SEGMENT_COUNT,
};

/// Where a clock value falls in the stage cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SegmentPos {
    /// Completed cycles.
    pub cycle: u64,
    /// Transition index, `0` is stage 1 to stage 2.
    pub segment: usize,
    /// Progress through the transition, in `[0, 1)`.
    pub fraction: f64,
}

/// Maps a clock value onto equal-length stage transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeMapping {
    segment_duration: f64,
}

impl TimeMapping {
    /// Build a mapping; the duration must be finite and > 0.
    pub fn new(segment_duration: f64) -> CubesResult<Self> {
        if !segment_duration.is_finite() || segment_duration <= 0.0 {
            return Err(SlicedCubesError::invalid_config(format!(
                "segment duration must be finite and > 0 (got {segment_duration})"
            )));
        }
        Ok(Self { segment_duration })
    }

    /// Length of one transition.
    pub fn segment_duration(&self) -> f64 {
        self.segment_duration
    }

    /// Length of the full six-transition cycle.
    pub fn cycle_duration(&self) -> f64 {
        self.segment_duration * SEGMENT_COUNT as f64
    }

    /// Clock value at the start of `segment` in `cycle`.
    pub fn segment_start(&self, cycle: u64, segment: usize) -> f64 {
        let index = cycle as f64 * SEGMENT_COUNT as f64 + segment as f64;
        index * self.segment_duration
    }

    /// Reject clock values outside `[0, inf)`.
    pub fn check_clock(t: f64) -> CubesResult<()> {
        if !t.is_finite() || t < 0.0 {
            return Err(SlicedCubesError::invalid_config(format!(
                "clock value must be finite and >= 0 (got {t})"
            )));
        }
        Ok(())
    }

    /// Locate `t` in the cycle.
    ///
    /// An exact multiple of the segment duration starts the next segment at fraction 0.
    pub fn locate(&self, t: f64) -> CubesResult<SegmentPos> {
        Self::check_clock(t)?;
        // -0.0 would otherwise leak into the fraction's sign bit.
        let t = if t == 0.0 { 0.0 } else { t };
        let d = self.segment_duration;

        let rem = t % d;
        let mut index = ((t - rem) / d).round();
        let mut fraction = rem / d;
        if fraction >= 1.0 {
            index += 1.0;
            fraction = 0.0;
        }
        if index >= u64::MAX as f64 {
            return Err(SlicedCubesError::invalid_config(format!(
                "clock value {t} is too large for segment duration {d}"
            )));
        }

        let index = index as u64;
        let segments = SEGMENT_COUNT as u64;
        Ok(SegmentPos {
            cycle: index / segments,
            segment: (index % segments) as usize,
            fraction,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/time.rs"]
mod tests;
