use crate::foundation::error::{CubesResult, SlicedCubesError};

/// The single authoritative animation clock.
///
/// Only moves forward. Freezing it halts the animation without unwinding anything, because
/// every tick is derived from the clock value alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
    t: f64,
    frozen: bool,
}

impl Clock {
    /// Start the clock at `start` seconds.
    pub fn new(start: f64) -> CubesResult<Self> {
        if !start.is_finite() || start < 0.0 {
            return Err(SlicedCubesError::invalid_config(format!(
                "clock start must be finite and >= 0 (got {start})"
            )));
        }
        Ok(Self {
            t: start,
            frozen: false,
        })
    }

    /// Current clock value.
    pub fn now(&self) -> f64 {
        self.t
    }

    /// Advance by `dt` seconds and return the new value. A frozen clock does not move.
    pub fn advance(&mut self, dt: f64) -> CubesResult<f64> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SlicedCubesError::invalid_config(format!(
                "clock step must be finite and >= 0 (got {dt})"
            )));
        }
        if !self.frozen {
            let next = self.t + dt;
            if !next.is_finite() {
                return Err(SlicedCubesError::invalid_config("clock overflowed"));
            }
            self.t = next;
        }
        Ok(self.t)
    }

    /// Stop advancing.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Continue advancing from the frozen value.
    pub fn resume(&mut self) {
        self.frozen = false;
    }

    /// Whether the clock is frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/clock.rs"]
mod tests;
