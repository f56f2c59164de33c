use crate::{
    animation::engine::Engine,
    broadcast::{sink::StateSink, update::StateUpdate},
    driver::clock::Clock,
    foundation::error::{CubesResult, SlicedCubesError},
    state::sliced::SLICED_CUBES_STATE_NAME,
};

/// Summary of a [`Driver::run`] call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RunStats {
    /// Updates pushed.
    pub ticks: u64,
    /// Clock value of the first update.
    pub first_t: f64,
    /// Clock value of the last update.
    pub last_t: f64,
}

/// Owner of the clock; turns clock values into broadcast updates.
#[derive(Clone, Debug)]
pub struct Driver {
    engine: Engine,
    clock: Clock,
    seq: u64,
}

impl Driver {
    /// Drive `engine` from `clock`.
    pub fn new(engine: Engine, clock: Clock) -> Self {
        Self {
            engine,
            clock,
            seq: 0,
        }
    }

    /// Engine in use.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Mutable clock access for freezing and manual stepping.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Sequence number the next update will carry.
    pub fn next_seq(&self) -> u64 {
        self.seq
    }

    /// Build the update for the current clock value.
    ///
    /// The sequence number only advances when a complete, in-range tuple was produced.
    #[tracing::instrument(level = "debug", skip(self), fields(t = self.clock.now(), seq = self.seq))]
    pub fn tick(&mut self) -> CubesResult<StateUpdate> {
        let snapshot = self.engine.snapshot(self.clock.now())?;
        let update = StateUpdate::from_snapshot(self.seq, &snapshot);
        update.state.validate()?;
        tracing::debug!(hi = update.fingerprint.hi, "tick");
        self.seq += 1;
        Ok(update)
    }

    /// Push `ticks` updates to `sink`, advancing the clock by `dt` between them.
    ///
    /// Stops at the first error; nothing after it reaches the sink.
    pub fn run(&mut self, ticks: u64, dt: f64, sink: &mut dyn StateSink) -> CubesResult<RunStats> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SlicedCubesError::invalid_config(format!(
                "tick step must be finite and >= 0 (got {dt})"
            )));
        }
        tracing::info!(ticks, dt, start = self.clock.now(), "driver starting");

        sink.begin(SLICED_CUBES_STATE_NAME)?;
        let first_t = self.clock.now();
        let mut pushed = 0u64;
        for i in 0..ticks {
            if i > 0 {
                self.clock.advance(dt)?;
            }
            let update = self.tick()?;
            sink.push(&update)?;
            pushed += 1;
        }
        sink.end()?;

        let stats = RunStats {
            ticks: pushed,
            first_t,
            last_t: self.clock.now(),
        };
        tracing::info!(ticks = stats.ticks, last_t = stats.last_t, "driver stopped");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/pipeline.rs"]
mod tests;
