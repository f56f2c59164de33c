use std::io::Write;

use anyhow::Context as _;

use crate::{broadcast::update::StateUpdate, foundation::error::CubesResult};

/// Consumer of state updates in driver order.
///
/// Ordering contract: `push` is called with strictly increasing `seq` and non-decreasing `t`.
pub trait StateSink: Send {
    /// Called once before any update is pushed.
    fn begin(&mut self, channel: &str) -> CubesResult<()>;
    /// Push one update.
    fn push(&mut self, update: &StateUpdate) -> CubesResult<()>;
    /// Called once after the last update.
    fn end(&mut self) -> CubesResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    channel: Option<String>,
    updates: Vec<StateUpdate>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel captured in `begin`, if any.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Captured updates in push order.
    pub fn updates(&self) -> &[StateUpdate] {
        &self.updates
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl StateSink for InMemorySink {
    fn begin(&mut self, channel: &str) -> CubesResult<()> {
        self.channel = Some(channel.to_string());
        self.updates.clear();
        self.ended = false;
        Ok(())
    }

    fn push(&mut self, update: &StateUpdate) -> CubesResult<()> {
        self.updates.push(update.clone());
        Ok(())
    }

    fn end(&mut self) -> CubesResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> StateSink for JsonLinesSink<W> {
    fn begin(&mut self, _channel: &str) -> CubesResult<()> {
        Ok(())
    }

    fn push(&mut self, update: &StateUpdate) -> CubesResult<()> {
        serde_json::to_writer(&mut self.out, update)?;
        self.out
            .write_all(b"\n")
            .with_context(|| format!("write state update {}", update.seq))?;
        Ok(())
    }

    fn end(&mut self) -> CubesResult<()> {
        self.out.flush().context("flush state stream")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/broadcast/sink.rs"]
mod tests;
