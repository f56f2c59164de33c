use crate::{
    animation::engine::Snapshot,
    broadcast::fingerprint::{StateFingerprint, fingerprint_state},
    state::sliced::{SLICED_CUBES_STATE_NAME, SLOT_COUNT, SlicedCubesState},
};

/// Envelope pushed to every display on the `sliced_cubes` channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateUpdate {
    /// Channel name, always [`SLICED_CUBES_STATE_NAME`] for updates built here.
    pub channel: String,
    /// Driver sequence number, starting at 0.
    pub seq: u64,
    /// Driver clock value the state was sampled at.
    pub t: f64,
    /// Completed cycles per slot, so displays can place cube origins without the table.
    pub cycles: [u64; SLOT_COUNT],
    /// The piece-state tuple.
    pub state: SlicedCubesState,
    /// Digest of `state`.
    pub fingerprint: StateFingerprint,
}

impl StateUpdate {
    /// Wrap an engine snapshot.
    pub fn from_snapshot(seq: u64, snapshot: &Snapshot) -> Self {
        let state = snapshot.state();
        Self {
            channel: SLICED_CUBES_STATE_NAME.to_string(),
            seq,
            t: snapshot.t,
            cycles: snapshot.cycles(),
            fingerprint: fingerprint_state(&state),
            state,
        }
    }

    /// Whether the carried fingerprint matches the carried state.
    pub fn is_intact(&self) -> bool {
        fingerprint_state(&self.state) == self.fingerprint
    }
}

#[cfg(test)]
#[path = "../../tests/unit/broadcast/update.rs"]
mod tests;
