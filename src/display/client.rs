use std::collections::BTreeMap;

use nalgebra::Vector3;

use crate::{
    broadcast::update::StateUpdate,
    foundation::error::{CubesResult, SlicedCubesError},
    geometry::{
        params::GeometryParams,
        reconstruct::{PieceSetPose, reconstruct},
    },
    lattice::{
        node::Node,
        region::{DisplayRegion, Lattice},
    },
    stage::table::WrapMode,
    state::sliced::{SLICED_CUBES_STATE_NAME, Slot},
};

/// Everything one display draws for a single host node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HostView {
    /// Node the cube is centered on.
    pub host: Node,
    /// World vector from the display's origin node to `host`.
    pub offset: Vector3<f64>,
    /// Poses of the slots hosted here, in slot order.
    pub pieces: Vec<PieceSetPose>,
}

/// Outcome of [`DisplayClient::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum Applied {
    /// A newer update was rendered.
    Rendered(Vec<HostView>),
    /// Same clock value as the last update; re-rendered identically.
    Duplicate(Vec<HostView>),
    /// Older than the last applied update; dropped.
    Stale {
        /// Clock value of the last applied update.
        last_t: f64,
    },
}

/// One display's consumer of the `sliced_cubes` channel.
#[derive(Clone, Debug)]
pub struct DisplayClient {
    region: DisplayRegion,
    lattice: Lattice,
    geometry: GeometryParams,
    wrap: WrapMode,
    last_t: Option<f64>,
}

impl DisplayClient {
    /// Build a client for `region`; lattice and geometry are validated up front.
    pub fn new(
        region: DisplayRegion,
        lattice: Lattice,
        geometry: GeometryParams,
        wrap: WrapMode,
    ) -> CubesResult<Self> {
        lattice.validate()?;
        geometry.validate()?;
        Ok(Self {
            region,
            lattice,
            geometry,
            wrap,
            last_t: None,
        })
    }

    /// Nodes owned by this display.
    pub fn region(&self) -> &DisplayRegion {
        &self.region
    }

    /// Clock value of the last applied update.
    pub fn last_t(&self) -> Option<f64> {
        self.last_t
    }

    /// Apply an update in driver order.
    ///
    /// Misrouted or corrupted updates are errors. Older updates are dropped and duplicates
    /// re-render identically.
    pub fn apply(&mut self, update: &StateUpdate) -> CubesResult<Applied> {
        if update.channel != SLICED_CUBES_STATE_NAME {
            return Err(SlicedCubesError::invalid_config(format!(
                "update on channel '{}' routed to the '{SLICED_CUBES_STATE_NAME}' consumer",
                update.channel
            )));
        }
        if !update.is_intact() {
            return Err(SlicedCubesError::serde(format!(
                "update {} does not match its fingerprint",
                update.seq
            )));
        }
        update.state.validate()?;

        match self.last_t {
            Some(last_t) if update.t < last_t => {
                tracing::debug!(seq = update.seq, t = update.t, last_t, "dropping stale update");
                Ok(Applied::Stale { last_t })
            }
            Some(last_t) if update.t == last_t => Ok(Applied::Duplicate(self.views(update))),
            _ => {
                self.last_t = Some(update.t);
                Ok(Applied::Rendered(self.views(update)))
            }
        }
    }

    /// Host views for an update, without touching the applied-clock bookkeeping.
    pub fn views(&self, update: &StateUpdate) -> Vec<HostView> {
        let mut by_host: BTreeMap<Node, Vec<PieceSetPose>> = BTreeMap::new();
        for slot in Slot::ALL {
            let cycle = update.cycles[slot.index()];
            let state = update.state.slot(slot);
            for host in self.region.visible_hosts(&self.lattice, cycle, self.wrap) {
                let frame = self.lattice.frame_for_host(host);
                by_host
                    .entry(host)
                    .or_default()
                    .push(reconstruct(state, slot, &frame, &self.geometry));
            }
        }
        by_host
            .into_iter()
            .map(|(host, pieces)| HostView {
                host,
                offset: self.region.relative_offset(&self.lattice, host),
                pieces,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/client.rs"]
mod tests;
