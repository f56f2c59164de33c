use std::collections::BTreeSet;

use nalgebra::{Point3, UnitQuaternion, Vector3};

use crate::{
    foundation::error::{CubesResult, SlicedCubesError},
    lattice::node::{Node, Parity, TransitAxis},
    stage::table::WrapMode,
    state::piece::NodeSelector,
};

/// World placement of the node checkerboard.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lattice {
    /// World distance between neighboring nodes.
    pub pitch: f64,
    /// Direction pieces travel from host to destination.
    pub transit_axis: TransitAxis,
}

impl Default for Lattice {
    fn default() -> Self {
        Self {
            pitch: 2.0,
            transit_axis: TransitAxis::PosX,
        }
    }
}

impl Lattice {
    /// Validate the placement parameters.
    pub fn validate(&self) -> CubesResult<()> {
        if !self.pitch.is_finite() || self.pitch <= 0.0 {
            return Err(SlicedCubesError::invalid_config(
                "lattice pitch must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Opposite-parity partner of `node` along the transit axis.
    ///
    /// Even nodes map one step along the axis, odd nodes one step against it, so applying the
    /// mapping twice returns the original node.
    pub fn transit_neighbor(&self, node: Node) -> Node {
        match node.parity() {
            Parity::Even => node.step(self.transit_axis, 1),
            Parity::Odd => node.step(self.transit_axis, -1),
        }
    }

    /// World-space anchor of `node`.
    pub fn world_position(&self, node: Node) -> Point3<f64> {
        Point3::new(node.x as f64 * self.pitch, node.y as f64 * self.pitch, 0.0)
    }

    /// How many lattice steps the cube origins have advanced after `cycle` full cycles.
    pub fn origin_shift(cycle: u64, wrap: WrapMode) -> i64 {
        match wrap {
            WrapMode::Carry => i64::try_from(cycle).unwrap_or(i64::MAX),
            WrapMode::Reset => 0,
        }
    }

    /// Parity of the nodes that host cubes during `cycle`.
    pub fn host_parity(cycle: u64, wrap: WrapMode) -> Parity {
        match wrap {
            WrapMode::Carry => Parity::of_count(cycle),
            WrapMode::Reset => Parity::Even,
        }
    }

    /// Host of the cube that started at the even node `start` once `cycle` cycles completed.
    pub fn host_node(&self, start: Node, cycle: u64, wrap: WrapMode) -> Node {
        start.step(self.transit_axis, Self::origin_shift(cycle, wrap))
    }

    /// Node frame for a cube hosted at `host`.
    ///
    /// The destination is always one step along the transit axis, whatever the host's parity.
    pub fn frame_for_host(&self, host: Node) -> NodeFrame {
        let destination = host.step(self.transit_axis, 1);
        NodeFrame {
            host,
            destination,
            host_origin: self.world_position(host),
            destination_origin: self.world_position(destination),
            basis: self.transit_axis.basis(),
        }
    }
}

/// The pair of node frames one cube's pieces move between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeFrame {
    /// Node the cube is centered on.
    pub host: Node,
    /// Node pieces transit to.
    pub destination: Node,
    /// World anchor of `host`.
    pub host_origin: Point3<f64>,
    /// World anchor of `destination`.
    pub destination_origin: Point3<f64>,
    /// Piece-local to world rotation.
    pub basis: UnitQuaternion<f64>,
}

impl NodeFrame {
    /// World anchor picked by a node selector field.
    pub fn origin(&self, selector: NodeSelector) -> Point3<f64> {
        match selector {
            NodeSelector::Host => self.host_origin,
            NodeSelector::Destination => self.destination_origin,
        }
    }

    /// World vector from host to destination.
    pub fn transit(&self) -> Vector3<f64> {
        self.destination_origin - self.host_origin
    }
}

/// Rectangular block of nodes owned by one display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayRegion {
    /// Lowest-coordinate node of the block.
    pub origin: Node,
    /// Nodes along `x`.
    pub cols: u32,
    /// Nodes along `y`.
    pub rows: u32,
}

impl DisplayRegion {
    /// Build a region; empty regions are rejected.
    pub fn new(origin: Node, cols: u32, rows: u32) -> CubesResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(SlicedCubesError::invalid_config(
                "display region must own at least one node",
            ));
        }
        Ok(Self { origin, cols, rows })
    }

    /// Region owning exactly `node`.
    pub fn single(node: Node) -> Self {
        Self {
            origin: node,
            cols: 1,
            rows: 1,
        }
    }

    /// Owned nodes, row by row.
    pub fn owned_nodes(&self) -> Vec<Node> {
        let mut out = Vec::with_capacity(self.cols as usize * self.rows as usize);
        for dy in 0..i64::from(self.rows) {
            for dx in 0..i64::from(self.cols) {
                out.push(self.origin.offset(dx, dy));
            }
        }
        out
    }

    /// Whether `node` belongs to this display.
    pub fn contains(&self, node: Node) -> bool {
        let dx = node.x.saturating_sub(self.origin.x);
        let dy = node.y.saturating_sub(self.origin.y);
        (0..i64::from(self.cols)).contains(&dx) && (0..i64::from(self.rows)).contains(&dy)
    }

    /// World vector from this region's origin node to `node`.
    pub fn relative_offset(&self, lattice: &Lattice, node: Node) -> Vector3<f64> {
        lattice.world_position(node) - lattice.world_position(self.origin)
    }

    /// Hosts whose pieces can appear on this display during `cycle`.
    ///
    /// That is every owned node of the host parity plus every upstream host whose destination
    /// is owned here, sorted and deduplicated.
    pub fn visible_hosts(&self, lattice: &Lattice, cycle: u64, wrap: WrapMode) -> Vec<Node> {
        let parity = Lattice::host_parity(cycle, wrap);
        let mut hosts = BTreeSet::new();
        for node in self.owned_nodes() {
            if node.parity() == parity {
                hosts.insert(node);
            }
            let upstream = node.step(lattice.transit_axis, -1);
            if upstream.parity() == parity {
                hosts.insert(upstream);
            }
        }
        hosts.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lattice/region.rs"]
mod tests;
