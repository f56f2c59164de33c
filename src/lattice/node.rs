use nalgebra::{UnitQuaternion, Vector3};

/// A point of the infinite display checkerboard.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Node {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Node {
    /// The lattice origin `(0, 0)`, an even node.
    pub const ORIGIN: Node = Node { x: 0, y: 0 };

    /// Build a node from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Checkerboard color of this node. Stable for negative coordinates.
    pub fn parity(self) -> Parity {
        if (self.x.wrapping_add(self.y)).rem_euclid(2) == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Node displaced by `(dx, dy)`.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Node `steps` lattice steps along `axis` (negative steps go against it).
    pub fn step(self, axis: TransitAxis, steps: i64) -> Self {
        let (dx, dy) = axis.delta();
        self.offset(dx.saturating_mul(steps), dy.saturating_mul(steps))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Even nodes host cubes at cycle zero; odd nodes are their transit destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    /// `x + y` is even.
    Even,
    /// `x + y` is odd.
    Odd,
}

impl Parity {
    /// The other color.
    pub fn flip(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }

    /// Parity of an integer count (`0` is even).
    pub fn of_count(n: u64) -> Self {
        if n % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

/// Direction pieces travel from a host node to its destination node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitAxis {
    /// Towards increasing `x`.
    #[default]
    PosX,
    /// Towards decreasing `x`.
    NegX,
    /// Towards increasing `y`.
    PosY,
    /// Towards decreasing `y`.
    NegY,
}

impl TransitAxis {
    /// Lattice displacement of one step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::PosX => (1, 0),
            Self::NegX => (-1, 0),
            Self::PosY => (0, 1),
            Self::NegY => (0, -1),
        }
    }

    /// World-space unit vector of one step (the display plane is `z = 0`).
    pub fn unit(self) -> Vector3<f64> {
        let (dx, dy) = self.delta();
        Vector3::new(dx as f64, dy as f64, 0.0)
    }

    /// Rotation taking the piece-local frame (transit along `+x`, `+z` out of the display
    /// plane) to world space.
    pub fn basis(self) -> UnitQuaternion<f64> {
        let yaw = match self {
            Self::PosX => 0.0,
            Self::PosY => std::f64::consts::FRAC_PI_2,
            Self::NegX => std::f64::consts::PI,
            Self::NegY => -std::f64::consts::FRAC_PI_2,
        };
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lattice/node.rs"]
mod tests;
