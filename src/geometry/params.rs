use nalgebra::{Unit, Vector3};

use crate::foundation::error::{CubesResult, SlicedCubesError};

/// Piece dimensions in slot-local space.
///
/// Slot-local space has `+x` along the transit axis and `+z` out of the display plane. The
/// values describe slot 0; the other slots are half turns of it about the cube axes. Units match
/// the lattice pitch (the default pitch of 2 makes neighboring cubes touch).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryParams {
    /// Distance from the node anchor to the resting corner centroid.
    pub corner_offset: f64,
    /// Twist about the corner axis at `co = 1`, in radians.
    pub twist_angle: f64,
    /// Wedge A's resting position inside the node-side tetrahedron.
    pub wedge_a_home: [f64; 3],
    /// Wedge B's resting position inside the node-side tetrahedron.
    pub wedge_b_home: [f64; 3],
    /// How far the wedge sockets sit behind the corner centroid.
    pub socket_inset: f64,
    /// Sideways spread of the two sockets across the corner's base.
    pub socket_spread: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            corner_offset: 0.5 * 3f64.sqrt(),
            twist_angle: std::f64::consts::FRAC_PI_3,
            wedge_a_home: [0.25, 0.5, 0.25],
            wedge_b_home: [0.25, 0.25, 0.5],
            socket_inset: 0.3,
            socket_spread: 0.2,
        }
    }
}

impl GeometryParams {
    /// Validate that every dimension is finite and non-degenerate.
    pub fn validate(&self) -> CubesResult<()> {
        let scalars = [
            ("corner_offset", self.corner_offset),
            ("twist_angle", self.twist_angle),
            ("socket_inset", self.socket_inset),
            ("socket_spread", self.socket_spread),
        ];
        for (name, v) in scalars {
            if !v.is_finite() {
                return Err(SlicedCubesError::geometry(format!(
                    "{name} must be finite (got {v})"
                )));
            }
        }
        if self.corner_offset <= 0.0 {
            return Err(SlicedCubesError::geometry("corner_offset must be > 0"));
        }
        for (name, v) in [
            ("socket_inset", self.socket_inset),
            ("socket_spread", self.socket_spread),
        ] {
            if v < 0.0 {
                return Err(SlicedCubesError::geometry(format!("{name} must be >= 0")));
            }
        }
        if self.twist_angle.abs() >= std::f64::consts::PI {
            return Err(SlicedCubesError::geometry(
                "twist_angle must be strictly between -pi and pi",
            ));
        }
        for (name, p) in [
            ("wedge_a_home", self.wedge_a_home),
            ("wedge_b_home", self.wedge_b_home),
        ] {
            if p.iter().any(|c| !c.is_finite()) {
                return Err(SlicedCubesError::geometry(format!(
                    "{name} must have finite coordinates"
                )));
            }
        }
        Ok(())
    }

    /// Slot-0 corner axis, from the node anchor through the cube vertex.
    pub fn corner_axis() -> Unit<Vector3<f64>> {
        Unit::new_normalize(Vector3::new(1.0, 1.0, 1.0))
    }

    /// Slot-local centroid of a corner resting on its node.
    pub fn corner_rest(&self) -> Vector3<f64> {
        Self::corner_axis().into_inner() * self.corner_offset
    }

    /// Socket of wedge A relative to the corner centroid, before the twist.
    pub fn socket_a(&self) -> Vector3<f64> {
        let across = Unit::new_normalize(Vector3::new(1.0, -1.0, 0.0));
        self.socket(across)
    }

    /// Socket of wedge B relative to the corner centroid, before the twist.
    pub fn socket_b(&self) -> Vector3<f64> {
        let across = Unit::new_normalize(Vector3::new(1.0, 0.0, -1.0));
        self.socket(across)
    }

    fn socket(&self, across: Unit<Vector3<f64>>) -> Vector3<f64> {
        let axis = Self::corner_axis().into_inner();
        -axis * self.socket_inset + across.into_inner() * self.socket_spread
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/params.rs"]
mod tests;
