//! The six-scalar state of one piece set (a corner and its two wedges).

use std::ops::RangeInclusive;

/// Position of one piece set along its named transitions.
///
/// Serialized as `{co, cn, ac, an, bc, bn}`; every field is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PieceSetState {
    /// Corner orientation: 0 cube pointing out, 1 octahedron pointing in.
    pub co: f64,
    /// Corner node position: 0 at the host node, 3 at the destination node.
    pub cn: f64,
    /// Wedge A attachment: 0 node side, 2 corner side, switches owner at 1.
    pub ac: f64,
    /// Wedge A node selector, exactly 0 (host) or 1 (destination).
    pub an: f64,
    /// Wedge B attachment.
    pub bc: f64,
    /// Wedge B node selector.
    pub bn: f64,
}

impl PieceSetState {
    /// Build a state from its fields in payload order.
    pub const fn new(co: f64, cn: f64, ac: f64, an: f64, bc: f64, bn: f64) -> Self {
        Self {
            co,
            cn,
            ac,
            an,
            bc,
            bn,
        }
    }

    /// Read one field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Co => self.co,
            Field::Cn => self.cn,
            Field::Ac => self.ac,
            Field::An => self.an,
            Field::Bc => self.bc,
            Field::Bn => self.bn,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::Co => self.co = value,
            Field::Cn => self.cn = value,
            Field::Ac => self.ac = value,
            Field::An => self.an = value,
            Field::Bc => self.bc = value,
            Field::Bn => self.bn = value,
        }
    }

    /// Wedge A's node frame.
    pub fn selector_a(&self) -> NodeSelector {
        NodeSelector::from_value(self.an)
    }

    /// Wedge B's node frame.
    pub fn selector_b(&self) -> NodeSelector {
        NodeSelector::from_value(self.bn)
    }

    /// Check every field against its documented range.
    pub fn check_ranges(&self) -> Result<(), String> {
        for field in Field::ALL {
            let v = self.get(field);
            if !v.is_finite() {
                return Err(format!("{} must be finite (got {v})", field.name()));
            }
            if field.is_selector() {
                if v != 0.0 && v != 1.0 {
                    return Err(format!("{} must be exactly 0 or 1 (got {v})", field.name()));
                }
            } else if !field.range().contains(&v) {
                let r = field.range();
                return Err(format!(
                    "{} must lie in [{}, {}] (got {v})",
                    field.name(),
                    r.start(),
                    r.end()
                ));
            }
        }
        Ok(())
    }
}

/// Names of the six scalar fields, in payload order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Corner orientation.
    Co,
    /// Corner node position.
    Cn,
    /// Wedge A attachment.
    Ac,
    /// Wedge A node selector.
    An,
    /// Wedge B attachment.
    Bc,
    /// Wedge B node selector.
    Bn,
}

impl Field {
    /// All fields in payload order.
    pub const ALL: [Field; 6] = [
        Field::Co,
        Field::Cn,
        Field::Ac,
        Field::An,
        Field::Bc,
        Field::Bn,
    ];

    /// Payload key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Co => "co",
            Self::Cn => "cn",
            Self::Ac => "ac",
            Self::An => "an",
            Self::Bc => "bc",
            Self::Bn => "bn",
        }
    }

    /// Closed range of legal values.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Co | Self::An | Self::Bn => 0.0..=1.0,
            Self::Cn => 0.0..=3.0,
            Self::Ac | Self::Bc => 0.0..=2.0,
        }
    }

    /// Discrete selector fields snap instead of blending.
    pub fn is_selector(self) -> bool {
        matches!(self, Self::An | Self::Bn)
    }
}

/// Which of the two nodes a wedge's node-side pose is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSelector {
    /// Selector value 0: the node the cube is centered on.
    Host,
    /// Selector value 1: the transit destination.
    Destination,
}

impl NodeSelector {
    /// Anything other than exactly 0 reads as the destination; tables are validated binary.
    pub fn from_value(v: f64) -> Self {
        if v == 0.0 {
            Self::Host
        } else {
            Self::Destination
        }
    }

    /// Numeric field value.
    pub fn value(self) -> f64 {
        match self {
            Self::Host => 0.0,
            Self::Destination => 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/piece.rs"]
mod tests;
