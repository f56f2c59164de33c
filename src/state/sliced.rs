use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::{
    foundation::error::{CubesResult, SlicedCubesError},
    state::piece::PieceSetState,
};

/// Number of piece sets per cube.
pub const SLOT_COUNT: usize = 4;

/// Channel name displays subscribe to for the piece-state tuple.
pub const SLICED_CUBES_STATE_NAME: &str = "sliced_cubes";

/// Channel name of the palette state, published by another collaborator.
pub const COLORS_STATE_NAME: &str = "colors";

/// One of the four rotated copies of the piece set.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    /// All slots in payload order.
    pub const ALL: [Slot; SLOT_COUNT] = [Slot(0), Slot(1), Slot(2), Slot(3)];

    /// Slot for `index`, rejecting anything past the last slot.
    pub fn new(index: usize) -> CubesResult<Self> {
        if index >= SLOT_COUNT {
            return Err(SlicedCubesError::invalid_config(format!(
                "slot index {index} out of range (0..{SLOT_COUNT})"
            )));
        }
        Ok(Self(index as u8))
    }

    /// Position in the payload.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Cube axis this slot is half-turned about; slot 0 is the untouched copy.
    ///
    /// The identity and the three axis half turns permute the cube's alternating vertices, so
    /// the four corners never share an edge.
    pub fn half_turn_axis(self) -> Option<Unit<Vector3<f64>>> {
        match self.0 {
            0 => None,
            1 => Some(Vector3::x_axis()),
            2 => Some(Vector3::y_axis()),
            _ => Some(Vector3::z_axis()),
        }
    }

    /// Cube-local rotation taking slot 0's pieces onto this slot's.
    pub fn rotation(self) -> UnitQuaternion<f64> {
        match self.half_turn_axis() {
            Some(axis) => UnitQuaternion::from_axis_angle(&axis, std::f64::consts::PI),
            None => UnitQuaternion::identity(),
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::new(usize::from(value)).map_err(|e| e.to_string())
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> u8 {
        slot.0
    }
}

/// Snapshot of all four piece sets at one clock value.
///
/// Serialized as a plain four-element array of piece-set records.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SlicedCubesState {
    slots: [PieceSetState; SLOT_COUNT],
}

impl SlicedCubesState {
    /// Wrap four slot states.
    pub fn new(slots: [PieceSetState; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Same state in every slot (perfect lockstep).
    pub fn uniform(state: PieceSetState) -> Self {
        Self {
            slots: [state; SLOT_COUNT],
        }
    }

    /// All slot states in payload order.
    pub fn slots(&self) -> &[PieceSetState; SLOT_COUNT] {
        &self.slots
    }

    /// State of one slot.
    pub fn slot(&self, slot: Slot) -> &PieceSetState {
        &self.slots[slot.index()]
    }

    /// Check every slot against the documented field ranges.
    pub fn validate(&self) -> CubesResult<()> {
        for (i, s) in self.slots.iter().enumerate() {
            s.check_ranges()
                .map_err(|e| SlicedCubesError::invalid_config(format!("slot {i}: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/sliced.rs"]
mod tests;
