use crate::{foundation::math::Fnv1a64, state::sliced::SlicedCubesState};

/// 128-bit digest of a state tuple, used to confirm displays render the same values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StateFingerprint {
    /// First FNV-1a stream.
    pub hi: u64,
    /// Second FNV-1a stream, differently seeded.
    pub lo: u64,
}

/// Fingerprint over the exact IEEE-754 bits of every field, in payload order.
pub fn fingerprint_state(state: &SlicedCubesState) -> StateFingerprint {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, state.slots().len() as u64);
    for slot in state.slots() {
        for v in [slot.co, slot.cn, slot.ac, slot.an, slot.bc, slot.bn] {
            a.write_f64(v);
            b.write_f64(v);
        }
        write_u8_pair(&mut a, &mut b, 0xff);
    }

    StateFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

#[cfg(test)]
#[path = "../../tests/unit/broadcast/fingerprint.rs"]
mod tests;
