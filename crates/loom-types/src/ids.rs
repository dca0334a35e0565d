//! Strongly-typed identifiers for simulation entities.
//!
//! Newtype wrappers keep flat buffer indices apart from
//! lattice coordinates.

use serde::{Deserialize, Serialize};

/// Index into the particle buffers (row-major over the grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

/// Lattice coordinate of a particle: column `i`, row `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column (X axis).
    pub i: u32,
    /// Row (Z axis).
    pub j: u32,
}

impl GridCoord {
    #[inline]
    pub const fn new(i: u32, j: u32) -> Self {
        Self { i, j }
    }

    /// Offsets this coordinate, returning `None` if it leaves a
    /// `columns × rows` lattice.
    #[inline]
    pub fn offset(self, di: i32, dj: i32, columns: u32, rows: u32) -> Option<Self> {
        let i = self.i as i64 + di as i64;
        let j = self.j as i64 + dj as i64;
        if i < 0 || j < 0 || i >= columns as i64 || j >= rows as i64 {
            return None;
        }
        Some(Self::new(i as u32, j as u32))
    }
}
