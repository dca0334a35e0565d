//! Triangle-strip draw sequence for the cloth lattice.
//!
//! Row pair `j` is drawn as one strip of `2 * columns` indices alternating
//! between row `j + 1` and row `j`:
//!
//! ```text
//! (j+1)*Nx+0, j*Nx+0, (j+1)*Nx+1, j*Nx+1, ...
//! ```

/// Precomputed strip indices for a `columns × rows` lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripIndices {
    columns: usize,
    rows: usize,
    indices: Vec<u32>,
}

impl StripIndices {
    pub fn build(columns: usize, rows: usize) -> Self {
        let strip_count = rows.saturating_sub(1);
        let mut indices = Vec::with_capacity(strip_count * columns * 2);
        for j in 0..strip_count {
            for i in 0..columns {
                indices.push(((j + 1) * columns + i) as u32);
                indices.push((j * columns + i) as u32);
            }
        }
        Self {
            columns,
            rows,
            indices,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of strips (one per row pair).
    #[inline]
    pub fn strip_count(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Indices drawn per strip.
    #[inline]
    pub fn indices_per_strip(&self) -> usize {
        self.columns * 2
    }

    /// The indices of strip `j`.
    pub fn strip(&self, j: usize) -> &[u32] {
        let len = self.indices_per_strip();
        &self.indices[j * len..(j + 1) * len]
    }

    /// All strips back to back.
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Expands the strips into an indexed triangle list.
    ///
    /// Triangles are wound so their face normals point `+Y` at rest.
    pub fn to_triangle_list(&self) -> Vec<u32> {
        let per_strip = self.indices_per_strip().saturating_sub(2);
        let mut triangles = Vec::with_capacity(self.strip_count() * per_strip * 3);
        for j in 0..self.strip_count() {
            let s = self.strip(j);
            for k in 0..per_strip {
                if k % 2 == 0 {
                    triangles.extend_from_slice(&[s[k + 1], s[k], s[k + 2]]);
                } else {
                    triangles.extend_from_slice(&[s[k], s[k + 1], s[k + 2]]);
                }
            }
        }
        triangles
    }
}
