//! Cloth lattice generation.
//!
//! Particles are laid out row-major (`index = j * columns + i`) on the
//! XZ plane, column `i` along +X and row `j` along +Z.

use serde::{Deserialize, Serialize};

use loom_math::{Vec2, Vec3};
use loom_types::constants::{DEFAULT_GRID_EXTENT, DEFAULT_GRID_POINTS, MIN_GRID_POINTS};
use loom_types::{GridCoord, LoomError, LoomResult, ParticleId};

use crate::strips::StripIndices;
use crate::topology::SpringTopology;

/// Dimensions, extent, and placement of the cloth lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Particle count along X (`Nx`).
    pub columns: usize,
    /// Particle count along Z (`Ny`).
    pub rows: usize,
    /// Physical extent along X.
    pub width: f32,
    /// Physical extent along Z.
    pub height: f32,
    /// World-space translation applied to every rest position.
    pub origin: [f32; 3],
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_POINTS,
            rows: DEFAULT_GRID_POINTS,
            width: DEFAULT_GRID_EXTENT,
            height: DEFAULT_GRID_EXTENT,
            origin: [50.0, 100.0, 0.0],
        }
    }
}

impl GridSpec {
    /// A lattice at the origin whose neighbors are `spacing` apart.
    pub fn with_spacing(columns: usize, rows: usize, spacing: f32) -> Self {
        Self {
            columns,
            rows,
            width: spacing * columns.saturating_sub(1) as f32,
            height: spacing * rows.saturating_sub(1) as f32,
            origin: [0.0; 3],
        }
    }

    /// Total number of particles. Only meaningful once
    /// [`validate`](Self::validate) has passed.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Distance between axis-adjacent particles as `(dx, dz)`.
    pub fn spacing(&self) -> (f32, f32) {
        (
            self.width / (self.columns.max(2) - 1) as f32,
            self.height / (self.rows.max(2) - 1) as f32,
        )
    }

    /// Rejects lattices smaller than 2×2 and non-positive extents.
    pub fn validate(&self) -> LoomResult<()> {
        if self.columns < MIN_GRID_POINTS || self.rows < MIN_GRID_POINTS {
            return Err(LoomError::InvalidGrid(format!(
                "grid must be at least {MIN_GRID_POINTS}x{MIN_GRID_POINTS}, got {}x{}",
                self.columns, self.rows
            )));
        }
        let fits = self
            .columns
            .checked_mul(self.rows)
            .is_some_and(|n| u32::try_from(n).is_ok());
        if !fits {
            return Err(LoomError::InvalidGrid(format!(
                "{}x{} particles do not fit 32-bit indices",
                self.columns, self.rows
            )));
        }
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(LoomError::InvalidGrid(format!(
                "extent must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(LoomError::InvalidGrid(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }
        Ok(())
    }
}

/// A generated cloth lattice.
///
/// Built once at setup and immutable afterwards; the solver copies rest
/// positions into its state buffers and reads the topology every step.
#[derive(Debug, Clone)]
pub struct ClothGrid {
    spec: GridSpec,
    /// Undeformed world-space positions.
    pub rest_positions: Vec<Vec3>,
    /// Texture coordinates in `[0, 1]²`.
    pub uvs: Vec<Vec2>,
    /// Rest normals (all `+Y`).
    pub normals: Vec<Vec3>,
    /// Springs and adjacency.
    pub topology: SpringTopology,
    /// Draw index sequence.
    pub strips: StripIndices,
}

impl ClothGrid {
    /// Generates the lattice described by `spec`.
    ///
    /// # Example
    /// ```
    /// use loom_mesh::{ClothGrid, GridSpec};
    /// let grid = ClothGrid::build(&GridSpec::with_spacing(4, 4, 1.0)).unwrap();
    /// assert_eq!(grid.particle_count(), 16);
    /// assert_eq!(grid.strips.strip_count(), 3);
    /// ```
    pub fn build(spec: &GridSpec) -> LoomResult<Self> {
        spec.validate()?;

        let (dx, dz) = spec.spacing();
        let origin = Vec3::from_array(spec.origin);
        let n = spec.particle_count();
        let u_scale = 1.0 / (spec.columns - 1) as f32;
        let v_scale = 1.0 / (spec.rows - 1) as f32;

        let mut rest_positions = Vec::with_capacity(n);
        let mut uvs = Vec::with_capacity(n);
        for j in 0..spec.rows {
            for i in 0..spec.columns {
                let x = i as f32;
                let z = j as f32;
                rest_positions.push(origin + Vec3::new(x * dx, 0.0, z * dz));
                uvs.push(Vec2::new(x * u_scale, z * v_scale));
            }
        }

        // Rest lengths are measured on the translated positions so they
        // match the state buffers bit for bit.
        let topology = SpringTopology::build(spec.columns, spec.rows, &rest_positions);
        let strips = StripIndices::build(spec.columns, spec.rows);

        Ok(Self {
            spec: spec.clone(),
            rest_positions,
            uvs,
            normals: vec![Vec3::Y; n],
            topology,
            strips,
        })
    }

    /// The `GridSpec` this grid was built from.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.rest_positions.len()
    }

    /// Buffer index of a lattice coordinate.
    pub fn index_of(&self, coord: GridCoord) -> Option<ParticleId> {
        let (i, j) = (coord.i as usize, coord.j as usize);
        if i >= self.spec.columns || j >= self.spec.rows {
            return None;
        }
        Some(ParticleId((j * self.spec.columns + i) as u32))
    }

    /// Lattice coordinate of a buffer index.
    pub fn coord_of(&self, id: ParticleId) -> Option<GridCoord> {
        let idx = id.index();
        if idx >= self.particle_count() {
            return None;
        }
        Some(GridCoord::new(
            (idx % self.spec.columns) as u32,
            (idx / self.spec.columns) as u32,
        ))
    }

    /// Coordinates of every particle in the top row (`j == 0`).
    pub fn top_row(&self) -> Vec<GridCoord> {
        (0..self.spec.columns as u32).map(|i| GridCoord::new(i, 0)).collect()
    }

    /// The two corners of the top row.
    pub fn top_corners(&self) -> Vec<GridCoord> {
        vec![
            GridCoord::new(0, 0),
            GridCoord::new(self.spec.columns as u32 - 1, 0),
        ]
    }
}
