//! Spring connectivity implied by grid adjacency.
//!
//! Each spring is instantiated once from its lower-index endpoint using
//! the forward offsets of its class, then listed in the adjacency of both
//! endpoints. The solver evaluates every spring once per endpoint, so no
//! force is ever accumulated into another particle's slot.

use serde::{Deserialize, Serialize};

use loom_math::Vec3;
use loom_types::{GridCoord, ParticleId};

/// Spring class, distinguished by grid offset pattern and coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringKind {
    /// Axis-adjacent neighbors; enforces the base spacing.
    Structural,
    /// Diagonal neighbors; resists in-plane shear.
    Shear,
    /// Neighbors two cells apart; resists out-of-plane folding.
    Flexion,
}

impl SpringKind {
    pub const ALL: [SpringKind; 3] = [SpringKind::Structural, SpringKind::Shear, SpringKind::Flexion];

    /// Grid offsets `(di, dj)` that instantiate springs of this class:
    /// right/down, down-right/down-left, two-right/two-down.
    pub fn forward_offsets(self) -> &'static [(i32, i32)] {
        match self {
            SpringKind::Structural => &[(1, 0), (0, 1)],
            SpringKind::Shear => &[(1, 1), (-1, 1)],
            SpringKind::Flexion => &[(2, 0), (0, 2)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpringKind::Structural => "structural",
            SpringKind::Shear => "shear",
            SpringKind::Flexion => "flexion",
        }
    }
}

/// A unique spring between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub a: ParticleId,
    pub b: ParticleId,
    pub kind: SpringKind,
    /// Undeformed distance between `a` and `b` at build time.
    pub rest_length: f32,
}

/// One incident spring as seen from a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// The other endpoint.
    pub particle: ParticleId,
    pub kind: SpringKind,
    pub rest_length: f32,
}

/// Springs of a cloth lattice with per-particle adjacency.
///
/// Adjacency is stored CSR-style: the neighbors of particle `p` are
/// `neighbors[offsets[p]..offsets[p + 1]]`.
#[derive(Debug, Clone)]
pub struct SpringTopology {
    springs: Vec<Spring>,
    offsets: Vec<u32>,
    neighbors: Vec<Neighbor>,
}

impl SpringTopology {
    /// Builds springs for a `columns × rows` lattice with the given rest
    /// positions (row-major). Offsets that leave the lattice are skipped,
    /// so border particles have fewer springs.
    pub fn build(columns: usize, rows: usize, rest_positions: &[Vec3]) -> Self {
        let n = columns * rows;
        debug_assert_eq!(rest_positions.len(), n);

        let mut springs = Vec::new();
        for j in 0..rows {
            for i in 0..columns {
                let coord = GridCoord::new(i as u32, j as u32);
                let a = j * columns + i;
                for kind in SpringKind::ALL {
                    for &(di, dj) in kind.forward_offsets() {
                        let Some(other) = coord.offset(di, dj, columns as u32, rows as u32) else {
                            continue;
                        };
                        let b = other.j as usize * columns + other.i as usize;
                        springs.push(Spring {
                            a: ParticleId(a as u32),
                            b: ParticleId(b as u32),
                            kind,
                            rest_length: (rest_positions[b] - rest_positions[a]).length(),
                        });
                    }
                }
            }
        }

        let mut incident: Vec<Vec<Neighbor>> = vec![Vec::new(); n];
        for s in &springs {
            incident[s.a.index()].push(Neighbor {
                particle: s.b,
                kind: s.kind,
                rest_length: s.rest_length,
            });
            incident[s.b.index()].push(Neighbor {
                particle: s.a,
                kind: s.kind,
                rest_length: s.rest_length,
            });
        }

        let mut offsets = Vec::with_capacity(n + 1);
        let mut neighbors = Vec::with_capacity(springs.len() * 2);
        offsets.push(0);
        for list in incident {
            neighbors.extend(list);
            offsets.push(neighbors.len() as u32);
        }

        Self {
            springs,
            offsets,
            neighbors,
        }
    }

    /// Every spring incident to particle `p`.
    #[inline]
    pub fn neighbors(&self, p: usize) -> &[Neighbor] {
        let start = self.offsets[p] as usize;
        let end = self.offsets[p + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Number of springs incident to particle `p`.
    #[inline]
    pub fn degree(&self, p: usize) -> usize {
        (self.offsets[p + 1] - self.offsets[p]) as usize
    }

    /// Unique springs, each listed once.
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Number of springs of one class.
    pub fn count_of(&self, kind: SpringKind) -> usize {
        self.springs.iter().filter(|s| s.kind == kind).count()
    }

    pub fn particle_count(&self) -> usize {
        self.offsets.len() - 1
    }
}
