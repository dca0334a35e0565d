//! Particle state and the three-buffer role rotation.
//!
//! Three physical buffers each hold the full particle array. Roles are
//! assigned by a cursor `k`:
//!
//! ```text
//! Current          = buffers[k]
//! Previous         = buffers[(k + 2) % 3]
//! PreviousPrevious = buffers[(k + 1) % 3]   <- next write target
//! ```
//!
//! A step reads `Current` and overwrites `PreviousPrevious`; `rotate()`
//! then advances `k` so the freshly written buffer becomes `Current`, the
//! old `Current` becomes `Previous`, and the old `Previous` becomes
//! `PreviousPrevious`. No particle data is ever copied between buffers.

use loom_math::Vec3;
use loom_types::GridCoord;

/// One cloth vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Lattice coordinate.
    pub grid: GridCoord,
    /// `1 / mass`, or `0` for a pinned particle.
    pub inv_mass: f32,
}

impl Particle {
    /// A particle at `position` with zero velocity.
    pub fn at_rest(position: Vec3, grid: GridCoord, inv_mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            grid,
            inv_mass,
        }
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.inv_mass == 0.0
    }
}

/// Role a physical buffer plays in the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Latest committed state; the renderable buffer and the step input.
    Current,
    /// State one step older than `Current`.
    Previous,
    /// State two steps older; overwritten by the next step.
    PreviousPrevious,
}

/// Three homogeneous particle buffers with rotating roles.
///
/// Borrows handed out by [`buffer_for`](Self::buffer_for) and
/// [`split_for_step`](Self::split_for_step) end before
/// [`rotate`](Self::rotate) can be called, so no role handle survives a
/// rotation.
#[derive(Debug, Clone)]
pub struct StateBufferSet {
    buffers: [Vec<Particle>; 3],
    cursor: usize,
    rotations: u64,
    generation: u64,
}

impl StateBufferSet {
    /// All three buffers start as copies of `initial`.
    pub fn new(initial: Vec<Particle>) -> Self {
        Self {
            buffers: [initial.clone(), initial.clone(), initial],
            cursor: 0,
            rotations: 0,
            generation: 0,
        }
    }

    /// Overwrites all three buffers with `initial` and puts `Current` back
    /// on buffer 0. The rotation count restarts; the generation does not.
    pub fn reload(&mut self, initial: &[Particle]) {
        for buffer in &mut self.buffers {
            buffer.clear();
            buffer.extend_from_slice(initial);
        }
        self.cursor = 0;
        self.rotations = 0;
        self.generation += 1;
    }

    /// Physical buffer index currently holding `role`.
    #[inline]
    pub fn physical_index(&self, role: Role) -> usize {
        match role {
            Role::Current => self.cursor,
            Role::Previous => (self.cursor + 2) % 3,
            Role::PreviousPrevious => (self.cursor + 1) % 3,
        }
    }

    #[inline]
    pub fn buffer_for(&self, role: Role) -> &[Particle] {
        &self.buffers[self.physical_index(role)]
    }

    #[inline]
    pub fn current(&self) -> &[Particle] {
        self.buffer_for(Role::Current)
    }

    /// Advances roles by one: `k = (k + 1) % 3`.
    pub fn rotate(&mut self) {
        self.cursor = (self.cursor + 1) % 3;
        self.rotations += 1;
        self.generation += 1;
    }

    /// Number of rotations since construction or the last
    /// [`reload`](Self::reload).
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Counter bumped by every rotation and every reload. Never repeats
    /// for the lifetime of the set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The step input (`Current`) and the write target
    /// (`PreviousPrevious`), borrowed disjointly.
    pub fn split_for_step(&mut self) -> (&[Particle], &mut [Particle]) {
        let [b0, b1, b2] = &mut self.buffers;
        match self.cursor {
            0 => (b0.as_slice(), b1.as_mut_slice()),
            1 => (b1.as_slice(), b2.as_mut_slice()),
            _ => (b2.as_slice(), b0.as_mut_slice()),
        }
    }

    /// Applies `f` to every physical buffer. Used for edits that must hold
    /// in every role, such as pinning.
    pub fn for_each_buffer_mut(&mut self, mut f: impl FnMut(&mut [Particle])) {
        for buffer in &mut self.buffers {
            f(buffer);
        }
    }

    pub fn particle_count(&self) -> usize {
        self.buffers[0].len()
    }
}
