//! Stepping driver.

use std::time::Instant;

use loom_compute::{ComputeBackend, ParallelBackend};
use loom_contact::ContactReport;
use loom_mesh::ClothGrid;
use loom_types::constants::{CONTACT_TOLERANCE, STABILITY_WARN_RATIO};
use loom_types::{GridCoord, LoomError, LoomResult};

use crate::config::{ClothConfig, SphereConfig};
use crate::kernel::{step_particle, StepParams};
use crate::state::{Particle, Role, StateBufferSet};

/// Result of a solver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// 1-based index of the step just taken.
    pub step: u64,
    /// Simulated time after the step (`step * dt`).
    pub sim_time: f64,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
    /// Particles resting on the collider after the step.
    pub contacts: ContactReport,
}

/// Mass-spring cloth solver.
///
/// Owns the lattice, the three particle buffers, and a compute backend.
/// Each [`step`](Self::step) advances the simulation by exactly one fixed
/// `dt`.
///
/// ```text
/// let mut solver = ClothSolver::new(config)?;
/// loop {
///     solver.step();
///     render(solver.current());
/// }
/// ```
pub struct ClothSolver<B: ComputeBackend = ParallelBackend> {
    config: ClothConfig,
    grid: ClothGrid,
    buffers: StateBufferSet,
    params: StepParams,
    backend: B,
    step: u64,
}

impl ClothSolver<ParallelBackend> {
    /// Builds a solver on the rayon backend.
    pub fn new(config: ClothConfig) -> LoomResult<Self> {
        Self::with_backend(config, ParallelBackend::new())
    }
}

impl<B: ComputeBackend> ClothSolver<B> {
    /// Validates `config`, builds the lattice, and fills all three buffers
    /// with the rest state.
    pub fn with_backend(config: ClothConfig, backend: B) -> LoomResult<Self> {
        config.validate()?;
        let grid = ClothGrid::build(&config.grid)?;

        let ratio = config.stability_ratio();
        if ratio > STABILITY_WARN_RATIO {
            tracing::warn!(
                ratio,
                dt = config.dt,
                "stiffness * dt^2 / mass exceeds {STABILITY_WARN_RATIO}; integration may diverge"
            );
        }

        let buffers = StateBufferSet::new(rest_particles(&grid, &config));
        let params = StepParams::from_config(&config);

        tracing::info!(
            particles = grid.particle_count(),
            springs = grid.topology.spring_count(),
            backend = backend.name(),
            sphere = config.sphere.is_some(),
            pins = config.pins.len(),
            "cloth solver ready"
        );

        Ok(Self {
            config,
            grid,
            buffers,
            params,
            backend,
            step: 0,
        })
    }

    /// Advances the simulation by one `dt`.
    ///
    /// Every particle is computed from the `Current` buffer into the
    /// `PreviousPrevious` buffer; roles rotate only after the whole
    /// dispatch has returned.
    pub fn step(&mut self) -> StepResult {
        let start = Instant::now();

        let topology = &self.grid.topology;
        let params = &self.params;
        let (source, target) = self.buffers.split_for_step();
        self.backend.dispatch(target, |p, out| {
            *out = step_particle(p, source, topology, params);
        });
        self.buffers.rotate();
        self.step += 1;

        let contacts = self.contact_report();
        let result = StepResult {
            step: self.step,
            sim_time: self.sim_time(),
            wall_time: start.elapsed().as_secs_f64(),
            contacts,
        };
        tracing::debug!(
            step = result.step,
            wall_ms = result.wall_time * 1e3,
            contacts = contacts.contact_count,
            "step"
        );
        result
    }

    /// Runs `n` steps, returning the last result (`None` if `n == 0`).
    pub fn step_n(&mut self, n: u64) -> Option<StepResult> {
        let mut last = None;
        for _ in 0..n {
            last = Some(self.step());
        }
        last
    }

    /// The renderable particle state.
    pub fn current(&self) -> &[Particle] {
        self.buffers.current()
    }

    pub fn buffers(&self) -> &StateBufferSet {
        &self.buffers
    }

    pub fn grid(&self) -> &ClothGrid {
        &self.grid
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Steps taken since construction or the last [`reset`](Self::reset).
    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn sim_time(&self) -> f64 {
        self.step as f64 * self.config.dt as f64
    }

    pub fn sphere(&self) -> Option<&SphereConfig> {
        self.config.sphere.as_ref()
    }

    /// Replaces (or removes) the sphere collider. Takes effect from the
    /// next step.
    pub fn set_sphere(&mut self, sphere: Option<SphereConfig>) -> LoomResult<()> {
        if let Some(s) = &sphere {
            s.validate()?;
        }
        self.config.sphere = sphere;
        self.params.sphere = sphere.map(|s| s.collider());
        Ok(())
    }

    /// Fixes the particle at `coord` in place in every buffer.
    pub fn pin(&mut self, coord: GridCoord) -> LoomResult<()> {
        let idx = self.particle_index(coord)?;
        self.buffers.for_each_buffer_mut(|buffer| {
            buffer[idx].inv_mass = 0.0;
            buffer[idx].velocity = loom_math::Vec3::ZERO;
        });
        if !self.config.pins.contains(&coord) {
            self.config.pins.push(coord);
        }
        Ok(())
    }

    /// Releases a pinned particle. Unpinned particles are left alone.
    pub fn unpin(&mut self, coord: GridCoord) -> LoomResult<()> {
        let idx = self.particle_index(coord)?;
        let inv_mass = 1.0 / self.config.particle_mass;
        self.buffers.for_each_buffer_mut(|buffer| {
            buffer[idx].inv_mass = inv_mass;
        });
        self.config.pins.retain(|&p| p != coord);
        Ok(())
    }

    /// Restores every buffer to the rest state and the step counter to 0.
    /// Pins currently configured are kept.
    pub fn reset(&mut self) {
        let rest = rest_particles(&self.grid, &self.config);
        self.buffers.reload(&rest);
        self.step = 0;
        tracing::debug!("solver reset");
    }

    /// `Σ ½ m |v|²` over the current state.
    pub fn kinetic_energy(&self) -> f64 {
        let mass = self.config.particle_mass as f64;
        self.current()
            .iter()
            .filter(|p| !p.is_pinned())
            .map(|p| 0.5 * mass * p.velocity.length_squared() as f64)
            .sum()
    }

    /// `Σ ½ k (|d| - L0)²` over every spring in the current state.
    pub fn elastic_energy(&self) -> f64 {
        let current = self.current();
        self.grid
            .topology
            .springs()
            .iter()
            .map(|s| {
                let k = self.config.springs.coefficients(s.kind).stiffness as f64;
                let len = (current[s.b.index()].position - current[s.a.index()].position).length();
                let stretch = (len - s.rest_length) as f64;
                0.5 * k * stretch * stretch
            })
            .sum()
    }

    /// Largest per-particle displacement between `Previous` and `Current`.
    pub fn max_step_displacement(&self) -> f32 {
        let previous = self.buffers.buffer_for(Role::Previous);
        self.current()
            .iter()
            .zip(previous)
            .map(|(c, p)| (c.position - p.position).length())
            .fold(0.0, f32::max)
    }

    fn contact_report(&self) -> ContactReport {
        let Some(sphere) = self.params.sphere else {
            return ContactReport::default();
        };
        let contact_count = self.backend.count(self.buffers.current(), |p| {
            !p.is_pinned() && sphere.is_touching(p.position, CONTACT_TOLERANCE)
        });
        ContactReport {
            contact_count: contact_count as u32,
        }
    }

    fn particle_index(&self, coord: GridCoord) -> LoomResult<usize> {
        self.grid
            .index_of(coord)
            .map(|id| id.index())
            .ok_or_else(|| {
                LoomError::InvalidParticle(format!(
                    "({}, {}) outside {}x{} grid",
                    coord.i,
                    coord.j,
                    self.config.grid.columns,
                    self.config.grid.rows
                ))
            })
    }
}

fn rest_particles(grid: &ClothGrid, config: &ClothConfig) -> Vec<Particle> {
    let inv_mass = 1.0 / config.particle_mass;
    grid.rest_positions
        .iter()
        .enumerate()
        .map(|(idx, &position)| {
            let coord = grid.coord_of(loom_types::ParticleId(idx as u32)).unwrap_or_default();
            let pinned = config.pins.contains(&coord);
            Particle::at_rest(position, coord, if pinned { 0.0 } else { inv_mass })
        })
        .collect()
}
