//! Simulation configuration.
//!
//! Everything the solver needs at setup time: lattice, spring coefficients
//! per class, gravity, particle mass, fixed timestep, and the optional
//! sphere collider. Loadable from TOML; omitted fields take defaults,
//! except `sphere` and `pins`, which are absent unless given.

use std::path::Path;

use serde::{Deserialize, Serialize};

use loom_contact::SphereCollider;
use loom_math::Vec3;
use loom_mesh::{GridSpec, SpringKind};
use loom_types::constants::{
    DEFAULT_DT, DEFAULT_FLEXION_STIFFNESS, DEFAULT_GRAVITY, DEFAULT_GRAVITY_DAMPING,
    DEFAULT_PARTICLE_MASS, DEFAULT_SPHERE_RADIUS, DEFAULT_SPRING_DAMPING, DEFAULT_STIFFNESS,
};
use loom_types::{GridCoord, LoomError, LoomResult};

/// Stiffness and damping of one spring class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringCoefficients {
    /// Linear spring constant `k`.
    pub stiffness: f32,
    /// Damping `c` along the spring axis.
    pub damping: f32,
}

impl SpringCoefficients {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }
}

/// Coefficients for all three spring classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub structural: SpringCoefficients,
    pub shear: SpringCoefficients,
    pub flexion: SpringCoefficients,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            structural: SpringCoefficients::new(DEFAULT_STIFFNESS, DEFAULT_SPRING_DAMPING),
            shear: SpringCoefficients::new(DEFAULT_STIFFNESS, DEFAULT_SPRING_DAMPING),
            flexion: SpringCoefficients::new(DEFAULT_FLEXION_STIFFNESS, DEFAULT_SPRING_DAMPING),
        }
    }
}

impl SpringConfig {
    #[inline]
    pub fn coefficients(&self, kind: SpringKind) -> SpringCoefficients {
        match kind {
            SpringKind::Structural => self.structural,
            SpringKind::Shear => self.shear,
            SpringKind::Flexion => self.flexion,
        }
    }

    pub fn max_stiffness(&self) -> f32 {
        SpringKind::ALL
            .iter()
            .map(|&k| self.coefficients(k).stiffness)
            .fold(0.0, f32::max)
    }
}

/// Sphere collider placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: [f32; 3],
    pub radius: f32,
    /// Kinetic friction in `[0, 1]`.
    #[serde(default)]
    pub friction: f32,
}

impl SphereConfig {
    pub fn new(center: [f32; 3], radius: f32) -> Self {
        Self {
            center,
            radius,
            friction: 0.0,
        }
    }

    pub fn collider(&self) -> SphereCollider {
        SphereCollider::new(Vec3::from_array(self.center), self.radius).with_friction(self.friction)
    }

    pub fn validate(&self) -> LoomResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(LoomError::InvalidConfig(format!(
                "sphere radius must be positive, got {}",
                self.radius
            )));
        }
        if self.center.iter().any(|c| !c.is_finite()) {
            return Err(LoomError::InvalidConfig(format!(
                "sphere center must be finite, got {:?}",
                self.center
            )));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(LoomError::InvalidConfig(format!(
                "sphere friction must be in [0, 1], got {}",
                self.friction
            )));
        }
        Ok(())
    }
}

/// Full cloth simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Lattice dimensions, extent, and placement.
    pub grid: GridSpec,

    /// Spring coefficients per class.
    pub springs: SpringConfig,

    /// Gravitational acceleration vector.
    pub gravity: [f32; 3],

    /// Velocity-proportional force added with gravity
    /// (`gravity_damping * velocity`). Negative values act as drag.
    pub gravity_damping: f32,

    /// Mass of every unpinned particle.
    pub particle_mass: f32,

    /// Fixed timestep. Never derived from wall-clock time.
    pub dt: f32,

    /// Optional sphere collider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sphere: Option<SphereConfig>,

    /// Grid coordinates of pinned (immovable) particles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pins: Vec<GridCoord>,
}

impl Default for ClothConfig {
    fn default() -> Self {
        let grid = GridSpec::default();
        // Sphere sits under the middle of the sheet.
        let center = [
            grid.origin[0] + grid.width * 0.5,
            30.0,
            grid.origin[2] + grid.height * 0.5,
        ];
        Self {
            grid,
            springs: SpringConfig::default(),
            gravity: [0.0, DEFAULT_GRAVITY, 0.0],
            gravity_damping: DEFAULT_GRAVITY_DAMPING,
            particle_mass: DEFAULT_PARTICLE_MASS,
            dt: DEFAULT_DT,
            sphere: Some(SphereConfig::new(center, DEFAULT_SPHERE_RADIUS)),
            pins: Vec::new(),
        }
    }
}

impl ClothConfig {
    /// A flat sheet at the origin with neighbors `spacing` apart,
    /// default physics, no sphere, and no pins.
    pub fn flat(columns: usize, rows: usize, spacing: f32) -> Self {
        Self {
            grid: GridSpec::with_spacing(columns, rows, spacing),
            sphere: None,
            ..Default::default()
        }
    }

    pub fn with_sphere(mut self, center: [f32; 3], radius: f32) -> Self {
        self.sphere = Some(SphereConfig::new(center, radius));
        self
    }

    pub fn without_sphere(mut self) -> Self {
        self.sphere = None;
        self
    }

    pub fn with_gravity(mut self, gravity: [f32; 3]) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn without_gravity(self) -> Self {
        self.with_gravity([0.0; 3])
    }

    pub fn with_pins(mut self, pins: Vec<GridCoord>) -> Self {
        self.pins = pins;
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// `max(stiffness) * dt² / mass`.
    ///
    /// Semi-implicit Euler diverges once this grows past roughly 1; the
    /// solver does not guard against it at runtime.
    pub fn stability_ratio(&self) -> f32 {
        self.springs.max_stiffness() * self.dt * self.dt / self.particle_mass
    }

    /// Rejects configurations the solver cannot start from.
    pub fn validate(&self) -> LoomResult<()> {
        self.grid
            .validate()
            .map_err(|e| LoomError::InvalidConfig(e.to_string()))?;

        if !(self.particle_mass.is_finite() && self.particle_mass > 0.0) {
            return Err(LoomError::InvalidConfig(format!(
                "particle mass must be positive, got {}",
                self.particle_mass
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(LoomError::InvalidConfig(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) || !self.gravity_damping.is_finite() {
            return Err(LoomError::InvalidConfig(
                "gravity and gravity damping must be finite".into(),
            ));
        }
        for kind in SpringKind::ALL {
            let c = self.springs.coefficients(kind);
            if !(c.stiffness.is_finite() && c.stiffness >= 0.0) || !c.damping.is_finite() {
                return Err(LoomError::InvalidConfig(format!(
                    "{} spring coefficients invalid: {:?}",
                    kind.name(),
                    c
                )));
            }
        }
        if let Some(sphere) = &self.sphere {
            sphere.validate()?;
        }
        for pin in &self.pins {
            if pin.i as usize >= self.grid.columns || pin.j as usize >= self.grid.rows {
                return Err(LoomError::InvalidConfig(format!(
                    "pin ({}, {}) outside {}x{} grid",
                    pin.i, pin.j, self.grid.columns, self.grid.rows
                )));
            }
        }
        Ok(())
    }

    /// Parses a TOML document. Does not validate.
    pub fn from_toml_str(text: &str) -> LoomResult<Self> {
        toml::from_str(text).map_err(|e| LoomError::Serialization(e.to_string()))
    }

    /// Reads and validates a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> LoomResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> LoomResult<String> {
        toml::to_string_pretty(self).map_err(|e| LoomError::Serialization(e.to_string()))
    }
}
