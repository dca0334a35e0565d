//! Scenario presets: a cloth configuration plus a step count.
//!
//! 1. **Flat rest**: Unpinned sheet, no gravity; must not move
//! 2. **Hanging sheet**: Top row pinned, hangs under gravity
//! 3. **Sphere drape**: Default 100×100 sheet falling onto the sphere
//! 4. **Corner hang**: Two top corners pinned

use serde::{Deserialize, Serialize};

use loom_solver::ClothConfig;
use loom_types::GridCoord;

/// Which preset to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    FlatRest,
    HangingSheet,
    SphereDrape,
    CornerHang,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FlatRest,
            ScenarioKind::HangingSheet,
            ScenarioKind::SphereDrape,
            ScenarioKind::CornerHang,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FlatRest => "flat_rest",
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::CornerHang => "corner_hang",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub config: ClothConfig,
    /// Number of fixed steps to run.
    pub steps: u64,
}

impl Scenario {
    /// A 10×10 sheet with gravity off. Any motion is drift.
    pub fn flat_rest() -> Self {
        Self {
            kind: ScenarioKind::FlatRest,
            config: ClothConfig::flat(10, 10, 1.0).without_gravity(),
            steps: 50,
        }
    }

    /// A 20×20 sheet, 0.5 apart, hanging from its top row.
    pub fn hanging_sheet() -> Self {
        let pins = (0..20).map(|i| GridCoord::new(i, 0)).collect();
        Self {
            kind: ScenarioKind::HangingSheet,
            config: ClothConfig::flat(20, 20, 0.5).with_pins(pins),
            steps: 200,
        }
    }

    /// Default configuration: 100×100 sheet above a radius-20 sphere.
    pub fn sphere_drape() -> Self {
        Self {
            kind: ScenarioKind::SphereDrape,
            config: ClothConfig::default(),
            steps: 300,
        }
    }

    /// A 20×20 sheet pinned at its two top corners.
    pub fn corner_hang() -> Self {
        Self {
            kind: ScenarioKind::CornerHang,
            config: ClothConfig::flat(20, 20, 0.5)
                .with_pins(vec![GridCoord::new(0, 0), GridCoord::new(19, 0)]),
            steps: 200,
        }
    }

    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::FlatRest => Self::flat_rest(),
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
            ScenarioKind::SphereDrape => Self::sphere_drape(),
            ScenarioKind::CornerHang => Self::corner_hang(),
        }
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }
}
