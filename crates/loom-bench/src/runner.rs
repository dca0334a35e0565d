//! Scenario runner: steps a scenario to completion and collects metrics.

use std::time::Instant;

use loom_compute::ComputeBackend;
use loom_solver::ClothSolver;
use loom_telemetry::{EventEmitter, EventKind};
use loom_types::LoomResult;

use crate::metrics::{RunMetrics, StepTimeStats};
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs scenarios headlessly.
///
/// When given an [`EventEmitter`], emits `StepBegin` / `StepEnd` / `Contact`
/// for every step and one `Energy` event at the end. The owner of the
/// bus flushes it.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    events: Option<EventEmitter>,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self { events: None }
    }

    pub fn with_emitter(events: EventEmitter) -> Self {
        Self {
            events: Some(events),
        }
    }

    fn emit(&self, step: u64, kind: EventKind) {
        if let Some(events) = &self.events {
            events.emit(step, kind);
        }
    }

    /// Builds a solver for `scenario` on `backend` and runs every step.
    pub fn run<B: ComputeBackend>(&self, scenario: &Scenario, backend: B) -> LoomResult<RunMetrics> {
        let mut solver = ClothSolver::with_backend(scenario.config.clone(), backend)?;
        tracing::info!(
            scenario = scenario.kind.name(),
            steps = scenario.steps,
            backend = solver.backend().name(),
            "running scenario"
        );

        let mut step_times = StepTimeStats::default();
        let mut contact_count = 0;
        let total_start = Instant::now();

        for _ in 0..scenario.steps {
            self.emit(
                solver.step_count() + 1,
                EventKind::StepBegin {
                    sim_time: solver.sim_time(),
                },
            );
            let result = solver.step();
            step_times.record(result.wall_time);
            contact_count = result.contacts.contact_count;
            self.emit(result.step, EventKind::StepEnd { wall_time: result.wall_time });
            self.emit(result.step, EventKind::Contact { contact_count });
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        let final_kinetic_energy = solver.kinetic_energy();
        let final_elastic_energy = solver.elastic_energy();
        self.emit(
            solver.step_count(),
            EventKind::Energy {
                kinetic: final_kinetic_energy,
                elastic: final_elastic_energy,
            },
        );

        let max_displacement = solver
            .current()
            .iter()
            .zip(&solver.grid().rest_positions)
            .map(|(p, rest)| (p.position - *rest).length())
            .fold(0.0f32, f32::max);


        Ok(RunMetrics {
            scenario: scenario.kind.name().to_string(),
            backend: solver.backend().name().to_string(),
            particle_count: solver.grid().particle_count(),
            spring_count: solver.grid().topology.spring_count(),
            steps: scenario.steps,
            total_wall_time,
            avg_step_time: step_times.mean(),
            min_step_time: step_times.min(),
            max_step_time: step_times.max(),
            final_kinetic_energy,
            final_elastic_energy,
            max_displacement,
            contact_count,
        })
    }

    /// Runs every preset once.
    pub fn run_all<B: ComputeBackend + Clone>(&self, backend: B) -> LoomResult<Vec<RunMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| self.run(&Scenario::from_kind(kind), backend.clone()))
            .collect()
    }
}
