//! CLI command implementations.

use loom_bench::{RunMetrics, Scenario, ScenarioKind, ScenarioRunner};
use loom_compute::{ComputeBackend, ParallelBackend, SerialBackend};
use loom_render::{HeadlessRenderer, JsonFrameExporter, RenderAdapter, RenderFrame, Renderer};
use loom_solver::{ClothConfig, ClothSolver};
use loom_telemetry::{EventBus, TracingSink};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn load_config(path: Option<&str>) -> Result<ClothConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ClothConfig::from_path(path)?),
        None => Ok(ClothConfig::default()),
    }
}

fn parse_scenarios(name: &str) -> Result<Vec<ScenarioKind>, Box<dyn std::error::Error>> {
    if name == "all" {
        return Ok(ScenarioKind::all().to_vec());
    }
    match ScenarioKind::from_name(name) {
        Some(kind) => Ok(vec![kind]),
        None => {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            Err(format!("Unknown scenario: '{name}'. Available: {}, all", available.join(", ")).into())
        }
    }
}

/// Run a simulation headlessly, optionally exporting frames.
pub fn simulate(
    config_path: Option<&str>,
    steps: u64,
    json_path: Option<&str>,
    every: u64,
    serial: bool,
) -> CmdResult {
    let config = load_config(config_path)?;
    if serial {
        run_simulation(ClothSolver::with_backend(config, SerialBackend)?, steps, json_path, every)
    } else {
        run_simulation(ClothSolver::new(config)?, steps, json_path, every)
    }
}

fn run_simulation<B: ComputeBackend>(
    mut solver: ClothSolver<B>,
    steps: u64,
    json_path: Option<&str>,
    every: u64,
) -> CmdResult {
    println!("Loom Simulation");
    println!("───────────────");
    let spec = solver.grid().spec();
    println!(
        "Grid:      {}x{} ({} particles, {} springs)",
        spec.columns,
        spec.rows,
        solver.grid().particle_count(),
        solver.grid().topology.spring_count()
    );
    println!("Backend:   {}", solver.backend().name());
    println!("Steps:     {steps} (dt = {})", solver.config().dt);
    println!();

    let mut renderer: Box<dyn Renderer> = match json_path {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };
    renderer.init(&solver.grid().strips, solver.grid().particle_count())?;

    let every = every.max(1);
    let mut wall_time = 0.0;
    let mut last = None;
    for _ in 0..steps {
        let result = solver.advance();
        wall_time += result.wall_time;
        if result.step % every == 0 {
            renderer.submit_frame(&RenderFrame::from_source(result.step, &solver.vertex_source()))?;
        }
        last = Some(result);
    }
    renderer.finalize()?;

    println!("  Wall time:     {:.3}s", wall_time);
    println!("  Sim time:      {:.3}s", solver.sim_time());
    println!("  Kinetic E:     {:.6e}", solver.kinetic_energy());
    println!("  Elastic E:     {:.6e}", solver.elastic_energy());
    if let Some(result) = last {
        println!("  Contacts:      {}", result.contacts.contact_count);
    }
    if let Some(path) = json_path {
        println!();
        println!("{} frames written to: {path}", renderer.frame_count());
    }
    Ok(())
}

/// Run scenario presets.
pub fn benchmark(
    scenario_name: &str,
    steps: Option<u64>,
    output_path: Option<&str>,
    telemetry: bool,
    serial: bool,
) -> CmdResult {
    println!("Loom Benchmark Suite");
    println!("════════════════════");
    println!();

    let kinds = parse_scenarios(scenario_name)?;

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    bus.set_enabled(telemetry);
    let runner = ScenarioRunner::with_emitter(bus.emitter());

    let mut all_metrics = Vec::new();
    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(steps) = steps {
            scenario = scenario.with_steps(steps);
        }
        println!(
            "Running: {} ({} particles, {} steps)",
            kind.name(),
            scenario.config.grid.particle_count(),
            scenario.steps
        );

        let result = if serial {
            runner.run(&scenario, SerialBackend)
        } else {
            runner.run(&scenario, ParallelBackend::new())
        };
        let metrics = result.map_err(|e| format!("Benchmark failed: {e}"))?;
        bus.flush();

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Contacts:      {}", metrics.contact_count);
        println!();

        all_metrics.push(metrics);
    }
    bus.finish();

    let csv = RunMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }
    Ok(())
}

/// Validate a config file.
pub fn validate(path: &str) -> CmdResult {
    println!("Loom Validator");
    println!("──────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("Unsupported file format: {path}. Use a .toml config.").into());
    }
    let config = ClothConfig::from_path(path)?;
    println!("Config is valid.");
    println!("  Grid:          {}x{}", config.grid.columns, config.grid.rows);
    println!("  Sphere:        {}", if config.sphere.is_some() { "yes" } else { "no" });
    println!("  Pins:          {}", config.pins.len());
    println!("  Stability:     {:.3} (k·dt²/m)", config.stability_ratio());
    Ok(())
}

/// Print the default config.
pub fn default_config() -> CmdResult {
    print!("{}", ClothConfig::default().to_toml_string()?);
    Ok(())
}

/// Launch the interactive viewer.
pub fn view(config_path: Option<&str>, scenario_name: Option<&str>) -> CmdResult {
    let (config, title) = match (config_path, scenario_name) {
        (Some(_), Some(_)) => return Err("Pass either --config or --scenario, not both".into()),
        (_, Some(name)) => {
            let kind = ScenarioKind::from_name(name)
                .ok_or_else(|| format!("Unknown scenario: '{name}'"))?;
            (Scenario::from_kind(kind).config, kind.name().to_string())
        }
        (path, None) => (load_config(path)?, path.unwrap_or("default").to_string()),
    };
    loom_viewer::launch_viewer(config, &title).map_err(|e| format!("Viewer error: {e}"))?;
    Ok(())
}
