//! Loom CLI: simulation, benchmarking, validation, and the viewer.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "loom")]
#[command(version, about = "Loom: triple-buffered mass-spring cloth simulation")]
struct Cli {
    /// Run kernels on the calling thread instead of the rayon pool.
    #[arg(long, global = true)]
    serial: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation headlessly.
    Simulate {
        /// Path to a cloth config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of fixed steps to run.
        #[arg(short, long, default_value_t = 300)]
        steps: u64,

        /// Write captured frames to this JSON file.
        #[arg(long)]
        json: Option<String>,

        /// Capture every n-th step when exporting frames.
        #[arg(long, default_value_t = 1)]
        every: u64,
    },

    /// Run scenario presets and report metrics.
    Benchmark {
        /// Scenario to run (flat_rest, hanging_sheet, sphere_drape, corner_hang, all).
        #[arg(short = 'n', long, default_value = "all")]
        scenario: String,

        /// Override the preset step count.
        #[arg(long)]
        steps: Option<u64>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,

        /// Log per-step telemetry events.
        #[arg(long)]
        telemetry: bool,
    },

    /// Validate a cloth config file.
    Validate {
        /// Path to the TOML config.
        path: String,
    },

    /// Print the default configuration as TOML.
    DefaultConfig,

    /// Open the interactive viewer.
    View {
        /// Path to a cloth config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Scenario preset to view instead of a config file.
        #[arg(short = 'n', long)]
        scenario: Option<String>,
    },
}

fn main() {
    // Library events reach env_logger through tracing's `log` feature.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            steps,
            json,
            every,
        } => commands::simulate(config.as_deref(), steps, json.as_deref(), every, cli.serial),
        Commands::Benchmark {
            scenario,
            steps,
            output,
            telemetry,
        } => commands::benchmark(&scenario, steps, output.as_deref(), telemetry, cli.serial),
        Commands::Validate { path } => commands::validate(&path),
        Commands::DefaultConfig => commands::default_config(),
        Commands::View { config, scenario } => commands::view(config.as_deref(), scenario.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
