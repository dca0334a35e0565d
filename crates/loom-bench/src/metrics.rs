//! Metrics collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Running min / max / mean of step wall times. Holds no per-step storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepTimeStats {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl StepTimeStats {
    pub fn record(&mut self, seconds: f64) {
        if self.count == 0 {
            self.min = seconds;
            self.max = seconds;
        } else {
            self.min = self.min.min(seconds);
            self.max = self.max.max(seconds);
        }
        self.count += 1;
        self.sum += seconds;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean step time, 0 when nothing was recorded.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub scenario: String,
    /// Compute backend name.
    pub backend: String,
    pub particle_count: usize,
    pub spring_count: usize,
    pub steps: u64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    pub final_kinetic_energy: f64,
    pub final_elastic_energy: f64,
    /// Largest particle distance from its rest position.
    pub max_displacement: f32,
    /// Sphere contacts after the last step.
    pub contact_count: u32,
}

impl RunMetrics {
    pub fn to_csv_header() -> String {
        "scenario,backend,particles,springs,steps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,final_elastic,max_displacement,contacts".to_string()
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6e},{:.6},{}",
            self.scenario,
            self.backend,
            self.particle_count,
            self.spring_count,
            self.steps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.final_elastic_energy,
            self.max_displacement,
            self.contact_count,
        )
    }

    /// Header plus one row per run.
    pub fn to_csv(metrics: &[RunMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
