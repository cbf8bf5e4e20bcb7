use crate::emission::{EmissionRecord, XRayListener};
use std::fmt;

/// Listener that accumulates emission statistics across steps.
///
/// Each published batch contributes one entry of raw counts and summed
/// statistical weight; summary statistics over the per-step weights are
/// recomputed as batches arrive. Forwarded lifecycle notifications are
/// recorded so a report can be bracketed by run markers.
#[derive(Debug, Clone, Default)]
pub struct EmissionTally {
    pub name: Option<String>,
    /// Accepted record count per published step
    pub step_counts: Vec<u32>,
    /// Summed statistical weight per published step
    pub step_weights: Vec<f64>,
    /// Mean summed weight per step
    pub mean_weight: f64,
    /// Standard deviation of the per-step summed weight
    pub std_dev: f64,
    /// Relative error (coefficient of variation)
    pub rel_error: f64,
    /// Weight-averaged photon energy in eV
    pub mean_photon_energy: f64,
    /// Lifecycle event ids seen, in order
    pub lifecycle_ids: Vec<i32>,
    energy_weight_sum: f64,
    weight_sum: f64,
}

impl EmissionTally {
    pub fn new() -> Self {
        EmissionTally::default()
    }

    pub fn with_name(name: &str) -> Self {
        EmissionTally {
            name: Some(name.to_string()),
            ..EmissionTally::default()
        }
    }

    /// Total accepted records across all steps.
    pub fn total_records(&self) -> u64 {
        self.step_counts.iter().map(|&c| c as u64).sum()
    }

    /// Total statistical weight across all steps (expected photon count).
    pub fn total_weight(&self) -> f64 {
        self.weight_sum
    }

    pub fn steps_observed(&self) -> usize {
        self.step_counts.len()
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| String::from("Unnamed Tally"))
    }

    fn update_statistics(&mut self) {
        let n = self.step_weights.len() as f64;
        if n == 0.0 {
            self.mean_weight = 0.0;
            self.std_dev = 0.0;
            self.rel_error = 0.0;
            return;
        }
        self.mean_weight = self.step_weights.iter().sum::<f64>() / n;
        let variance = self
            .step_weights
            .iter()
            .map(|w| (w - self.mean_weight).powi(2))
            .sum::<f64>()
            / (n - 1.0).max(1.0);
        self.std_dev = variance.sqrt();
        self.rel_error = if self.mean_weight > 0.0 {
            self.std_dev / self.mean_weight
        } else {
            0.0
        };
        self.mean_photon_energy = if self.weight_sum > 0.0 {
            self.energy_weight_sum / self.weight_sum
        } else {
            0.0
        };
    }
}

impl XRayListener for EmissionTally {
    fn x_ray_batch(&mut self, records: &[EmissionRecord]) {
        let mut batch_weight = 0.0;
        for record in records {
            batch_weight += record.weight;
            self.energy_weight_sum += record.weight * record.energy;
        }
        self.step_counts.push(records.len() as u32);
        self.step_weights.push(batch_weight);
        self.weight_sum += batch_weight;
        self.update_statistics();
    }

    fn lifecycle(&mut self, id: i32) {
        self.lifecycle_ids.push(id);
    }
}

impl fmt::Display for EmissionTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Emission tally: {}", self.display_name())?;
        writeln!(f, "  Steps observed: {}", self.steps_observed())?;
        writeln!(f, "  Accepted records: {}", self.total_records())?;
        writeln!(f, "  Total weight: {:.6e} photons", self.total_weight())?;
        writeln!(
            f,
            "  Mean weight per step: {:.6e} (rel err {:.4})",
            self.mean_weight, self.rel_error
        )?;
        write!(
            f,
            "  Mean photon energy: {:.1} eV",
            self.mean_photon_energy
        )
    }
}
