use crate::element::Element;
use crate::utilities::interpolate_linear;
use serde::Deserialize;
use std::path::Path;

/// Lower bound in eV of the modelled photon spectrum.
///
/// Photons softer than this carry a negligible share of the emitted power and
/// would make the 1/W spectrum integral diverge, so the providers treat the
/// spectrum as zero below it. This is a property of the emission model, not
/// the sampler's acceptance threshold (which is configured separately and is
/// typically higher).
pub const PHOTON_CUTOFF_EV: f64 = 50.0;

/// Per-element continuum x-ray emission model.
///
/// Implementations are pure with respect to queries: both methods depend only
/// on their arguments and the identity of the provider (the element it was
/// built for). This is what lets the cache hand out one shared instance per
/// element for an entire run.
pub trait CrossSection {
    /// Total cross section in m² for emitting a continuum photon when an
    /// electron of the given kinetic energy (eV) interacts with one atom.
    fn sigma(&self, energy_ev: f64) -> f64;

    /// Photon energy in eV sampled from the emission spectrum at the given
    /// electron kinetic energy (eV), driven by a uniform draw `u` in [0, 1).
    fn randomized_energy(&self, kinetic_energy_ev: f64, u: f64) -> f64;
}

/// Kramers thin-target Bremsstrahlung model for a single element.
///
/// The differential emission probability is taken as dσ/dW ∝ Z²/(E·W) for
/// photon energies W between [`PHOTON_CUTOFF_EV`] and the electron kinetic
/// energy E. Integrating gives σ(E) = k·Z²·ln(E/c)/E, and inverting the CDF
/// gives the sampled photon energy W = c·(E/c)^u.
///
/// Construction precomputes σ on a log-spaced energy grid; queries only
/// interpolate. Building an instance is therefore much more expensive than
/// using one, which is why instances are cached per element.
#[derive(Debug, Clone)]
pub struct Bremsstrahlung {
    element: Element,
    /// Log-spaced electron kinetic energy grid in eV
    energy_grid: Vec<f64>,
    /// Total emission cross section σ(E) in m² on the grid
    sigma_grid: Vec<f64>,
}

/// Scale constant of the Kramers model in m²·eV per unit Z².
const KRAMERS_SCALE: f64 = 2.0e-28;

const GRID_POINTS: usize = 256;
const GRID_MIN_EV: f64 = 100.0;
const GRID_MAX_EV: f64 = 1.0e6;

impl Bremsstrahlung {
    pub fn new(element: Element) -> Self {
        let z2 = (element.atomic_number() as f64).powi(2);
        let log_min = GRID_MIN_EV.ln();
        let log_max = GRID_MAX_EV.ln();
        let mut energy_grid = Vec::with_capacity(GRID_POINTS);
        let mut sigma_grid = Vec::with_capacity(GRID_POINTS);
        for i in 0..GRID_POINTS {
            let t = i as f64 / (GRID_POINTS - 1) as f64;
            let energy = (log_min + t * (log_max - log_min)).exp();
            energy_grid.push(energy);
            sigma_grid.push(KRAMERS_SCALE * z2 * (energy / PHOTON_CUTOFF_EV).ln() / energy);
        }
        Bremsstrahlung {
            element,
            energy_grid,
            sigma_grid,
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }
}

impl CrossSection for Bremsstrahlung {
    fn sigma(&self, energy_ev: f64) -> f64 {
        if energy_ev <= PHOTON_CUTOFF_EV {
            return 0.0;
        }
        interpolate_linear(&self.energy_grid, &self.sigma_grid, energy_ev)
    }

    fn randomized_energy(&self, kinetic_energy_ev: f64, u: f64) -> f64 {
        if kinetic_energy_ev <= PHOTON_CUTOFF_EV {
            return 0.0;
        }
        // Inverse CDF of the 1/W spectrum on [cutoff, E]
        PHOTON_CUTOFF_EV * (kinetic_energy_ev / PHOTON_CUTOFF_EV).powf(u)
    }
}

/// Emission cross section read from a tabulated JSON data file.
///
/// The file carries ascending electron kinetic energies in eV and the matching
/// total emission cross sections in m². The sampled photon spectrum keeps the
/// 1/W shape between `photon_cutoff` and the electron energy; only the total
/// magnitude comes from the table.
///
/// ```json
/// {"energy": [1.0e3, 1.0e4, 1.0e5], "sigma": [1.1e-27, 4.0e-28, 6.5e-29]}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TabulatedCrossSection {
    /// Electron kinetic energy grid in eV, ascending
    pub energy: Vec<f64>,
    /// Total emission cross section in m² at each grid energy
    pub sigma: Vec<f64>,
    /// Photon spectrum lower bound in eV
    #[serde(default = "default_photon_cutoff")]
    pub photon_cutoff: f64,
}

fn default_photon_cutoff() -> f64 {
    PHOTON_CUTOFF_EV
}

impl TabulatedCrossSection {
    /// Read a tabulated cross section from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Parse a tabulated cross section from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let table: TabulatedCrossSection = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), String> {
        if self.energy.len() != self.sigma.len() {
            return Err(format!(
                "energy and sigma tables differ in length: {} vs {}",
                self.energy.len(),
                self.sigma.len()
            ));
        }
        if self.energy.is_empty() {
            return Err(String::from("cross section table is empty"));
        }
        if !self.energy.windows(2).all(|w| w[0] < w[1]) {
            return Err(String::from("energy grid must be strictly ascending"));
        }
        if self.photon_cutoff <= 0.0 {
            return Err(String::from("photon_cutoff must be positive"));
        }
        Ok(())
    }
}

impl CrossSection for TabulatedCrossSection {
    fn sigma(&self, energy_ev: f64) -> f64 {
        if energy_ev <= self.photon_cutoff {
            return 0.0;
        }
        interpolate_linear(&self.energy, &self.sigma, energy_ev)
    }

    fn randomized_energy(&self, kinetic_energy_ev: f64, u: f64) -> f64 {
        if kinetic_energy_ev <= self.photon_cutoff {
            return 0.0;
        }
        self.photon_cutoff * (kinetic_energy_ev / self.photon_cutoff).powf(u)
    }
}
