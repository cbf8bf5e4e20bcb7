use crate::material::Material;
use crate::utilities::distance;

/// Immutable snapshot of one electron transport step.
///
/// The transport driver fills this in at a step boundary; the sampler reads
/// it exactly once per event so position and energy stay mutually consistent
/// even while the live particle advances. Energies are electron kinetic
/// energies in eV, positions in meters, `direction` a unit vector.
#[derive(Debug, Clone)]
pub struct ElectronStep {
    pub prev_position: [f64; 3],
    pub position: [f64; 3],
    pub prev_energy: f64,
    pub energy: f64,
    pub direction: [f64; 3],
}

impl ElectronStep {
    /// Create a step snapshot. Panics on non-finite coordinates or energies:
    /// a malformed snapshot from the driver would silently corrupt physical
    /// results, so it is treated as a programming error.
    pub fn new(
        prev_position: [f64; 3],
        position: [f64; 3],
        prev_energy: f64,
        energy: f64,
        direction: [f64; 3],
    ) -> Self {
        let finite = prev_position.iter().all(|v| v.is_finite())
            && position.iter().all(|v| v.is_finite())
            && direction.iter().all(|v| v.is_finite())
            && prev_energy.is_finite()
            && energy.is_finite();
        if !finite {
            panic!(
                "Non-finite electron step: prev_position={:?} position={:?} prev_energy={} energy={} direction={:?}",
                prev_position, position, prev_energy, energy, direction
            );
        }
        ElectronStep {
            prev_position,
            position,
            prev_energy,
            energy,
            direction,
        }
    }

    /// Path length of the step in meters, derived from the position delta.
    pub fn step_length(&self) -> f64 {
        distance(self.prev_position, self.position)
    }
}

/// One transport notification delivered to the emission sampler.
///
/// Scatter and non-scatter steps both carry the step snapshot and a view of
/// the material the electron is currently traversing; both run the emission
/// sampling algorithm. Any other lifecycle notification (run start, run end,
/// trajectory boundaries) is forwarded to listeners untouched, identified by
/// the driver's event id.
#[derive(Debug, Clone)]
pub enum TransportEvent<'a> {
    Scatter(&'a ElectronStep, &'a Material),
    NonScatter(&'a ElectronStep, &'a Material),
    Lifecycle(i32),
}
