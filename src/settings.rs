/// Configuration surface of the emission sampler.
///
/// Only two physics tunables exist: the softest photon energy worth keeping
/// and the number of weighted sub-samples drawn per step. The optional seed
/// makes a run reproducible; when absent the sampler seeds itself from the
/// system entropy source.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Photons at or below this energy (eV) are dropped
    pub min_photon_energy_ev: f64,
    /// Weighted sub-samples drawn per transport step
    pub samples_per_step: usize,
    /// Seed for the sampler's random source
    pub seed: Option<u64>,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            min_photon_energy_ev: 100.0,
            samples_per_step: 10,
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_photon_energy_ev > 0.0) {
            return Err(format!(
                "Minimum photon energy must be positive, got {}",
                self.min_photon_energy_ev
            ));
        }
        if self.samples_per_step == 0 {
            return Err(String::from("Samples per step must be positive"));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.min_photon_energy_ev, 100.0);
        assert_eq!(settings.samples_per_step, 10);
        assert_eq!(settings.seed, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_min_energy_rejected() {
        let mut settings = Settings::new();
        settings.min_photon_energy_ev = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_nan_min_energy_rejected() {
        let mut settings = Settings::new();
        settings.min_photon_energy_ev = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut settings = Settings::new();
        settings.samples_per_step = 0;
        assert!(settings.validate().is_err());
    }
}
