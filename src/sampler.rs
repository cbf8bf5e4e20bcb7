use crate::cache::CrossSectionCache;
use crate::emission::{EmissionBank, EmissionRecord, XRayListener};
use crate::event::{ElectronStep, TransportEvent};
use crate::material::Material;
use crate::settings::Settings;
use crate::utilities::point_between;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Samples continuum (Bremsstrahlung) photon emissions from electron
/// transport steps.
///
/// The transport driver delivers one [`TransportEvent`] per step boundary.
/// For scatter and non-scatter steps the sampler reads the step snapshot and
/// the live material composition, computes per-element emission
/// probabilities, roulette-selects a single element to own the step's full
/// probability mass, draws a fixed number of weighted photon sub-samples from
/// that element's cross section provider, and publishes the accepted records
/// to listeners as one batch. Other lifecycle notifications are forwarded to
/// listeners untouched.
///
/// The random source is injected so seeded runs reproduce exactly. All state
/// (provider cache, record bank, RNG) is owned and mutated through `&mut
/// self`, matching the single-threaded cooperative driving model.
pub struct BremsstrahlungSampler<R: Rng = StdRng> {
    settings: Settings,
    cache: CrossSectionCache,
    bank: EmissionBank,
    rng: R,
}

impl BremsstrahlungSampler<StdRng> {
    /// Sampler with the built-in Kramers providers, seeded from
    /// `settings.seed` (or system entropy when no seed is given).
    pub fn new(settings: Settings) -> Result<Self, String> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> BremsstrahlungSampler<R> {
    /// Sampler with an explicitly injected random source.
    pub fn with_rng(settings: Settings, rng: R) -> Result<Self, String> {
        Self::with_rng_and_cache(settings, rng, CrossSectionCache::new())
    }

    /// Sampler drawing its cross section providers from a caller-supplied
    /// cache, e.g. one built over tabulated data files.
    pub fn with_rng_and_cache(
        settings: Settings,
        rng: R,
        cache: CrossSectionCache,
    ) -> Result<Self, String> {
        settings.validate()?;
        Ok(BremsstrahlungSampler {
            settings,
            cache,
            bank: EmissionBank::new(),
            rng,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &CrossSectionCache {
        &self.cache
    }

    /// Register an observer for emission batches and lifecycle events.
    pub fn add_listener(&mut self, listener: Box<dyn XRayListener>) {
        self.bank.add_listener(listener);
    }

    /// Records accepted for the most recently processed step.
    pub fn records(&self) -> &[EmissionRecord] {
        self.bank.records()
    }

    /// Single entry point for transport notifications.
    pub fn process_event(&mut self, event: TransportEvent<'_>) {
        self.bank.reset();
        match event {
            TransportEvent::Scatter(step, material)
            | TransportEvent::NonScatter(step, material) => self.sample_step(step, material),
            TransportEvent::Lifecycle(id) => self.bank.forward_lifecycle(id),
        }
    }

    fn sample_step(&mut self, step: &ElectronStep, material: &Material) {
        // Vacuum or undefined region: a normal no-emission outcome
        if material.is_empty() {
            return;
        }
        let step_length = step.step_length();

        // One shared fraction drives both interpolations so the sampled
        // position and energy describe the same instant of the trajectory.
        let frac: f64 = self.rng.gen();
        let position = point_between(step.prev_position, step.position, frac);
        let energy = step.prev_energy + frac * (step.energy - step.prev_energy);

        let elements = material.elements();
        let mut weights = Vec::with_capacity(elements.len());
        let mut sum_prob = 0.0;
        for &element in &elements {
            // Expected number of photons this element contributes over the step
            let p = material.atoms_per_cubic_meter(element)
                * self.cache.get(element).sigma(energy)
                * step_length;
            let p = if p > 0.0 { p } else { 0.0 };
            weights.push(p);
            sum_prob += p;
        }
        if sum_prob <= 0.0 {
            return;
        }

        // Roulette selection: exactly one element owns the step's full
        // emission probability, chosen proportionally to its share of it.
        let mut r = self.rng.gen::<f64>() * sum_prob;
        for (j, &element) in elements.iter().enumerate() {
            r -= weights[j];
            if r <= 0.0 {
                let provider = self.cache.get(element);
                // Split the probability mass evenly over the sub-samples.
                // Rejected sub-samples do not hand their share to the rest.
                let weight = sum_prob / self.settings.samples_per_step as f64;
                for _ in 0..self.settings.samples_per_step {
                    let u: f64 = self.rng.gen();
                    let photon_energy = provider.randomized_energy(energy, u);
                    if photon_energy > self.settings.min_photon_energy_ev {
                        self.bank.add(EmissionRecord {
                            position,
                            energy: photon_energy,
                            weight,
                            element,
                            direction: step.direction,
                            generating_energy: energy,
                        });
                    }
                }
                self.bank.publish();
                break;
            }
        }
    }
}
