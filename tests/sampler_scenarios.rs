// End-to-end scenarios for the Bremsstrahlung emission sampler: weighted
// element selection, weight conservation under sub-sampling, threshold
// filtering, and lifecycle forwarding.

use brems_for_mc::{
    BremsstrahlungSampler, CrossSection, CrossSectionCache, ElectronStep, Element, EmissionTally,
    Material, Settings, TransportEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Flat cross section with a photon spectrum linear in the uniform draw.
struct FlatProvider {
    sigma: f64,
}

impl CrossSection for FlatProvider {
    fn sigma(&self, _energy_ev: f64) -> f64 {
        self.sigma
    }

    fn randomized_energy(&self, kinetic_energy_ev: f64, u: f64) -> f64 {
        u * kinetic_energy_ev
    }
}

/// Flat cross section whose photon energies replay a script, then repeat the
/// last entry. Gives tests exact control over threshold comparisons.
struct ScriptedProvider {
    sigma: f64,
    energies: RefCell<VecDeque<f64>>,
    last: f64,
}

impl ScriptedProvider {
    fn new(sigma: f64, energies: &[f64]) -> Self {
        ScriptedProvider {
            sigma,
            energies: RefCell::new(energies.iter().copied().collect()),
            last: *energies.last().expect("script must not be empty"),
        }
    }
}

impl CrossSection for ScriptedProvider {
    fn sigma(&self, _energy_ev: f64) -> f64 {
        self.sigma
    }

    fn randomized_energy(&self, _kinetic_energy_ev: f64, _u: f64) -> f64 {
        self.energies.borrow_mut().pop_front().unwrap_or(self.last)
    }
}

fn el(symbol: &str) -> Element {
    Element::from_symbol(symbol).unwrap()
}

fn unit_step() -> ElectronStep {
    ElectronStep::new(
        [0.0, 0.0, 0.0],
        [1.0e-9, 0.0, 0.0],
        1.0e4,
        1.0e4,
        [1.0, 0.0, 0.0],
    )
}

#[test]
fn test_single_element_end_to_end_weights() {
    // density 1e29 /m3, sigma 1e-25 m2, step 1e-9 m -> sum_prob = 1e-5.
    // With K = 10 every accepted record carries exactly 1e-6.
    let cache = CrossSectionCache::with_factory(Box::new(|_| {
        // Spectrum always lands above the 100 eV threshold
        Arc::new(ScriptedProvider::new(1.0e-25, &[5.0e3]))
    }));
    let mut sampler = BremsstrahlungSampler::with_rng_and_cache(
        Settings::default(),
        StdRng::seed_from_u64(11),
        cache,
    )
    .unwrap();

    let tally = Rc::new(RefCell::new(EmissionTally::with_name("end to end")));
    sampler.add_listener(Box::new(tally.clone()));

    let mut material = Material::new();
    material.add_element(el("Cu"), 1.0e29).unwrap();
    let step = unit_step();
    sampler.process_event(TransportEvent::Scatter(&step, &material));

    let records = sampler.records();
    assert_eq!(records.len(), 10, "all 10 sub-samples accepted");
    for record in records {
        assert!((record.weight - 1.0e-6).abs() < 1e-18);
        assert_eq!(record.element, el("Cu"));
    }
    // Batch total equals the full probability mass of the step
    assert!((tally.borrow().total_weight() - 1.0e-5).abs() < 1e-17);
    assert_eq!(tally.borrow().steps_observed(), 1);
}

#[test]
fn test_roulette_selection_frequency_three_to_one() {
    // H gets three times the emission weight of He at equal densities;
    // selection frequency must converge to 75%.
    let cache = CrossSectionCache::with_factory(Box::new(|element| {
        let sigma = if element == Element::from_symbol("H").unwrap() {
            3.0e-25
        } else {
            1.0e-25
        };
        Arc::new(ScriptedProvider::new(sigma, &[5.0e3]))
    }));
    let mut sampler = BremsstrahlungSampler::with_rng_and_cache(
        Settings::default(),
        StdRng::seed_from_u64(2024),
        cache,
    )
    .unwrap();

    let mut material = Material::new();
    material.add_element(el("H"), 1.0e29).unwrap();
    material.add_element(el("He"), 1.0e29).unwrap();
    let step = unit_step();

    let trials = 20_000;
    let mut hydrogen_steps = 0usize;
    for _ in 0..trials {
        sampler.process_event(TransportEvent::Scatter(&step, &material));
        let records = sampler.records();
        assert!(!records.is_empty());
        // Exactly one element is credited per step
        let selected = records[0].element;
        assert!(records.iter().all(|r| r.element == selected));
        if selected == el("H") {
            hydrogen_steps += 1;
        }
    }

    let frequency = hydrogen_steps as f64 / trials as f64;
    assert!(
        (frequency - 0.75).abs() < 0.02,
        "hydrogen selected {:.3} of steps, expected ~0.75",
        frequency
    );
}

#[test]
fn test_weight_conservation_with_rejected_sub_samples() {
    // Linear spectrum u * E with E = 1e4 rejects draws below u = 0.01; the
    // accepted records must keep weight sum_prob / K without renormalizing.
    let cache =
        CrossSectionCache::with_factory(Box::new(|_| Arc::new(FlatProvider { sigma: 2.0e-25 })));
    let mut settings = Settings::new();
    settings.samples_per_step = 50;
    let mut sampler =
        BremsstrahlungSampler::with_rng_and_cache(settings, StdRng::seed_from_u64(5), cache)
            .unwrap();

    let mut material = Material::new();
    material.add_element(el("Si"), 5.0e28).unwrap();
    let step = unit_step();

    let sum_prob = 5.0e28 * 2.0e-25 * 1.0e-9;
    let per_sample = sum_prob / 50.0;

    for _ in 0..100 {
        sampler.process_event(TransportEvent::Scatter(&step, &material));
        let records = sampler.records();
        let total: f64 = records.iter().map(|r| r.weight).sum();
        let expected_total = records.len() as f64 * per_sample;
        assert!((total - expected_total).abs() < 1e-18);
        for record in records {
            assert!((record.weight - per_sample).abs() < 1e-20);
        }
    }
}

#[test]
fn test_threshold_boundary_exact() {
    // Scripted photon energies: exactly 100 eV must be dropped, 100.01 kept.
    let cache = CrossSectionCache::with_factory(Box::new(|_| {
        Arc::new(ScriptedProvider::new(1.0e-25, &[100.0, 100.01]))
    }));
    let mut settings = Settings::new();
    settings.samples_per_step = 2;
    let mut sampler =
        BremsstrahlungSampler::with_rng_and_cache(settings, StdRng::seed_from_u64(3), cache)
            .unwrap();

    let mut material = Material::new();
    material.add_element(el("Cu"), 1.0e29).unwrap();
    let step = unit_step();
    sampler.process_event(TransportEvent::Scatter(&step, &material));

    let records = sampler.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].energy, 100.01);
    // The surviving record keeps its share, not the rejected one's
    assert!((records[0].weight - (1.0e29 * 1.0e-25 * 1.0e-9) / 2.0).abs() < 1e-18);
}

#[test]
fn test_step_with_all_rejected_sub_samples_publishes_empty_batch() {
    // Positive sum_prob selects an element, but every photon is too soft;
    // listeners still see the (empty) batch for that step.
    let cache = CrossSectionCache::with_factory(Box::new(|_| {
        Arc::new(ScriptedProvider::new(1.0e-25, &[10.0]))
    }));
    let mut sampler = BremsstrahlungSampler::with_rng_and_cache(
        Settings::default(),
        StdRng::seed_from_u64(4),
        cache,
    )
    .unwrap();
    let tally = Rc::new(RefCell::new(EmissionTally::new()));
    sampler.add_listener(Box::new(tally.clone()));

    let mut material = Material::new();
    material.add_element(el("Cu"), 1.0e29).unwrap();
    let step = unit_step();
    sampler.process_event(TransportEvent::Scatter(&step, &material));

    assert!(sampler.records().is_empty());
    assert_eq!(tally.borrow().steps_observed(), 1);
    assert_eq!(tally.borrow().total_records(), 0);
}

#[test]
fn test_no_publish_when_total_probability_is_zero() {
    let cache =
        CrossSectionCache::with_factory(Box::new(|_| Arc::new(FlatProvider { sigma: 0.0 })));
    let mut sampler = BremsstrahlungSampler::with_rng_and_cache(
        Settings::default(),
        StdRng::seed_from_u64(6),
        cache,
    )
    .unwrap();
    let tally = Rc::new(RefCell::new(EmissionTally::new()));
    sampler.add_listener(Box::new(tally.clone()));

    let mut material = Material::new();
    material.add_element(el("Cu"), 1.0e29).unwrap();
    material.add_element(el("Fe"), 1.0e29).unwrap();
    let step = unit_step();
    sampler.process_event(TransportEvent::Scatter(&step, &material));

    assert!(sampler.records().is_empty());
    assert_eq!(tally.borrow().steps_observed(), 0);
}

#[test]
fn test_lifecycle_notification_forwarded_without_sampling() {
    let cache = CrossSectionCache::with_factory(Box::new(
        |element| -> Arc<dyn CrossSection> {
            panic!(
                "no provider should be built for {} on a lifecycle event",
                element
            )
        },
    ));
    let mut sampler = BremsstrahlungSampler::with_rng_and_cache(
        Settings::default(),
        StdRng::seed_from_u64(8),
        cache,
    )
    .unwrap();
    let tally = Rc::new(RefCell::new(EmissionTally::new()));
    sampler.add_listener(Box::new(tally.clone()));

    sampler.process_event(TransportEvent::Lifecycle(17));
    sampler.process_event(TransportEvent::Lifecycle(-2));

    assert!(sampler.records().is_empty());
    assert!(sampler.cache().is_empty());
    assert_eq!(tally.borrow().lifecycle_ids, vec![17, -2]);
    assert_eq!(tally.borrow().steps_observed(), 0);
}

#[test]
fn test_emission_point_lies_on_the_step_segment() {
    let cache = CrossSectionCache::with_factory(Box::new(|_| {
        Arc::new(ScriptedProvider::new(1.0e-25, &[5.0e3]))
    }));
    let mut sampler = BremsstrahlungSampler::with_rng_and_cache(
        Settings::default(),
        StdRng::seed_from_u64(9),
        cache,
    )
    .unwrap();

    let mut material = Material::new();
    material.add_element(el("Cu"), 1.0e29).unwrap();
    let step = ElectronStep::new(
        [1.0e-9, 2.0e-9, 3.0e-9],
        [4.0e-9, 6.0e-9, 3.0e-9],
        2.0e4,
        1.5e4,
        [0.6, 0.8, 0.0],
    );

    for _ in 0..50 {
        sampler.process_event(TransportEvent::Scatter(&step, &material));
        for record in sampler.records() {
            // Recover frac from each coordinate; all must agree
            let fx = (record.position[0] - 1.0e-9) / 3.0e-9;
            let fy = (record.position[1] - 2.0e-9) / 4.0e-9;
            assert!((fx - fy).abs() < 1e-9);
            assert!((0.0..1.0).contains(&fx));
            assert_eq!(record.position[2], 3.0e-9);
            // Energy interpolated with the same frac
            let expected = 2.0e4 + fx * (1.5e4 - 2.0e4);
            assert!((record.generating_energy - expected).abs() < 1e-4);
            assert_eq!(record.direction, [0.6, 0.8, 0.0]);
        }
    }
}

#[test]
fn test_cache_grows_only_with_material_diversity() {
    let mut sampler = BremsstrahlungSampler::new(Settings {
        seed: Some(1),
        ..Settings::default()
    })
    .unwrap();

    let mut material = Material::new();
    material.add_element(el("Fe"), 4.0e28).unwrap();
    material.add_element(el("Ni"), 4.0e28).unwrap();
    let step = unit_step();

    for _ in 0..100 {
        sampler.process_event(TransportEvent::Scatter(&step, &material));
    }
    assert_eq!(sampler.cache().len(), 2);
    assert!(sampler.cache().contains(el("Fe")));
    assert!(sampler.cache().contains(el("Ni")));
}
