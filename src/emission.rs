use crate::element::Element;
use std::cell::RefCell;
use std::rc::Rc;

/// One accepted continuum photon emission.
///
/// `weight` is the statistical weight of the record: the expected number of
/// physical photons this sub-sample stands for. Summing weights over many
/// steps reproduces the continuous emission probability the sampler drew
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRecord {
    /// Emission point in meters
    pub position: [f64; 3],
    /// Photon energy in eV
    pub energy: f64,
    /// Statistical weight (expected photon count)
    pub weight: f64,
    /// Element credited with the emission
    pub element: Element,
    /// Photon propagation direction (the electron direction at emission)
    pub direction: [f64; 3],
    /// Electron kinetic energy in eV at the emission point
    pub generating_energy: f64,
}

/// Observer of the emission sampler's output.
///
/// `x_ray_batch` is delivered exactly once per processed step that reached
/// the sampling stage, with every record accepted for that step (possibly
/// none). `lifecycle` carries forwarded non-step notifications so observers
/// can bracket runs and trajectories.
pub trait XRayListener {
    fn x_ray_batch(&mut self, records: &[EmissionRecord]);

    fn lifecycle(&mut self, _id: i32) {}
}

/// Shared-ownership adapter so a listener can be registered with the bank
/// while the caller keeps a handle for reading results back.
impl<L: XRayListener> XRayListener for Rc<RefCell<L>> {
    fn x_ray_batch(&mut self, records: &[EmissionRecord]) {
        self.borrow_mut().x_ray_batch(records);
    }

    fn lifecycle(&mut self, id: i32) {
        self.borrow_mut().lifecycle(id);
    }
}

/// Accumulates the emission records of the current step and publishes them
/// to listeners as one batch.
///
/// Records live only until the next [`EmissionBank::reset`]; consumers that
/// need them longer must copy them out during `publish`.
#[derive(Default)]
pub struct EmissionBank {
    records: Vec<EmissionRecord>,
    listeners: Vec<Box<dyn XRayListener>>,
}

impl EmissionBank {
    pub fn new() -> Self {
        EmissionBank {
            records: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Drop the previous step's records.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Append an accepted emission to the current batch.
    pub fn add(&mut self, record: EmissionRecord) {
        self.records.push(record);
    }

    /// The current batch.
    pub fn records(&self) -> &[EmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register an observer for published batches and lifecycle events.
    pub fn add_listener(&mut self, listener: Box<dyn XRayListener>) {
        self.listeners.push(listener);
    }

    /// Notify every listener that the current batch is ready.
    pub fn publish(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener.x_ray_batch(&self.records);
        }
    }

    /// Forward a non-step notification to every listener.
    pub fn forward_lifecycle(&mut self, id: i32) {
        for listener in self.listeners.iter_mut() {
            listener.lifecycle(id);
        }
    }
}
