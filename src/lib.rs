// Import the modules and re-export the public types for Rust usage
mod cache;
mod cross_section;
mod data;
mod element;
mod emission;
mod event;
mod material;
mod sampler;
mod settings;
mod tally;
mod utilities;

pub use cache::{CrossSectionCache, ProviderFactory};
pub use cross_section::{Bremsstrahlung, CrossSection, TabulatedCrossSection, PHOTON_CUTOFF_EV};
pub use data::{ATOMIC_MASS, AVOGADRO, ELEMENT_SYMBOLS, SYMBOL_TO_Z};
pub use element::{Element, MAX_Z};
pub use emission::{EmissionBank, EmissionRecord, XRayListener};
pub use event::{ElectronStep, TransportEvent};
pub use material::Material;
pub use sampler::BremsstrahlungSampler;
pub use settings::Settings;
pub use tally::EmissionTally;
pub use utilities::{interpolate_linear, point_between};
