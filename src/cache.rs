use crate::cross_section::{Bremsstrahlung, CrossSection};
use crate::element::Element;
use std::collections::HashMap;
use std::sync::Arc;

/// Factory that builds a cross section provider for an element.
pub type ProviderFactory = Box<dyn Fn(Element) -> Arc<dyn CrossSection>>;

/// Per-element cache of cross section providers.
///
/// Providers are expensive to build (they precompute their energy grids) and
/// pure thereafter, so the cache constructs one per distinct element on first
/// request and hands out the same shared instance for the rest of the run.
/// There is no eviction or invalidation: a provider depends only on the
/// element it was built for, never on simulation time.
///
/// The cache is mutated only from the thread delivering transport events; the
/// sampler's `&mut self` entry point enforces that exclusivity.
pub struct CrossSectionCache {
    providers: HashMap<Element, Arc<dyn CrossSection>>,
    factory: ProviderFactory,
}

impl CrossSectionCache {
    /// Cache producing the built-in Kramers [`Bremsstrahlung`] model.
    pub fn new() -> Self {
        CrossSectionCache::with_factory(Box::new(|element| Arc::new(Bremsstrahlung::new(element))))
    }

    /// Cache producing providers from a custom factory, e.g. tabulated data
    /// files or test doubles.
    pub fn with_factory(factory: ProviderFactory) -> Self {
        CrossSectionCache {
            providers: HashMap::new(),
            factory,
        }
    }

    /// The provider for `element`, constructing it on first request.
    pub fn get(&mut self, element: Element) -> Arc<dyn CrossSection> {
        self.providers
            .entry(element)
            .or_insert_with(|| (self.factory)(element))
            .clone()
    }

    /// Number of distinct elements seen so far.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn contains(&self, element: Element) -> bool {
        self.providers.contains_key(&element)
    }
}

impl Default for CrossSectionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CrossSectionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossSectionCache")
            .field("elements", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
