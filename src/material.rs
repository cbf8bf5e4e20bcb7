use crate::data::AVOGADRO;
use crate::element::Element;
use std::collections::HashMap;

/// A target material described by its elemental composition.
///
/// The composition maps each constituent [`Element`] to its atom number
/// density in atoms/m³. The emission sampler reads the composition live at
/// each transport step, so a particle crossing a region boundary simply sees
/// a different `Material` on its next step.
///
/// Elements are always iterated in atomic number order (see
/// [`Material::elements`]) so that weighted element selection is reproducible
/// across runs and platforms.
#[derive(Debug, Clone, Default)]
pub struct Material {
    /// Optional name of the material
    pub name: Option<String>,
    /// Element -> atom number density in atoms/m³
    composition: HashMap<Element, f64>,
}

impl Material {
    pub fn new() -> Self {
        Material {
            name: None,
            composition: HashMap::new(),
        }
    }

    /// Set the name of the material
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Add an element with the given atom number density in atoms/m³.
    /// Adding the same element twice replaces its density.
    pub fn add_element(&mut self, element: Element, atoms_per_m3: f64) -> Result<(), String> {
        if atoms_per_m3 < 0.0 {
            return Err(String::from("Atom density cannot be negative"));
        }
        self.composition.insert(element, atoms_per_m3);
        Ok(())
    }

    /// Build a material from a bulk mass density (g/cm³) and element mass
    /// fractions. Fractions must be positive and are normalized to sum to 1.
    pub fn from_mass_fractions(
        density_g_cm3: f64,
        fractions: &[(Element, f64)],
    ) -> Result<Self, String> {
        if density_g_cm3 <= 0.0 {
            return Err(String::from("Density must be positive"));
        }
        if fractions.is_empty() {
            return Err(String::from("At least one element is required"));
        }
        let total: f64 = fractions.iter().map(|(_, f)| f).sum();
        if total <= 0.0 || fractions.iter().any(|&(_, f)| f <= 0.0) {
            return Err(String::from("Mass fractions must be positive"));
        }

        let mut material = Material::new();
        for &(element, fraction) in fractions {
            // atoms/m³ = rho[g/cm³] * 1e6[cm³/m³] * w / A[g/mol] * N_A
            let atoms_per_m3 =
                density_g_cm3 * 1.0e6 * (fraction / total) / element.atomic_mass() * AVOGADRO;
            material.add_element(element, atoms_per_m3)?;
        }
        Ok(material)
    }

    /// Constituent elements sorted by atomic number.
    ///
    /// This is the canonical iteration order for computing per-element
    /// emission weights and for roulette selection over them.
    pub fn elements(&self) -> Vec<Element> {
        let mut elements: Vec<Element> = self.composition.keys().copied().collect();
        elements.sort();
        elements
    }

    /// Atom number density of the given element, or 0.0 if not present.
    pub fn atoms_per_cubic_meter(&self, element: Element) -> f64 {
        self.composition.get(&element).copied().unwrap_or(0.0)
    }

    pub fn element_count(&self) -> usize {
        self.composition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }
}
