// src/data.rs
// Static reference tables for the element library. Doc comments summarize the
// intent of each table while the literals provide the canonical values.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Avogadro's number in 1/mol.
pub const AVOGADRO: f64 = 6.02214076e23;

/// Chemical symbols indexed by atomic number minus one (H = index 0).
///
/// Covers Z = 1 (hydrogen) through Z = 98 (californium), the range over which
/// electron-probe targets are realistically composed.
pub static ELEMENT_SYMBOLS: [&str; 98] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", //
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", //
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", //
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", //
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", //
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", //
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", //
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", //
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", //
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf",
];

/// Standard atomic weights in g/mol, indexed by atomic number minus one.
///
/// Values are sourced from standard reference compilations (rounded as
/// needed). Elements without a stable isotope carry the mass of their most
/// common or longest-lived isotope.
pub static ATOMIC_MASS: [f64; 98] = [
    1.008, 4.0026, 6.94, 9.0122, 10.81, 12.011, 14.007, 15.999, 18.998, 20.180, //
    22.990, 24.305, 26.982, 28.085, 30.974, 32.06, 35.45, 39.948, 39.098, 40.078, //
    44.956, 47.867, 50.942, 51.996, 54.938, 55.845, 58.933, 58.693, 63.546, 65.38, //
    69.723, 72.630, 74.922, 78.971, 79.904, 83.798, 85.468, 87.62, 88.906, 91.224, //
    92.906, 95.95, 97.0, 101.07, 102.91, 106.42, 107.87, 112.41, 114.82, 118.71, //
    121.76, 127.60, 126.90, 131.29, 132.91, 137.33, 138.91, 140.12, 140.91, 144.24, //
    145.0, 150.36, 151.96, 157.25, 158.93, 162.50, 164.93, 167.26, 168.93, 173.05, //
    174.97, 178.49, 180.95, 183.84, 186.21, 190.23, 192.22, 195.08, 196.97, 200.59, //
    204.38, 207.2, 208.98, 209.0, 210.0, 222.0, 223.0, 226.0, 227.0, 232.04, //
    231.04, 238.03, 237.0, 244.0, 243.0, 247.0, 247.0, 251.0,
];

/// Map from chemical symbol to atomic number, derived from
/// [`ELEMENT_SYMBOLS`] so the two can never disagree.
pub static SYMBOL_TO_Z: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, &symbol)| (symbol, i as u32 + 1))
        .collect()
});
